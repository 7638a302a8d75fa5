use std::collections::HashMap;
use std::path::PathBuf;

use immobot::cli::Cli;
use immobot::error::{ConfigError, Error};
use immobot::infrastructure::bootstrap;
use immobot::infrastructure::config::settings::Config;
use immobot::port::Notifier;

fn load(vars: &[(&str, &str)]) -> Result<Config, Error> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

fn valid() -> Config {
    load(&[
        (
            "IMMOBOT_URL",
            "https://www.immobiliare.it/api-next/search-list/real-estates/?idContratto=2&pag=1",
        ),
        ("IMMOBOT_TOKEN", "123:abc"),
        ("IMMOBOT_CHAT_ID", "@annunci_milano"),
    ])
    .expect("valid config")
}

#[test]
fn config_requires_url_token_and_chat() {
    let result = load(&[("IMMOBOT_URL", "https://www.immobiliare.it/api-next/?a=1")]);

    match result {
        Err(Error::Config(ConfigError::MissingFields { fields })) => {
            assert_eq!(fields, vec!["IMMOBOT_TOKEN", "IMMOBOT_CHAT_ID"]);
        }
        Err(err) => panic!("Expected missing fields error, got {err}"),
        Ok(config) => panic!("Expected missing fields, got {config:?}"),
    }
}

#[test]
fn config_rejects_relative_search_url() {
    let result = load(&[
        ("IMMOBOT_URL", "/api-next/search-list/real-estates/?a=1"),
        ("IMMOBOT_TOKEN", "123:abc"),
        ("IMMOBOT_CHAT_ID", "1"),
    ]);

    assert!(
        matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "IMMOBOT_URL",
                ..
            }))
        ),
        "Expected invalid url error"
    );
}

#[test]
fn cli_state_file_overrides_environment() {
    let mut config = valid();
    let cli = Cli {
        dry_run: false,
        state_file: Some(PathBuf::from("/srv/immobot/ads.json")),
    };

    cli.apply(&mut config);

    assert_eq!(config.store_path, PathBuf::from("/srv/immobot/ads.json"));
}

#[test]
fn bootstrap_wires_configured_search_and_store() {
    let mut config = valid();
    config.store_path = PathBuf::from("state/db.json");

    let scanner = bootstrap::build_scanner(&config, false).expect("build scanner");
    let expected_notifier = if cfg!(feature = "telegram") { "telegram" } else { "log" };

    assert_eq!(
        scanner.query().as_str(),
        "https://www.immobiliare.it/api-next/search-list/real-estates/?idContratto=2"
    );
    assert_eq!(scanner.store().path(), PathBuf::from("state/db.json"));
    assert_eq!(scanner.notifier().name(), expected_notifier);
}
