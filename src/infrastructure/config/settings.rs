//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct, populated from environment variables.
//! Call `dotenvy::dotenv()` first to pick up a `.env` file.
//!
//! # Example
//!
//! ```no_run
//! use immobot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use super::logging::{LogFormat, LoggingConfig};
use super::telegram::{ChatDestination, TelegramConfig};
use crate::adapter::outbound::store::DEFAULT_STORE_PATH;
use crate::domain::SearchQuery;
use crate::error::{ConfigError, Result};

pub const ENV_URL: &str = "IMMOBOT_URL";
pub const ENV_TOKEN: &str = "IMMOBOT_TOKEN";
pub const ENV_CHAT_ID: &str = "IMMOBOT_CHAT_ID";
pub const ENV_DB_PATH: &str = "IMMOBOT_DB_PATH";
pub const ENV_PAGE_DELAY_MS: &str = "IMMOBOT_PAGE_DELAY_MS";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "IMMOBOT_HTTP_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "IMMOBOT_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "IMMOBOT_LOG_FORMAT";

const DEFAULT_PAGE_DELAY_MS: u64 = 1_000;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Saved-search URL as configured, page parameter included if present.
    pub search_url: String,
    /// Telegram credentials and destination.
    pub telegram: TelegramConfig,
    /// Location of the known-listings store.
    pub store_path: PathBuf,
    /// Pause between consecutive page requests.
    pub page_delay: Duration,
    /// Per-request HTTP timeout; `None` waits indefinitely.
    pub http_timeout: Option<Duration>,
    /// Logging and tracing configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::from_lookup`].
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any of `IMMOBOT_URL`, `IMMOBOT_TOKEN`, `IMMOBOT_CHAT_ID` is missing
    ///   (all missing names are reported at once)
    /// - The search URL is not an absolute http(s) URL
    /// - The chat id is neither numeric nor an `@channel` name
    /// - An optional numeric setting does not parse
    #[allow(clippy::result_large_err)]
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut missing = Vec::new();
        let mut require = |key: &'static str| {
            get(key).unwrap_or_else(|| {
                missing.push(key);
                String::new()
            })
        };
        let search_url = require(ENV_URL);
        let bot_token = require(ENV_TOKEN);
        let chat_id = require(ENV_CHAT_ID);
        if !missing.is_empty() {
            return Err(ConfigError::MissingFields { fields: missing }.into());
        }

        validate_search_url(&search_url)?;
        let chat: ChatDestination = chat_id.parse()?;

        let store_path =
            get(ENV_DB_PATH).map_or_else(|| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from);

        let page_delay_ms = parse_u64(ENV_PAGE_DELAY_MS, get(ENV_PAGE_DELAY_MS))?
            .unwrap_or(DEFAULT_PAGE_DELAY_MS);
        let http_timeout_secs = parse_u64(ENV_HTTP_TIMEOUT_SECS, get(ENV_HTTP_TIMEOUT_SECS))?
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        let mut logging = LoggingConfig::default();
        if let Some(level) = get(ENV_LOG_LEVEL) {
            logging.level = level;
        }
        if let Some(format) = get(ENV_LOG_FORMAT) {
            logging.format = format.parse::<LogFormat>()?;
        }

        Ok(Self {
            search_url,
            telegram: TelegramConfig { bot_token, chat },
            store_path,
            page_delay: Duration::from_millis(page_delay_ms),
            http_timeout: (http_timeout_secs > 0).then(|| Duration::from_secs(http_timeout_secs)),
            logging,
        })
    }

    /// The saved search this configuration watches.
    #[must_use]
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(&self.search_url)
    }
}

fn validate_search_url(raw: &str) -> std::result::Result<(), ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        field: ENV_URL,
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::InvalidValue {
            field: ENV_URL,
            reason: format!("unsupported scheme {scheme:?}"),
        }),
    }
}

fn parse_u64(
    field: &'static str,
    value: Option<String>,
) -> std::result::Result<Option<u64>, ConfigError> {
    value
        .map(|v| {
            v.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                field,
                reason: e.to_string(),
            })
        })
        .transpose()
}
