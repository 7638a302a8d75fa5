//! Composition root: wire configured adapters into a [`Scanner`].

use tracing::info;

use crate::adapter::outbound::immobiliare::ImmobiliareClient;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::TelegramNotifier;
#[cfg(not(feature = "telegram"))]
use crate::adapter::outbound::notifier::LogNotifier;
use crate::adapter::outbound::store::JsonFileStore;
use crate::application::{Fetcher, RunOutcome, Scanner};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::Notifier;

/// Scanner wired with the production adapters.
pub type AppScanner = Scanner<ImmobiliareClient, JsonFileStore, Box<dyn Notifier>>;

/// Build the notifier for this run.
#[cfg(feature = "telegram")]
pub fn build_notifier(config: &Config) -> Box<dyn Notifier> {
    info!(chat = %config.telegram.chat, "Telegram notifier enabled");
    Box::new(TelegramNotifier::new(&config.telegram))
}

/// Build the notifier for this run (non-telegram variant).
#[cfg(not(feature = "telegram"))]
pub fn build_notifier(_config: &Config) -> Box<dyn Notifier> {
    info!("Built without telegram support, notifications are logged only");
    Box::new(LogNotifier)
}

/// Build a scanner for the configured search.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
#[allow(clippy::result_large_err)]
pub fn build_scanner(config: &Config, dry_run: bool) -> Result<AppScanner> {
    let client = ImmobiliareClient::new(config.http_timeout)?;
    let fetcher = Fetcher::new(client).with_page_delay(config.page_delay);
    let store = JsonFileStore::new(&config.store_path);
    let notifier = build_notifier(config);

    Ok(Scanner::new(config.query(), fetcher, store, notifier).with_dry_run(dry_run))
}

/// Build and run one scan.
///
/// # Errors
///
/// Propagates any failure of the scan.
pub async fn run(config: &Config, dry_run: bool) -> Result<RunOutcome> {
    let scanner = build_scanner(config, dry_run)?;
    info!(
        store = %scanner.store().path().display(),
        page_delay_ms = config.page_delay.as_millis() as u64,
        dry_run,
        "Scanner ready"
    );
    scanner.run().await
}
