//! Telegram delivery of new-listing messages.
//!
//! Requires the `telegram` feature to be enabled.

mod notifier;

pub use notifier::TelegramNotifier;
