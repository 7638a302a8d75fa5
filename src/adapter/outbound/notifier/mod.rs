//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the available backends.

mod log;

#[cfg(feature = "telegram")]
pub mod telegram;

pub use log::LogNotifier;
