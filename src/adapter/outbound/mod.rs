//! Outbound adapters (driven side).

pub mod immobiliare;
pub mod notifier;
pub mod store;
