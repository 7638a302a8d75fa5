//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod notifier;
pub mod source;
pub mod store;
