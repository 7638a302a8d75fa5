//! Application services (use cases).
//!
//! [`Fetcher`] walks every page of a saved search; [`Scanner`] diffs the
//! result against the known-listings store, persists and notifies.

mod fetcher;
mod message;
mod scanner;

pub use fetcher::Fetcher;
pub use message::{compose_message, MESSAGE_HEADER};
pub use scanner::{RunOutcome, Scanner};
