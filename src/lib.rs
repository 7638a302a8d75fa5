//! Immobot - new-ad alerts for an Immobiliare saved search.
//!
//! Each run fetches every page of a saved search, compares the ads with
//! those recorded in a local JSON database, records the new ones and sends
//! a single Telegram message listing them. Runs are meant to be scheduled
//! externally (cron, systemd timers) one at a time.
//!
//! # Modules
//!
//! - [`domain`] - Listings, listing ids, saved searches and the seen-state
//! - [`port`] - Traits for the search API, the database and notifications
//! - [`application`] - Pagination ([`application::Fetcher`]) and the
//!   diff-and-notify run ([`application::Scanner`])
//! - [`adapter`] - Immobiliare HTTP client, JSON file store, notifiers
//! - [`infrastructure`] - Environment configuration, logging, wiring
//! - [`cli`] - Command-line flags
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Deliver notifications through a Telegram bot
//!
//! # Example
//!
//! ```no_run
//! use immobot::infrastructure::bootstrap;
//! use immobot::infrastructure::config::settings::Config;
//!
//! # async fn example() -> immobot::error::Result<()> {
//! let config = Config::from_env()?;
//! let outcome = bootstrap::run(&config, false).await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
