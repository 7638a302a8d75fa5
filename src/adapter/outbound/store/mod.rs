//! Known-listings store adapters.

mod json;

pub use json::{JsonFileStore, DEFAULT_STORE_PATH};
