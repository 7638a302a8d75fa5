//! Immobiliare search API adapter.
//!
//! Talks to the `api-next/search-list/real-estates/` endpoint, whose URL
//! is copied from the browser's developer tools for a saved search.

mod client;
mod response;

pub use client::ImmobiliareClient;
pub use response::{SearchResponse, SeoData};
