//! Search API port.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    /// Raw entries of the page's `results` array.
    pub results: Vec<Value>,
    /// Whether the API reports another page after this one.
    pub next_page: bool,
}

/// Source of paginated search results.
///
/// Implementations fetch exactly one page per call; pagination is driven
/// by [`Fetcher`](crate::application::Fetcher).
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// payload without the expected fields.
    async fn fetch_page(&self, url: &str) -> Result<SearchPage, FetchError>;
}
