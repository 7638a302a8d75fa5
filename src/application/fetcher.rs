//! Pagination over the search API.

use std::time::Duration;

use tracing::debug;

use crate::domain::{Listing, SearchQuery};
use crate::error::FetchError;
use crate::port::{PageSource, SearchPage};

/// Default pause between consecutive page requests.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(1);

/// Collects every listing of a saved search, page by page.
///
/// Each call starts again from page 1; nothing is resumed. The first error
/// aborts the whole fetch and no partial result is returned.
#[derive(Debug)]
pub struct Fetcher<P> {
    source: P,
    page_delay: Duration,
}

impl<P: PageSource> Fetcher<P> {
    /// Create a fetcher pausing [`DEFAULT_PAGE_DELAY`] between pages.
    #[must_use]
    pub fn new(source: P) -> Self {
        Self {
            source,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }

    /// Set the pause between consecutive page requests.
    #[must_use]
    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    /// Fetch all pages of `query` and return their listings in page order.
    ///
    /// # Errors
    ///
    /// Fails on the first page that cannot be fetched or whose results
    /// contain a malformed listing.
    pub async fn fetch_all(&self, query: &SearchQuery) -> Result<Vec<Listing>, FetchError> {
        let mut listings = Vec::new();
        let mut page = 1;

        loop {
            let url = query.page_url(page);
            let SearchPage { results, next_page } = self.source.fetch_page(&url).await?;
            debug!(page, count = results.len(), next_page, "Fetched search page");

            for record in results {
                listings.push(Listing::from_record(record)?);
            }

            if !next_page {
                break;
            }
            page += 1;
            tokio::time::sleep(self.page_delay).await;
        }

        Ok(listings)
    }
}
