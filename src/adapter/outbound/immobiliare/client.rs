//! HTTP client for the search API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::debug;

use super::response::SearchResponse;
use crate::error::FetchError;
use crate::port::{PageSource, SearchPage};

/// User agent sent with every search request.
const USER_AGENT: &str = concat!("immobot/", env!("CARGO_PKG_VERSION"));

/// Immobiliare search API client.
///
/// Implements [`PageSource`]: one GET per page, no retries.
#[derive(Debug, Clone)]
pub struct ImmobiliareClient {
    client: Client,
}

impl ImmobiliareClient {
    /// Create a client with an optional per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an already configured HTTP client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for ImmobiliareClient {
    async fn fetch_page(&self, url: &str) -> Result<SearchPage, FetchError> {
        debug!(url = %url, "Requesting search page");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let page: SearchResponse =
            serde_json::from_slice(&bytes).map_err(|source| FetchError::Payload {
                url: url.to_string(),
                source,
            })?;

        Ok(page.into())
    }
}
