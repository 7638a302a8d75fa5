//! A single ad returned by the search API.

use serde_json::Value;

use super::ids::ListingId;
use crate::error::FetchError;

/// JSON pointer to the listing identifier inside a raw record.
const ID_POINTER: &str = "/realEstate/id";

/// JSON pointer to the display URL inside a raw record.
const URL_POINTER: &str = "/seo/url";

/// One ad as received from upstream.
///
/// The identifier and display URL are extracted and validated on entry;
/// the full raw record is kept untouched for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    id: ListingId,
    url: String,
    record: Value,
}

impl Listing {
    /// Build a listing from one entry of a page's `results` array.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MalformedListing`] when `realEstate.id` is
    /// missing or not a scalar, or when `seo.url` is not a string.
    pub fn from_record(record: Value) -> Result<Self, FetchError> {
        let id = record
            .pointer(ID_POINTER)
            .ok_or_else(|| FetchError::MalformedListing {
                reason: "missing realEstate.id".to_string(),
            })
            .and_then(ListingId::from_value)?;

        let url = record
            .pointer(URL_POINTER)
            .and_then(Value::as_str)
            .ok_or_else(|| FetchError::MalformedListing {
                reason: format!("listing {id} has no seo.url"),
            })?
            .to_string();

        Ok(Self { id, url, record })
    }

    pub fn id(&self) -> &ListingId {
        &self.id
    }

    /// Human-navigable reference used in notifications.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn record(&self) -> &Value {
        &self.record
    }
}
