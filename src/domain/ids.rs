//! Listing identifier with explicit coercion from upstream JSON.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;

/// Listing identifier - newtype for type safety.
///
/// Always held as a string, whatever type the search API used. The store
/// keys its sub-mappings by this value, so every listing must go through
/// [`ListingId::from_value`] before it is compared against known ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    /// Create a new ListingId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Coerce a raw JSON identifier into its string form.
    ///
    /// Strings pass through unchanged and numbers use their JSON text, so
    /// `42` and `"42"` name the same listing.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MalformedListing`] for null, booleans, arrays
    /// and objects.
    pub fn from_value(value: &Value) -> Result<Self, FetchError> {
        match value {
            Value::String(s) => Ok(Self(s.clone())),
            Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(FetchError::MalformedListing {
                reason: format!("unsupported id value {other}"),
            }),
        }
    }

    /// Get the listing ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ListingId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ListingId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
