//! Known-listings store contents and the per-run batch of new listings.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ids::ListingId;
use super::listing::Listing;
use super::query::SearchQuery;

/// Raw records of every listing seen for one search, keyed by id.
pub type QueryListings = BTreeMap<ListingId, Value>;

/// Everything seen so far, partitioned by search query.
///
/// Serializes as `{ "<search url>": { "<listing id>": <raw record> } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownListings {
    queries: BTreeMap<String, QueryListings>,
}

impl KnownListings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listings already seen for `query`, if the query has any state.
    #[must_use]
    pub fn get(&self, query: &SearchQuery) -> Option<&QueryListings> {
        self.queries.get(query.as_str())
    }

    #[must_use]
    pub fn contains(&self, query: &SearchQuery, id: &ListingId) -> bool {
        self.get(query).is_some_and(|known| known.contains_key(id))
    }

    /// Listings from `fetched` absent from this store for `query`.
    ///
    /// Fetch order is preserved. If an id repeats within `fetched`, the
    /// first occurrence wins.
    #[must_use]
    pub fn diff(&self, query: &SearchQuery, fetched: Vec<Listing>) -> NewListings {
        let mut seen = HashSet::new();
        let listings = fetched
            .into_iter()
            .filter(|listing| !self.contains(query, listing.id()))
            .filter(|listing| seen.insert(listing.id().clone()))
            .collect();
        NewListings { listings }
    }

    /// Merge a batch into the sub-mapping for `query`, creating it if needed.
    ///
    /// Batch entries overwrite existing ones on id collision.
    pub fn merge(&mut self, query: &SearchQuery, batch: &NewListings) {
        let known = self.queries.entry(query.as_str().to_string()).or_default();
        for listing in batch.iter() {
            known.insert(listing.id().clone(), listing.record().clone());
        }
    }

    /// Number of queries with persisted state.
    #[must_use]
    pub fn query_count(&self) -> usize {
        self.queries.len()
    }

    /// Number of listings known for `query`.
    #[must_use]
    pub fn listing_count(&self, query: &SearchQuery) -> usize {
        self.get(query).map_or(0, BTreeMap::len)
    }
}

/// Listings seen in the latest fetch but not before, in fetch order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewListings {
    listings: Vec<Listing>,
}

impl NewListings {
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ListingId> {
        self.listings.iter().map(Listing::id)
    }
}
