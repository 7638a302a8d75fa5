//! Listing-agnostic domain logic: identifiers, searches and seen-state.

mod ids;
mod known;
mod listing;
mod query;

pub use ids::ListingId;
pub use known::{KnownListings, NewListings, QueryListings};
pub use listing::Listing;
pub use query::{SearchQuery, PAGE_PARAM};
