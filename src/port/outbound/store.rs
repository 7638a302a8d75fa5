//! Persistence port for the known-listings store.

use crate::domain::KnownListings;
use crate::error::StoreError;

/// Durable storage of every listing seen so far.
///
/// The whole store is loaded and saved at once; lookups and merges happen
/// on the in-memory [`KnownListings`].
pub trait ListingStore {
    /// Load the store, or an empty one if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Any failure other than "no saved state" is an error.
    fn load(&self) -> Result<KnownListings, StoreError>;

    /// Replace the saved state with `listings`.
    fn save(&self, listings: &KnownListings) -> Result<(), StoreError>;
}
