//! Notification text for a batch of new listings.

use crate::domain::NewListings;

/// First line of every new-listings message.
pub const MESSAGE_HEADER: &str = "There are new ads on Immobiliare!";

/// Header line followed by one `- <url>` line per listing, in batch order.
#[must_use]
pub fn compose_message(batch: &NewListings) -> String {
    let mut text = String::from(MESSAGE_HEADER);
    for listing in batch.iter() {
        text.push_str("\n- ");
        text.push_str(listing.url());
    }
    text
}
