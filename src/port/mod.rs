//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the scan logic and the outside world.
//! Adapters implement them for the search API, the state file and the
//! notification transport; tests implement them with scripted doubles.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Fetcher + Scanner      ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Search  │            │   Store     │              │ Notifier  │
//! │ Adapter │            │   Adapter   │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```

pub mod outbound;

pub use outbound::notifier::Notifier;
pub use outbound::source::{PageSource, SearchPage};
pub use outbound::store::ListingStore;
