//! One scan of a saved search: load, fetch, diff, persist, notify.

use tracing::info;

use super::fetcher::Fetcher;
use super::message::compose_message;
use crate::domain::SearchQuery;
use crate::error::Result;
use crate::port::{ListingStore, Notifier, PageSource};

/// How a completed scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing new; store and notifier untouched.
    NoNewListings,
    /// Store updated and one message sent.
    Notified { new_listings: usize },
    /// New listings found but neither persisted nor sent.
    DryRun { new_listings: usize },
}

/// Diff-and-notify orchestrator for a single saved search.
///
/// Each [`run`](Self::run) is a one-shot procedure with no retries. The
/// store is saved before the notification is sent, so a failed send is
/// never repeated by a later run.
pub struct Scanner<P, S, N> {
    query: SearchQuery,
    fetcher: Fetcher<P>,
    store: S,
    notifier: N,
    dry_run: bool,
}

impl<P, S, N> Scanner<P, S, N>
where
    P: PageSource,
    S: ListingStore,
    N: Notifier,
{
    #[must_use]
    pub fn new(query: SearchQuery, fetcher: Fetcher<P>, store: S, notifier: N) -> Self {
        Self {
            query,
            fetcher,
            store,
            notifier,
            dry_run: false,
        }
    }

    /// Skip persisting and notifying; the message is logged instead.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run one scan to completion.
    ///
    /// # Errors
    ///
    /// Any load, fetch, save or delivery failure aborts the scan. A fetch
    /// failure happens before any state is written.
    pub async fn run(&self) -> Result<RunOutcome> {
        let mut known = self.store.load()?;

        info!(query = %self.query, "Fetching ads");
        let fetched = self.fetcher.fetch_all(&self.query).await?;
        let fetched_count = fetched.len();

        let batch = known.diff(&self.query, fetched);
        if batch.is_empty() {
            info!(fetched = fetched_count, "No new ads, nothing to do");
            return Ok(RunOutcome::NoNewListings);
        }

        let new_listings = batch.len();
        let message = compose_message(&batch);

        if self.dry_run {
            info!(
                fetched = fetched_count,
                new = new_listings,
                message = %message,
                "Dry run, skipping database update and notification"
            );
            return Ok(RunOutcome::DryRun { new_listings });
        }

        info!(fetched = fetched_count, new = new_listings, "Updating ads database");
        known.merge(&self.query, &batch);
        self.store.save(&known)?;

        info!(notifier = self.notifier.name(), "Sending notification");
        self.notifier.send(&message).await?;

        Ok(RunOutcome::Notified { new_listings })
    }
}
