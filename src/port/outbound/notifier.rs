//! Notifier port for new-listing alerts.

use async_trait::async_trait;

use crate::error::NotifyError;

/// Delivers a text message to the configured destination.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Return the transport name for logging.
    fn name(&self) -> &'static str;

    /// Send `text` once. No retry is attempted.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        (**self).send(text).await
    }
}
