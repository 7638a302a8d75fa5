use async_trait::async_trait;
use tracing::info;

use crate::error::NotifyError;
use crate::port::Notifier;

/// A notifier that logs messages via tracing instead of delivering them.
///
/// Used by builds without the `telegram` feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        info!(lines = text.lines().count(), message = %text, "Notification");
        Ok(())
    }
}
