use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use immobot::error::NotifyError;
use immobot::port::Notifier;

/// Thread-safe message collector for notification assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails after being recorded.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.messages.lock().expect("lock notifier messages").len()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock notifier messages").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.messages
            .lock()
            .expect("lock notifier messages")
            .push(text.to_string());
        if self.fail {
            return Err(NotifyError::Delivery("scripted failure".into()));
        }
        Ok(())
    }
}
