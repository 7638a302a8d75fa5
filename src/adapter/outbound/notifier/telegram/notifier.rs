//! Telegram notifier.
//!
//! Sends each message once, as plain text, with link previews disabled so a
//! list of ad URLs does not expand into a wall of preview cards.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{LinkPreviewOptions, Recipient};
use tracing::{error, info};

use crate::error::NotifyError;
use crate::infrastructure::config::telegram::{ChatDestination, TelegramConfig};
use crate::port::Notifier;

/// Telegram notifier that sends messages to one chat.
pub struct TelegramNotifier {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            bot: Bot::new(&config.bot_token),
            recipient: recipient_for(&config.chat),
        }
    }
}

fn recipient_for(chat: &ChatDestination) -> Recipient {
    match chat {
        ChatDestination::Id(id) => Recipient::Id(ChatId(*id)),
        ChatDestination::Username(name) => Recipient::ChannelUsername(name.clone()),
    }
}

fn previews_disabled() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        match self
            .bot
            .send_message(self.recipient.clone(), text)
            .link_preview_options(previews_disabled())
            .await
        {
            Ok(message) => {
                info!(message_id = message.id.0, "Telegram message sent");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to send Telegram message");
                Err(NotifyError::Delivery(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_destinations_to_recipients() {
        assert_eq!(
            recipient_for(&ChatDestination::Id(-42)),
            Recipient::Id(ChatId(-42))
        );
        assert_eq!(
            recipient_for(&ChatDestination::Username("@annunci".into())),
            Recipient::ChannelUsername("@annunci".into())
        );
    }

    #[test]
    fn link_previews_are_disabled() {
        assert!(previews_disabled().is_disabled);
    }
}
