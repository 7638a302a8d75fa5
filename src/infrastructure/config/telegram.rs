//! Telegram notification configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Where notifications are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatDestination {
    /// Numeric chat id (negative for groups and channels).
    Id(i64),
    /// Public channel username, including the leading `@`.
    Username(String),
}

impl FromStr for ChatDestination {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<i64>() {
            return Ok(Self::Id(id));
        }
        if s.len() > 1 && s.starts_with('@') {
            return Ok(Self::Username(s.to_string()));
        }
        Err(ConfigError::InvalidValue {
            field: "IMMOBOT_CHAT_ID",
            reason: format!("expected a numeric chat id or an @channel name, got {s:?}"),
        })
    }
}

impl fmt::Display for ChatDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => write!(f, "{name}"),
        }
    }
}

/// Telegram bot credentials and destination.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat for notifications.
    pub chat: ChatDestination,
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat", &self.chat)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_and_username_destinations() {
        assert_eq!("123456".parse::<ChatDestination>().unwrap(), ChatDestination::Id(123456));
        assert_eq!(
            "-1001234567890".parse::<ChatDestination>().unwrap(),
            ChatDestination::Id(-1001234567890)
        );
        assert_eq!(
            "@milano_affitti".parse::<ChatDestination>().unwrap(),
            ChatDestination::Username("@milano_affitti".into())
        );
    }

    #[test]
    fn rejects_other_destinations() {
        for raw in ["", "@", "milano_affitti", "12ab"] {
            assert!(raw.parse::<ChatDestination>().is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn debug_hides_token() {
        let config = TelegramConfig {
            bot_token: "123:secret".into(),
            chat: ChatDestination::Id(1),
        };
        assert!(!format!("{config:?}").contains("secret"));
    }
}
