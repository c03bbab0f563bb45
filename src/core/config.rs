use std::env;

use crate::errors::RelayError;

pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub telegram_api_base: Option<String>,
}

/// Validated pair of secrets needed for a `sendMessage` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramCredentials<'a> {
    pub bot_token: &'a str,
    pub chat_id: &'a str,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Missing secrets are not an error here: OPTIONS and rejected methods
    /// must still be answered without them. Use [`AppConfig::credentials`]
    /// when they are actually needed.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID").ok(),
            telegram_api_base: env::var("TELEGRAM_API_BASE").ok(),
        }
    }

    #[must_use]
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            telegram_bot_token: Some(bot_token.into()),
            telegram_chat_id: Some(chat_id.into()),
            telegram_api_base: None,
        }
    }

    /// # Errors
    ///
    /// Returns [`RelayError::ConfigurationMissing`] if either secret is unset or empty.
    pub fn credentials(&self) -> Result<TelegramCredentials<'_>, RelayError> {
        let bot_token = non_empty(self.telegram_bot_token.as_deref());
        let chat_id = non_empty(self.telegram_chat_id.as_deref());

        match (bot_token, chat_id) {
            (Some(bot_token), Some(chat_id)) => Ok(TelegramCredentials { bot_token, chat_id }),
            _ => Err(RelayError::ConfigurationMissing),
        }
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        non_empty(self.telegram_api_base.as_deref())
            .unwrap_or(DEFAULT_TELEGRAM_API_BASE)
            .trim_end_matches('/')
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
