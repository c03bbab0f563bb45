//! Telegram Bot API client
//!
//! A single `sendMessage` call per invocation. No retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::core::models::ProviderResponse;
use crate::errors::RelayError;

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(Client::new);

pub const PARSE_MODE: &str = "HTML";

/// Capability to deliver one text message to a chat.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// # Errors
    ///
    /// Returns [`RelayError::Transport`] when the request fails or the reply
    /// is not JSON. A reply with `ok: false` is not an error at this level.
    async fn send(
        &self,
        bot_token: &str,
        chat_id: &str,
        text: &str,
    ) -> Result<ProviderResponse, RelayError>;
}

/// Form fields of a `sendMessage` request.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SendMessageForm<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: &'a str,
}

impl<'a> SendMessageForm<'a> {
    #[must_use]
    pub fn new(chat_id: &'a str, text: &'a str) -> Self {
        Self {
            chat_id,
            text,
            parse_mode: PARSE_MODE,
        }
    }
}

#[must_use]
pub fn send_message_url(api_base: &str, bot_token: &str) -> String {
    format!("{api_base}/bot{bot_token}/sendMessage")
}

pub struct TelegramClient {
    http: Client,
    api_base: String,
}

impl TelegramClient {
    /// Client sharing the process-wide connection pool.
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::with_http_client(HTTP_CLIENT.clone(), api_base)
    }

    #[must_use]
    pub fn with_http_client(http: Client, api_base: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
        }
    }
}

#[async_trait]
impl MessageSender for TelegramClient {
    async fn send(
        &self,
        bot_token: &str,
        chat_id: &str,
        text: &str,
    ) -> Result<ProviderResponse, RelayError> {
        info!(chat_id = %chat_id, text_len = text.len(), "Sending Telegram message");

        let resp = self
            .http
            .post(send_message_url(&self.api_base, bot_token))
            .form(&SendMessageForm::new(chat_id, text))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        let raw: Value = serde_json::from_str(&body)?;

        if !status.is_success() {
            warn!(status = %status, "Telegram responded with non-success status");
        }

        Ok(ProviderResponse::from_raw(raw))
    }
}
