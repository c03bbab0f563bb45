use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Telegram credentials not configured")]
    ConfigurationMissing,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Telegram answered, but with `ok` unset or false. Carries the raw reply.
    #[error("Telegram API error")]
    ProviderRejected(Value),

    #[error("{0}")]
    Transport(String),
}

impl RelayError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::MethodNotAllowed => 405,
            RelayError::InvalidBody(_) => 400,
            RelayError::ConfigurationMissing
            | RelayError::ProviderRejected(_)
            | RelayError::Transport(_) => 500,
        }
    }

    /// JSON body returned to the caller for this error.
    #[must_use]
    pub fn to_body(&self) -> Value {
        match self {
            RelayError::ProviderRejected(details) => serde_json::json!({
                "error": self.to_string(),
                "details": details,
            }),
            _ => serde_json::json!({ "error": self.to_string() }),
        }
    }
}

// The request URL embeds the bot token, so it is stripped before the text
// reaches logs or the caller.
impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::Transport(error.without_url().to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::Transport(error.to_string())
    }
}
