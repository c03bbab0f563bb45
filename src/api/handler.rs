//! API Lambda handler: relays website form submissions to Telegram.
//!
//! Flow for one invocation:
//! - `OPTIONS` is answered with the CORS preflight and nothing else
//! - any method other than `POST` is rejected with 405
//! - `POST` needs both Telegram secrets, a JSON body, and one `sendMessage` call

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::core::models::{HttpResponse, InvocationEvent};
use crate::errors::RelayError;
use crate::telegram::{MessageSender, TelegramClient, build_message};

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// Reads configuration from the environment on every invocation and sends
/// through the real Telegram client. Always returns an HTTP response; failures
/// are mapped to status codes rather than surfaced as Lambda errors.
///
/// # Errors
///
/// Never returns `Err` today; the signature matches what `lambda_runtime` expects.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<HttpResponse, Error> {
    let config = AppConfig::from_env();
    let client = TelegramClient::new(config.api_base());

    Ok(handle_event(&event.payload, &config, &client).await)
}

/// Handles one API Gateway proxy event with injected configuration and sender.
pub async fn handle_event<S>(payload: &Value, config: &AppConfig, sender: &S) -> HttpResponse
where
    S: MessageSender + ?Sized,
{
    let event = parsing::parse_invocation_event(payload);
    info!(method = %event.http_method, "API Lambda received request");

    match event.http_method.as_str() {
        "OPTIONS" => return helpers::preflight(),
        "POST" => {}
        other => {
            warn!(method = %other, "Rejecting unsupported method");
            return helpers::err_response(&RelayError::MethodNotAllowed);
        }
    }

    if let Some(origin) = parsing::get_header_value(&event.headers, "Origin") {
        info!(origin = %origin, "Form submission origin");
    }

    match relay(&event, config, sender).await {
        Ok(()) => {
            info!("Message delivered to Telegram");
            helpers::ok_sent()
        }
        Err(e) => {
            error!(status = e.status_code(), "Relay failed: {}", e);
            helpers::err_response(&e)
        }
    }
}

async fn relay<S>(
    event: &InvocationEvent,
    config: &AppConfig,
    sender: &S,
) -> Result<(), RelayError>
where
    S: MessageSender + ?Sized,
{
    let credentials = config.credentials()?;

    let body = parsing::body_text(event)?;
    let payload = parsing::parse_payload(body.as_deref())?;
    info!(kind = ?payload.kind, "Parsed form submission");

    let message = build_message(&payload);

    let response = sender
        .send(credentials.bot_token, credentials.chat_id, &message)
        .await?;

    if response.ok {
        Ok(())
    } else {
        Err(RelayError::ProviderRejected(response.raw))
    }
}
