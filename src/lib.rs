//! Form relay - forwards website form submissions to a Telegram chat.
//!
//! A single AWS Lambda sits behind API Gateway and accepts three kinds of
//! submissions from the shop website: quiz answers, product orders and
//! feedback requests. Each one is rendered into a plain-text message and
//! delivered with one call to the Telegram Bot API `sendMessage` method.
//!
//! # Architecture
//!
//! - `api`: event normalization, method dispatch, HTTP response mapping
//! - `telegram`: message templates, the pure formatter, and the Bot API client
//! - `core`: configuration and data types
//!
//! # Example
//!
//! ```no_run
//! use form_relay::api::handle_event;
//! use form_relay::core::config::AppConfig;
//! use form_relay::telegram::TelegramClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     form_relay::setup_logging();
//!
//!     let config = AppConfig::new("123456:bot-token", "-1001234567890");
//!     let client = TelegramClient::new(config.api_base());
//!
//!     let event = serde_json::json!({
//!         "httpMethod": "POST",
//!         "body": r#"{"type":"contact","name":"Анна","phone":"+7 900 000-00-00"}"#
//!     });
//!
//!     let response = handle_event(&event, &config, &client).await;
//!     println!("{} {}", response.status_code, response.body);
//! }
//! ```
pub mod api;
pub mod core;
pub mod errors;
pub mod telegram;
pub mod utils;

pub use errors::RelayError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. Calling it again after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// form_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
