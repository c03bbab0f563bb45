//! Response builders shared by the API handler.

use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::core::models::HttpResponse;
use crate::errors::RelayError;

pub const CORS_MAX_AGE_SECS: u32 = 86_400;

/// Headers carried by every JSON response.
#[must_use]
pub fn json_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
    ])
}

/// Returns the 200 response to a CORS preflight.
#[must_use]
pub fn preflight() -> HttpResponse {
    HttpResponse {
        status_code: 200,
        headers: BTreeMap::from([
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
            (
                "Access-Control-Allow-Methods".to_string(),
                "POST, OPTIONS".to_string(),
            ),
            (
                "Access-Control-Allow-Headers".to_string(),
                "Content-Type".to_string(),
            ),
            (
                "Access-Control-Max-Age".to_string(),
                CORS_MAX_AGE_SECS.to_string(),
            ),
        ]),
        body: String::new(),
    }
}

#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> HttpResponse {
    HttpResponse {
        status_code,
        headers: json_headers(),
        body: body.to_string(),
    }
}

/// Returns the 200 response after Telegram accepted the message.
#[must_use]
pub fn ok_sent() -> HttpResponse {
    json_response(200, &json!({ "success": true, "message": "Sent to Telegram" }))
}

#[must_use]
pub fn err_response(error: &RelayError) -> HttpResponse {
    json_response(error.status_code(), &error.to_body())
}
