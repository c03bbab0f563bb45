use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};

use crate::core::models::{InvocationEvent, RequestPayload};
use crate::errors::RelayError;

const DEFAULT_METHOD: &str = "POST";

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.iter().find_map(|(k, v)| {
        if k.eq_ignore_ascii_case(name) {
            v.as_str()
        } else {
            None
        }
    })
}

/// Normalizes a REST (v1) or HTTP API (v2) proxy event.
#[must_use]
pub fn parse_invocation_event(event: &Value) -> InvocationEvent {
    let http_method = v_str(event, &["httpMethod"])
        .or_else(|| v_str(event, &["requestContext", "http", "method"]))
        .unwrap_or(DEFAULT_METHOD)
        .to_string();

    let headers = event
        .get("headers")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    InvocationEvent {
        http_method,
        headers,
        body: v_str(event, &["body"]).map(ToString::to_string),
        is_base64_encoded: event
            .get("isBase64Encoded")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    }
}

/// The request body as text, base64-decoded when the gateway flagged it.
///
/// # Errors
///
/// Returns [`RelayError::InvalidBody`] if a base64-flagged body does not decode to UTF-8.
pub fn body_text(event: &InvocationEvent) -> Result<Option<String>, RelayError> {
    match event.body.as_deref() {
        Some(raw) if event.is_base64_encoded => decode_base64_body(raw).map(Some),
        Some(raw) => Ok(Some(raw.to_string())),
        None => Ok(None),
    }
}

fn decode_base64_body(raw: &str) -> Result<String, RelayError> {
    let bytes = STANDARD
        .decode(raw)
        .map_err(|e| RelayError::InvalidBody(format!("base64 decode failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| RelayError::InvalidBody(format!("not UTF-8: {e}")))
}

/// Parses the JSON form body. An absent or blank body is an empty form.
///
/// # Errors
///
/// Returns [`RelayError::InvalidBody`] for malformed JSON or a non-object document.
pub fn parse_payload(body: Option<&str>) -> Result<RequestPayload, RelayError> {
    let body = body.map(str::trim).filter(|b| !b.is_empty());
    let Some(body) = body else {
        return Ok(RequestPayload::from_fields(Map::new()));
    };

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => Ok(RequestPayload::from_fields(fields)),
        Ok(_) => Err(RelayError::InvalidBody(
            "expected a JSON object".to_string(),
        )),
        Err(e) => Err(RelayError::InvalidBody(format!("malformed JSON: {e}"))),
    }
}
