use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// One inbound request as handed over by API Gateway, already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationEvent {
    pub http_method: String,
    pub headers: Map<String, Value>,
    pub body: Option<String>,
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionKind {
    Quiz,
    Order,
    Contact,
    Other(String),
}

impl SubmissionKind {
    #[must_use]
    pub fn from_type(value: &str) -> Self {
        match value {
            "quiz" => SubmissionKind::Quiz,
            "order" => SubmissionKind::Order,
            "contact" => SubmissionKind::Contact,
            other => SubmissionKind::Other(other.to_string()),
        }
    }
}

/// Parsed form submission: the `type` discriminator plus every field as sent.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPayload {
    pub kind: SubmissionKind,
    pub fields: Map<String, Value>,
}

impl RequestPayload {
    /// `type` defaults to `order` only when the key is absent. Any non-string
    /// `type`, explicit `null` included, is classified by its JSON text.
    #[must_use]
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        let kind = match fields.get("type") {
            None => SubmissionKind::Order,
            Some(Value::String(s)) => SubmissionKind::from_type(s),
            Some(other) => SubmissionKind::Other(other.to_string()),
        };
        Self { kind, fields }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub ok: bool,
    pub raw: Value,
}

impl ProviderResponse {
    /// `ok` follows the reply's own field; anything but a truthy `ok` is a rejection.
    #[must_use]
    pub fn from_raw(raw: Value) -> Self {
        let ok = raw.get("ok").is_some_and(crate::utils::json::is_truthy);
        Self { ok, raw }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HttpResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body parsed back into JSON; `Value::Null` for the empty preflight body.
    #[must_use]
    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn missing_type_is_an_order() {
        let payload = RequestPayload::from_fields(fields(json!({"total": 10})));
        assert_eq!(payload.kind, SubmissionKind::Order);
    }

    #[test]
    fn null_type_is_not_an_order() {
        let payload = RequestPayload::from_fields(fields(json!({"type": null})));
        assert_eq!(payload.kind, SubmissionKind::Other("null".to_string()));
    }

    #[test]
    fn unknown_type_is_kept() {
        let payload = RequestPayload::from_fields(fields(json!({"type": "feedback"})));
        assert_eq!(payload.kind, SubmissionKind::Other("feedback".to_string()));
    }

    #[test]
    fn provider_ok_must_be_truthy() {
        assert!(ProviderResponse::from_raw(json!({"ok": true})).ok);
        assert!(!ProviderResponse::from_raw(json!({"ok": false})).ok);
        assert!(!ProviderResponse::from_raw(json!({"description": "x"})).ok);
        assert!(!ProviderResponse::from_raw(json!([1, 2])).ok);
    }

    #[test]
    fn status_code_serializes_camel_case() {
        let response = HttpResponse {
            status_code: 200,
            headers: BTreeMap::new(),
            body: String::new(),
        };
        let v = serde_json::to_value(&response).unwrap();
        assert_eq!(v["statusCode"], 200);
    }
}
