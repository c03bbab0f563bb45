//! Helpers for reading loosely-typed form fields out of JSON.

use serde_json::{Map, Value};

/// Whether a field should count as "filled in" on a submitted form.
///
/// Null, `false`, zero, empty strings and empty collections are blank.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Renders a field for a message line: strings verbatim, everything else as compact JSON.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The field under `key`, only if it is filled in.
#[must_use]
pub fn filled<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| is_truthy(v))
}

/// `object[key]` rendered for display, or `default` when absent or null.
#[must_use]
pub fn display_or(object: &Value, key: &str, default: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(v) => display_value(v),
    }
}
