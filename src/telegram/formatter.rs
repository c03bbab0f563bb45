//! Builds the Telegram message text for a form submission.
//!
//! Everything here is pure: the same payload always yields the same text.

use std::fmt::Write as _;

use serde_json::Value;

use crate::core::models::{RequestPayload, SubmissionKind};
use crate::telegram::templates;
use crate::utils::json::{display_or, display_value, filled};

/// Formats the outbound message for `payload` according to its kind.
#[must_use]
pub fn build_message(payload: &RequestPayload) -> String {
    match payload.kind {
        SubmissionKind::Quiz => format_quiz(payload),
        SubmissionKind::Order => format_order(payload),
        SubmissionKind::Contact => format_feedback(payload),
        SubmissionKind::Other(_) => payload
            .get("message")
            .filter(|v| !v.is_null())
            .map_or_else(|| templates::DEFAULT_MESSAGE.to_string(), display_value),
    }
}

fn format_quiz(payload: &RequestPayload) -> String {
    let mut message = String::from(templates::QUIZ_HEADER);

    for answer in answers(payload) {
        let _ = writeln!(
            message,
            "• {}: {}",
            question_label(answer.get("question")),
            display_or(answer, "answer", templates::QUIZ_MISSING_ANSWER)
        );
    }

    if let Some(recommendation) = filled(&payload.fields, "recommendation") {
        let _ = write!(
            message,
            "\n{}: {}",
            templates::QUIZ_RECOMMENDATION,
            display_value(recommendation)
        );
    }
    push_contact(&mut message, payload);

    message
}

fn format_order(payload: &RequestPayload) -> String {
    let mut message = String::from(templates::ORDER_HEADER);

    if let Some(Value::Array(products)) = filled(&payload.fields, "products") {
        message.push_str(templates::ORDER_PRODUCTS);
        for product in products {
            let _ = writeln!(
                message,
                "• {} - {} шт. ({} {})",
                display_or(product, "name", templates::ORDER_DEFAULT_PRODUCT),
                display_or(product, "quantity", "1"),
                display_or(product, "price", "0"),
                templates::CURRENCY
            );
        }
    }

    if let Some(total) = filled(&payload.fields, "total") {
        let _ = write!(
            message,
            "\n{}: {} {}",
            templates::ORDER_TOTAL,
            display_value(total),
            templates::CURRENCY
        );
    }
    push_contact(&mut message, payload);
    if let Some(delivery) = filled(&payload.fields, "delivery") {
        let _ = write!(
            message,
            "\n{}: {}",
            templates::ORDER_DELIVERY,
            display_value(delivery)
        );
    }

    message
}

fn format_feedback(payload: &RequestPayload) -> String {
    let mut message = String::from(templates::FEEDBACK_HEADER);

    for (key, label) in templates::FEEDBACK_FIELDS {
        if let Some(value) = filled(&payload.fields, key) {
            let _ = writeln!(message, "{label}: {}", display_value(value));
        }
    }

    message
}

/// Integral floats such as `1.0` select the same question as `1`.
fn question_label(question: Option<&Value>) -> String {
    match question.and_then(Value::as_f64) {
        Some(n) if n.fract() != 0.0 => format!("Вопрос {}", n + 1.0),
        _ => {
            let index = question
                .and_then(|q| q.as_i64().or_else(|| q.as_f64().map(|f| f as i64)))
                .unwrap_or(0);
            templates::quiz_question_label(index)
        }
    }
}

fn answers(payload: &RequestPayload) -> &[Value] {
    payload
        .get("answers")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice)
}

fn push_contact(message: &mut String, payload: &RequestPayload) {
    if let Some(contact) = filled(&payload.fields, "contact") {
        let _ = write!(
            message,
            "\n{}: {}",
            templates::CONTACT_LABEL,
            display_value(contact)
        );
    }
}
