use form_relay::core::models::RequestPayload;
use form_relay::telegram::build_message;
use serde_json::{Value, json};

/// Tests for the message formatting logic.
/// The text is read by shop operators, so whole-message assertions are used
/// where the layout matters.

fn message(body: Value) -> String {
    let fields = body.as_object().cloned().unwrap_or_default();
    build_message(&RequestPayload::from_fields(fields))
}

#[test]
fn test_quiz_known_question() {
    let text = message(json!({
        "type": "quiz",
        "answers": [{"question": 0, "answer": "Сёмга"}]
    }));

    assert!(
        text.contains("• Какую икру ищет: Сёмга\n"),
        "Known ordinals should use the question table. Actual: {text}"
    );
}

#[test]
fn test_quiz_unknown_question_gets_numbered_label() {
    let text = message(json!({
        "type": "quiz",
        "answers": [{"question": 99, "answer": "Да"}]
    }));

    assert!(text.lines().any(|l| l.starts_with("• Вопрос 100:")));
}

#[test]
fn test_quiz_full_message() {
    let text = message(json!({
        "type": "quiz",
        "answers": [
            {"question": 1, "answer": "Праздник"},
            {"question": 4}
        ],
        "recommendation": "Автоматически подобрано",
        "contact": "+7 905 000-00-00"
    }));

    assert_eq!(
        text,
        "🎯 Новая заявка с квиза!\n\n\
         • Повод покупки: Праздник\n\
         • Размер икринок: не указано\n\
         \n✅ Рекомендация: Автоматически подобрано\
         \n📞 Контакт: +7 905 000-00-00"
    );
}

#[test]
fn test_order_products_and_total() {
    let text = message(json!({
        "type": "order",
        "products": [{"name": "Икра красная", "quantity": 2, "price": 1500}],
        "total": 3000
    }));

    assert!(text.contains("• Икра красная - 2 шт. (1500 ₽)"));
    assert!(text.contains("💰 Итого: 3000 ₽"));
}

#[test]
fn test_order_full_message_with_defaults() {
    let text = message(json!({
        "products": [{}, {"name": "Икра щуки", "quantity": 3, "price": 870.5}],
        "total": 2611.5,
        "contact": "Иван, +7 900 111-22-33",
        "delivery": "Самовывоз"
    }));

    assert_eq!(
        text,
        "🛒 Новый заказ!\n\n\
         Товары:\n\
         • Товар - 1 шт. (0 ₽)\n\
         • Икра щуки - 3 шт. (870.5 ₽)\n\
         \n💰 Итого: 2611.5 ₽\
         \n📞 Контакт: Иван, +7 900 111-22-33\
         \n🚚 Доставка: Самовывоз"
    );
}

#[test]
fn test_order_zero_total_is_omitted() {
    let text = message(json!({"type": "order", "total": 0}));
    assert!(!text.contains("Итого"));
}

#[test]
fn test_contact_with_only_phone() {
    let text = message(json!({"type": "contact", "phone": "+7 905 178-57-69"}));

    assert_eq!(
        text,
        "📩 Новая заявка на обратную связь!\n\nТелефон: +7 905 178-57-69\n"
    );
    for label in ["Имя:", "Email:", "Комментарий:"] {
        assert!(!text.contains(label), "{label} should be absent");
    }
}

#[test]
fn test_contact_skips_blank_fields() {
    let text = message(json!({
        "type": "contact",
        "name": "Анна",
        "phone": "+7 900",
        "email": "",
        "comment": "Интересующие товары:\n• Икра красная (1 500 ₽)"
    }));

    assert_eq!(
        text,
        "📩 Новая заявка на обратную связь!\n\n\
         Имя: Анна\n\
         Телефон: +7 900\n\
         Комментарий: Интересующие товары:\n• Икра красная (1 500 ₽)\n"
    );
}

#[test]
fn test_unknown_type_without_message() {
    assert_eq!(message(json!({"type": "callback"})), "Новое сообщение");
}

#[test]
fn test_unknown_type_passes_message_through() {
    assert_eq!(
        message(json!({"type": "callback", "message": "<b>Срочно</b>"})),
        "<b>Срочно</b>"
    );
}

#[test]
fn test_null_type_falls_back_to_message() {
    assert_eq!(message(json!({"type": null})), "Новое сообщение");
    assert_eq!(
        message(json!({"type": null, "message": "Перезвоните"})),
        "Перезвоните"
    );
}
