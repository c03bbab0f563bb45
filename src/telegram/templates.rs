//! Literal message text for every submission kind.
//!
//! These strings are shown to the shop operators in Telegram and must stay
//! byte-for-byte stable.

/// Quiz question labels, indexed by the `question` ordinal the site sends.
pub const QUIZ_QUESTIONS: [&str; 7] = [
    "Какую икру ищет",
    "Повод покупки",
    "Бюджет на кг",
    "Вкусовые предпочтения",
    "Размер икринок",
    "Объем покупки",
    "Опыт с морепродуктами",
];

pub const QUIZ_HEADER: &str = "🎯 Новая заявка с квиза!\n\n";
pub const QUIZ_MISSING_ANSWER: &str = "не указано";
pub const QUIZ_RECOMMENDATION: &str = "✅ Рекомендация";

pub const ORDER_HEADER: &str = "🛒 Новый заказ!\n\n";
pub const ORDER_PRODUCTS: &str = "Товары:\n";
pub const ORDER_DEFAULT_PRODUCT: &str = "Товар";
pub const ORDER_TOTAL: &str = "💰 Итого";
pub const ORDER_DELIVERY: &str = "🚚 Доставка";

pub const CONTACT_LABEL: &str = "📞 Контакт";

pub const FEEDBACK_HEADER: &str = "📩 Новая заявка на обратную связь!\n\n";
/// Feedback form fields in display order: (payload key, label).
pub const FEEDBACK_FIELDS: [(&str, &str); 4] = [
    ("name", "Имя"),
    ("phone", "Телефон"),
    ("email", "Email"),
    ("comment", "Комментарий"),
];

pub const DEFAULT_MESSAGE: &str = "Новое сообщение";

pub const CURRENCY: &str = "₽";

/// Label for a quiz question ordinal; unknown ordinals get a numbered label.
#[must_use]
pub fn quiz_question_label(index: i64) -> String {
    usize::try_from(index)
        .ok()
        .and_then(|i| QUIZ_QUESTIONS.get(i))
        .map_or_else(|| format!("Вопрос {}", index.saturating_add(1)), |q| (*q).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_question_labels() {
        assert_eq!(quiz_question_label(0), "Какую икру ищет");
        assert_eq!(quiz_question_label(6), "Опыт с морепродуктами");
        assert_eq!(quiz_question_label(7), "Вопрос 8");
        assert_eq!(quiz_question_label(-1), "Вопрос 0");
    }
}
