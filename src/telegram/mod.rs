//! All Telegram-specific functionality

pub mod client;
pub mod formatter;
pub mod templates;

// Re-export main types for convenience
pub use client::{MessageSender, TelegramClient};
pub use formatter::build_message;
