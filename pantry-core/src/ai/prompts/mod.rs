//! AI prompt templates.

pub mod chat;

pub use chat::{render_chat_messages, CHAT_PROMPT_NAME, CHAT_SYSTEM_PROMPT};
