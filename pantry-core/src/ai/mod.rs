//! AI client module for the chat-completion provider.
//!
//! This module provides:
//! - `AiClient` trait for abstracting AI providers
//! - `OpenAiClient` for OpenAI-compatible APIs
//! - `FakeAiClient` with canned replies
//! - Prompt templates for the cooking assistant
//!
//! # Configuration
//!
//! - `PANTRY_AI_PROVIDER` (optional): "openai" (default) or "fake"
//! - `OPENAI_API_KEY` (required for "openai")
//! - `PANTRY_AI_MODEL`, `PANTRY_AI_BASE_URL` (optional), see [`AiConfig::from_env`]
//! - `PANTRY_AI_MAX_TOKENS`, `PANTRY_AI_TEMPERATURE` (optional), see
//!   [`GenerationParams::from_env`]

mod client;
mod config;
mod fake;
pub mod prompts;
mod types;

pub use client::{AiClient, AiError, OpenAiClient};
pub use config::{AiConfig, GenerationParams, DEFAULT_MODEL};
pub use fake::FakeAiClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};

use crate::error::ConfigError;

/// Build the configured AI client.
///
/// The fake client answers every prompt with a fixed line, which is enough to
/// click through the UI without an API key.
pub fn create_client_from_env() -> Result<Box<dyn AiClient>, AiError> {
    let provider = std::env::var("PANTRY_AI_PROVIDER").unwrap_or_else(|_| "openai".to_string());

    match provider.as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_env()?)),
        "fake" => Ok(Box::new(FakeAiClient::new().with_default_response(
            "I'm a stand-in assistant. Set PANTRY_AI_PROVIDER=openai for real answers.",
        ))),
        other => Err(AiError::Config(ConfigError::InvalidValue {
            name: "PANTRY_AI_PROVIDER".to_string(),
            value: other.to_string(),
        })),
    }
}
