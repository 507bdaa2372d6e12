//! Fake AI client for testing.
//!
//! Replies are matched by checking whether the last user message contains a
//! registered substring, so tests can run without network access or API costs.

use async_trait::async_trait;
use std::sync::Mutex;

use super::client::{AiClient, AiError};
use super::types::{ChatRequest, ChatResponse, Role, Usage};

/// A fake AI client for testing.
#[derive(Debug, Default)]
pub struct FakeAiClient {
    /// (substring, reply) pairs, checked in insertion order.
    responses: Vec<(String, String)>,
    /// Reply when nothing matches. `None` makes unmatched prompts fail.
    default_response: Option<String>,
    /// Every request received, for assertions.
    requests: Mutex<Vec<ChatRequest>>,
}

impl FakeAiClient {
    /// Create a client with no registered replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `response` to user messages containing `prompt_contains`.
    pub fn with_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_lowercase(), response.to_string()));
        self
    }

    /// Set the reply used when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn complete(
        &self,
        _prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let prompt = request
            .messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.to_lowercase())
            .unwrap_or_default();

        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        let reply = self
            .responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone());

        match reply {
            Some(content) => Ok(ChatResponse {
                content,
                usage: Usage::default(),
            }),
            None => Err(AiError::Api(format!(
                "FakeAiClient: No response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }
}
