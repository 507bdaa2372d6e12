//! AI configuration from environment variables.

use std::env;

use crate::error::ConfigError;

/// Default OpenAI base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default completion length for chat replies.
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Default sampling temperature for chat replies.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// AI client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key for the chat-completion provider.
    pub api_key: String,
    /// Model name (e.g., "gpt-3.5-turbo", "gpt-4o-mini").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `OPENAI_API_KEY`: API key for OpenAI
    ///
    /// Optional:
    /// - `PANTRY_AI_MODEL`: Model name (default: "gpt-3.5-turbo")
    /// - `PANTRY_AI_BASE_URL`: API base URL (default: "https://api.openai.com/v1")
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;

        let model = env::var("PANTRY_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            env::var("PANTRY_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }
}

/// Sampling parameters for chat replies, independent of the provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl GenerationParams {
    /// Optional:
    /// - `PANTRY_AI_MAX_TOKENS`: Completion token cap (default: 512)
    /// - `PANTRY_AI_TEMPERATURE`: Sampling temperature (default: 0.7)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            max_tokens: parse_var("PANTRY_AI_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            temperature: parse_var("PANTRY_AI_TEMPERATURE", DEFAULT_TEMPERATURE)?,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_defaults() {
        let params = GenerationParams::default();
        assert_eq!(params.max_tokens, 512);
        assert_eq!(params.temperature, 0.7);
    }

    #[test]
    fn test_parse_var() {
        // Names unique to this test; other tests run in parallel.
        assert_eq!(parse_var("PANTRY_TEST_PARSE_UNSET", 7u32).unwrap(), 7);

        env::set_var("PANTRY_TEST_PARSE_OK", "0.25");
        assert_eq!(parse_var("PANTRY_TEST_PARSE_OK", 1.0f32).unwrap(), 0.25);

        env::set_var("PANTRY_TEST_PARSE_BAD", "lots");
        match parse_var("PANTRY_TEST_PARSE_BAD", 1u32) {
            Err(ConfigError::InvalidValue { name, value }) => {
                assert_eq!(name, "PANTRY_TEST_PARSE_BAD");
                assert_eq!(value, "lots");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }
}
