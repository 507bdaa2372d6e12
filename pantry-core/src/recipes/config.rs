//! Recipe provider configuration from environment variables.

use std::env;

use crate::error::ConfigError;

/// Default Spoonacular base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

#[derive(Debug, Clone)]
pub struct RecipesConfig {
    /// Spoonacular API key, sent as the `apiKey` query parameter.
    pub api_key: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl RecipesConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `SPOONACULAR_API_KEY`
    ///
    /// Optional:
    /// - `PANTRY_RECIPES_BASE_URL` (default: "https://api.spoonacular.com")
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("SPOONACULAR_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("SPOONACULAR_API_KEY".to_string()))?;

        let base_url = env::var("PANTRY_RECIPES_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(api_key, base_url))
    }

    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = RecipesConfig::new("key", "http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.api_key, "key");

        let config = RecipesConfig::new("key", DEFAULT_BASE_URL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
