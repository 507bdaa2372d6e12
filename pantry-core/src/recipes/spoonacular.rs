//! Spoonacular recipe provider.

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{RecipeProvider, RecipesConfig, SearchQuery};
use crate::error::{ConfigError, RecipeApiError};
use crate::types::{RecipeCandidate, RecipeDetail, RecipeId};

/// Spoonacular API client.
#[derive(Debug)]
pub struct SpoonacularClient {
    config: RecipesConfig,
    client: reqwest::Client,
}

/// complexSearch response envelope.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RecipeCandidate>,
}

impl SpoonacularClient {
    pub fn new(config: RecipesConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(RecipesConfig::from_env()?))
    }

    /// Build `<base>/<segments...>`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, RecipeApiError> {
        let invalid = || {
            RecipeApiError::Config(ConfigError::InvalidValue {
                name: "PANTRY_RECIPES_BASE_URL".to_string(),
                value: self.config.base_url.clone(),
            })
        };

        let mut url = Url::parse(&self.config.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, RecipeApiError> {
        tracing::debug!(path = url.path(), "calling recipe API");

        let response = self
            .client
            .get(url)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = %status, "recipe API returned an error");
            return Err(RecipeApiError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| RecipeApiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    async fn complex_search(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<RecipeCandidate>, RecipeApiError> {
        let url = self.endpoint(&["recipes", "complexSearch"])?;
        let response: SearchResponse = self.get_json(url, &query.to_params()).await?;
        Ok(response.results)
    }

    async fn recipe_information(
        &self,
        id: &RecipeId,
        servings: u32,
    ) -> Result<RecipeDetail, RecipeApiError> {
        let url = self.endpoint(&["recipes", id.as_str(), "information"])?;
        let params = [
            ("includeNutrition", "true".to_string()),
            ("servings", servings.to_string()),
        ];
        self.get_json(url, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = SpoonacularClient::new(RecipesConfig::new("key", "https://api.example.com/"));
        let url = client.endpoint(&["recipes", "12/../x", "information"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/recipes/12%2F..%2Fx/information"
        );
    }

    #[test]
    fn test_endpoint_rejects_bad_base_url() {
        let client = SpoonacularClient::new(RecipesConfig::new("key", "not a url"));
        assert!(matches!(
            client.endpoint(&["recipes"]),
            Err(RecipeApiError::Config(_))
        ));
    }
}
