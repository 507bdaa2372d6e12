//! Recipe provider client.
//!
//! - `RecipeProvider` trait over the two provider endpoints we use
//! - `SpoonacularClient` talking to the real API
//! - `FakeRecipeProvider` with canned responses for tests and local runs
//! - `search_recipes`, which adds the relaxed-filter retry on top of a provider

mod config;
mod fake;
mod spoonacular;

pub use config::{RecipesConfig, DEFAULT_BASE_URL};
pub use fake::FakeRecipeProvider;
pub use spoonacular::SpoonacularClient;

use async_trait::async_trait;

use crate::error::RecipeApiError;
use crate::types::{Preferences, RecipeCandidate, RecipeDetail, RecipeId};

/// Most candidates a single search returns.
pub const MAX_RESULTS: u32 = 5;

/// How the provider orders search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Fewest missing ingredients first.
    #[default]
    MinMissingIngredients,
    /// A fresh random batch, used when the user asks for new recipes.
    Random,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::MinMissingIngredients => "min-missing-ingredients",
            SortOrder::Random => "random",
        }
    }
}

/// Parameters of one provider search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Ingredients every result should include. Empty means no inclusion filter.
    pub ingredients: Vec<String>,
    pub preferences: Preferences,
    pub sort: SortOrder,
}

impl SearchQuery {
    pub fn new(ingredients: &[String], preferences: Option<Preferences>, sort: SortOrder) -> Self {
        Self {
            ingredients: ingredients
                .iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect(),
            preferences: preferences.unwrap_or_default(),
            sort,
        }
    }

    /// Same query with the ingredient-inclusion filter dropped.
    pub fn without_ingredients(&self) -> Self {
        Self {
            ingredients: Vec::new(),
            ..self.clone()
        }
    }

    /// Query-string parameters, excluding credentials.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("number", MAX_RESULTS.to_string()),
            ("ranking", "2".to_string()),
            ("sort", self.sort.as_str().to_string()),
            ("instructionsRequired", "true".to_string()),
            ("addRecipeNutrition", "true".to_string()),
            ("fillIngredients", "true".to_string()),
            ("ignorePantry", "true".to_string()),
        ];

        if !self.ingredients.is_empty() {
            params.push(("includeIngredients", self.ingredients.join(",")));
        }
        if let Some(diet) = self.preferences.diet() {
            params.push(("diet", diet.to_string()));
        }
        let intolerances = self.preferences.intolerances();
        if !intolerances.is_empty() {
            params.push(("intolerances", intolerances.join(",")));
        }

        params
    }
}

/// The two provider operations the assistant needs.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Run one search. Returns at most `MAX_RESULTS` candidates.
    async fn complex_search(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<RecipeCandidate>, RecipeApiError>;

    /// Full information for one recipe, ingredients scaled to `servings`.
    async fn recipe_information(
        &self,
        id: &RecipeId,
        servings: u32,
    ) -> Result<RecipeDetail, RecipeApiError>;
}

/// Search, retrying once without the ingredient filter if nothing matched.
///
/// No recipe may contain every requested ingredient; the relaxed query keeps
/// diet and intolerance filters so the user still gets suitable results.
pub async fn search_recipes(
    provider: &dyn RecipeProvider,
    query: &SearchQuery,
) -> Result<Vec<RecipeCandidate>, RecipeApiError> {
    let results = provider.complex_search(query).await?;
    if !results.is_empty() || query.ingredients.is_empty() {
        return Ok(results);
    }

    tracing::info!(
        ingredients = %query.ingredients.join(","),
        "no recipe includes every ingredient, retrying without the ingredient filter"
    );
    provider.complex_search(&query.without_ingredients()).await
}
