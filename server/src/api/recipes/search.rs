use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pantry_core::{
    refine_missing_ingredients, search_recipes, Preferences, RecipeCandidate, SearchQuery,
    SortOrder,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct GetRecipesRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GetRecipesResponse {
    /// Provider records, with missed ingredients the user has removed.
    #[schema(value_type = Vec<Object>)]
    pub recipes: Vec<RecipeCandidate>,
}

/// Suggest recipes for a set of ingredients
///
/// Searches the recipe provider with the user's ingredients and dietary
/// preferences. If no recipe uses every ingredient, the search is retried once
/// without the ingredient filter.
#[utoipa::path(
    post,
    path = "/get_recipes",
    tag = "recipes",
    request_body = GetRecipesRequest,
    responses(
        (status = 200, description = "Up to five candidate recipes", body = GetRecipesResponse),
        (status = 400, description = "No ingredients given", body = ErrorResponse),
        (status = 404, description = "No recipes found", body = ErrorResponse),
        (status = 502, description = "Recipe provider unavailable", body = ErrorResponse)
    )
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    Json(request): Json<GetRecipesRequest>,
) -> impl IntoResponse {
    let ingredients: Vec<String> = request
        .ingredients
        .iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect();

    if ingredients.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Please select or enter some ingredients.")),
        )
            .into_response();
    }

    let query = SearchQuery::new(
        &ingredients,
        request.preferences,
        SortOrder::MinMissingIngredients,
    );

    let mut recipes = match search_recipes(&*state.recipes, &query).await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("Recipe search failed: {}", e);
            return (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new("The recipe service is unavailable.")),
            )
                .into_response();
        }
    };

    if recipes.is_empty() {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "No recipes found with all the selected ingredients.",
            )),
        )
            .into_response();
    }

    refine_missing_ingredients(&mut recipes, &ingredients);

    (StatusCode::OK, Json(GetRecipesResponse { recipes })).into_response()
}
