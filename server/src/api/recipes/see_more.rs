use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pantry_core::types::DEFAULT_SERVINGS;
use pantry_core::{build_short_info, RecipeId, RecipeSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SeeMoreRequest {
    #[serde(default)]
    pub recipe_id: Option<RecipeId>,
    /// Defaults to 2.
    #[serde(default)]
    pub servings: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeeMoreResponse {
    pub info: RecipeSummary,
}

/// Short details for one recipe
///
/// Title, servings, scaled ingredient lines and macros. Does not touch the
/// conversation context.
#[utoipa::path(
    post,
    path = "/see_more",
    tag = "recipes",
    request_body = SeeMoreRequest,
    responses(
        (status = 200, description = "Recipe summary", body = SeeMoreResponse),
        (status = 400, description = "No recipe ID given", body = ErrorResponse),
        (status = 404, description = "Recipe details could not be fetched", body = ErrorResponse)
    )
)]
pub async fn see_more(
    State(state): State<AppState>,
    Json(request): Json<SeeMoreRequest>,
) -> impl IntoResponse {
    let recipe_id = match request.recipe_id {
        Some(id) if !id.as_str().is_empty() => id,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No recipe ID provided.")),
            )
                .into_response()
        }
    };

    let servings = request
        .servings
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_SERVINGS);

    match state.recipes.recipe_information(&recipe_id, servings).await {
        Ok(detail) => (
            StatusCode::OK,
            Json(SeeMoreResponse {
                info: build_short_info(&detail),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(recipe_id = %recipe_id, "Recipe information failed: {}", e);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Couldn't fetch details.")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::recipes::router;
    use crate::api::test_support::{post_json, state};
    use axum::http::StatusCode;
    use pantry_core::ai::FakeAiClient;
    use pantry_core::{FakeRecipeProvider, RecipeDetail, RecipeId};
    use serde_json::json;
    use std::sync::Arc;

    fn provider() -> Arc<FakeRecipeProvider> {
        let detail: RecipeDetail = serde_json::from_value(json!({
            "title": "Omelette",
            "servings": 3,
            "extendedIngredients": [{"original": "3 eggs"}, {"original": "1 tbsp butter"}],
            "nutrition": {"nutrients": [{"name": "Calories", "amount": 250.0, "unit": "kcal"}]}
        }))
        .unwrap();
        Arc::new(FakeRecipeProvider::new().with_detail("5", detail))
    }

    #[tokio::test]
    async fn test_see_more() {
        let recipes = provider();
        let app = router().with_state(state(recipes.clone(), Arc::new(FakeAiClient::new())));

        let (status, body) =
            post_json(app, "/see_more", json!({"recipe_id": 5, "servings": 3})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["info"],
            json!({
                "title": "Omelette",
                "servings": 3,
                "ingredients": ["3 eggs", "1 tbsp butter"],
                "macros": "Calories: 250.0 kcal\nCarbs: N/A\nFat: N/A\nProtein: N/A"
            })
        );
        assert_eq!(recipes.detail_requests(), vec![(RecipeId::from("5"), 3)]);
    }

    #[tokio::test]
    async fn test_see_more_defaults_to_two_servings() {
        let recipes = provider();
        let app = router().with_state(state(recipes.clone(), Arc::new(FakeAiClient::new())));

        let (status, _) = post_json(app, "/see_more", json!({"recipe_id": "5"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(recipes.detail_requests(), vec![(RecipeId::from("5"), 2)]);
    }

    #[tokio::test]
    async fn test_see_more_missing_id() {
        let recipes = provider();
        let app = router().with_state(state(recipes.clone(), Arc::new(FakeAiClient::new())));

        let (status, body) = post_json(app, "/see_more", json!({"servings": 2})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
        assert!(recipes.detail_requests().is_empty());
    }

    #[tokio::test]
    async fn test_see_more_fetch_failure() {
        let app = router().with_state(state(provider(), Arc::new(FakeAiClient::new())));

        let (status, body) = post_json(app, "/see_more", json!({"recipe_id": 404})).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Couldn't fetch details.");
    }
}
