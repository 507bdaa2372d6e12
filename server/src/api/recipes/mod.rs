pub mod search;
pub mod see_more;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the recipe endpoints (mounted at /)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get_recipes", post(search::get_recipes))
        .route("/see_more", post(see_more::see_more))
}

#[derive(OpenApi)]
#[openapi(
    paths(search::get_recipes, see_more::see_more),
    components(schemas(
        search::GetRecipesRequest,
        search::GetRecipesResponse,
        see_more::SeeMoreRequest,
        see_more::SeeMoreResponse,
        pantry_core::Preferences,
        pantry_core::RecipeId,
        pantry_core::RecipeSummary,
    ))
)]
pub struct ApiDoc;
