use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pantry_core::{ChatTurn, Dispatcher, Preferences, RecipeCandidate, RecipeId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatbotRequest {
    #[serde(default)]
    pub message: String,
    /// Transcript returned by the previous turn, sent back unchanged.
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
    /// Recipe the user is looking at, if any.
    #[serde(default)]
    pub recipe_id: Option<RecipeId>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatbotResponse {
    pub reply: String,
    /// Send this back as `context` on the next turn.
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub recipes: Option<Vec<RecipeCandidate>>,
}

/// Chat with the cooking assistant
///
/// Recognized commands:
/// - `I want new recipes`: a fresh random batch
/// - `I only want recipes with ingredients I have`: only recipes with nothing missing
/// - `CHOOSE_RECIPE_<id>__SERVINGS_<n>`: full details, remembered in the context
///
/// Anything else goes to the language model. Upstream failures are reported
/// in `reply`, never as an error status.
#[utoipa::path(
    post,
    path = "/chatbot",
    tag = "chat",
    request_body = ChatbotRequest,
    responses(
        (status = 200, description = "Assistant reply and updated context", body = ChatbotResponse),
        (status = 400, description = "No message given", body = ErrorResponse)
    )
)]
pub async fn chatbot(
    State(state): State<AppState>,
    Json(request): Json<ChatbotRequest>,
) -> impl IntoResponse {
    let message = request.message.trim();
    if message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No message provided.")),
        )
            .into_response();
    }

    let turn = ChatTurn {
        message: message.to_string(),
        context: request.context.unwrap_or_default(),
        ingredients: request.ingredients.unwrap_or_default(),
        preferences: request.preferences,
        recipe_id: request.recipe_id,
    };

    let outcome = Dispatcher::new(&*state.recipes, &*state.ai)
        .with_generation(state.generation)
        .handle(&turn)
        .await;

    (
        StatusCode::OK,
        Json(ChatbotResponse {
            reply: outcome.reply,
            context: outcome.context,
            recipes: outcome.recipes,
        }),
    )
        .into_response()
}
