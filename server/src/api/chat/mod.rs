pub mod chatbot;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the chat endpoint (mounted at /)
pub fn router() -> Router<AppState> {
    Router::new().route("/chatbot", post(chatbot::chatbot))
}

#[derive(OpenApi)]
#[openapi(
    paths(chatbot::chatbot),
    components(schemas(chatbot::ChatbotRequest, chatbot::ChatbotResponse))
)]
pub struct ApiDoc;
