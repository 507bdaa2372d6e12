pub mod chat;
pub mod page;
pub mod recipes;

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "pantry", description = "Recipe suggestions and cooking chat"),
        components(schemas(ErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> =
        vec![recipes::ApiDoc::openapi(), chat::ApiDoc::openapi()];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::state::Services;
    use crate::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use pantry_core::ai::{FakeAiClient, GenerationParams};
    use pantry_core::FakeRecipeProvider;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    pub fn state(recipes: Arc<FakeRecipeProvider>, ai: Arc<FakeAiClient>) -> AppState {
        Arc::new(Services {
            recipes,
            ai,
            generation: GenerationParams::default(),
        })
    }

    /// POST a JSON body and return the status and decoded JSON response.
    pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[test]
    fn test_openapi_lists_every_endpoint() {
        let spec = super::openapi();
        for path in ["/get_recipes", "/see_more", "/chatbot"] {
            assert!(spec.paths.paths.contains_key(path), "{path}");
        }
    }
}
