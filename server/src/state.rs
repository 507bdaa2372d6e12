//! Upstream clients shared by all handlers.

use anyhow::Context;
use pantry_core::ai::{create_client_from_env, AiClient, GenerationParams};
use pantry_core::{RecipeProvider, SpoonacularClient};
use std::sync::Arc;

/// Read-only after startup; one instance serves every request.
pub struct Services {
    pub recipes: Arc<dyn RecipeProvider>,
    pub ai: Arc<dyn AiClient>,
    pub generation: GenerationParams,
}

impl Services {
    pub fn from_env() -> anyhow::Result<Self> {
        let recipes = SpoonacularClient::from_env().context("recipe provider is not configured")?;
        let ai = create_client_from_env().context("AI provider is not configured")?;
        let generation = GenerationParams::from_env().context("invalid generation settings")?;

        Ok(Self {
            recipes: Arc::new(recipes),
            ai: Arc::from(ai),
            generation,
        })
    }
}
