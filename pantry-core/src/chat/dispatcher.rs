//! Routing of one chat turn.

use super::command::{Command, RecipeChoice};
use super::context::ConversationContext;
use crate::ai::prompts::chat::{render_chat_messages, CHAT_PROMPT_NAME};
use crate::ai::{AiClient, ChatRequest, GenerationParams};
use crate::error::RecipeApiError;
use crate::format::recipe_details_message;
use crate::normalize::refine_missing_ingredients;
use crate::recipes::{search_recipes, RecipeProvider, SearchQuery, SortOrder};
use crate::types::{Preferences, RecipeCandidate, RecipeId};

/// Fixed reply texts.
pub mod replies {
    pub const NEW_RECIPES: &str = "Here are some brand new recipes!";
    pub const NO_NEW_RECIPES: &str = "I'm sorry, I couldn't find any new recipes.";
    pub const STRICT_RECIPES: &str = "Here are strictly matched recipes:";
    pub const NO_RECIPES: &str = "No recipes found.";
    pub const NO_STRICT_RECIPES: &str = "No strictly matched recipes found.";
    pub const RECIPES_UNAVAILABLE: &str =
        "I'm sorry, the recipe service is unavailable right now. Please try again.";
    pub const DETAILS_UNAVAILABLE: &str = "Sorry, I couldn't retrieve details for that recipe.";
    pub const INVALID_CHOICE: &str = "Error: invalid recipe choose command.";
}

/// One incoming chat message and what the caller sent along with it.
#[derive(Debug, Clone, Default)]
pub struct ChatTurn {
    pub message: String,
    /// The opaque transcript from the previous turn.
    pub context: String,
    pub ingredients: Vec<String>,
    pub preferences: Option<Preferences>,
    /// Recipe the user is currently looking at, if any.
    pub recipe_id: Option<RecipeId>,
}

/// Reply for the caller plus the transcript it should send next time.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    pub reply: String,
    pub context: String,
    /// Candidate cards to show, for the recipe-list commands.
    pub recipes: Option<Vec<RecipeCandidate>>,
}

impl ChatOutcome {
    fn text(reply: impl Into<String>, context: &ConversationContext) -> Self {
        Self {
            reply: reply.into(),
            context: context.to_wire(),
            recipes: None,
        }
    }

    fn with_recipes(
        reply: impl Into<String>,
        context: &ConversationContext,
        recipes: Vec<RecipeCandidate>,
    ) -> Self {
        Self {
            recipes: Some(recipes),
            ..Self::text(reply, context)
        }
    }
}

/// Routes chat turns to the recipe provider or the language model.
pub struct Dispatcher<'a> {
    recipes: &'a dyn RecipeProvider,
    ai: &'a dyn AiClient,
    generation: GenerationParams,
}

impl<'a> Dispatcher<'a> {
    pub fn new(recipes: &'a dyn RecipeProvider, ai: &'a dyn AiClient) -> Self {
        Self {
            recipes,
            ai,
            generation: GenerationParams::default(),
        }
    }

    /// Generation parameters for free-text replies.
    pub fn with_generation(mut self, generation: GenerationParams) -> Self {
        self.generation = generation;
        self
    }

    /// Handle one turn. Upstream failures become reply text, never errors.
    pub async fn handle(&self, turn: &ChatTurn) -> ChatOutcome {
        let context = ConversationContext::from_wire(&turn.context);
        let command = Command::parse(&turn.message);
        tracing::debug!(command = ?command, "chat message classified");

        match command {
            Command::RequestNew => self.new_recipes(turn, &context).await,
            Command::StrictFilter => self.strict_recipes(turn, &context).await,
            Command::ChooseRecipe(choice) => self.choose_recipe(turn, &context, &choice).await,
            Command::InvalidChoice(e) => {
                tracing::info!(error = %e, message = %turn.message, "invalid choose command");
                ChatOutcome::text(replies::INVALID_CHOICE, &context)
            }
            Command::FreeText(message) => self.free_text(turn, &context, &message).await,
        }
    }

    async fn search(
        &self,
        turn: &ChatTurn,
        sort: SortOrder,
    ) -> Result<Vec<RecipeCandidate>, RecipeApiError> {
        let query = SearchQuery::new(&turn.ingredients, turn.preferences, sort);
        let mut recipes = search_recipes(self.recipes, &query).await?;
        refine_missing_ingredients(&mut recipes, &turn.ingredients);
        Ok(recipes)
    }

    async fn new_recipes(&self, turn: &ChatTurn, context: &ConversationContext) -> ChatOutcome {
        let annotated = context.with_ingredients(&turn.ingredients);

        match self.search(turn, SortOrder::Random).await {
            Ok(recipes) if recipes.is_empty() => {
                ChatOutcome::text(replies::NO_NEW_RECIPES, &annotated)
            }
            Ok(recipes) => ChatOutcome::with_recipes(replies::NEW_RECIPES, &annotated, recipes),
            Err(e) => {
                tracing::warn!(error = %e, "recipe search failed");
                ChatOutcome::text(replies::RECIPES_UNAVAILABLE, &annotated)
            }
        }
    }

    /// Keeps the default ordering so the fewest-missing candidates are considered.
    async fn strict_recipes(&self, turn: &ChatTurn, context: &ConversationContext) -> ChatOutcome {
        let annotated = context.with_ingredients(&turn.ingredients);

        let recipes = match self.search(turn, SortOrder::MinMissingIngredients).await {
            Ok(recipes) if recipes.is_empty() => {
                return ChatOutcome::text(replies::NO_RECIPES, &annotated)
            }
            Ok(recipes) => recipes,
            Err(e) => {
                tracing::warn!(error = %e, "recipe search failed");
                return ChatOutcome::text(replies::RECIPES_UNAVAILABLE, &annotated);
            }
        };

        let strict: Vec<RecipeCandidate> = recipes
            .into_iter()
            .filter(|r| r.missed_ingredients.is_empty())
            .collect();

        if strict.is_empty() {
            ChatOutcome::text(replies::NO_STRICT_RECIPES, &annotated)
        } else {
            ChatOutcome::with_recipes(replies::STRICT_RECIPES, &annotated, strict)
        }
    }

    async fn choose_recipe(
        &self,
        turn: &ChatTurn,
        context: &ConversationContext,
        choice: &RecipeChoice,
    ) -> ChatOutcome {
        let detail = match self
            .recipes
            .recipe_information(&choice.recipe_id, choice.servings)
            .await
        {
            Ok(detail) => detail,
            Err(e) => {
                tracing::warn!(
                    recipe_id = %choice.recipe_id,
                    error = %e,
                    "failed to fetch chosen recipe"
                );
                return ChatOutcome::text(replies::DETAILS_UNAVAILABLE, context);
            }
        };

        let message = recipe_details_message(&detail);
        let updated = context
            .with_ingredients(&turn.ingredients)
            .with_chosen_recipe(&message);

        ChatOutcome::text(message, &updated)
    }

    async fn free_text(
        &self,
        turn: &ChatTurn,
        context: &ConversationContext,
        message: &str,
    ) -> ChatOutcome {
        let mut prior = context.with_ingredients(&turn.ingredients).to_wire();
        if let Some(id) = &turn.recipe_id {
            prior.push_str(&format!("\nThe user is looking at recipe ID {}.", id));
        }

        let request = ChatRequest {
            messages: render_chat_messages(&prior, message),
            max_tokens: Some(self.generation.max_tokens),
            temperature: Some(self.generation.temperature),
        };

        match self.ai.complete(CHAT_PROMPT_NAME, request).await {
            Ok(response) => {
                let updated = context.with_turn(message, &response.content);
                ChatOutcome::text(response.content, &updated)
            }
            Err(e) => {
                tracing::warn!(error = %e, "AI call failed");
                ChatOutcome::text(format!("An error occurred: {}", e), context)
            }
        }
    }
}
