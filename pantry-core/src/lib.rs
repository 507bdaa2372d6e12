pub mod ai;
pub mod chat;
pub mod error;
pub mod format;
pub mod normalize;
pub mod recipes;
pub mod types;

pub use chat::{ChatOutcome, ChatTurn, Command, ConversationContext, Dispatcher};
pub use error::{ChoiceError, ConfigError, RecipeApiError};
pub use format::{build_macros_info, build_short_info, recipe_details_message};
pub use normalize::{refine_missing_ingredients, singularize};
pub use recipes::{
    search_recipes, FakeRecipeProvider, RecipeProvider, RecipesConfig, SearchQuery, SortOrder,
    SpoonacularClient,
};
pub use types::{
    AnalyzedInstruction, ExtendedIngredient, InstructionStep, MissedIngredient, Nutrient,
    Nutrition, Preferences, RecipeCandidate, RecipeDetail, RecipeId, RecipeSummary,
};
