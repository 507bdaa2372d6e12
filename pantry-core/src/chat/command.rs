//! Classification of incoming chat messages.

use crate::error::ChoiceError;
use crate::types::RecipeId;

const NEW_RECIPES: &str = "i want new recipes";
const ONLY_WHAT_I_HAVE: &str = "i only want recipes with ingredients i have";
const CHOOSE_PREFIX: &str = "choose_recipe_";
const SERVINGS_SEPARATOR: &str = "__SERVINGS_";

/// A recipe picked from the candidate cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeChoice {
    pub recipe_id: RecipeId,
    pub servings: u32,
}

/// What a chat message asks for. Classified once, then matched exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// "I want new recipes": a fresh random batch.
    RequestNew,
    /// "I only want recipes with ingredients I have".
    StrictFilter,
    /// `CHOOSE_RECIPE_<id>__SERVINGS_<n>`.
    ChooseRecipe(RecipeChoice),
    /// Starts like a choose command but does not follow the pattern.
    InvalidChoice(ChoiceError),
    /// Anything else goes to the language model.
    FreeText(String),
}

impl Command {
    /// The two phrase commands match case-insensitively on the whole message.
    pub fn parse(message: &str) -> Self {
        let message = message.trim();
        let lower = message.to_lowercase();

        if lower == NEW_RECIPES {
            Command::RequestNew
        } else if lower == ONLY_WHAT_I_HAVE {
            Command::StrictFilter
        } else if lower.starts_with(CHOOSE_PREFIX) {
            match parse_choice(message) {
                Ok(choice) => Command::ChooseRecipe(choice),
                Err(e) => Command::InvalidChoice(e),
            }
        } else {
            Command::FreeText(message.to_string())
        }
    }
}

/// The id is the token after the last `_` before the first separator.
/// Servings come from the piece after it; any later pieces are ignored.
fn parse_choice(message: &str) -> Result<RecipeChoice, ChoiceError> {
    let mut pieces = message.split(SERVINGS_SEPARATOR);
    let left = pieces.next().unwrap_or_default();
    let servings = pieces.next().ok_or(ChoiceError::MissingSeparator)?;

    let recipe_id = left.rsplit('_').next().unwrap_or_default().trim();
    if recipe_id.is_empty() {
        return Err(ChoiceError::MissingId);
    }

    let servings = servings
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ChoiceError::InvalidServings(servings.to_string()))?;

    Ok(RecipeChoice {
        recipe_id: RecipeId::from(recipe_id),
        servings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_commands_ignore_case_and_whitespace() {
        assert_eq!(Command::parse("I want new recipes"), Command::RequestNew);
        assert_eq!(Command::parse("  i WANT new RECIPES "), Command::RequestNew);
        assert_eq!(
            Command::parse("I only want recipes with ingredients I have"),
            Command::StrictFilter
        );
    }

    #[test]
    fn test_phrase_commands_need_exact_text() {
        assert_eq!(
            Command::parse("I want new recipes please"),
            Command::FreeText("I want new recipes please".to_string())
        );
    }

    #[test]
    fn test_choose_recipe() {
        assert_eq!(
            Command::parse("CHOOSE_RECIPE_12345__SERVINGS_4"),
            Command::ChooseRecipe(RecipeChoice {
                recipe_id: RecipeId::from("12345"),
                servings: 4,
            })
        );
    }

    #[test]
    fn test_choose_recipe_prefix_is_case_insensitive() {
        assert_eq!(
            Command::parse("choose_recipe_777__SERVINGS_2"),
            Command::ChooseRecipe(RecipeChoice {
                recipe_id: RecipeId::from("777"),
                servings: 2,
            })
        );
    }

    #[test]
    fn test_choose_recipe_invalid() {
        assert_eq!(
            Command::parse("choose_recipe_bad"),
            Command::InvalidChoice(ChoiceError::MissingSeparator)
        );
        assert_eq!(
            Command::parse("CHOOSE_RECIPE___SERVINGS_4"),
            Command::InvalidChoice(ChoiceError::MissingId)
        );
        assert_eq!(
            Command::parse("CHOOSE_RECIPE_12__SERVINGS_four"),
            Command::InvalidChoice(ChoiceError::InvalidServings("four".to_string()))
        );
        assert_eq!(
            Command::parse("CHOOSE_RECIPE_12__SERVINGS_0"),
            Command::InvalidChoice(ChoiceError::InvalidServings("0".to_string()))
        );
    }

    #[test]
    fn test_choose_recipe_repeated_separator_uses_first_servings() {
        assert_eq!(
            Command::parse("CHOOSE_RECIPE_5__SERVINGS_2__SERVINGS_3"),
            Command::ChooseRecipe(RecipeChoice {
                recipe_id: RecipeId::from("5"),
                servings: 2,
            })
        );
    }

    #[test]
    fn test_free_text_is_trimmed() {
        assert_eq!(
            Command::parse("  how long do I bake it? "),
            Command::FreeText("how long do I bake it?".to_string())
        );
    }
}
