//! User-facing text built from provider records.

use crate::types::{RecipeDetail, RecipeSummary, DEFAULT_SERVINGS};

const NO_MACROS: &str = "No macro data found.";
const NO_INSTRUCTIONS: &str = "No instructions found.";

/// The four nutrients shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Macro {
    Calories,
    Carbohydrates,
    Fat,
    Protein,
}

impl Macro {
    fn from_nutrient_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "calories" => Some(Macro::Calories),
            "carbohydrates" => Some(Macro::Carbohydrates),
            "fat" => Some(Macro::Fat),
            "protein" => Some(Macro::Protein),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Calories/Carbs/Fat/Protein block, "N/A" for any that are absent.
///
/// Duplicate nutrient names overwrite earlier ones.
pub fn build_macros_info(detail: &RecipeDetail) -> String {
    let mut values: [Option<String>; 4] = Default::default();

    let nutrients = detail
        .nutrition
        .as_ref()
        .map(|n| n.nutrients.as_slice())
        .unwrap_or_default();
    for nutrient in nutrients {
        if let Some(m) = Macro::from_nutrient_name(&nutrient.name) {
            // Debug keeps the decimal point on whole amounts ("9.0 g").
            values[m.index()] = Some(format!("{:?} {}", nutrient.amount, nutrient.unit));
        }
    }

    if values.iter().all(Option::is_none) {
        return NO_MACROS.to_string();
    }

    let show = |m: Macro| values[m.index()].as_deref().unwrap_or("N/A");
    format!(
        "Calories: {}\nCarbs: {}\nFat: {}\nProtein: {}",
        show(Macro::Calories),
        show(Macro::Carbohydrates),
        show(Macro::Fat),
        show(Macro::Protein)
    )
}

fn title(detail: &RecipeDetail) -> String {
    detail
        .title
        .clone()
        .unwrap_or_else(|| "Recipe".to_string())
}

fn ingredient_lines(detail: &RecipeDetail) -> Vec<String> {
    detail
        .extended_ingredients
        .iter()
        .map(|i| i.original.clone())
        .collect()
}

/// Numbered steps if the provider analyzed them, else the flat text.
fn instructions(detail: &RecipeDetail) -> String {
    if let Some(first) = detail.analyzed_instructions.first() {
        return first
            .steps
            .iter()
            .map(|s| format!("{}. {}", s.number, s.step))
            .collect::<Vec<_>>()
            .join("\n");
    }

    match detail.instructions.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NO_INSTRUCTIONS.to_string(),
    }
}

/// The "see more" card.
pub fn build_short_info(detail: &RecipeDetail) -> RecipeSummary {
    RecipeSummary {
        title: title(detail),
        servings: detail.servings.unwrap_or(DEFAULT_SERVINGS),
        ingredients: ingredient_lines(detail),
        macros: build_macros_info(detail),
    }
}

/// Full chat message for a chosen recipe.
pub fn recipe_details_message(detail: &RecipeDetail) -> String {
    format!(
        "**{title}** (for {servings} servings)\n\n\
         **Ingredients:**\n{ingredients}\n\n\
         **Instructions:**\n{instructions}\n\n\
         **Macros:**\n{macros}\n\n\
         Feel free to ask more questions or choose another recipe.",
        title = title(detail),
        servings = detail.servings.unwrap_or(DEFAULT_SERVINGS),
        ingredients = ingredient_lines(detail).join("\n"),
        instructions = instructions(detail),
        macros = build_macros_info(detail),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AnalyzedInstruction, ExtendedIngredient, InstructionStep, Nutrient, Nutrition,
    };

    fn nutrient(name: &str, amount: f64, unit: &str) -> Nutrient {
        Nutrient {
            name: name.to_string(),
            amount,
            unit: unit.to_string(),
        }
    }

    fn pancakes() -> RecipeDetail {
        RecipeDetail {
            title: Some("Pancakes".to_string()),
            servings: Some(4),
            extended_ingredients: vec![
                ExtendedIngredient {
                    original: "2 cups flour".to_string(),
                },
                ExtendedIngredient {
                    original: "2 eggs".to_string(),
                },
            ],
            analyzed_instructions: vec![AnalyzedInstruction {
                steps: vec![
                    InstructionStep {
                        number: 1,
                        step: "Whisk everything.".to_string(),
                    },
                    InstructionStep {
                        number: 2,
                        step: "Fry in a hot pan.".to_string(),
                    },
                ],
            }],
            instructions: Some("Mix and fry.".to_string()),
            nutrition: Some(Nutrition {
                nutrients: vec![
                    nutrient("Calories", 316.5, "kcal"),
                    nutrient("Fat", 9.0, "g"),
                    nutrient("Saturated Fat", 3.0, "g"),
                    nutrient("Carbohydrates", 45.25, "g"),
                    nutrient("Protein", 11.0, "g"),
                ],
            }),
        }
    }

    #[test]
    fn test_macros_all_present() {
        assert_eq!(
            build_macros_info(&pancakes()),
            "Calories: 316.5 kcal\nCarbs: 45.25 g\nFat: 9.0 g\nProtein: 11.0 g"
        );
    }

    #[test]
    fn test_macros_case_insensitive_and_last_wins() {
        let detail = RecipeDetail {
            nutrition: Some(Nutrition {
                nutrients: vec![
                    nutrient("PROTEIN", 5.0, "g"),
                    nutrient("protein", 7.0, "g"),
                ],
            }),
            ..Default::default()
        };
        assert_eq!(
            build_macros_info(&detail),
            "Calories: N/A\nCarbs: N/A\nFat: N/A\nProtein: 7.0 g"
        );
    }

    #[test]
    fn test_macros_keep_float_text() {
        let detail = RecipeDetail {
            nutrition: Some(Nutrition {
                nutrients: vec![nutrient("Fat", 9.0, "g"), nutrient("Calories", 0.5, "kcal")],
            }),
            ..Default::default()
        };
        let macros = build_macros_info(&detail);
        assert!(macros.contains("Fat: 9.0 g"));
        assert!(macros.contains("Calories: 0.5 kcal"));
    }

    #[test]
    fn test_macros_missing() {
        assert_eq!(build_macros_info(&RecipeDetail::default()), NO_MACROS);
    }

    #[test]
    fn test_short_info() {
        let summary = build_short_info(&pancakes());
        assert_eq!(summary.title, "Pancakes");
        assert_eq!(summary.servings, 4);
        assert_eq!(summary.ingredients, vec!["2 cups flour", "2 eggs"]);
        assert!(summary.macros.starts_with("Calories: 316.5 kcal"));
    }

    #[test]
    fn test_short_info_defaults() {
        let summary = build_short_info(&RecipeDetail::default());
        assert_eq!(summary.title, "Recipe");
        assert_eq!(summary.servings, 2);
        assert!(summary.ingredients.is_empty());
    }

    #[test]
    fn test_details_prefers_numbered_steps() {
        let msg = recipe_details_message(&pancakes());
        assert!(msg.starts_with("**Pancakes** (for 4 servings)"));
        assert!(msg.contains("**Ingredients:**\n2 cups flour\n2 eggs\n\n"));
        assert!(msg.contains("**Instructions:**\n1. Whisk everything.\n2. Fry in a hot pan.\n\n"));
        assert!(!msg.contains("Mix and fry."));
        assert!(msg.ends_with("Feel free to ask more questions or choose another recipe."));
    }

    #[test]
    fn test_details_falls_back_to_flat_instructions() {
        let detail = RecipeDetail {
            analyzed_instructions: vec![],
            ..pancakes()
        };
        assert!(recipe_details_message(&detail).contains("**Instructions:**\nMix and fry.\n"));

        let detail = RecipeDetail {
            analyzed_instructions: vec![],
            instructions: None,
            ..pancakes()
        };
        assert!(recipe_details_message(&detail).contains(NO_INSTRUCTIONS));
    }
}
