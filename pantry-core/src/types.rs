//! Records exchanged with the recipe provider and the browser.
//!
//! Provider records keep every field they do not interpret in `extra`, so a
//! candidate relayed to the client is the provider's record plus our edits.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use utoipa::ToSchema;

/// Servings used when the caller does not ask for a specific count.
pub const DEFAULT_SERVINGS: u32 = 2;

/// Dietary flags chosen by the user. A missing flag means no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub dairy_free: bool,
    #[serde(default)]
    pub nut_free: bool,
}

impl Preferences {
    /// Provider `intolerances` values implied by these flags, in a stable order.
    pub fn intolerances(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.gluten_free {
            out.push("gluten");
        }
        if self.dairy_free {
            out.push("dairy");
        }
        if self.nut_free {
            out.push("peanut");
            out.push("tree nut");
        }
        out
    }

    /// Provider `diet` value, if any.
    pub fn diet(&self) -> Option<&'static str> {
        self.vegan.then_some("vegan")
    }
}

/// Provider recipe identifier.
///
/// Browsers send it either as a JSON number or as a string; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub struct RecipeId(pub String);

impl RecipeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => RecipeId(n.to_string()),
            Raw::Text(s) => RecipeId(s.trim().to_string()),
        })
    }
}

/// An ingredient the recipe needs but the user did not list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissedIngredient {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MissedIngredient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// A search result from the recipe provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCandidate {
    pub id: Value,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub missed_ingredients: Vec<MissedIngredient>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fully hydrated recipe from the provider's information endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    #[serde(default)]
    pub analyzed_instructions: Vec<AnalyzedInstruction>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedIngredient {
    /// Human-readable line with the amount scaled to the requested servings.
    #[serde(default)]
    pub original: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedInstruction {
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionStep {
    pub number: u32,
    pub step: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

/// Short "see more" card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSummary {
    pub title: String,
    pub servings: u32,
    pub ingredients: Vec<String>,
    /// Four-line Calories/Carbs/Fat/Protein block.
    pub macros: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_id_accepts_number_and_string() {
        let a: RecipeId = serde_json::from_str("12345").unwrap();
        let b: RecipeId = serde_json::from_str("\"12345\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "12345");
    }

    #[test]
    fn test_preferences_camel_case_and_defaults() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"glutenFree": true, "nutFree": true}"#).unwrap();
        assert!(!prefs.vegan);
        assert_eq!(prefs.intolerances(), vec!["gluten", "peanut", "tree nut"]);
        assert_eq!(prefs.diet(), None);
    }

    #[test]
    fn test_candidate_keeps_unknown_fields() {
        let json = r#"{
            "id": 716429,
            "title": "Pasta with Garlic",
            "image": "https://img.example/716429.jpg",
            "missedIngredients": [{"name": "cheese", "amount": 1.0}]
        }"#;
        let candidate: RecipeCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.missed_ingredients[0].name, "cheese");

        let back = serde_json::to_value(&candidate).unwrap();
        assert_eq!(back["image"], "https://img.example/716429.jpg");
        assert_eq!(back["missedIngredients"][0]["amount"], 1.0);
    }
}
