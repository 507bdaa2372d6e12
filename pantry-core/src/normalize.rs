//! Ingredient name normalization.
//!
//! Only used to compare what the user has against what a recipe needs. The
//! suffix rules are a rough singular form; irregular plurals are not handled.

use std::collections::HashSet;

use crate::types::RecipeCandidate;

/// Lowercase, drop non-alphanumerics, then strip one plural suffix.
///
/// `ies` -> `y`, otherwise `es` -> ``, otherwise `s` -> ``.
pub fn singularize(word: &str) -> String {
    let w: String = word
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    if w.ends_with("ies") && w.len() > 3 {
        format!("{}y", &w[..w.len() - 3])
    } else if w.ends_with("es") && w.len() > 2 {
        w[..w.len() - 2].to_string()
    } else if w.ends_with('s') && w.len() > 1 {
        w[..w.len() - 1].to_string()
    } else {
        w
    }
}

/// Remove missed ingredients the user actually listed.
///
/// Entries are only ever removed, never added or reordered.
pub fn refine_missing_ingredients(recipes: &mut [RecipeCandidate], user_ingredients: &[String]) {
    let have: HashSet<String> = user_ingredients.iter().map(|i| singularize(i)).collect();

    for recipe in recipes.iter_mut() {
        let before = recipe.missed_ingredients.len();
        recipe
            .missed_ingredients
            .retain(|ing| !have.contains(&singularize(&ing.name)));

        let removed = before - recipe.missed_ingredients.len();
        if removed > 0 {
            tracing::debug!(
                recipe = %recipe.title,
                removed,
                "dropped missed ingredients the user already has"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MissedIngredient;
    use serde_json::{json, Map};

    fn candidate(title: &str, missed: &[&str]) -> RecipeCandidate {
        RecipeCandidate {
            id: json!(1),
            title: title.to_string(),
            missed_ingredients: missed.iter().map(|n| MissedIngredient::named(*n)).collect(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("tomatoes"), "tomato");
        assert_eq!(singularize("eggs"), "egg");
        assert_eq!(singularize("milk"), "milk");
        assert_eq!(singularize("berries"), "berry");
        assert_eq!(singularize("Green Onions!"), "greenonion");
    }

    #[test]
    fn test_singularize_short_words() {
        assert_eq!(singularize("s"), "s");
        assert_eq!(singularize("es"), "e");
        assert_eq!(singularize("ies"), "i");
        assert_eq!(singularize(""), "");
    }

    #[test]
    fn test_singularize_idempotent_on_common_words() {
        for word in ["tomatoes", "eggs", "milk", "berries", "pasta"] {
            let once = singularize(word);
            assert_eq!(singularize(&once), once, "{word}");
        }
    }

    #[test]
    fn test_singularize_strips_again_after_double_s() {
        // Not idempotent once a singular form still ends in "s".
        assert_eq!(singularize("glasses"), "glass");
        assert_eq!(singularize("glass"), "glas");
    }

    #[test]
    fn test_singularize_irregular_plural_is_not_handled() {
        assert_eq!(singularize("leaves"), "leav");
        assert_eq!(singularize("mice"), "mice");
    }

    #[test]
    fn test_refine_removes_only_owned_ingredients() {
        let mut recipes = vec![
            candidate("A", &["Tomatoes", "cheese"]),
            candidate("B", &["eggs"]),
            candidate("C", &[]),
        ];
        let have = vec!["tomato".to_string(), "egg".to_string()];

        refine_missing_ingredients(&mut recipes, &have);

        let names: Vec<Vec<&str>> = recipes
            .iter()
            .map(|r| r.missed_ingredients.iter().map(|i| i.name.as_str()).collect())
            .collect();
        assert_eq!(names, vec![vec!["cheese"], vec![], vec![]]);
    }

    #[test]
    fn test_refine_never_grows_and_leaves_no_owned_item() {
        let mut recipes = vec![
            candidate("A", &["onions", "garlic", "rice"]),
            candidate("B", &["Onion", "butter"]),
        ];
        let before: Vec<usize> = recipes.iter().map(|r| r.missed_ingredients.len()).collect();
        let have = vec!["onion".to_string(), "Rice".to_string()];

        refine_missing_ingredients(&mut recipes, &have);

        let have_keys: HashSet<String> = have.iter().map(|h| singularize(h)).collect();
        for (recipe, before) in recipes.iter().zip(before) {
            assert!(recipe.missed_ingredients.len() <= before);
            assert!(recipe
                .missed_ingredients
                .iter()
                .all(|i| !have_keys.contains(&singularize(&i.name))));
        }
    }
}
