//! Caller-held conversation transcript.
//!
//! On the wire the context is one opaque string the browser sends back each
//! turn. Inside a request it is a list of entries that is only ever appended
//! to, and rendered back to a string at the edge. The incoming string is
//! never parsed; it is kept verbatim as the first entry.

/// Marker line preceding the details of a chosen recipe.
pub const CHOSEN_RECIPE_MARKER: &str = "CHOSEN_RECIPE_DETAILS:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextEntry {
    /// Transcript received from the caller.
    Prior(String),
    /// The ingredient list the user is cooking with.
    Ingredients(Vec<String>),
    /// One completed free-text exchange.
    Turn { user: String, assistant: String },
    /// Long-form details of a recipe the user picked.
    ChosenRecipe(String),
}

impl ContextEntry {
    fn render(&self, out: &mut String) {
        match self {
            ContextEntry::Prior(text) => out.push_str(text),
            ContextEntry::Ingredients(items) if items.is_empty() => {
                out.push_str("\nIngredients: no ingredients provided")
            }
            ContextEntry::Ingredients(items) => {
                out.push_str("\nIngredients: ");
                out.push_str(&items.join(", "));
            }
            ContextEntry::Turn { user, assistant } => {
                out.push_str("\nUser: ");
                out.push_str(user);
                out.push_str("\nAssistant: ");
                out.push_str(assistant);
            }
            ContextEntry::ChosenRecipe(details) => {
                out.push('\n');
                out.push_str(CHOSEN_RECIPE_MARKER);
                out.push('\n');
                out.push_str(details);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationContext {
    entries: Vec<ContextEntry>,
}

impl ConversationContext {
    /// Wrap the string the caller sent back.
    pub fn from_wire(context: &str) -> Self {
        let entries = if context.is_empty() {
            Vec::new()
        } else {
            vec![ContextEntry::Prior(context.to_string())]
        };
        Self { entries }
    }

    /// Render back into the string the caller keeps.
    pub fn to_wire(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            entry.render(&mut out);
        }
        out
    }

    pub fn entries(&self) -> &[ContextEntry] {
        &self.entries
    }

    pub fn push(&mut self, entry: ContextEntry) {
        self.entries.push(entry);
    }

    /// A copy with the ingredient line appended.
    pub fn with_ingredients(&self, ingredients: &[String]) -> Self {
        let mut next = self.clone();
        next.push(ContextEntry::Ingredients(ingredients.to_vec()));
        next
    }

    /// A copy with one exchange appended.
    pub fn with_turn(&self, user: &str, assistant: &str) -> Self {
        let mut next = self.clone();
        next.push(ContextEntry::Turn {
            user: user.to_string(),
            assistant: assistant.to_string(),
        });
        next
    }

    /// A copy with a chosen recipe's details appended.
    pub fn with_chosen_recipe(&self, details: &str) -> Self {
        let mut next = self.clone();
        next.push(ContextEntry::ChosenRecipe(details.to_string()));
        next
    }
}
