//! Conversation handling for the chat endpoint.
//!
//! There is no server-side session. The caller sends the transcript back on
//! every turn; [`ConversationContext`] gives it structure while it is in our
//! hands and [`Dispatcher`] decides what a message asks for.

mod command;
mod context;
mod dispatcher;

pub use command::{Command, RecipeChoice};
pub use context::{ContextEntry, ConversationContext};
pub use dispatcher::{replies, ChatOutcome, ChatTurn, Dispatcher};
