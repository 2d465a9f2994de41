//! Malone's conversational game.
//!
//! A session walks a fixed [`Script`] of yes/no questions. Answering yes
//! always gets the same invitation; answering no moves on to the next
//! question until the last one, where no gets a final, different
//! invitation. Either way you end up in Malones.

/// Yes/no answers.
pub mod answer;
/// Error types for the dialogue game.
pub mod error;
/// Questions and replies.
pub mod script;
/// Dialogue session state.
pub mod session;

pub use answer::Answer;
pub use error::{DialogueError, DialogueResult};
pub use script::Script;
pub use session::{DialogueSession, create_session};
