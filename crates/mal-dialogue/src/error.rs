//! Error types for the dialogue game.

use thiserror::Error;

/// Result type for dialogue operations.
pub type DialogueResult<T> = Result<T, DialogueError>;

/// Errors that can occur while building or playing a dialogue.
#[derive(Debug, Error)]
pub enum DialogueError {
    /// A script must have at least one question.
    #[error("script has no questions")]
    EmptyScript,

    /// Input that is neither yes nor no.
    #[error("unrecognized answer: {0:?} (answer yes or no)")]
    UnrecognizedAnswer(String),

    /// A script file could not be parsed.
    #[error("invalid script: {0}")]
    InvalidScript(#[from] serde_json::Error),
}
