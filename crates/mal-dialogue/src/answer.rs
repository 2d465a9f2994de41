use crate::error::{DialogueError, DialogueResult};

/// A player's answer to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Yes.
    Yes,
    /// No.
    No,
}

impl Answer {
    /// Parse `y`, `yes`, `n` or `no`, ignoring case and surrounding space.
    pub fn parse(input: &str) -> DialogueResult<Self> {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => Ok(Self::Yes),
            "n" | "no" => Ok(Self::No),
            _ => Err(DialogueError::UnrecognizedAnswer(input.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
        }
    }
}
