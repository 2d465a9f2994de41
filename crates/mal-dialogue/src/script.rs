//! The questions and replies a session walks through.

use serde::{Deserialize, Serialize};

use crate::error::{DialogueError, DialogueResult};

/// An ordered list of questions plus the two closing replies.
///
/// A script always holds at least one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Script {
    questions: Vec<String>,
    yes_reply: String,
    no_reply: String,
}

/// Unvalidated on-disk form of a [`Script`].
#[derive(Deserialize)]
struct RawScript {
    questions: Vec<String>,
    yes_reply: String,
    no_reply: String,
}

impl Script {
    /// Create a script, rejecting an empty question list.
    pub fn new(
        questions: Vec<String>,
        yes_reply: impl Into<String>,
        no_reply: impl Into<String>,
    ) -> DialogueResult<Self> {
        if questions.is_empty() {
            return Err(DialogueError::EmptyScript);
        }
        Ok(Self {
            questions,
            yes_reply: yes_reply.into(),
            no_reply: no_reply.into(),
        })
    }

    /// Malone's own script.
    pub fn malones() -> Self {
        Self {
            questions: [
                "Should you come into Malones?",
                "Are you Irish?",
                "Do you want to be?",
                "Well, do you like music",
                "Pizza?",
                "Ice cream?",
                "Awesome service?",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            yes_reply: "Well then come in so!".to_string(),
            no_reply: "Maybe a pint will cheer you up ya miserable git! Come in!".to_string(),
        }
    }

    /// Parse a script from JSON with `questions`, `yes_reply` and `no_reply`.
    pub fn from_json(json: &str) -> DialogueResult<Self> {
        let raw: RawScript = serde_json::from_str(json)?;
        Self::new(raw.questions, raw.yes_reply, raw.no_reply)
    }

    /// All questions in order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Index of the final question.
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    /// The reply to any yes.
    pub fn yes_reply(&self) -> &str {
        &self.yes_reply
    }

    /// The reply to a no on the final question.
    pub fn no_reply(&self) -> &str {
        &self.no_reply
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::malones()
    }
}
