//! Dialogue session management.

use tracing::debug;

use crate::answer::Answer;
use crate::script::Script;

/// One player's walk through a script.
///
/// Each session owns its cursor, so sessions never share progress. A yes
/// answer does not end or reset the session: further calls keep working
/// from wherever the cursor is.
#[derive(Debug, Clone)]
pub struct DialogueSession {
    script: Script,
    cursor: usize,
}

/// Start a fresh session on Malone's script.
pub fn create_session() -> DialogueSession {
    DialogueSession::new(Script::malones())
}

impl DialogueSession {
    /// Create a session positioned at the first question of `script`.
    pub fn new(script: Script) -> Self {
        Self { script, cursor: 0 }
    }

    /// The script being walked.
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Index of the current question.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor is on the final question.
    pub fn is_at_last_question(&self) -> bool {
        self.cursor == self.script.last_index()
    }

    /// The current question.
    pub fn start(&self) -> &str {
        self.current_question()
    }

    /// The reply to a yes, whatever the current question.
    pub fn answer_yes(&self) -> &str {
        self.script.yes_reply()
    }

    /// Move to the next question and return it, or return the final reply
    /// if already on the last question. The cursor never passes the last
    /// question.
    pub fn answer_no(&mut self) -> &str {
        if self.is_at_last_question() {
            return self.script.no_reply();
        }
        self.cursor += 1;
        debug!(cursor = self.cursor, "advanced to next question");
        self.current_question()
    }

    /// Dispatch an [`Answer`] to [`answer_yes`](Self::answer_yes) or
    /// [`answer_no`](Self::answer_no).
    pub fn respond(&mut self, answer: Answer) -> &str {
        match answer {
            Answer::Yes => self.answer_yes(),
            Answer::No => self.answer_no(),
        }
    }

    // A script always has a question and `answer_no` never moves past the
    // last one, so the cursor is in bounds.
    fn current_question(&self) -> &str {
        &self.script.questions()[self.cursor]
    }
}

impl Default for DialogueSession {
    fn default() -> Self {
        create_session()
    }
}
