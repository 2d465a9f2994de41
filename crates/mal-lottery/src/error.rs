//! Error types for the lottery drawer.

/// Errors that can occur when configuring a draw.
#[derive(Debug, thiserror::Error)]
pub enum LotteryError {
    /// A ball set asks for more unique balls than its range holds, or none.
    #[error("invalid ball set: cannot draw {count} unique balls from 1-{max}")]
    InvalidBallSet {
        /// Requested number of balls.
        count: u32,
        /// Highest ball value.
        max: u32,
    },

    /// A ticket group does not satisfy its ball set.
    #[error("invalid ticket: {0}")]
    InvalidTicket(String),
}

/// Convenience result type for lottery operations.
pub type LotteryResult<T> = Result<T, LotteryError>;
