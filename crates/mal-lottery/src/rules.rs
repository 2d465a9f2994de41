//! Ball sets and draw rules.

use crate::error::{LotteryError, LotteryResult};

/// A group of unique balls drawn from `1..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallSet {
    count: u32,
    max: u32,
}

impl BallSet {
    /// Create a ball set drawing `count` unique balls from `1..=max`.
    ///
    /// Fails unless `1 <= count <= max`, since rejection sampling could
    /// never finish otherwise.
    pub fn new(count: u32, max: u32) -> LotteryResult<Self> {
        if count == 0 || count > max {
            return Err(LotteryError::InvalidBallSet { count, max });
        }
        Ok(Self { count, max })
    }

    /// Number of balls drawn.
    pub fn count(self) -> u32 {
        self.count
    }

    /// Highest ball value.
    pub fn max(self) -> u32 {
        self.max
    }

    /// Whether `value` is a ball this set can produce.
    pub fn contains(self, value: u32) -> bool {
        (1..=self.max).contains(&value)
    }
}

impl std::fmt::Display for BallSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of 1-{}", self.count, self.max)
    }
}

/// The two ball sets making up a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRules {
    /// The main numbers.
    pub main: BallSet,
    /// The lucky stars.
    pub stars: BallSet,
}

impl DrawRules {
    /// Create rules from two ball sets.
    pub fn new(main: BallSet, stars: BallSet) -> Self {
        Self { main, stars }
    }

    /// EuroMillions: 5 main numbers from 1-50 and 2 lucky stars from 1-12.
    pub fn euro_millions() -> Self {
        Self {
            main: BallSet { count: 5, max: 50 },
            stars: BallSet { count: 2, max: 12 },
        }
    }
}

impl Default for DrawRules {
    fn default() -> Self {
        Self::euro_millions()
    }
}
