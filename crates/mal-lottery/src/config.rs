//! Configuration for a draw engine.

use crate::rules::DrawRules;

/// Configuration for a [`DrawEngine`](crate::DrawEngine).
#[derive(Debug, Clone, Default)]
pub struct DrawConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// The ball sets to draw.
    pub rules: DrawRules,
}

impl DrawConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the draw rules.
    pub fn with_rules(mut self, rules: DrawRules) -> Self {
        self.rules = rules;
        self
    }
}
