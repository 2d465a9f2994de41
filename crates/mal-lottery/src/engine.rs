//! A reusable draw engine with its own random source.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::DrawConfig;
use crate::draw::draw_ticket_with;
use crate::rules::DrawRules;
use crate::ticket::Ticket;

/// Draws tickets from an owned RNG, seeded or from OS entropy.
#[derive(Debug, Clone)]
pub struct DrawEngine {
    rules: DrawRules,
    rng: StdRng,
}

impl DrawEngine {
    /// Create an engine from a configuration.
    pub fn new(config: DrawConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rules: config.rules,
            rng,
        }
    }

    /// The rules this engine draws with.
    pub fn rules(&self) -> &DrawRules {
        &self.rules
    }

    /// Draw one ticket.
    pub fn draw(&mut self) -> Ticket {
        draw_ticket_with(&mut self.rng, &self.rules)
    }

    /// Draw `count` tickets.
    pub fn draw_many(&mut self, count: usize) -> Vec<Ticket> {
        (0..count).map(|_| self.draw()).collect()
    }
}

impl Default for DrawEngine {
    fn default() -> Self {
        Self::new(DrawConfig::default())
    }
}
