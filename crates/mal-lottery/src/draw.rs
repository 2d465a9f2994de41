//! Rejection-sampled drawing of unique balls.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, trace};

use crate::rules::{BallSet, DrawRules};
use crate::ticket::Ticket;

/// Draw `set.count()` unique balls from `1..=set.max()`, ascending.
///
/// Each candidate is drawn uniformly from the full range and rejected if it
/// was already chosen.
pub fn draw_unique<R: Rng + ?Sized>(rng: &mut R, set: BallSet) -> Vec<u32> {
    let mut chosen = BTreeSet::new();
    while chosen.len() < set.count() as usize {
        let ball = rng.random_range(1..=set.max());
        if !chosen.insert(ball) {
            trace!(ball, "rejected duplicate ball");
        }
    }
    chosen.into_iter().collect()
}

/// Draw a ticket with the given RNG and rules.
pub fn draw_ticket_with<R: Rng + ?Sized>(rng: &mut R, rules: &DrawRules) -> Ticket {
    let main = draw_unique(rng, rules.main);
    let stars = draw_unique(rng, rules.stars);
    let ticket = Ticket::new(main, stars);
    debug!(%ticket, "drew ticket");
    ticket
}

/// Draw a EuroMillions ticket from the thread-local random source.
pub fn draw_ticket() -> Ticket {
    draw_ticket_with(&mut rand::rng(), &DrawRules::euro_millions())
}
