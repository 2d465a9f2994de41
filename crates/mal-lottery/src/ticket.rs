//! Drawn tickets.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{LotteryError, LotteryResult};
use crate::rules::{BallSet, DrawRules};

/// The result of one draw: sorted main numbers followed by sorted stars.
///
/// Every ticket satisfies the rules it was drawn or checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    main: Vec<u32>,
    stars: Vec<u32>,
}

impl Ticket {
    /// Build a ticket from two groups already drawn under some rules,
    /// sorting each ascending.
    pub(crate) fn new(mut main: Vec<u32>, mut stars: Vec<u32>) -> Self {
        main.sort_unstable();
        stars.sort_unstable();
        Self { main, stars }
    }

    /// Build a ticket from hand-picked numbers, checking both groups
    /// against `rules`.
    pub fn try_new(main: Vec<u32>, stars: Vec<u32>, rules: &DrawRules) -> LotteryResult<Self> {
        check_group("main numbers", &main, rules.main)?;
        check_group("stars", &stars, rules.stars)?;
        Ok(Self::new(main, stars))
    }

    /// The main numbers, ascending.
    pub fn main(&self) -> &[u32] {
        &self.main
    }

    /// The lucky stars, ascending.
    pub fn stars(&self) -> &[u32] {
        &self.stars
    }

    /// All numbers in ticket order: main numbers, then stars.
    pub fn numbers(&self) -> Vec<u32> {
        self.main.iter().chain(&self.stars).copied().collect()
    }

    /// Total number of balls on the ticket.
    pub fn len(&self) -> usize {
        self.main.len() + self.stars.len()
    }

    /// Returns true if the ticket holds no balls.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn check_group(name: &str, values: &[u32], set: BallSet) -> LotteryResult<()> {
    if values.len() != set.count() as usize {
        return Err(LotteryError::InvalidTicket(format!(
            "expected {} {name}, got {}",
            set.count(),
            values.len()
        )));
    }
    if let Some(v) = values.iter().find(|&&v| !set.contains(v)) {
        return Err(LotteryError::InvalidTicket(format!(
            "{name} value {v} is outside 1-{}",
            set.max()
        )));
    }
    let unique: BTreeSet<_> = values.iter().collect();
    if unique.len() != values.len() {
        return Err(LotteryError::InvalidTicket(format!(
            "{name} contain duplicates"
        )));
    }
    Ok(())
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |values: &[u32]| {
            values
                .iter()
                .map(|v| format!("{v:02}"))
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(f, "{} | {}", join(&self.main), join(&self.stars))
    }
}
