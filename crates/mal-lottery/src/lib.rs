//! Lottery ticket drawer for Malones.
//!
//! Draws EuroMillions-style tickets: five unique main numbers from 1-50 and
//! two unique lucky stars from 1-12, each group sorted ascending. Rules are
//! configurable through [`DrawRules`], and a seeded [`DrawEngine`] gives
//! reproducible draws.

pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod rules;
pub mod ticket;

pub use config::DrawConfig;
pub use draw::{draw_ticket, draw_ticket_with, draw_unique};
pub use engine::DrawEngine;
pub use error::{LotteryError, LotteryResult};
pub use rules::{BallSet, DrawRules};
pub use ticket::Ticket;
