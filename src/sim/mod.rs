//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the `dt` passed to `Match::step`
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
mod phase;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{collide_borders, deflect_off_paddle, goal_scorer, resolve_collisions};
pub use rect::Rect;
pub use state::{Ball, GameEvent, Match, MatchPhase, MatchState, Paddle, Side};
pub use tick::{TickInput, move_paddle};
