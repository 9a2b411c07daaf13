//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, distances in pixels per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{Contact, resolve_contacts, winner_from_direction};
pub use geometry::{Aabb, magnitude, normalize, try_normalize};
pub use motion::{advance_ball, move_paddle};
pub use state::{Ball, GameState, Paddle, RoundPhase, Side};
pub use tick::{TickInput, apply_paddle_input, tick};
