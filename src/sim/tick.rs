//! Per-frame simulation tick
//!
//! Drives the round through Idle -> Playing -> GameOver -> Idle and runs
//! motion and collision while Playing.

use glam::Vec2;

use super::collision::{Contact, resolve_contacts};
use super::motion::{advance_ball, move_paddle};
use super::state::{GameState, RoundPhase, Side};

const DOWN: Vec2 = Vec2::new(0.0, 1.0);
const UP: Vec2 = Vec2::new(0.0, -1.0);

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Space was pressed this frame (start, or restart after game over)
    pub start: bool,
    /// W held
    pub left_up: bool,
    /// S held
    pub left_down: bool,
    /// Up arrow held
    pub right_up: bool,
    /// Down arrow held
    pub right_down: bool,
}

/// Advance the game by one frame
///
/// Returns the contacts resolved this tick, or `None` when the simulation
/// didn't run (idle, or game over).
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<Contact> {
    match state.phase {
        RoundPhase::GameOver { .. } => {
            if input.start {
                restart_round(state);
            }
            return None;
        }
        RoundPhase::Idle => {
            if !input.start {
                return None;
            }
            start_round(state);
        }
        RoundPhase::Playing => {}
    }

    apply_paddle_input(state, input);
    advance_ball(&mut state.ball);
    state.round_ticks += 1;

    let contact = resolve_contacts(state);
    if contact.wall_bounce {
        log::debug!("Wall bounce at {}", state.ball.pos);
    }
    if let Some(side) = contact.paddle_bounce {
        log::debug!("{} paddle bounce at {}", side.label(), state.ball.pos);
    }
    if let Some(winner) = contact.miss {
        end_round(state, winner);
    }

    Some(contact)
}

/// Move paddles for held keys; each key is an independent attempt
pub fn apply_paddle_input(state: &mut GameState, input: &TickInput) {
    let speed = state.config.paddle_speed;
    let height = state.config.field_height;

    let moves = [
        (input.left_down, Side::Left, DOWN),
        (input.left_up, Side::Left, UP),
        (input.right_down, Side::Right, DOWN),
        (input.right_up, Side::Right, UP),
    ];
    for (held, side, direction) in moves {
        if held {
            move_paddle(state.paddle_mut(side), direction, speed, height);
        }
    }
}

/// Idle -> Playing: serve the ball in a random direction
fn start_round(state: &mut GameState) {
    let direction = state.random_serve_direction();
    state.ball.direction = direction;
    state.round_ticks = 0;
    state.phase = RoundPhase::Playing;
    log::info!("Round started, serve direction {direction}");
}

/// Playing -> GameOver: freeze everything where it is
fn end_round(state: &mut GameState, winner: Side) {
    state.phase = RoundPhase::GameOver { winner };
    log::info!(
        "{} player wins after {} ticks",
        winner.label(),
        state.round_ticks
    );
}

/// GameOver -> Idle: paddles home, ball back to center and unserved
fn restart_round(state: &mut GameState) {
    state.left.reset();
    state.right.reset();
    state.ball.reset();
    state.round_ticks = 0;
    state.phase = RoundPhase::Idle;
    log::info!("Round reset");
}
