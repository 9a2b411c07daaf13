//! Frame driver
//!
//! One frame is: drain platform events, read held keys, tick the round once,
//! render once. [`FrameLimiter`] decides when the next frame is due.

use crate::config::GameConfig;
use crate::platform::{Key, Platform, PlatformEvent};
use crate::renderer::Scene;
use crate::sim::{GameState, TickInput, tick};

/// Whether the loop should keep going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Owns the game state and steps it one frame at a time
#[derive(Debug, Clone)]
pub struct FrameDriver {
    state: GameState,
}

impl FrameDriver {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            state: GameState::new(config, seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted setups (replays, tests)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Run one frame against `platform`
    pub fn run_frame<P: Platform>(&mut self, platform: &mut P) -> FrameOutcome {
        let mut start = false;
        while let Some(event) = platform.poll_event() {
            match event {
                PlatformEvent::Closed => return FrameOutcome::Quit,
                PlatformEvent::KeyPressed(Key::Space) => start = true,
                PlatformEvent::KeyPressed(_) => {}
            }
        }

        let input = TickInput {
            start,
            left_up: platform.is_key_pressed(Key::W),
            left_down: platform.is_key_pressed(Key::S),
            right_up: platform.is_key_pressed(Key::Up),
            right_down: platform.is_key_pressed(Key::Down),
        };
        tick(&mut self.state, &input);

        platform.render(&Scene::from_state(&self.state));
        FrameOutcome::Continue
    }
}

/// Fixed-rate frame pacing against a caller-supplied clock (seconds)
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval: f64,
    next_due: Option<f64>,
}

impl FrameLimiter {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            interval: 1.0 / frame_rate.max(1) as f64,
            next_due: None,
        }
    }

    /// Whether a frame should run at `now`; advances the deadline if so
    pub fn poll(&mut self, now: f64) -> bool {
        match self.next_due {
            Some(due) if now < due => false,
            Some(due) => {
                let next = due + self.interval;
                // Fell behind by more than a frame: resync instead of bursting
                self.next_due = Some(if next <= now { now + self.interval } else { next });
                true
            }
            None => {
                self.next_due = Some(now + self.interval);
                true
            }
        }
    }

    /// When the next frame is due, once the first frame has run
    pub fn next_deadline(&self) -> Option<f64> {
        self.next_due
    }
}
