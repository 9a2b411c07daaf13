//! Game state and core simulation types
//!
//! Everything a round needs lives in [`GameState`]; the frame driver owns the
//! single instance and hands it to [`tick`](super::tick) by `&mut`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry::{Aabb, normalize};
use crate::config::GameConfig;
use crate::consts::SERVE_VERTICAL_BIAS;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for Space; instructions shown, nothing moves
    Idle,
    /// Simulation running
    Playing,
    /// Someone missed; entities frozen until Space
    GameOver { winner: Side },
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Center of the rectangle
    pub pos: Vec2,
    pub half_extents: Vec2,
    /// Where the paddle starts and returns to on restart
    pub home: Vec2,
}

impl Paddle {
    pub fn new(home: Vec2, half_extents: Vec2) -> Self {
        Self {
            pos: home,
            half_extents,
            home,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.half_extents)
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.half_extents.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.half_extents.y
    }

    pub fn reset(&mut self) {
        self.pos = self.home;
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center of the circle
    pub pos: Vec2,
    pub radius: f32,
    /// Unit direction while playing, zero until served
    pub direction: Vec2,
    /// Distance travelled per tick
    pub speed: f32,
    /// Serve position (field center)
    pub home: Vec2,
}

impl Ball {
    pub fn new(home: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos: home,
            radius,
            direction: Vec2::ZERO,
            speed,
            home,
        }
    }

    /// Bounding box of the circle
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.radius))
    }

    pub fn is_served(&self) -> bool {
        self.direction != Vec2::ZERO
    }

    /// Back to the center with no direction
    pub fn reset(&mut self) {
        self.pos = self.home;
        self.direction = Vec2::ZERO;
    }
}

/// Complete round state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// RNG seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: RoundPhase,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    /// Playing ticks elapsed in the current round
    pub round_ticks: u64,
}

impl GameState {
    /// Create an idle game with both paddles and the ball at home
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let half_extents = config.paddle_half_extents();
        let mid_y = config.field_height / 2.0;
        let left = Paddle::new(Vec2::new(0.0, mid_y), half_extents);
        let right = Paddle::new(Vec2::new(config.field_width, mid_y), half_extents);
        let ball = Ball::new(config.field_center(), config.ball_radius(), config.ball_speed);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: RoundPhase::Idle,
            left,
            right,
            ball,
            round_ticks: 0,
            config,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Draw a serve direction: both components uniform in [-1, 1], the
    /// vertical one halved to favour flatter trajectories
    pub fn random_serve_direction(&mut self) -> Vec2 {
        let dx: f32 = self.rng.random_range(-1.0..=1.0);
        let dy: f32 = self.rng.random_range(-1.0..=1.0) * SERVE_VERTICAL_BIAS;
        normalize(Vec2::new(dx, dy))
    }

    /// Text shown over the field, if any
    pub fn status_text(&self) -> Option<&'static str> {
        match self.phase {
            RoundPhase::Idle => Some("Press Space to start"),
            RoundPhase::Playing => None,
            RoundPhase::GameOver { winner: Side::Left } => {
                Some("Left player wins! Press Space to restart")
            }
            RoundPhase::GameOver { winner: Side::Right } => {
                Some("Right player wins! Press Space to restart")
            }
        }
    }
}
