//! Duo Pong - two players, one ball, one round
//!
//! Core modules:
//! - `sim`: Deterministic round simulation (motion, collisions, round state)
//! - `driver`: Fixed-rate frame driver tying input, simulation and rendering
//! - `platform`: Windowing/input collaborator contract
//! - `renderer`: WebGPU shape renderer
//! - `config`: Field dimensions and speeds

pub mod config;
pub mod driver;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use driver::{FrameDriver, FrameLimiter, FrameOutcome};

/// Game configuration defaults
pub mod consts {
    use glam::Vec2;

    /// Field dimensions (the source window size)
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Frame cap; one simulation tick per frame
    pub const FRAME_RATE: u32 = 60;

    /// Paddle displacement per tick (pixels)
    pub const PADDLE_SPEED: f32 = 10.0;
    /// Ball displacement per tick (pixels)
    pub const BALL_SPEED: f32 = 6.0;

    /// Paddle size before aspect scaling
    pub const PADDLE_BASE_SIZE: Vec2 = Vec2::new(20.0, 80.0);
    /// Ball radius before aspect scaling
    pub const BALL_BASE_RADIUS: f32 = 8.0;
    /// Circle tessellation for the ball
    pub const BALL_SEGMENTS: u32 = 15;

    /// Vertical bias applied to the random serve direction
    pub const SERVE_VERTICAL_BIAS: f32 = 0.5;
}
