//! Backend-agnostic description of one frame

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::BALL_SEGMENTS;
use crate::sim::GameState;

/// What to draw this frame, in field coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Field width and height
    pub field_size: Vec2,
    pub paddles: [(Vec2, Vec2); 2],
    pub ball_center: Vec2,
    pub ball_radius: f32,
    /// Instructions or winner, shown by the platform however it can
    pub status: Option<&'static str>,
}

impl Scene {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            field_size: Vec2::new(state.config.field_width, state.config.field_height),
            paddles: [
                (state.left.pos, state.left.half_extents),
                (state.right.pos, state.right.half_extents),
            ],
            ball_center: state.ball.pos,
            ball_radius: state.ball.radius,
            status: state.status_text(),
        }
    }

    /// Triangle list: field backdrop, both paddles, then the ball
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(18 + BALL_SEGMENTS as usize * 3);
        vertices.extend(shapes::rect(
            self.field_size / 2.0,
            self.field_size / 2.0,
            colors::FIELD,
        ));
        for (center, half_extents) in self.paddles {
            vertices.extend(shapes::rect(center, half_extents, colors::PADDLE));
        }
        vertices.extend(shapes::circle(
            self.ball_center,
            self.ball_radius,
            colors::BALL,
            BALL_SEGMENTS,
        ));
        vertices
    }
}
