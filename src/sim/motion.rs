//! Paddle and ball movement

use glam::Vec2;

use super::geometry::normalize;
use super::state::{Ball, Paddle};

/// Move a paddle one step along `direction` (any nonzero length)
///
/// The step is rejected outright when it would push the paddle past the top
/// or bottom of the field, so a paddle at the wall stops short instead of
/// sliding flush. Only the vertical component is applied. Returns whether
/// the paddle moved.
pub fn move_paddle(paddle: &mut Paddle, direction: Vec2, speed: f32, field_height: f32) -> bool {
    let movement = normalize(direction) * speed;
    let new_y = paddle.pos.y + movement.y;

    if new_y - paddle.half_extents.y >= 0.0 && new_y + paddle.half_extents.y <= field_height {
        paddle.pos.y = new_y;
        true
    } else {
        false
    }
}

/// Advance the ball one tick; bounds are the resolver's job
#[inline]
pub fn advance_ball(ball: &mut Ball) {
    ball.pos += ball.direction * ball.speed;
}
