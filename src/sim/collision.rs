//! Collision detection and response
//!
//! Contacts are tested with bounding boxes, not exact circle geometry: the
//! ball's square hull against each paddle's rectangle.

use super::state::{Ball, GameState, Paddle, Side};

/// What the resolver found this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    /// Top or bottom wall reflected the ball
    pub wall_bounce: bool,
    /// Which paddle reflected the ball, if any
    pub paddle_bounce: Option<Side>,
    /// Set when the ball left the field; holds the winner
    pub miss: Option<Side>,
}

/// Ball touching or past the top or bottom wall
pub fn hits_horizontal_wall(ball: &Ball, field_height: f32) -> bool {
    ball.pos.y - ball.radius <= 0.0 || ball.pos.y + ball.radius >= field_height
}

/// Ball touching or past the left or right edge
pub fn past_goal_line(ball: &Ball, field_width: f32) -> bool {
    ball.pos.x - ball.radius <= 0.0 || ball.pos.x + ball.radius >= field_width
}

/// Ball bounding box overlapping the paddle's
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bounds().intersects(&paddle.bounds())
}

/// Who won, judged from where the ball was heading when it got out
///
/// Heading left means the left player missed. A ball with no horizontal
/// motion is judged by which half of the field it sits in.
pub fn winner_from_direction(ball: &Ball, field_width: f32) -> Side {
    if ball.direction.x < 0.0 {
        Side::Right
    } else if ball.direction.x > 0.0 {
        Side::Left
    } else if ball.pos.x < field_width / 2.0 {
        Side::Right
    } else {
        Side::Left
    }
}

/// Resolve wall and paddle contacts for the current ball position
///
/// Wall and paddle reflections each negate one direction component. A miss
/// is only considered when no paddle was hit, so a ball overlapping a paddle
/// while already past the edge still bounces.
pub fn resolve_contacts(state: &mut GameState) -> Contact {
    let mut contact = Contact::default();
    let field_width = state.config.field_width;
    let field_height = state.config.field_height;

    if hits_horizontal_wall(&state.ball, field_height) {
        state.ball.direction.y = -state.ball.direction.y;
        contact.wall_bounce = true;
    }

    let paddle_hit = [Side::Left, Side::Right]
        .into_iter()
        .find(|&side| ball_paddle_collision(&state.ball, state.paddle(side)));

    if let Some(side) = paddle_hit {
        state.ball.direction.x = -state.ball.direction.x;
        contact.paddle_bounce = Some(side);
    } else if past_goal_line(&state.ball, field_width) {
        contact.miss = Some(winner_from_direction(&state.ball, field_width));
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::RoundPhase;
    use glam::Vec2;

    fn playing_state(config: GameConfig) -> GameState {
        let mut state = GameState::new(config, 1);
        state.phase = RoundPhase::Playing;
        state
    }

    #[test]
    fn test_top_wall_bounce_negates_y_only() {
        let mut state = playing_state(GameConfig::default());
        state.ball.pos = Vec2::new(320.0, state.ball.radius - 1.0);
        state.ball.direction = Vec2::new(0.6, -0.8);

        let contact = resolve_contacts(&mut state);
        assert!(contact.wall_bounce);
        assert_eq!(state.ball.direction, Vec2::new(0.6, 0.8));
        assert_eq!(contact.miss, None);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = playing_state(GameConfig::default());
        state.ball.pos = Vec2::new(320.0, 481.0 - state.ball.radius);
        state.ball.direction = Vec2::new(-0.6, 0.8);

        let contact = resolve_contacts(&mut state);
        assert!(contact.wall_bounce);
        assert_eq!(state.ball.direction, Vec2::new(-0.6, -0.8));
    }

    #[test]
    fn test_no_contact_mid_field() {
        let mut state = playing_state(GameConfig::default());
        state.ball.direction = Vec2::new(1.0, 0.0);
        assert_eq!(resolve_contacts(&mut state), Contact::default());
        assert_eq!(state.ball.direction, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_left_paddle_bounce() {
        let config = GameConfig {
            field_width: 800.0,
            field_height: 600.0,
            ..Default::default()
        };
        let mut state = playing_state(config);
        state.left.pos = Vec2::new(0.0, 300.0);
        state.ball.pos = Vec2::new(state.left.half_extents.x + 5.0, 300.0);
        state.ball.direction = Vec2::new(-1.0, 0.0);

        let contact = resolve_contacts(&mut state);
        assert_eq!(contact.paddle_bounce, Some(Side::Left));
        assert_eq!(contact.miss, None);
        assert_eq!(state.ball.direction, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_paddle_bounce_beats_miss() {
        let mut state = playing_state(GameConfig::default());
        // Past the left edge and still overlapping the paddle
        state.ball.pos = Vec2::new(2.0, state.left.pos.y);
        state.ball.direction = Vec2::new(-0.8, 0.6);

        let contact = resolve_contacts(&mut state);
        assert_eq!(contact.paddle_bounce, Some(Side::Left));
        assert_eq!(contact.miss, None);
        assert_eq!(state.ball.direction, Vec2::new(0.8, 0.6));
    }

    #[test]
    fn test_miss_past_left_edge() {
        let mut state = playing_state(GameConfig::default());
        state.ball.pos = Vec2::new(3.0, 30.0);
        state.ball.direction = Vec2::new(-1.0, 0.0);
        // Keep the paddle well away from the ball
        state.left.pos.y = 400.0;

        let contact = resolve_contacts(&mut state);
        assert_eq!(contact.paddle_bounce, None);
        assert_eq!(contact.miss, Some(Side::Right));
    }

    #[test]
    fn test_miss_past_right_edge() {
        let mut state = playing_state(GameConfig::default());
        state.ball.pos = Vec2::new(638.0, 30.0);
        state.ball.direction = Vec2::new(1.0, 0.0);
        state.right.pos.y = 400.0;

        let contact = resolve_contacts(&mut state);
        assert_eq!(contact.miss, Some(Side::Left));
    }

    #[test]
    fn test_winner_from_direction() {
        let mut ball = Ball::new(Vec2::new(5.0, 100.0), 10.0, 6.0);
        ball.direction = Vec2::new(-0.2, 0.98);
        assert_eq!(winner_from_direction(&ball, 640.0), Side::Right);
        ball.direction = Vec2::new(0.2, 0.98);
        assert_eq!(winner_from_direction(&ball, 640.0), Side::Left);
        ball.direction = Vec2::new(0.0, 1.0);
        assert_eq!(winner_from_direction(&ball, 640.0), Side::Right);
    }
}
