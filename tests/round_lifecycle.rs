use duo_pong::platform::{InputBuffer, Key, Platform, PlatformEvent};
use duo_pong::renderer::Scene;
use duo_pong::sim::{RoundPhase, Side};
use duo_pong::{FrameDriver, FrameOutcome, GameConfig};
use glam::Vec2;

/// Windowless platform: input is scripted, rendered scenes are recorded
#[derive(Default)]
struct ScriptedPlatform {
    input: InputBuffer,
    scenes: Vec<Scene>,
}

impl ScriptedPlatform {
    fn tap(&mut self, key: Key) {
        self.input.key_down(key, false);
        self.input.key_up(key);
    }

    fn last_status(&self) -> Option<&'static str> {
        self.scenes.last().and_then(|scene| scene.status)
    }
}

impl Platform for ScriptedPlatform {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.input.poll_event()
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.input.is_key_pressed(key)
    }

    fn render(&mut self, scene: &Scene) {
        self.scenes.push(scene.clone());
    }
}

#[test]
fn test_full_round_and_restart() {
    let config = GameConfig::default();
    let home_y = config.field_height / 2.0;
    let center = config.field_center();
    let mut driver = FrameDriver::new(config, 42);
    let mut platform = ScriptedPlatform::default();

    driver.run_frame(&mut platform);
    assert_eq!(platform.last_status(), Some("Press Space to start"));

    platform.tap(Key::Space);
    driver.run_frame(&mut platform);
    assert_eq!(driver.state().phase, RoundPhase::Playing);
    assert_eq!(platform.last_status(), None);

    // Send the ball straight at the left goal and pull the left paddle away
    {
        let state = driver.state_mut();
        state.ball.pos = Vec2::new(300.0, home_y);
        state.ball.direction = Vec2::new(-1.0, 0.0);
    }
    platform.input.key_down(Key::W, false);

    let mut frames = 0;
    while driver.state().phase == RoundPhase::Playing && frames < 200 {
        assert_eq!(driver.run_frame(&mut platform), FrameOutcome::Continue);
        frames += 1;
    }

    assert_eq!(
        driver.state().phase,
        RoundPhase::GameOver {
            winner: Side::Right
        }
    );
    assert_eq!(frames, 49);
    assert_eq!(driver.state().left.pos.y, 60.0);
    assert_eq!(
        platform.last_status(),
        Some("Right player wins! Press Space to restart")
    );

    // Frozen until Space, even with W still held
    let frozen = driver.state().clone();
    driver.run_frame(&mut platform);
    assert_eq!(driver.state().left.pos, frozen.left.pos);
    assert_eq!(driver.state().ball.pos, frozen.ball.pos);

    platform.input.key_up(Key::W);
    platform.tap(Key::Space);
    driver.run_frame(&mut platform);
    assert_eq!(driver.state().phase, RoundPhase::Idle);
    assert_eq!(driver.state().left.pos, Vec2::new(0.0, home_y));
    assert_eq!(driver.state().ball.pos, center);
    assert_eq!(platform.last_status(), Some("Press Space to start"));

    platform.tap(Key::Space);
    driver.run_frame(&mut platform);
    assert_eq!(driver.state().phase, RoundPhase::Playing);
}

#[test]
fn test_close_stops_before_tick() {
    let mut driver = FrameDriver::new(GameConfig::default(), 5);
    let mut platform = ScriptedPlatform::default();
    platform.tap(Key::Space);
    driver.run_frame(&mut platform);

    let before = driver.state().ball.pos;
    let rendered = platform.scenes.len();
    platform.input.push(PlatformEvent::Closed);

    assert_eq!(driver.run_frame(&mut platform), FrameOutcome::Quit);
    assert_eq!(driver.state().ball.pos, before);
    assert_eq!(platform.scenes.len(), rendered);
}

#[test]
fn test_same_seed_same_game() {
    let script = |driver: &mut FrameDriver| {
        let mut platform = ScriptedPlatform::default();
        platform.tap(Key::Space);
        platform.input.key_down(Key::Down, false);
        for frame in 0..120 {
            if frame == 30 {
                platform.input.key_down(Key::S, false);
            }
            driver.run_frame(&mut platform);
        }
        platform.scenes
    };

    let mut a = FrameDriver::new(GameConfig::default(), 99);
    let mut b = FrameDriver::new(GameConfig::default(), 99);
    assert_eq!(script(&mut a), script(&mut b));
    assert_eq!(a.state().ball, b.state().ball);
    assert_eq!(a.state().phase, b.state().phase);
}

#[test]
fn test_one_scene_per_frame_in_every_phase() {
    let mut driver = FrameDriver::new(GameConfig::default(), 11);
    let mut platform = ScriptedPlatform::default();

    for frame in 0..300 {
        if frame % 100 == 50 {
            platform.tap(Key::Space);
        }
        driver.run_frame(&mut platform);
        assert_eq!(platform.scenes.len(), frame + 1);
    }
}
