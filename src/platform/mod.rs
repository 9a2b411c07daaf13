//! Platform abstraction layer
//!
//! The windowing/input/rendering collaborator the frame driver talks to.
//! Native (winit) and browser (web-sys) frontends both implement
//! [`Platform`], usually by wrapping an [`InputBuffer`] fed from their own
//! event callbacks.

use std::collections::{HashSet, VecDeque};

use crate::renderer::Scene;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Space,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "KeyW" => Some(Key::W),
            "KeyS" => Some(Key::S),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "Space" => Some(Key::Space),
            _ => None,
        }
    }
}

/// Discrete events delivered between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Window closed; the loop stops before the next tick
    Closed,
    /// A key went down (auto-repeat excluded)
    KeyPressed(Key),
}

/// What the frame driver needs from the outside world
pub trait Platform {
    /// Next pending event, without blocking
    fn poll_event(&mut self) -> Option<PlatformEvent>;

    /// Whether `key` is currently held down
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Clear, draw the scene, present
    fn render(&mut self, scene: &Scene);
}

/// Event queue plus held-key state, filled from window callbacks
#[derive(Debug, Default)]
pub struct InputBuffer {
    events: VecDeque<PlatformEvent>,
    held: HashSet<Key>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down; repeats only refresh the held state
    pub fn key_down(&mut self, key: Key, repeat: bool) {
        self.held.insert(key);
        if !repeat {
            self.events.push_back(PlatformEvent::KeyPressed(key));
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Forget held keys, e.g. when focus is lost and releases won't arrive
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn push(&mut self, event: PlatformEvent) {
        self.events.push_back(event);
    }

    pub fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.events.pop_front()
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_come_out_in_order() {
        let mut input = InputBuffer::new();
        input.key_down(Key::Space, false);
        input.push(PlatformEvent::Closed);

        assert_eq!(input.poll_event(), Some(PlatformEvent::KeyPressed(Key::Space)));
        assert_eq!(input.poll_event(), Some(PlatformEvent::Closed));
        assert_eq!(input.poll_event(), None);
    }

    #[test]
    fn test_repeat_does_not_enqueue() {
        let mut input = InputBuffer::new();
        input.key_down(Key::W, false);
        input.key_down(Key::W, true);
        input.key_down(Key::W, true);

        assert_eq!(input.poll_event(), Some(PlatformEvent::KeyPressed(Key::W)));
        assert_eq!(input.poll_event(), None);
        assert!(input.is_key_pressed(Key::W));
    }

    #[test]
    fn test_held_state_tracks_release() {
        let mut input = InputBuffer::new();
        input.key_down(Key::Up, false);
        input.key_down(Key::S, false);
        input.key_up(Key::Up);

        assert!(!input.is_key_pressed(Key::Up));
        assert!(input.is_key_pressed(Key::S));

        input.release_all();
        assert!(!input.is_key_pressed(Key::S));
    }

    #[test]
    fn test_dom_codes() {
        assert_eq!(Key::from_code("KeyW"), Some(Key::W));
        assert_eq!(Key::from_code("ArrowDown"), Some(Key::Down));
        assert_eq!(Key::from_code("Space"), Some(Key::Space));
        assert_eq!(Key::from_code("KeyQ"), None);
    }
}
