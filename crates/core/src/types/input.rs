//! Per-frame input snapshot
//!
//! Hosts collect raw key and pointer events between ticks and hand the app a
//! `FrameInput` describing only what happened during the last tick. Apps
//! never see raw key-down/key-up state transitions.

use super::geometry::Vec2;
use super::key::Key;
use std::collections::HashSet;

/// Input delivered to one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position in watch-face units
    pub mouse_pos: Vec2,
    /// Primary button went down during this tick
    pub click: bool,
    /// Keys that went down during this tick
    pub just_pressed: HashSet<Key>,
    /// Keys currently held
    pub held: HashSet<Key>,
    /// Text entered since the previous tick
    pub typed_text: String,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Did `key` go down this tick
    pub fn jpressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Edge-triggered lookup by key name; unmapped names are never pressed
    pub fn jpressed_name(&self, name: &str) -> bool {
        Key::from_name(name).is_some_and(|key| self.jpressed(key))
    }

    /// Is `key` held down
    pub fn pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn with_typed(mut self, text: impl Into<String>) -> Self {
        self.typed_text.push_str(&text.into());
        self
    }

    /// Mark `key` as pressed this tick (and held)
    pub fn with_key(mut self, key: Key) -> Self {
        self.just_pressed.insert(key);
        self.held.insert(key);
        self
    }

    pub fn with_click(mut self) -> Self {
        self.click = true;
        self
    }

    pub fn with_mouse(mut self, position: Vec2) -> Self {
        self.mouse_pos = position;
        self
    }
}

/// Host-side accumulator of raw events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pending: FrameInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        // Auto-repeat arrives as repeated key-downs while held
        if self.pending.held.insert(key) {
            self.pending.just_pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.pending.held.remove(&key);
    }

    /// Hosts without key-up events report each key as a tap
    pub fn key_tap(&mut self, key: Key) {
        self.pending.just_pressed.insert(key);
    }

    pub fn text(&mut self, text: &str) {
        self.pending.typed_text.push_str(text);
    }

    pub fn mouse_move(&mut self, position: Vec2) {
        self.pending.mouse_pos = position;
    }

    pub fn mouse_down(&mut self) {
        self.pending.click = true;
    }

    /// Take the snapshot for the next frame
    ///
    /// Edge-triggered state (just-pressed keys, click, typed text) is consumed;
    /// held keys and the pointer position carry over.
    pub fn take_frame(&mut self) -> FrameInput {
        let frame = self.pending.clone();
        self.pending.just_pressed.clear();
        self.pending.click = false;
        self.pending.typed_text.clear();
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_state_consumed_once() {
        let mut state = InputState::new();
        state.key_down(Key::Enter);
        state.text("ls");
        state.mouse_down();

        let first = state.take_frame();
        assert!(first.jpressed(Key::Enter));
        assert!(first.click);
        assert_eq!(first.typed_text, "ls");

        let second = state.take_frame();
        assert!(!second.jpressed(Key::Enter));
        assert!(second.pressed(Key::Enter));
        assert!(!second.click);
        assert!(second.typed_text.is_empty());
    }

    #[test]
    fn test_repeat_while_held_is_not_an_edge() {
        let mut state = InputState::new();
        state.key_down(Key::Up);
        state.take_frame();
        state.key_down(Key::Up);
        assert!(!state.take_frame().jpressed(Key::Up));

        state.key_up(Key::Up);
        state.key_down(Key::Up);
        assert!(state.take_frame().jpressed(Key::Up));
    }

    #[test]
    fn test_key_tap_and_pointer_carry_over() {
        let mut state = InputState::new();
        state.key_tap(Key::Backspace);
        state.mouse_move(Vec2::new(3.0, 4.0));
        let first = state.take_frame();
        assert!(first.jpressed(Key::Backspace));
        assert!(!first.pressed(Key::Backspace));
        assert_eq!(state.take_frame().mouse_pos, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_jpressed_by_name() {
        let input = FrameInput::new().with_key(Key::PageDown);
        assert!(input.jpressed_name("page_down"));
        assert!(!input.jpressed_name("enter"));
        assert!(!input.jpressed_name("no_such_key"));
    }
}
