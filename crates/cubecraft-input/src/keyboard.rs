//! Keyboard input state tracking.

use hashbrown::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::button_state::ButtonState;

/// Keyboard input state.
///
/// Tracks held keys and the keys pressed during the current frame.
#[derive(Debug, Default)]
pub struct KeyboardState {
    /// State of individual keys by key code.
    keys: HashMap<KeyCode, ButtonState>,
    /// Keys that went down this frame, in arrival order.
    pressed: Vec<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a key event. Auto-repeat events are ignored.
    pub fn process_key_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        if event.repeat {
            return;
        }

        match event.state {
            ElementState::Pressed => self.press(key_code),
            ElementState::Released => self.release(key_code),
        }
    }

    /// Record a key press.
    pub fn press(&mut self, key: KeyCode) {
        let state = self.keys.entry(key).or_default();
        if !state.is_down() {
            state.press();
            self.pressed.push(key);
        }
    }

    /// Record a key release.
    pub fn release(&mut self, key: KeyCode) {
        if let Some(state) = self.keys.get_mut(&key) {
            state.release();
        }
    }

    /// Returns `true` if the key is currently held.
    #[must_use]
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|s| s.is_down())
    }

    /// Returns `true` if the key was pressed this frame.
    #[must_use]
    pub fn is_just_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|s| s.is_just_pressed())
    }

    /// Keys pressed this frame, in arrival order.
    #[must_use]
    pub fn pressed_this_frame(&self) -> &[KeyCode] {
        &self.pressed
    }

    /// Called at end of frame to reset per-frame transitions.
    pub fn end_frame(&mut self) {
        for state in self.keys.values_mut() {
            state.end_frame();
        }
        self.pressed.clear();
    }

    /// Clear all key states.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.pressed.clear();
    }
}
