//! Mouse input state tracking.

use glam::Vec2;
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta};

use crate::button_state::ButtonState;

/// Pixels of trackpad scroll that count as one wheel line.
const PIXELS_PER_LINE: f32 = 100.0;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl TryFrom<WinitMouseButton> for MouseButton {
    type Error = ();

    fn try_from(button: WinitMouseButton) -> Result<Self, Self::Error> {
        match button {
            WinitMouseButton::Left => Ok(Self::Left),
            WinitMouseButton::Right => Ok(Self::Right),
            WinitMouseButton::Middle => Ok(Self::Middle),
            _ => Err(()),
        }
    }
}

/// Discrete mouse input recorded during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    /// A button went down.
    Click(MouseButton),
    /// Whole wheel steps; positive scrolls up.
    Scroll(i32),
}

/// Mouse input state.
///
/// Tracks button states, clicks and scroll steps in arrival order, raw
/// motion, and the fractional scroll not yet turned into a step.
#[derive(Debug, Default)]
pub struct MouseState {
    /// Button states, indexed by [`MouseButton`].
    buttons: [ButtonState; 3],
    /// Clicks and scroll steps this frame, in arrival order.
    events: Vec<MouseEvent>,
    /// Raw mouse motion delta since the last frame.
    raw_delta: Vec2,
    /// Vertical scroll in lines not yet turned into whole steps.
    scroll_lines: f32,
}

impl MouseState {
    /// Create a new mouse state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process raw mouse motion (device motion, ignoring cursor position).
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_raw_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.raw_delta.x += delta_x as f32;
        self.raw_delta.y += delta_y as f32;
    }

    /// Process a winit mouse button event.
    pub fn process_button(&mut self, button: WinitMouseButton, state: ElementState) {
        let Ok(button) = MouseButton::try_from(button) else {
            return;
        };

        match state {
            ElementState::Pressed => self.press(button),
            ElementState::Released => self.release(button),
        }
    }

    /// Record a button press.
    pub fn press(&mut self, button: MouseButton) {
        let state = &mut self.buttons[button as usize];
        let was_down = state.is_down();
        state.press();
        if !was_down {
            self.events.push(MouseEvent::Click(button));
        }
    }

    /// Record a button release.
    pub fn release(&mut self, button: MouseButton) {
        self.buttons[button as usize].release();
    }

    /// Process scroll wheel event.
    ///
    /// Whole steps are recorded right away so they keep their place among
    /// this frame's clicks. The fractional remainder carries over to later
    /// events. Non-finite deltas are dropped.
    #[allow(clippy::cast_possible_truncation)]
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
        };
        if !lines.is_finite() {
            return;
        }

        self.scroll_lines += lines;
        let whole = self.scroll_lines.trunc();
        self.scroll_lines -= whole;
        let steps = whole as i32;
        if steps == 0 {
            return;
        }

        match self.events.last_mut() {
            Some(MouseEvent::Scroll(pending)) => {
                *pending = pending.saturating_add(steps);
                if *pending == 0 {
                    self.events.pop();
                }
            }
            _ => self.events.push(MouseEvent::Scroll(steps)),
        }
    }

    /// Get raw mouse motion delta.
    #[must_use]
    pub const fn raw_delta(&self) -> Vec2 {
        self.raw_delta
    }

    /// Clicks and scroll steps this frame, in arrival order.
    #[must_use]
    pub fn events(&self) -> &[MouseEvent] {
        &self.events
    }

    /// Returns `true` if the button is currently held.
    #[must_use]
    pub const fn is_down(&self, button: MouseButton) -> bool {
        self.buttons[button as usize].is_down()
    }

    /// Returns `true` if the button was pressed this frame.
    #[must_use]
    pub const fn is_just_pressed(&self, button: MouseButton) -> bool {
        self.buttons[button as usize].is_just_pressed()
    }

    /// Called at end of frame to reset per-frame state.
    pub fn end_frame(&mut self) {
        for button in &mut self.buttons {
            button.end_frame();
        }
        self.events.clear();
        self.raw_delta = Vec2::ZERO;
    }

    /// Clear all mouse state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
