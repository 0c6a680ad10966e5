//! Input manager combining keyboard, mouse, and key bindings.

use cubecraft_core::control::{FrameInput, InputEvent};
use tracing::trace;
use winit::event::{DeviceEvent, WindowEvent};

use crate::bindings::KeyBindings;
use crate::keyboard::KeyboardState;
use crate::mouse::{MouseButton, MouseEvent, MouseState};

/// Input manager combining keyboard, mouse, and key bindings.
///
/// Feed it window and device events as they arrive, then call
/// [`poll`](Self::poll) once per frame.
#[derive(Debug, Default)]
pub struct InputManager {
    /// Keyboard input state.
    keyboard: KeyboardState,
    /// Mouse input state.
    mouse: MouseState,
    /// Key bindings.
    bindings: KeyBindings,
}

impl InputManager {
    /// Create a new input manager with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new input manager with custom bindings.
    #[must_use]
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            keyboard: KeyboardState::new(),
            mouse: MouseState::new(),
            bindings,
        }
    }

    /// Get a reference to the keyboard state.
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Get a mutable reference to the keyboard state.
    pub fn keyboard_mut(&mut self) -> &mut KeyboardState {
        &mut self.keyboard
    }

    /// Get a reference to the mouse state.
    #[must_use]
    pub const fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    /// Get a mutable reference to the mouse state.
    pub fn mouse_mut(&mut self) -> &mut MouseState {
        &mut self.mouse
    }

    /// Get a mutable reference to the bindings for runtime rebinding.
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Process a window event.
    ///
    /// Returns `true` if the event was consumed.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_key_event(event);
                true
            }
            WindowEvent::MouseInput { button, state, .. } => {
                self.mouse.process_button(*button, *state);
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.mouse.process_scroll(*delta);
                true
            }
            WindowEvent::Focused(false) => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Process a device event (raw mouse motion for mouse look).
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.mouse.add_raw_motion(delta.0, delta.1);
        }
    }

    /// Collect this frame's input and advance to the next frame.
    ///
    /// Left and right clicks become primary and secondary actions, and
    /// wheel steps become palette scrolls, all in the order they arrived.
    pub fn poll(&mut self) -> FrameInput {
        let events: Vec<InputEvent> = self
            .mouse
            .events()
            .iter()
            .filter_map(|event| match *event {
                MouseEvent::Click(MouseButton::Left) => Some(InputEvent::PrimaryAction),
                MouseEvent::Click(MouseButton::Right) => Some(InputEvent::SecondaryAction),
                MouseEvent::Click(MouseButton::Middle) => None,
                MouseEvent::Scroll(steps) => Some(InputEvent::ScrollPalette(steps)),
            })
            .collect();

        let commands = self
            .keyboard
            .pressed_this_frame()
            .iter()
            .filter_map(|key| self.bindings.command(*key))
            .collect();

        let keyboard = &self.keyboard;
        let movement = self.bindings.movement(|key| keyboard.is_down(key));

        let frame = FrameInput {
            events,
            commands,
            movement,
            look_delta: self.mouse.raw_delta(),
        };
        trace!(?frame, "Polled input");

        self.end_frame();
        frame
    }

    /// Reset per-frame state without producing a frame.
    pub fn end_frame(&mut self) {
        self.keyboard.end_frame();
        self.mouse.end_frame();
    }

    /// Clear all input state.
    pub fn clear(&mut self) {
        self.keyboard.clear();
        self.mouse.clear();
    }
}
