//! Input handling for Cubecraft.
//!
//! Tracks raw keyboard and mouse state from winit events and condenses it
//! into one [`FrameInput`](cubecraft_core::FrameInput) per frame.
//!
//! # Core Types
//!
//! - [`InputManager`]: Main entry point combining keyboard, mouse, and bindings
//! - [`KeyboardState`]: Tracks keyboard key states
//! - [`MouseState`]: Tracks mouse buttons, raw motion, and scroll
//! - [`KeyBindings`]: Maps keys to movement directions and session commands
//!
//! # Usage
//!
//! ```ignore
//! let mut input = InputManager::new();
//!
//! // In the event handlers
//! input.process_window_event(&window_event);
//! input.process_device_event(&device_event);
//!
//! // Once per frame, before updating the session
//! let frame_input = input.poll();
//! let outcome = session.update(&frame_input, dt);
//! ```

mod bindings;
mod button_state;
mod input;
mod keyboard;
mod mouse;

pub use bindings::{KeyAction, KeyBindings, KeyBindingsBuilder, MoveDirection};
pub use button_state::ButtonState;
pub use input::InputManager;
pub use keyboard::KeyboardState;
pub use mouse::{MouseButton, MouseEvent, MouseState};

// Re-export winit types commonly used with input
pub use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
pub use winit::keyboard::KeyCode;
