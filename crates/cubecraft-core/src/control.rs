//! Abstract input consumed by the session each frame.
//!
//! The input layer translates raw device events into these types; the
//! player crate never sees window-system events directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Discrete event that can mutate the world or the palette selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Remove the targeted block.
    PrimaryAction,
    /// Place a block against the targeted block.
    SecondaryAction,
    /// Move the palette selection by the given number of entries.
    ScrollPalette(i32),
}

/// Session-level command triggered by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Release the captured cursor.
    ReleaseCursor,
    /// Exit the session (only honored while the cursor is released).
    Quit,
    /// Return the camera to its spawn pose.
    ResetCamera,
    /// Log a snapshot of the session state.
    DebugDump,
}

/// Held movement keys for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Movement {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Movement {
    /// Returns `true` if no movement key is held
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        !(self.forward || self.back || self.left || self.right || self.up || self.down)
    }
}

/// Everything the input layer collected for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Discrete events in arrival order.
    pub events: Vec<InputEvent>,
    /// Commands whose key was pressed this frame.
    pub commands: Vec<Command>,
    /// Held movement keys.
    pub movement: Movement,
    /// Relative pointer motion since the previous frame.
    pub look_delta: Vec2,
}

impl FrameInput {
    /// Frame input carrying only the given events
    #[must_use]
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Frame input carrying only the given commands
    #[must_use]
    pub fn with_commands(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            ..Self::default()
        }
    }
}
