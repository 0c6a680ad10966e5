//! Key bindings for movement and session commands.

use cubecraft_core::control::{Command, Movement};
use hashbrown::HashMap;
use winit::keyboard::KeyCode;

/// Direction of camera movement bound to a held key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl MoveDirection {
    /// Set the matching flag on `movement`.
    fn apply(self, movement: &mut Movement) {
        match self {
            Self::Forward => movement.forward = true,
            Self::Back => movement.back = true,
            Self::Left => movement.left = true,
            Self::Right => movement.right = true,
            Self::Up => movement.up = true,
            Self::Down => movement.down = true,
        }
    }
}

/// What a key does when bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Moves the camera while held.
    Move(MoveDirection),
    /// Triggers a command once per press.
    Command(Command),
}

impl From<MoveDirection> for KeyAction {
    fn from(direction: MoveDirection) -> Self {
        Self::Move(direction)
    }
}

impl From<Command> for KeyAction {
    fn from(command: Command) -> Self {
        Self::Command(command)
    }
}

/// Maps keys to movement directions and session commands.
///
/// A key has at most one action; several keys may share an action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: HashMap<KeyCode, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::builder()
            .bind(KeyCode::KeyW, MoveDirection::Forward)
            .bind(KeyCode::KeyS, MoveDirection::Back)
            .bind(KeyCode::KeyA, MoveDirection::Left)
            .bind(KeyCode::KeyD, MoveDirection::Right)
            .bind(KeyCode::Space, MoveDirection::Up)
            .bind(KeyCode::ShiftLeft, MoveDirection::Down)
            .bind(KeyCode::Escape, Command::ReleaseCursor)
            .bind(KeyCode::KeyQ, Command::Quit)
            .bind(KeyCode::KeyR, Command::ResetCamera)
            .bind(KeyCode::KeyP, Command::DebugDump)
            .build()
    }
}

impl KeyBindings {
    /// Bindings with no keys bound.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    /// Create bindings with a builder pattern.
    #[must_use]
    pub fn builder() -> KeyBindingsBuilder {
        KeyBindingsBuilder::new()
    }

    /// Bind a key, replacing any previous action for it.
    pub fn bind(&mut self, key: KeyCode, action: impl Into<KeyAction>) {
        self.keys.insert(key, action.into());
    }

    /// Remove the binding for a key.
    pub fn unbind(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    /// Action bound to `key`, if any.
    #[must_use]
    pub fn action(&self, key: KeyCode) -> Option<KeyAction> {
        self.keys.get(&key).copied()
    }

    /// Command bound to `key`, if any.
    #[must_use]
    pub fn command(&self, key: KeyCode) -> Option<Command> {
        match self.action(key)? {
            KeyAction::Command(command) => Some(command),
            KeyAction::Move(_) => None,
        }
    }

    /// Movement flags for the keys reported as held by `is_down`.
    pub fn movement(&self, is_down: impl Fn(KeyCode) -> bool) -> Movement {
        let mut movement = Movement::default();
        for (key, action) in &self.keys {
            if let KeyAction::Move(direction) = action {
                if is_down(*key) {
                    direction.apply(&mut movement);
                }
            }
        }
        movement
    }
}

/// Builder for key bindings with a fluent API.
#[derive(Debug)]
pub struct KeyBindingsBuilder {
    bindings: KeyBindings,
}

impl KeyBindingsBuilder {
    /// Create a new builder with no keys bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: KeyBindings::empty(),
        }
    }

    /// Bind a key.
    #[must_use]
    pub fn bind(mut self, key: KeyCode, action: impl Into<KeyAction>) -> Self {
        self.bindings.bind(key, action);
        self
    }

    /// Build the bindings.
    #[must_use]
    pub fn build(self) -> KeyBindings {
        self.bindings
    }
}

impl Default for KeyBindingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
