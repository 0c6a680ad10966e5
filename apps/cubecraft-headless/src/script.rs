//! Scripted input for headless runs.
//!
//! A script is a `;`-separated list of `<frame>:<action>` entries, for
//! example `2:remove;3:scroll=-1;4:place;6:key=Escape;7:key=Q`.

use std::collections::BTreeMap;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use cubecraft_input::{InputManager, KeyCode, MouseButton, MouseScrollDelta};

/// One scripted input action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptAction {
    /// Left click (remove the targeted block).
    Remove,
    /// Right click (place against the targeted block).
    Place,
    /// Scroll the wheel by whole lines; positive scrolls up.
    Scroll(i32),
    /// Raw mouse motion.
    Look(f64, f64),
    /// Press a key for one frame.
    Key(KeyCode),
}

impl FromStr for ScriptAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        let (name, arg) = match s.split_once('=') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s, None),
        };

        match (name, arg) {
            ("remove", None) => Ok(Self::Remove),
            ("place", None) => Ok(Self::Place),
            ("scroll", Some(n)) => n
                .parse()
                .map(Self::Scroll)
                .with_context(|| format!("invalid scroll amount '{n}'")),
            ("look", Some(delta)) => {
                let (dx, dy) = delta
                    .split_once(',')
                    .ok_or_else(|| anyhow!("look expects '<dx>,<dy>', got '{delta}'"))?;
                let dx = dx
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid look dx '{dx}'"))?;
                let dy = dy
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid look dy '{dy}'"))?;
                Ok(Self::Look(dx, dy))
            }
            ("key", Some(key)) => parse_key(key).map(Self::Key),
            _ => bail!("unknown action '{s}'"),
        }
    }
}

fn parse_key(name: &str) -> anyhow::Result<KeyCode> {
    let key = match name.to_ascii_lowercase().as_str() {
        "w" => KeyCode::KeyW,
        "a" => KeyCode::KeyA,
        "s" => KeyCode::KeyS,
        "d" => KeyCode::KeyD,
        "space" => KeyCode::Space,
        "shift" => KeyCode::ShiftLeft,
        "escape" | "esc" => KeyCode::Escape,
        "q" => KeyCode::KeyQ,
        "r" => KeyCode::KeyR,
        "p" => KeyCode::KeyP,
        _ => bail!("unknown key '{name}'"),
    };
    Ok(key)
}

/// Actions keyed by the frame they fire on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    frames: BTreeMap<u64, Vec<ScriptAction>>,
}

impl Script {
    /// Parse a script; an empty string yields an empty script.
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        let mut script = Self::default();

        for entry in source.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (frame, action) = entry
                .split_once(':')
                .ok_or_else(|| anyhow!("script entry '{entry}' is missing ':'"))?;
            let frame: u64 = frame
                .trim()
                .parse()
                .with_context(|| format!("invalid frame number in '{entry}'"))?;
            let action = action
                .parse()
                .with_context(|| format!("invalid script entry '{entry}'"))?;
            script.frames.entry(frame).or_default().push(action);
        }

        Ok(script)
    }

    /// Actions for `frame`, in script order.
    pub fn actions(&self, frame: u64) -> &[ScriptAction] {
        self.frames.get(&frame).map_or(&[], Vec::as_slice)
    }

    /// Last frame with an action.
    pub fn last_frame(&self) -> Option<u64> {
        self.frames.keys().next_back().copied()
    }

    /// Returns `true` if no frame has an action.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Feeds script actions into an [`InputManager`] as raw input.
///
/// Buttons and keys go down on their frame and come back up at the start
/// of the next one.
#[derive(Debug, Default)]
pub struct ScriptPlayer {
    held_buttons: Vec<MouseButton>,
    held_keys: Vec<KeyCode>,
}

impl ScriptPlayer {
    /// Create a player with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Release last frame's presses, then record `actions`.
    #[allow(clippy::cast_precision_loss)]
    pub fn apply(&mut self, input: &mut InputManager, actions: &[ScriptAction]) {
        for button in self.held_buttons.drain(..) {
            input.mouse_mut().release(button);
        }
        for key in self.held_keys.drain(..) {
            input.keyboard_mut().release(key);
        }

        for action in actions {
            match *action {
                ScriptAction::Remove => self.press_button(input, MouseButton::Left),
                ScriptAction::Place => self.press_button(input, MouseButton::Right),
                ScriptAction::Scroll(lines) => input
                    .mouse_mut()
                    .process_scroll(MouseScrollDelta::LineDelta(0.0, lines as f32)),
                ScriptAction::Look(dx, dy) => input.mouse_mut().add_raw_motion(dx, dy),
                ScriptAction::Key(key) => {
                    input.keyboard_mut().press(key);
                    self.held_keys.push(key);
                }
            }
        }
    }

    fn press_button(&mut self, input: &mut InputManager, button: MouseButton) {
        input.mouse_mut().press(button);
        self.held_buttons.push(button);
    }
}
