//! Scenario harness wrapping a [`Session`].

use cubecraft_core::control::{FrameInput, InputEvent};
use cubecraft_core::coords::BlockPos;
use cubecraft_core::types::{Block, BlockKind};
use cubecraft_input::{InputManager, KeyCode, MouseButton};
use cubecraft_player::{FrameOutcome, Session, SessionConfig, TargetHit};
use cubecraft_world::World;
use glam::Vec3;
use tracing::debug;

use crate::{Result, TestError};

/// Fixed timestep used for every harness frame.
pub const HARNESS_DT: f32 = 0.01;

/// Drives a session one frame at a time.
pub struct SessionHarness {
    session: Session,
    input: InputManager,
    last: FrameOutcome,
}

impl SessionHarness {
    /// Harness around an empty world with the default configuration.
    pub fn empty() -> Result<Self> {
        Self::with_world(SessionConfig::default(), World::new())
    }

    /// Harness around the generated starting world.
    pub fn generated() -> Result<Self> {
        Ok(Self::from_session(Session::new(SessionConfig::default())?))
    }

    /// Harness around the given world and configuration.
    pub fn with_world(config: SessionConfig, world: World) -> Result<Self> {
        Ok(Self::from_session(Session::with_world(config, world)?))
    }

    fn from_session(session: Session) -> Self {
        Self {
            session,
            input: InputManager::new(),
            last: FrameOutcome::default(),
        }
    }

    /// Add a stone block at each position.
    #[must_use]
    pub fn with_blocks(mut self, positions: impl IntoIterator<Item = [i32; 3]>) -> Self {
        for p in positions {
            self.session
                .world_mut()
                .add(Block::new(BlockPos::from(p), BlockKind::Stone));
        }
        self
    }

    /// Place the camera.
    #[must_use]
    pub fn camera_at(mut self, position: Vec3) -> Self {
        self.session.camera_mut().position = position;
        self
    }

    /// Orient the camera (degrees).
    #[must_use]
    pub fn looking(mut self, pitch: f32, yaw: f32) -> Self {
        self.session.camera_mut().set_orientation(pitch, yaw);
        self
    }

    /// The wrapped session
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Outcome of the most recent frame
    pub const fn last_outcome(&self) -> &FrameOutcome {
        &self.last
    }

    /// Run one frame with the given abstract input.
    pub fn step(&mut self, input: &FrameInput) -> &FrameOutcome {
        self.last = self.session.update(input, HARNESS_DT);
        debug!(
            frame = self.session.frame(),
            mutations = self.last.mutations.len(),
            "Harness step"
        );
        &self.last
    }

    /// Run one frame carrying a single event.
    pub fn send(&mut self, event: InputEvent) -> &FrameOutcome {
        self.step(&FrameInput::with_events([event]))
    }

    /// Click a mouse button through the raw input layer and run a frame.
    pub fn click(&mut self, button: MouseButton) -> &FrameOutcome {
        self.input.mouse_mut().press(button);
        self.input.mouse_mut().release(button);
        self.step_raw()
    }

    /// Tap a key through the raw input layer and run a frame.
    pub fn tap(&mut self, key: KeyCode) -> &FrameOutcome {
        self.input.keyboard_mut().press(key);
        self.input.keyboard_mut().release(key);
        self.step_raw()
    }

    /// Run a frame from whatever raw input has been recorded.
    pub fn step_raw(&mut self) -> &FrameOutcome {
        let frame = self.input.poll();
        self.step(&frame)
    }

    /// Raw input layer, for recording held keys or motion before a frame.
    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }

    /// Current target, queried without running a frame.
    pub fn target(&self) -> Option<TargetHit> {
        self.session.target()
    }

    /// Current target, which must sit at `expected`.
    pub fn expect_target_at(&self, expected: BlockPos) -> Result<TargetHit> {
        match self.target() {
            Some(hit) if hit.block.position == expected => Ok(hit),
            Some(hit) => Err(TestError::Expectation(format!(
                "expected target at {expected}, found {} at distance {}",
                hit.block.position, hit.distance
            ))),
            None => Err(TestError::Expectation(format!(
                "expected target at {expected}, found none"
            ))),
        }
    }
}
