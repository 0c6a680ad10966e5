//! Per-process session state and the ordered frame update.

use std::fmt;

use cubecraft_core::control::{Command, FrameInput, InputEvent};
use cubecraft_core::error::Result;
use cubecraft_core::types::{Block, BlockKind};
use cubecraft_world::{World, WorldGenerator};
use tracing::{debug, info};

use crate::camera::{CameraController, CameraPose};
use crate::config::SessionConfig;
use crate::mutation::{Mutation, MutationController};
use crate::palette::PaletteSelection;
use crate::targeting::{TargetHit, TargetingEngine};

/// Result of one frame update, handed to the renderer and the host loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutcome {
    /// Block to outline, if any.
    pub target: Option<TargetHit>,
    /// World changes applied this frame, in order.
    pub mutations: Vec<Mutation>,
    /// The player asked to exit.
    pub quit_requested: bool,
}

/// Snapshot of the session logged by [`Command::DebugDump`].
#[derive(Debug, Clone, PartialEq)]
pub struct DebugSnapshot {
    pub camera: CameraPose,
    pub block_count: usize,
    pub first_block: Option<Block>,
    pub selected: BlockKind,
}

impl fmt::Display for DebugSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.camera.position;
        write!(
            f,
            "camera position ({:.2}, {:.2}, {:.2}), rotation (pitch {:.1}, yaw {:.1}), {} blocks, first block ",
            p.x,
            p.y,
            p.z,
            self.camera.pitch(),
            self.camera.yaw(),
            self.block_count
        )?;
        match &self.first_block {
            Some(block) => write!(f, "{}", block.position)?,
            None => f.write_str("none")?,
        }
        write!(f, ", selected {}", self.selected)
    }
}

/// Owns the world, camera, and palette selection for one run.
///
/// All mutable state lives here and is passed explicitly; the host loop
/// calls [`update`](Self::update) once per frame.
#[derive(Debug, Clone)]
pub struct Session {
    world: World,
    camera: CameraPose,
    controller: CameraController,
    targeting: TargetingEngine,
    editor: MutationController,
    selection: PaletteSelection,
    cursor_captured: bool,
    frame: u64,
}

impl Session {
    /// Create a session with a generated starting world.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let world = WorldGenerator::new(config.world.clone()).generate();
        Self::with_world(config, world)
    }

    /// Create a session around an existing world.
    pub fn with_world(config: SessionConfig, world: World) -> Result<Self> {
        config.validate()?;
        let controller = CameraController::new(&config.camera);
        let targeting = TargetingEngine::from(&config.targeting);

        info!(
            "Session started with {} blocks, camera at {}",
            world.len(),
            controller.spawn_pose().position
        );

        Ok(Self {
            world,
            camera: controller.spawn_pose(),
            controller,
            targeting,
            editor: MutationController::new(targeting),
            selection: PaletteSelection::new(),
            cursor_captured: true,
            frame: 0,
        })
    }

    /// The world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Current camera pose
    pub const fn camera(&self) -> &CameraPose {
        &self.camera
    }

    /// Mutable access to the camera pose
    pub fn camera_mut(&mut self) -> &mut CameraPose {
        &mut self.camera
    }

    /// Palette selection
    pub const fn selection(&self) -> PaletteSelection {
        self.selection
    }

    /// Whether the cursor is captured for mouse look and editing
    pub const fn cursor_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Capture the cursor again after it was released.
    pub fn capture_cursor(&mut self) {
        self.cursor_captured = true;
    }

    /// Number of completed frame updates
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Current target without advancing the frame.
    pub fn target(&self) -> Option<TargetHit> {
        self.targeting.query(&self.world, &self.camera)
    }

    /// Snapshot of the session for diagnostics.
    pub fn debug_snapshot(&self) -> DebugSnapshot {
        DebugSnapshot {
            camera: self.camera,
            block_count: self.world.len(),
            first_block: self.world.blocks().first().copied(),
            selected: self.selection.kind(),
        }
    }

    /// Run one frame.
    ///
    /// Steps run in a fixed order: commands, camera movement and look,
    /// discrete events, then the targeting query for the outline.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> FrameOutcome {
        let _span = tracing::trace_span!("session.update", frame = self.frame).entered();
        let mut outcome = FrameOutcome::default();

        for command in &input.commands {
            self.apply_command(*command, &mut outcome);
        }

        self.controller
            .integrate(&mut self.camera, input.movement, dt);
        if self.cursor_captured {
            self.controller.look(&mut self.camera, input.look_delta);
        }

        for event in &input.events {
            if let Some(mutation) = self.apply_event(*event) {
                outcome.mutations.push(mutation);
            }
        }

        outcome.target = self.target();
        self.frame += 1;
        outcome
    }

    fn apply_command(&mut self, command: Command, outcome: &mut FrameOutcome) {
        match command {
            Command::ReleaseCursor => {
                if self.cursor_captured {
                    debug!("Cursor released");
                }
                self.cursor_captured = false;
            }
            Command::Quit => {
                if self.cursor_captured {
                    debug!("Ignoring quit while the cursor is captured");
                } else {
                    info!("Quit requested");
                    outcome.quit_requested = true;
                }
            }
            Command::ResetCamera => {
                self.controller.reset(&mut self.camera);
                debug!("Camera reset to spawn");
            }
            Command::DebugDump => {
                info!("{}", self.debug_snapshot());
            }
        }
    }

    fn apply_event(&mut self, event: InputEvent) -> Option<Mutation> {
        match event {
            InputEvent::ScrollPalette(delta) => {
                self.selection.scroll(delta);
                None
            }
            InputEvent::PrimaryAction if self.cursor_captured => {
                self.editor.remove_target(&mut self.world, &self.camera)
            }
            InputEvent::SecondaryAction if self.cursor_captured => self.editor.place_against_target(
                &mut self.world,
                &self.camera,
                self.selection.kind(),
            ),
            InputEvent::PrimaryAction | InputEvent::SecondaryAction => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cubecraft_core::control::Movement;
    use cubecraft_core::coords::BlockPos;
    use glam::{Vec2, Vec3};

    fn session() -> Session {
        Session::new(SessionConfig::default()).unwrap()
    }

    #[test]
    fn starts_at_spawn_with_generated_world() {
        let session = session();
        assert_eq!(session.world().len(), 26);
        assert_eq!(session.camera().position, Vec3::new(0.0, 2.0, 5.0));
        assert!(session.cursor_captured());
        assert_eq!(session.selection().index(), 0);
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = SessionConfig::default();
        config.targeting.max_distance = -1.0;
        assert!(Session::new(config).is_err());

        let mut config = SessionConfig::default();
        config.world.pillar_bottom = 3;
        assert!(matches!(
            Session::new(config),
            Err(cubecraft_core::error::Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn spawn_view_has_no_target() {
        // From (0, 2, 5) pitched down 30 degrees the ray passes above the
        // nearer dirt blocks and the pillar base projects beyond reach.
        let mut session = session();
        let outcome = session.update(&FrameInput::default(), 0.01);
        assert!(outcome.target.is_none());
        assert!(outcome.mutations.is_empty());
    }

    #[test]
    fn remove_then_place_through_update() {
        let world: World = [Block::new(BlockPos::ORIGIN, BlockKind::Stone)]
            .into_iter()
            .collect();
        let mut session = Session::with_world(SessionConfig::default(), world).unwrap();
        session.camera_mut().position = Vec3::new(0.0, 0.0, 3.0);
        session.camera_mut().set_orientation(0.0, 0.0);

        let outcome = session.update(
            &FrameInput::with_events([InputEvent::ScrollPalette(2), InputEvent::SecondaryAction]),
            0.01,
        );
        assert_eq!(
            outcome.mutations,
            vec![Mutation::Placed(Block::new(
                BlockPos::new(0, 0, 1),
                BlockKind::Stone
            ))]
        );
        // The new block is nearer, so it becomes the target
        assert_eq!(
            outcome.target.map(|hit| hit.block.position),
            Some(BlockPos::new(0, 0, 1))
        );

        let outcome = session.update(&FrameInput::with_events([InputEvent::PrimaryAction]), 0.01);
        assert_eq!(outcome.mutations.len(), 1);
        assert_eq!(session.world().len(), 1);
        assert_eq!(session.world().blocks()[0].position, BlockPos::ORIGIN);
    }

    #[test]
    fn edits_ignored_while_cursor_released() {
        let mut session = session();
        session.update(&FrameInput::with_commands([Command::ReleaseCursor]), 0.01);
        assert!(!session.cursor_captured());

        session.camera_mut().position = Vec3::new(0.0, 0.0, 3.0);
        session.camera_mut().set_orientation(0.0, 0.0);
        let before = session.world().clone();

        let outcome = session.update(
            &FrameInput::with_events([InputEvent::PrimaryAction, InputEvent::SecondaryAction]),
            0.01,
        );
        assert!(outcome.mutations.is_empty());
        assert_eq!(session.world(), &before);

        // Scrolling still works
        session.update(&FrameInput::with_events([InputEvent::ScrollPalette(1)]), 0.01);
        assert_eq!(session.selection().kind(), BlockKind::Dirt);
    }

    #[test]
    fn quit_requires_released_cursor() {
        let mut session = session();
        let outcome = session.update(&FrameInput::with_commands([Command::Quit]), 0.01);
        assert!(!outcome.quit_requested);

        let outcome = session.update(
            &FrameInput::with_commands([Command::ReleaseCursor, Command::Quit]),
            0.01,
        );
        assert!(outcome.quit_requested);
    }

    #[test]
    fn mouse_look_only_while_captured() {
        let mut session = session();
        let input = FrameInput {
            look_delta: Vec2::new(20.0, 0.0),
            ..FrameInput::default()
        };

        session.update(&input, 0.01);
        assert_relative_eq!(session.camera().yaw(), 10.0);

        session.update(&FrameInput::with_commands([Command::ReleaseCursor]), 0.01);
        session.update(&input, 0.01);
        assert_relative_eq!(session.camera().yaw(), 10.0);

        session.capture_cursor();
        session.update(&input, 0.01);
        assert_relative_eq!(session.camera().yaw(), 20.0);
    }

    #[test]
    fn camera_moves_before_targeting() {
        let world: World = [Block::new(BlockPos::ORIGIN, BlockKind::Stone)]
            .into_iter()
            .collect();
        let mut session = Session::with_world(SessionConfig::default(), world).unwrap();
        session.camera_mut().position = Vec3::new(0.0, 0.0, 5.5);
        session.camera_mut().set_orientation(0.0, 0.0);
        assert!(session.target().is_none());

        // One frame of forward movement brings the block into reach
        let input = FrameInput {
            movement: Movement {
                forward: true,
                ..Movement::default()
            },
            ..FrameInput::default()
        };
        let outcome = session.update(&input, 0.1);
        assert_relative_eq!(session.camera().position.z, 4.5);
        assert!(outcome.target.is_some());
    }

    #[test]
    fn reset_and_debug_dump() {
        let mut session = session();
        session.camera_mut().position = Vec3::splat(10.0);
        session.camera_mut().set_orientation(-20.0, 90.0);

        session.update(
            &FrameInput::with_commands([Command::ResetCamera, Command::DebugDump]),
            0.01,
        );
        assert_eq!(session.camera().position, Vec3::new(0.0, 2.0, 5.0));
        assert_relative_eq!(session.camera().pitch(), 30.0);

        let snapshot = session.debug_snapshot();
        assert_eq!(snapshot.block_count, 26);
        assert_eq!(
            snapshot.first_block.map(|b| b.position),
            Some(BlockPos::new(-5, -1, 0))
        );
        assert!(snapshot.to_string().contains("26 blocks"));
    }

    #[test]
    fn frame_counter_advances() {
        let mut session = session();
        for _ in 0..3 {
            session.update(&FrameInput::default(), 0.01);
        }
        assert_eq!(session.frame(), 3);
    }
}
