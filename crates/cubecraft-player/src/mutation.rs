//! Removing and placing blocks at the crosshair.

use std::fmt;

use cubecraft_core::coords::BlockPos;
use cubecraft_core::math::Axis;
use cubecraft_core::types::{Block, BlockKind};
use cubecraft_world::World;
use glam::Vec3;
use tracing::debug;

use crate::camera::CameraPose;
use crate::targeting::TargetingEngine;

/// A change applied to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// A block was removed.
    Removed(Block),
    /// A block was added.
    Placed(Block),
}

impl Mutation {
    /// The block that was removed or placed
    pub const fn block(&self) -> Block {
        match self {
            Self::Removed(block) | Self::Placed(block) => *block,
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed(block) => write!(f, "removed {} at {}", block.kind, block.position),
            Self::Placed(block) => write!(f, "placed {} at {}", block.kind, block.position),
        }
    }
}

/// Cell a new block goes into when placing against `target`.
///
/// The face is guessed from the view direction alone: the new block sits one
/// unit from the target along the look vector's dominant axis, on the side
/// facing the camera. A zero component counts as facing away, so the offset
/// is +1.
pub fn placement_position(target: BlockPos, look: Vec3) -> BlockPos {
    let axis = Axis::dominant(look);
    let delta = if look[axis.index()] > 0.0 { -1 } else { 1 };
    target.offset(axis, delta)
}

/// Applies remove and place actions against the current target.
///
/// Each action re-runs the targeting query so it always acts on the world as
/// it is at that moment. Neither action checks the destination cell, so
/// placing can stack a block onto an occupied cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MutationController {
    targeting: TargetingEngine,
}

impl MutationController {
    /// Create a controller that targets with `targeting`.
    pub const fn new(targeting: TargetingEngine) -> Self {
        Self { targeting }
    }

    /// Remove the targeted block.
    ///
    /// Returns `None` without touching the world when nothing is targeted.
    pub fn remove_target(&self, world: &mut World, camera: &CameraPose) -> Option<Mutation> {
        let hit = self.targeting.query(world, camera)?;
        if !world.remove(&hit.block) {
            return None;
        }

        let mutation = Mutation::Removed(hit.block);
        debug!("Block {mutation}");
        Some(mutation)
    }

    /// Place a block of `kind` against the targeted block.
    ///
    /// Returns `None` without touching the world when nothing is targeted.
    pub fn place_against_target(
        &self,
        world: &mut World,
        camera: &CameraPose,
        kind: BlockKind,
    ) -> Option<Mutation> {
        let hit = self.targeting.query(world, camera)?;
        let position = placement_position(hit.block.position, camera.look_vector());
        let block = Block::new(position, kind);
        world.add(block);

        let mutation = Mutation::Placed(block);
        debug!("Block {mutation} (against {})", hit.block.position);
        Some(mutation)
    }
}
