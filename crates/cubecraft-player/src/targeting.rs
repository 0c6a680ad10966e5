//! Finding the block under the crosshair.
//!
//! Targeting uses a point-projection test rather than a true ray/box
//! intersection: each block center is projected onto the view ray, and the
//! block counts as hit only when the ray point at that depth lies strictly
//! inside the block. Rays that clip a block's edge or corner without passing
//! near its center miss it, and a far block can be hit through the gap next
//! to a nearer one. Placement and outline behavior depend on these exact
//! results, so the test must not be swapped for a slab intersection.

use cubecraft_core::constants::DEFAULT_MAX_TARGET_DISTANCE;
use cubecraft_core::math::inside_block;
use cubecraft_core::types::Block;
use cubecraft_world::World;
use tracing::trace;

use crate::camera::CameraPose;
use crate::config::TargetingConfig;

/// The block a targeting query selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetHit {
    /// The targeted block.
    pub block: Block,
    /// Index of the block in the world at query time.
    pub index: usize,
    /// Distance of the block center's projection along the view ray.
    pub distance: f32,
}

/// Answers "which block is the player looking at".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetingEngine {
    max_distance: f32,
}

impl Default for TargetingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TARGET_DISTANCE)
    }
}

impl From<&TargetingConfig> for TargetingEngine {
    fn from(config: &TargetingConfig) -> Self {
        Self::new(config.max_distance)
    }
}

impl TargetingEngine {
    /// Create an engine with the given reach.
    pub const fn new(max_distance: f32) -> Self {
        Self { max_distance }
    }

    /// Reach of the targeting ray
    pub const fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Nearest block hit by the camera's view ray, if any.
    ///
    /// A block qualifies when its projected distance lies strictly between 0
    /// and the reach and the ray point at that distance is strictly inside
    /// it. Among qualifying blocks the smallest distance wins; on equal
    /// distances the block stored first wins.
    pub fn query(&self, world: &World, camera: &CameraPose) -> Option<TargetHit> {
        let ray = camera.view_ray();
        let mut nearest: Option<TargetHit> = None;

        for (index, block) in world.iter().enumerate() {
            let center = block.position.center();
            let distance = ray.project(center);
            if !(distance > 0.0 && distance < self.max_distance) {
                continue;
            }

            if !inside_block(ray.at(distance), center) {
                continue;
            }

            if nearest.map_or(true, |hit| distance < hit.distance) {
                nearest = Some(TargetHit {
                    block: *block,
                    index,
                    distance,
                });
            }
        }

        if let Some(hit) = &nearest {
            trace!(
                "Target {} {} at distance {:.3}",
                hit.block.kind,
                hit.block.position,
                hit.distance
            );
        }
        nearest
    }
}
