//! Procedural starting world.

use cubecraft_core::coords::BlockPos;
use cubecraft_core::types::{Block, BlockKind};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::store::World;

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Arms of the ground cross extend this far from the origin.
    pub cross_radius: i32,
    /// Y coordinate of the ground cross.
    pub ground_level: i32,
    /// Lowest block of the central pillar.
    pub pillar_bottom: i32,
    /// Highest block of the central pillar (inclusive).
    pub pillar_top: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cross_radius: 5,
            ground_level: -1,
            pillar_bottom: -1,
            pillar_top: 2,
        }
    }
}

/// Builds the starting world: a ground cross plus a stone pillar at the
/// origin.
#[derive(Debug, Clone, Default)]
pub struct WorldGenerator {
    config: GeneratorConfig,
}

impl WorldGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get the generator configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the world.
    ///
    /// The grass (X axis) and dirt (Z axis) arms are interleaved per step,
    /// then the pillar is stacked bottom to top. Cells where the arms and
    /// the pillar meet hold several blocks.
    pub fn generate(&self) -> World {
        let GeneratorConfig {
            cross_radius,
            ground_level,
            pillar_bottom,
            pillar_top,
        } = self.config;

        let mut world = World::new();
        for i in -cross_radius..=cross_radius {
            world.add(Block::new(
                BlockPos::new(i, ground_level, 0),
                BlockKind::Grass,
            ));
            world.add(Block::new(BlockPos::new(0, ground_level, i), BlockKind::Dirt));
        }

        for y in pillar_bottom..=pillar_top {
            world.add(Block::new(BlockPos::new(0, y, 0), BlockKind::Stone));
        }

        info!("Created {} blocks at ground level", world.len());
        world
    }
}
