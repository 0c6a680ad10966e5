//! Block and palette types.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::coords::BlockPos;
use crate::error::{Error, Result};

/// Kind of a block, one entry of the fixed placement palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Grass block
    #[default]
    Grass,
    /// Dirt block
    Dirt,
    /// Stone block
    Stone,
    /// Wood block
    Wood,
}

/// The placement palette in scroll order.
pub const PALETTE: [BlockKind; 4] = [
    BlockKind::Grass,
    BlockKind::Dirt,
    BlockKind::Stone,
    BlockKind::Wood,
];

impl BlockKind {
    /// Display name
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grass => "Grass",
            Self::Dirt => "Dirt",
            Self::Stone => "Stone",
            Self::Wood => "Wood",
        }
    }

    /// Base color (RGB, 0.0-1.0)
    #[inline]
    pub const fn color(self) -> [f32; 3] {
        match self {
            Self::Grass => [0.0, 0.8, 0.0],
            Self::Dirt => [0.5, 0.3, 0.0],
            Self::Stone => [0.7, 0.7, 0.7],
            Self::Wood => [0.6, 0.4, 0.2],
        }
    }

    /// Position in [`PALETTE`]
    #[inline]
    pub const fn palette_index(self) -> usize {
        self as usize
    }

    /// Palette entry at `index`
    pub fn from_palette_index(index: usize) -> Result<Self> {
        PALETTE.get(index).copied().ok_or_else(|| {
            Error::OutOfBounds(format!(
                "palette index {index} (palette has {} entries)",
                PALETTE.len()
            ))
        })
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PALETTE
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownBlockKind(s.to_string()))
    }
}

/// A placed block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    /// Center of the block
    pub position: BlockPos,
    /// Palette entry the block was placed with
    pub kind: BlockKind,
}

impl Block {
    /// Create a new block
    #[inline]
    pub const fn new(position: BlockPos, kind: BlockKind) -> Self {
        Self { position, kind }
    }

    /// Per-instance data for the renderer
    #[inline]
    pub fn instance(&self) -> BlockInstance {
        BlockInstance::from(self)
    }
}

/// Per-block instance data for the renderer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BlockInstance {
    pub center: [f32; 3],
    pub color: [f32; 3],
}

impl From<&Block> for BlockInstance {
    fn from(block: &Block) -> Self {
        Self {
            center: block.position.center().to_array(),
            color: block.kind.color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_order_matches_indices() {
        for (i, kind) in PALETTE.iter().enumerate() {
            assert_eq!(kind.palette_index(), i);
            assert_eq!(BlockKind::from_palette_index(i).unwrap(), *kind);
        }
    }

    #[test]
    fn palette_index_out_of_range() {
        assert!(matches!(
            BlockKind::from_palette_index(4),
            Err(Error::OutOfBounds(_))
        ));
    }

    #[test]
    fn parse_block_kind_names() {
        assert_eq!("stone".parse::<BlockKind>().unwrap(), BlockKind::Stone);
        assert_eq!(" Wood ".parse::<BlockKind>().unwrap(), BlockKind::Wood);
        assert!(matches!(
            "lava".parse::<BlockKind>(),
            Err(Error::UnknownBlockKind(_))
        ));
    }

    #[test]
    fn instance_carries_center_and_color() {
        let block = Block::new(BlockPos::new(2, -1, 0), BlockKind::Dirt);
        let instance = block.instance();
        assert_eq!(instance.center, [2.0, -1.0, 0.0]);
        assert_eq!(instance.color, [0.5, 0.3, 0.0]);
        assert_eq!(bytemuck::bytes_of(&instance).len(), 24);
    }
}
