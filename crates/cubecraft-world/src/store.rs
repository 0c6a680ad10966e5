//! In-memory block store.

use cubecraft_core::coords::BlockPos;
use cubecraft_core::types::{Block, BlockInstance};

/// The canonical set of placed blocks.
///
/// Blocks are kept in insertion order. Positions are not deduplicated, so a
/// cell may hold more than one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    blocks: Vec<Block>,
}

impl World {
    /// Create an empty world
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All blocks in insertion order
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterate over all blocks
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Number of blocks
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the world holds no blocks
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Append a block without checking the destination cell.
    pub fn add(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Remove the first block equal to `block`.
    ///
    /// Returns `false` and leaves the world untouched if no such block exists.
    pub fn remove(&mut self, block: &Block) -> bool {
        match self.blocks.iter().position(|b| b == block) {
            Some(index) => {
                self.blocks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Blocks occupying `pos`
    pub fn blocks_at(&self, pos: BlockPos) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter().filter(move |b| b.position == pos)
    }

    /// Returns true if any block occupies `pos`
    pub fn is_occupied(&self, pos: BlockPos) -> bool {
        self.blocks_at(pos).next().is_some()
    }

    /// Renderer instance data for every block
    pub fn instances(&self) -> Vec<BlockInstance> {
        self.blocks.iter().map(BlockInstance::from).collect()
    }
}

impl FromIterator<Block> for World {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a World {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
