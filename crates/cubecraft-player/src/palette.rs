//! Selected palette entry for placement.

use cubecraft_core::types::{BlockKind, PALETTE};
use tracing::info;

/// Index into [`PALETTE`], wrapping in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaletteSelection {
    index: usize,
}

impl PaletteSelection {
    /// Selection starting at the first palette entry
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Current palette index
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Currently selected block kind
    #[inline]
    pub const fn kind(&self) -> BlockKind {
        PALETTE[self.index]
    }

    /// Move the selection by `delta` entries with wraparound.
    ///
    /// Returns the newly selected kind.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn scroll(&mut self, delta: i32) -> BlockKind {
        let len = PALETTE.len() as i64;
        self.index = (self.index as i64 + i64::from(delta)).rem_euclid(len) as usize;

        let kind = self.kind();
        info!("Selected block: {kind}");
        kind
    }
}
