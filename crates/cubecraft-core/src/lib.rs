//! Core types, math, and input vocabulary for Cubecraft.
//!
//! This crate provides the foundational types shared by every other crate:
//! - Block positions and block kinds (the fixed palette)
//! - Look-vector math used by targeting and placement
//! - Abstract per-frame input events
//! - Renderer hand-off records and the common error type

pub mod control;
pub mod coords;
pub mod error;
pub mod math;
pub mod types;

pub use control::{Command, FrameInput, InputEvent, Movement};
pub use coords::BlockPos;
pub use error::{Error, Result};
pub use math::{look_vector, Axis, Ray};
pub use types::{Block, BlockInstance, BlockKind, PALETTE};

/// Prototype-wide constants
pub mod constants {
    /// Half the edge length of a block.
    pub const BLOCK_HALF_EXTENT: f32 = 0.5;
    /// Default reach of the targeting ray, in world units.
    pub const DEFAULT_MAX_TARGET_DISTANCE: f32 = 5.0;
    /// Pitch limit in degrees (applied symmetrically).
    pub const PITCH_LIMIT: f32 = 90.0;
}
