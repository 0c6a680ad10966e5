//! Player-side logic for Cubecraft.
//!
//! This crate owns everything that reads the camera and edits the world:
//! - [`CameraPose`] and [`CameraController`] for movement and mouse look
//! - [`TargetingEngine`] for finding the block under the crosshair
//! - [`MutationController`] for removing and placing blocks
//! - [`PaletteSelection`] for the block kind used when placing
//! - [`Session`], which runs the ordered per-frame update
//!
//! # Example
//!
//! ```
//! use cubecraft_core::{FrameInput, InputEvent};
//! use cubecraft_player::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default()).unwrap();
//! let outcome = session.update(&FrameInput::with_events([InputEvent::PrimaryAction]), 0.01);
//! assert!(!outcome.quit_requested);
//! ```

pub mod camera;
pub mod config;
pub mod mutation;
pub mod palette;
pub mod session;
pub mod targeting;

pub use camera::{CameraController, CameraPose};
pub use config::{CameraConfig, SessionConfig, TargetingConfig};
pub use mutation::{placement_position, Mutation, MutationController};
pub use palette::PaletteSelection;
pub use session::{DebugSnapshot, FrameOutcome, Session};
pub use targeting::{TargetHit, TargetingEngine};
