//! Block store and starting-world generation for Cubecraft.

pub mod generation;
pub mod store;

pub use generation::{GeneratorConfig, WorldGenerator};
pub use store::World;
