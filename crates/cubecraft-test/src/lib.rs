//! Test harness for Cubecraft.
//!
//! Builds small sessions with hand-placed blocks and a posed camera, then
//! drives them frame by frame with abstract events or raw input.

pub mod harness;

#[cfg(test)]
mod scenarios;

pub use harness::SessionHarness;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error("Session error: {0}")]
    Session(#[from] cubecraft_core::Error),
    #[error("Expectation failed: {0}")]
    Expectation(String),
}

pub type Result<T> = std::result::Result<T, TestError>;
