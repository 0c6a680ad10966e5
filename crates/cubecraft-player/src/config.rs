//! Session configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```toml
//! [targeting]
//! max_distance = 6.0
//!
//! [camera]
//! spawn_position = [0.0, 3.0, 8.0]
//!
//! [world]
//! cross_radius = 3
//! ```

use std::path::Path;

use cubecraft_core::constants::{DEFAULT_MAX_TARGET_DISTANCE, PITCH_LIMIT};
use cubecraft_core::error::{Error, Result};
use cubecraft_world::GeneratorConfig;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::camera::CameraPose;

/// Targeting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetingConfig {
    /// Blocks must project strictly closer than this to be targeted.
    pub max_distance: f32,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_TARGET_DISTANCE,
        }
    }
}

/// Camera settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Start and reset position.
    pub spawn_position: [f32; 3],
    /// Start and reset pitch in degrees (positive looks down).
    pub spawn_pitch: f32,
    /// Start and reset yaw in degrees.
    pub spawn_yaw: f32,
    /// Degrees of rotation per unit of pointer motion.
    pub mouse_sensitivity: f32,
    /// Movement speed in units per second.
    pub move_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            spawn_position: [0.0, 2.0, 5.0],
            spawn_pitch: 30.0,
            spawn_yaw: 0.0,
            mouse_sensitivity: 0.5,
            move_speed: 10.0,
        }
    }
}

impl CameraConfig {
    /// Pose described by the spawn settings
    pub fn spawn_pose(&self) -> CameraPose {
        CameraPose::new(
            Vec3::from_array(self.spawn_position),
            self.spawn_pitch,
            self.spawn_yaw,
        )
    }
}

/// Full session configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub targeting: TargetingConfig,
    pub camera: CameraConfig,
    pub world: GeneratorConfig,
}

impl SessionConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        let max_distance = self.targeting.max_distance;
        if !max_distance.is_finite() || max_distance <= 0.0 {
            return Err(invalid(format!(
                "targeting.max_distance must be a positive number, got {max_distance}"
            )));
        }

        let camera = &self.camera;
        if camera.spawn_position.iter().any(|c| !c.is_finite()) {
            return Err(invalid("camera.spawn_position must be finite".to_string()));
        }
        if !camera.spawn_yaw.is_finite() {
            return Err(invalid("camera.spawn_yaw must be finite".to_string()));
        }
        if !(-PITCH_LIMIT..=PITCH_LIMIT).contains(&camera.spawn_pitch) {
            return Err(invalid(format!(
                "camera.spawn_pitch must be within ±{PITCH_LIMIT}, got {}",
                camera.spawn_pitch
            )));
        }
        for (name, value) in [
            ("mouse_sensitivity", camera.mouse_sensitivity),
            ("move_speed", camera.move_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "camera.{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let world = &self.world;
        if world.cross_radius < 0 {
            return Err(invalid(format!(
                "world.cross_radius must not be negative, got {}",
                world.cross_radius
            )));
        }
        if world.pillar_bottom > world.pillar_top {
            return Err(invalid(format!(
                "world.pillar_bottom ({}) is above world.pillar_top ({})",
                world.pillar_bottom, world.pillar_top
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig(message)
}
