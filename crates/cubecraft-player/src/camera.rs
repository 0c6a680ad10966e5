//! First-person camera pose and movement.

use cubecraft_core::constants::PITCH_LIMIT;
use cubecraft_core::control::Movement;
use cubecraft_core::math::{look_vector, Ray};
use glam::{Vec2, Vec3};

use crate::config::CameraConfig;

/// Camera position and orientation.
///
/// Angles are in degrees. Positive pitch looks down, and pitch is always
/// kept within ±90.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pitch: f32,
    yaw: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        CameraConfig::default().spawn_pose()
    }
}

impl CameraPose {
    /// Create a new pose, clamping pitch.
    pub fn new(position: Vec3, pitch: f32, yaw: f32) -> Self {
        Self {
            position,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            yaw,
        }
    }

    /// Pitch in degrees
    #[inline]
    pub const fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Yaw in degrees
    #[inline]
    pub const fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Set both angles, clamping pitch.
    pub fn set_orientation(&mut self, pitch: f32, yaw: f32) {
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw = yaw;
    }

    /// Unit view direction
    #[inline]
    pub fn look_vector(&self) -> Vec3 {
        look_vector(self.pitch, self.yaw)
    }

    /// Ray from the camera position along the view direction
    #[inline]
    pub fn view_ray(&self) -> Ray {
        Ray::new(self.position, self.look_vector())
    }

    /// Turn the camera by a pointer delta.
    ///
    /// Moving right turns right; moving down looks down.
    pub fn apply_mouse_look(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw += delta.x * sensitivity;
        self.pitch = (self.pitch - delta.y * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

/// Moves and turns a [`CameraPose`] from per-frame input.
#[derive(Debug, Clone)]
pub struct CameraController {
    move_speed: f32,
    mouse_sensitivity: f32,
    spawn: CameraPose,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl CameraController {
    /// Create a controller from camera settings.
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            move_speed: config.move_speed,
            mouse_sensitivity: config.mouse_sensitivity,
            spawn: config.spawn_pose(),
        }
    }

    /// Pose the camera starts in and resets to
    pub const fn spawn_pose(&self) -> CameraPose {
        self.spawn
    }

    /// Move the camera for one frame.
    ///
    /// Horizontal movement follows yaw only; pitch never tilts the walk
    /// direction.
    pub fn integrate(&self, pose: &mut CameraPose, movement: Movement, dt: f32) {
        if movement.is_idle() {
            return;
        }

        let step = self.move_speed * dt;
        let (sin_yaw, cos_yaw) = pose.yaw.to_radians().sin_cos();
        let p = &mut pose.position;

        if movement.forward {
            p.z -= step * cos_yaw;
            p.x += step * sin_yaw;
        }
        if movement.back {
            p.z += step * cos_yaw;
            p.x -= step * sin_yaw;
        }
        if movement.left {
            p.x -= step * cos_yaw;
            p.z -= step * sin_yaw;
        }
        if movement.right {
            p.x += step * cos_yaw;
            p.z += step * sin_yaw;
        }
        if movement.up {
            p.y += step;
        }
        if movement.down {
            p.y -= step;
        }
    }

    /// Apply mouse look with the configured sensitivity.
    pub fn look(&self, pose: &mut CameraPose, delta: Vec2) {
        if delta != Vec2::ZERO {
            pose.apply_mouse_look(delta, self.mouse_sensitivity);
        }
    }

    /// Put the camera back at its spawn pose.
    pub fn reset(&self, pose: &mut CameraPose) {
        *pose = self.spawn;
    }
}
