//! Math utilities for view rays and block geometry.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::BLOCK_HALF_EXTENT;

/// Unit view direction for a camera orientation given in degrees.
///
/// Positive pitch looks down; yaw 0 looks down -Z and positive yaw turns
/// toward +X.
#[inline]
pub fn look_vector(pitch_deg: f32, yaw_deg: f32) -> Vec3 {
    let (sin_pitch, cos_pitch) = pitch_deg.to_radians().sin_cos();
    let (sin_yaw, cos_yaw) = yaw_deg.to_radians().sin_cos();
    Vec3::new(sin_yaw, -sin_pitch * cos_yaw, -cos_yaw * cos_pitch)
}

/// Coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in index order
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Index of the axis (x=0, y=1, z=2)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Axis of the largest-magnitude component of `v`.
    ///
    /// Ties resolve to the lowest axis index.
    pub fn dominant(v: Vec3) -> Self {
        let mut best = Self::X;
        let mut best_abs = v.x.abs();
        for axis in [Self::Y, Self::Z] {
            let component = v[axis.index()].abs();
            if component > best_abs {
                best = axis;
                best_abs = component;
            }
        }
        best
    }
}

/// Ray for targeting queries.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    /// Ray origin
    pub origin: Vec3,
    /// Ray direction (unit length)
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray from an origin and an already-normalized direction.
    ///
    /// The direction is used as given so projections stay bit-for-bit
    /// consistent with the look-vector formula.
    #[inline]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get a point along the ray at distance t
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Signed distance of `point`'s projection onto the ray
    #[inline]
    pub fn project(&self, point: Vec3) -> f32 {
        (point - self.origin).dot(self.direction)
    }
}

/// Returns true if `point` lies strictly inside the block centered on `center`.
#[inline]
pub fn inside_block(point: Vec3, center: Vec3) -> bool {
    (point.x - center.x).abs() < BLOCK_HALF_EXTENT
        && (point.y - center.y).abs() < BLOCK_HALF_EXTENT
        && (point.z - center.z).abs() < BLOCK_HALF_EXTENT
}
