//! Capture trait definitions
//!
//! Host-agnostic pose types and the seams a game client plugs into.

use serde::{Deserialize, Serialize};

/// A position in world space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Orientation as a quaternion, stored in `w, x, y, z` order
///
/// Values are kept exactly as the host supplied them; nothing here
/// normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Rotation of `angle` radians around the vertical (y) axis
    pub fn from_yaw(angle: f64) -> Self {
        let half = angle * 0.5;
        Self::new(half.cos(), 0.0, half.sin(), 0.0)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Camera pose for a single rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// Camera position
    pub position: Vec3,

    /// Camera orientation
    pub rotation: Quaternion,
}

impl Pose {
    pub const fn new(position: Vec3, rotation: Quaternion) -> Self {
        Self { position, rotation }
    }
}

/// Something that can report where the host camera currently is
///
/// Implemented by the host integration, usually as a thin wrapper around
/// the engine's camera object for the frame being rendered.
pub trait PoseSource {
    fn current_pose(&self) -> Pose;
}

/// Per-frame callback invoked by the host render loop
///
/// `now` is a timestamp in whatever unit the host uses (milliseconds for the
/// built-in clocks). Implementations must never fail or block for long, since
/// they run inside the host's frame.
pub trait FrameListener: Send + Sync {
    fn on_frame(&self, pose: Pose, now: f64);
}
