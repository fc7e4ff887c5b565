//! Host-facing capture types
//!
//! The game client drives the recorder through these: it reports poses
//! through `PoseSource` or calls a `FrameListener` directly every frame.

pub mod traits;

// Re-export traits
pub use traits::{FrameListener, Pose, PoseSource, Quaternion, Vec3};
