//! Camera Capture - record in-game camera paths for cinematic playback.
//!
//! The host game client owns the render loop. It hands a pose to
//! [`FrameRecorder::on_frame`] (or [`FrameRecorder::capture`]) once per
//! rendered frame, and its UI glue calls `start`, `stop` and
//! [`export::save_to_path`].

pub mod capture;
pub mod export;
pub mod recorder;
pub mod utils;

pub use capture::{FrameListener, Pose, PoseSource, Quaternion, Vec3};
pub use recorder::{FrameRecorder, RecorderConfig, RecordingError, Sample};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides the default filter. Panics if a subscriber is
/// already installed.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "camera_capture=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
