//! Recording state management
//!
//! Defines the recorder state machine, captured samples and the recorder
//! configuration.

use crate::capture::Pose;
use serde::{Deserialize, Serialize};

/// Current state of the recorder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingState {
    /// Not capturing; the last recording (if any) is still readable
    #[default]
    Idle,
    /// Capturing one sample per frame
    Recording,
}

/// One captured frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Time since the previous sample; 0 for the first sample of a recording.
    /// Negative when the host clock went backwards.
    pub delta: f64,

    /// Camera pose for the frame
    pub pose: Pose,
}

impl Sample {
    pub const fn new(delta: f64, pose: Pose) -> Self {
        Self { delta, pose }
    }
}

/// Where `FrameRecorder::capture` takes its timestamps from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockSource {
    /// Milliseconds since the Unix epoch. Can stall or jump backwards.
    #[default]
    WallClock,
    /// Milliseconds since the recorder was created
    Monotonic,
}

/// Configuration for a recorder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecorderConfig {
    /// Timestamp source for self-timed capture
    pub clock: ClockSource,

    /// Buffered lifecycle events per subscriber
    pub event_capacity: usize,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            clock: ClockSource::WallClock,
            event_capacity: 16,
        }
    }
}
