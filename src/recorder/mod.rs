//! Recording system module
//!
//! This module implements camera path capture:
//! - RecordingState and Sample for the captured data
//! - FrameRecorder, the Idle/Recording state machine fed by the host
//!   render loop

pub mod frame_recorder;
pub mod state;

pub use frame_recorder::{FrameRecorder, RecorderEvent, RecordingError, RecordingResult};
pub use state::{ClockSource, RecorderConfig, RecordingState, Sample};
