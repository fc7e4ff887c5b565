//! Frame recorder
//!
//! Accumulates one pose sample per rendered frame between `start` and `stop`.

use super::state::{RecorderConfig, RecordingState, Sample};
use crate::capture::{FrameListener, Pose, PoseSource};
use crate::utils::clock::Clock;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::broadcast;

/// Illegal state transitions
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingError {
    #[error("Recorder is already recording")]
    AlreadyRecording,

    #[error("Recorder is not recording")]
    NotRecording,
}

pub type RecordingResult<T> = Result<T, RecordingError>;

/// Events emitted on recorder lifecycle changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecorderEvent {
    /// Recording started, buffer cleared
    Started,
    /// Recording stopped with this many samples
    Stopped { sample_count: usize },
}

/// Everything the render thread and the control surface both touch
#[derive(Debug, Default)]
struct Capture {
    state: RecordingState,
    buffer: Vec<Sample>,
    last_timestamp: Option<f64>,
}

/// Records camera poses handed in by the host render loop
///
/// All methods take `&self`; the recorder can be shared behind an `Arc`
/// between the render thread (`on_frame`) and whatever drives `start`/`stop`.
pub struct FrameRecorder {
    capture: Mutex<Capture>,

    /// Timestamp source for `capture`
    clock: Clock,

    /// Event broadcaster
    event_tx: broadcast::Sender<RecorderEvent>,
}

impl FrameRecorder {
    /// Create an idle recorder with the default configuration
    pub fn new() -> Self {
        Self::with_config(&RecorderConfig::default())
    }

    /// Create an idle recorder
    pub fn with_config(config: &RecorderConfig) -> Self {
        let (event_tx, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            capture: Mutex::new(Capture::default()),
            clock: Clock::new(config.clock),
            event_tx,
        }
    }

    /// Get the current state
    pub fn state(&self) -> RecordingState {
        self.capture.lock().state
    }

    pub fn is_recording(&self) -> bool {
        self.state() == RecordingState::Recording
    }

    /// Subscribe to lifecycle events
    pub fn subscribe(&self) -> broadcast::Receiver<RecorderEvent> {
        self.event_tx.subscribe()
    }

    /// Start a new recording, discarding the previous one
    pub fn start(&self) -> RecordingResult<()> {
        {
            let mut capture = self.capture.lock();
            if capture.state == RecordingState::Recording {
                return Err(RecordingError::AlreadyRecording);
            }

            capture.buffer = Vec::new();
            capture.last_timestamp = None;
            capture.state = RecordingState::Recording;
        }

        let _ = self.event_tx.send(RecorderEvent::Started);
        tracing::info!("Recording started");
        Ok(())
    }

    /// Stop recording. The captured samples stay available until the next `start`.
    pub fn stop(&self) -> RecordingResult<()> {
        let sample_count = {
            let mut capture = self.capture.lock();
            if capture.state == RecordingState::Idle {
                return Err(RecordingError::NotRecording);
            }

            capture.state = RecordingState::Idle;
            capture.buffer.len()
        };

        let _ = self.event_tx.send(RecorderEvent::Stopped { sample_count });
        tracing::info!("Recording stopped. Samples: {}", sample_count);
        Ok(())
    }

    /// Number of samples in the current (or last) recording
    pub fn sample_count(&self) -> usize {
        self.capture.lock().buffer.len()
    }

    /// Copy of the current (or last) recording, in capture order
    ///
    /// Empty if nothing has been recorded yet.
    pub fn recording(&self) -> Vec<Sample> {
        self.capture.lock().buffer.clone()
    }

    /// Move the last recording out of the recorder, leaving it empty
    ///
    /// Refused while recording so a buffer that is still growing is never
    /// handed out.
    pub fn take_recording(&self) -> RecordingResult<Vec<Sample>> {
        let mut capture = self.capture.lock();
        if capture.state == RecordingState::Recording {
            return Err(RecordingError::AlreadyRecording);
        }
        Ok(std::mem::take(&mut capture.buffer))
    }

    /// Record one frame. Ignored while idle.
    ///
    /// `now` is not required to increase between calls; the stored delta is
    /// whatever the difference comes out to.
    pub fn on_frame(&self, pose: Pose, now: f64) {
        let mut capture = self.capture.lock();
        if capture.state != RecordingState::Recording {
            return;
        }

        let delta = match capture.last_timestamp {
            Some(last) => now - last,
            None => 0.0,
        };
        capture.buffer.push(Sample::new(delta, pose));
        capture.last_timestamp = Some(now);

        tracing::trace!(delta, samples = capture.buffer.len(), "Captured frame");
    }

    /// Record the source's current pose, timestamped with the configured clock
    pub fn capture(&self, source: &dyn PoseSource) {
        if !self.is_recording() {
            return;
        }
        let now = self.clock.now_ms();
        self.on_frame(source.current_pose(), now);
    }
}

impl FrameListener for FrameRecorder {
    fn on_frame(&self, pose: Pose, now: f64) {
        FrameRecorder::on_frame(self, pose, now);
    }
}

impl Default for FrameRecorder {
    fn default() -> Self {
        Self::new()
    }
}
