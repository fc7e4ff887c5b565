//! Frame timestamps for self-timed capture

use crate::recorder::state::ClockSource;
use chrono::Utc;
use std::time::Instant;

/// Produces millisecond timestamps from the configured source
#[derive(Debug, Clone)]
pub struct Clock {
    source: ClockSource,
    origin: Instant,
}

impl Clock {
    pub fn new(source: ClockSource) -> Self {
        Self {
            source,
            origin: Instant::now(),
        }
    }

    pub fn source(&self) -> ClockSource {
        self.source
    }

    /// Current time in milliseconds
    pub fn now_ms(&self) -> f64 {
        match self.source {
            ClockSource::WallClock => Utc::now().timestamp_millis() as f64,
            ClockSource::Monotonic => self.origin.elapsed().as_secs_f64() * 1000.0,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(ClockSource::default())
    }
}
