//! Frame timing state
//!
//! Holds the metrics derived from successive `predictedDisplayTime` values:
//! - The interval between the last two advancing samples (frame period)
//! - The most recent predicted display time, in seconds
//!
//! The state is written once per frame by the xrWaitFrame substitute and
//! read by the host through the exported accessors. [`SharedFrameTiming`]
//! keeps the two values consistent with each other when readers and writers
//! live on different threads.

mod state;

use parking_lot::Mutex;
use xrstats_sdk::sys as xr;

pub use state::{ticks_to_seconds, FrameTiming, FrameTimingSnapshot, SampleOutcome};

/// Synchronized holder for [`FrameTiming`]
///
/// Each call takes the lock exactly once, so a snapshot never mixes the
/// period from one sample with the time from another.
#[derive(Debug, Default)]
pub struct SharedFrameTiming {
    inner: Mutex<FrameTiming>,
}

impl SharedFrameTiming {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FrameTiming::new()),
        }
    }

    /// Record a predicted display time
    pub fn record(&self, predicted: xr::Time) -> SampleOutcome {
        self.inner.lock().record(predicted)
    }

    /// Copy out the current metrics
    pub fn snapshot(&self) -> FrameTimingSnapshot {
        self.inner.lock().snapshot()
    }

    pub fn period_seconds(&self) -> f64 {
        self.snapshot().period_seconds
    }

    pub fn predicted_time_seconds(&self) -> f64 {
        self.snapshot().predicted_time_seconds
    }
}
