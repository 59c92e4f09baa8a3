//! Frame timing value type and derivation

use xrstats_sdk::{sys as xr, NANOS_PER_SECOND};

/// Convert runtime ticks (nanoseconds) to seconds
#[inline]
pub fn ticks_to_seconds(ticks: i64) -> f64 {
    ticks as f64 / NANOS_PER_SECOND
}

/// What a recorded sample did to the derived metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// No prior sample existed; only the absolute time was refreshed
    First,
    /// The period was updated with this delta
    Period(xr::Duration),
    /// Timestamp did not advance past `previous`; period left untouched
    Regressed { previous: xr::Time },
}

/// Timing state derived from successive predicted display times
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTiming {
    /// Last predicted display time seen, `None` before the first sample
    previous: Option<xr::Time>,
    last_period_seconds: f64,
    last_predicted_time_seconds: f64,
    sample_count: u64,
}

impl FrameTiming {
    pub const fn new() -> Self {
        Self {
            previous: None,
            last_period_seconds: 0.0,
            last_predicted_time_seconds: 0.0,
            sample_count: 0,
        }
    }

    /// Record a predicted display time from a successful frame wait
    ///
    /// The period only moves when the new time is strictly later than the
    /// previous one. The absolute time and the previous marker are refreshed
    /// on every sample, including regressions.
    pub fn record(&mut self, predicted: xr::Time) -> SampleOutcome {
        let ticks = predicted.as_nanos();
        let outcome = match self.previous {
            None => SampleOutcome::First,
            Some(previous) => match ticks.checked_sub(previous.as_nanos()) {
                Some(delta) if delta > 0 => {
                    self.last_period_seconds = ticks_to_seconds(delta);
                    SampleOutcome::Period(xr::Duration::from_nanos(delta))
                }
                _ => SampleOutcome::Regressed { previous },
            },
        };

        self.previous = Some(predicted);
        self.last_predicted_time_seconds = ticks_to_seconds(ticks);
        self.sample_count = self.sample_count.saturating_add(1);

        outcome
    }

    /// Previous predicted display time
    pub fn previous(&self) -> Option<xr::Time> {
        self.previous
    }

    pub fn snapshot(&self) -> FrameTimingSnapshot {
        FrameTimingSnapshot {
            period_seconds: self.last_period_seconds,
            predicted_time_seconds: self.last_predicted_time_seconds,
            sample_count: self.sample_count,
        }
    }
}

/// Read-only copy of the exposed metrics
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTimingSnapshot {
    /// Interval between the last two advancing predicted display times
    pub period_seconds: f64,
    /// Most recent predicted display time in the runtime timebase
    pub predicted_time_seconds: f64,
    /// Successful frame waits observed so far
    pub sample_count: u64,
}

impl FrameTimingSnapshot {
    /// Frames per second implied by the last period, 0.0 while unset
    pub fn delivery_rate(&self) -> f64 {
        if self.period_seconds > 0.0 {
            1.0 / self.period_seconds
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(nanos: i64) -> xr::Time {
        xr::Time::from_nanos(nanos)
    }

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_cold_start_is_zero() {
        let timing = FrameTiming::new();
        let snapshot = timing.snapshot();
        assert_eq!(snapshot.period_seconds, 0.0);
        assert_eq!(snapshot.predicted_time_seconds, 0.0);
        assert_eq!(snapshot.sample_count, 0);
        assert_eq!(snapshot.delivery_rate(), 0.0);
        assert_eq!(timing.previous(), None);
    }

    #[test]
    fn test_first_sample_sets_time_only() {
        let mut timing = FrameTiming::new();
        assert_eq!(timing.record(at(1_000_000_000)), SampleOutcome::First);

        let snapshot = timing.snapshot();
        assert_eq!(snapshot.period_seconds, 0.0);
        assert!((snapshot.predicted_time_seconds - 1.0).abs() < EPSILON);
        assert_eq!(snapshot.sample_count, 1);
    }

    #[test]
    fn test_steady_60hz_sequence() {
        let mut timing = FrameTiming::new();
        for t in [1_000_000_000, 1_016_666_667, 1_033_333_334] {
            timing.record(at(t));
        }

        let snapshot = timing.snapshot();
        assert!((snapshot.period_seconds - 0.016_666_667).abs() < EPSILON);
        assert!((snapshot.predicted_time_seconds - 1.033_333_334).abs() < EPSILON);
        assert!((snapshot.delivery_rate() - 59.999_998_8).abs() < 1e-3);
    }

    #[test]
    fn test_regression_keeps_period_and_moves_time() {
        let mut timing = FrameTiming::new();
        for t in [1_000_000_000, 1_016_666_667, 1_033_333_334] {
            timing.record(at(t));
        }
        let outcome = timing.record(at(1_020_000_000));

        assert_eq!(
            outcome,
            SampleOutcome::Regressed {
                previous: at(1_033_333_334)
            }
        );
        let snapshot = timing.snapshot();
        assert!((snapshot.period_seconds - 0.016_666_667).abs() < EPSILON);
        assert!((snapshot.predicted_time_seconds - 1.02).abs() < EPSILON);
        assert_eq!(timing.previous(), Some(at(1_020_000_000)));
    }

    #[test]
    fn test_repeated_timestamp_is_rejected() {
        let mut timing = FrameTiming::new();
        timing.record(at(500));
        timing.record(at(1_500));
        assert_eq!(
            timing.record(at(1_500)),
            SampleOutcome::Regressed { previous: at(1_500) }
        );
        assert!((timing.snapshot().period_seconds - 1e-6).abs() < EPSILON);
    }

    #[test]
    fn test_zero_first_sample_counts_as_prior() {
        let mut timing = FrameTiming::new();
        assert_eq!(timing.record(at(0)), SampleOutcome::First);
        assert_eq!(
            timing.record(at(11_111_111)),
            SampleOutcome::Period(xr::Duration::from_nanos(11_111_111))
        );
        assert!((timing.snapshot().period_seconds - 0.011_111_111).abs() < EPSILON);
    }

    #[test]
    fn test_overflowing_delta_is_treated_as_regression() {
        let mut timing = FrameTiming::new();
        timing.record(at(i64::MIN));
        assert_eq!(
            timing.record(at(i64::MAX)),
            SampleOutcome::Regressed { previous: at(i64::MIN) }
        );
        assert_eq!(timing.snapshot().period_seconds, 0.0);
    }

    proptest! {
        #[test]
        fn prop_increasing_samples_track_last_delta(
            start in 0i64..1_000_000_000_000,
            deltas in proptest::collection::vec(1i64..100_000_000, 1..64),
        ) {
            let mut timing = FrameTiming::new();
            timing.record(at(start));
            let mut t = start;
            for delta in deltas {
                t += delta;
                prop_assert_eq!(
                    timing.record(at(t)),
                    SampleOutcome::Period(xr::Duration::from_nanos(delta))
                );
                prop_assert_eq!(timing.snapshot().period_seconds, ticks_to_seconds(delta));
            }
        }

        #[test]
        fn prop_regressions_never_touch_period(
            samples in proptest::collection::vec(0i64..10_000_000_000, 2..64),
        ) {
            let mut timing = FrameTiming::new();
            for t in samples {
                let before = timing.snapshot();
                let previous = timing.previous().map(|p| p.as_nanos());
                timing.record(at(t));
                let after = timing.snapshot();

                match previous {
                    Some(p) if t > p => {
                        prop_assert_eq!(after.period_seconds, ticks_to_seconds(t - p));
                    }
                    _ => prop_assert_eq!(after.period_seconds, before.period_seconds),
                }
                prop_assert_eq!(after.predicted_time_seconds, ticks_to_seconds(t));
                prop_assert_eq!(after.sample_count, before.sample_count + 1);
            }
        }
    }
}
