use std::time::Duration;

use super::{Easing, ease};

/// One value transition: where it starts, where it converges, how long it
/// takes and which curve shapes it. Elapsed time is tracked by whoever
/// samples it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    from: f64,
    to: f64,
    duration: Duration,
    easing: Easing,
}

impl Timeline {
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
        }
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    /// The interpolated scalar at `elapsed`. Converges to `to` exactly at
    /// the end of the run; a zero duration snaps there immediately.
    pub fn sample(&self, elapsed: Duration) -> f64 {
        if self.is_finished(elapsed) {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * ease(self.easing, t)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Remaps `t` from the input range onto the output range, the way the
/// ring maps its normalized clock onto dash-offset and readout ranges.
pub fn interpolate(t: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (i0, i1) = input;
    let (o0, o1) = output;
    if i1 == i0 {
        return o1;
    }
    o0 + (t - i0) / (i1 - i0) * (o1 - o0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_hits_both_endpoints() {
        let run = Timeline::new(0.0, 10.0, Duration::from_millis(1000), Easing::EaseOut);
        assert_eq!(run.sample(Duration::ZERO), 0.0);
        assert_eq!(run.sample(Duration::from_millis(1000)), 10.0);
        assert_eq!(run.sample(Duration::from_millis(1500)), 10.0);
    }

    #[test]
    fn test_run_is_non_decreasing_toward_a_monotonic_target() {
        let run = Timeline::new(0.0, 10.0, Duration::from_millis(1000), Easing::EaseOut);
        let mut last = 0.0;
        for ms in (0..=1000).step_by(50) {
            let v = run.sample(Duration::from_millis(ms));
            assert!(v >= last, "sample went backwards at {ms}ms");
            last = v;
        }
        assert_eq!(last, 10.0);
    }

    #[test]
    fn test_descending_runs_work_too() {
        let run = Timeline::new(10.0, 2.0, Duration::from_millis(200), Easing::EaseOut);
        assert_eq!(run.sample(Duration::ZERO), 10.0);
        assert_eq!(run.sample(Duration::from_millis(200)), 2.0);
    }

    #[test]
    fn test_zero_duration_snaps_to_target() {
        let run = Timeline::new(3.0, 7.0, Duration::ZERO, Easing::EaseInOut);
        assert_eq!(run.sample(Duration::ZERO), 7.0);
        assert!(run.is_finished(Duration::ZERO));
    }

    #[test]
    fn test_interpolate_maps_range_endpoints() {
        assert_eq!(interpolate(0.0, (0.0, 1.0), (503.0, 377.0)), 503.0);
        assert_eq!(interpolate(1.0, (0.0, 1.0), (503.0, 377.0)), 377.0);
        assert_eq!(interpolate(0.5, (0.0, 1.0), (0.0, 25.0)), 12.5);
    }

    #[test]
    fn test_interpolate_degenerate_input_range() {
        assert_eq!(interpolate(0.3, (1.0, 1.0), (0.0, 25.0)), 25.0);
    }
}
