//! Progress animation timeline
//!
//! A [`ProgressAnimation`] interpolates between two progress values over a
//! fixed duration with an accelerate-decelerate curve. The widget owns at
//! most one; starting a new transition replaces it wholesale, so a
//! superseded timeline is dropped and can never tick again.

use std::time::{Duration, Instant};

/// Fixed duration of a progress transition.
pub const PROGRESS_ANIMATION_DURATION: Duration = Duration::from_millis(1000);

/// Accelerate-decelerate mapping: slow start, fast middle, slow end.
/// Input: linear time in [0.0, 1.0]. Output: eased fraction in [0.0, 1.0].
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
}

/// An in-flight transition between two progress values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAnimation {
    from: f32,
    to: f32,
    start: Instant,
}

impl ProgressAnimation {
    pub fn new(from: f32, to: f32, start: Instant) -> Self {
        Self { from, to, start }
    }

    /// Value this animation settles on.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Interpolated value at `now`.
    ///
    /// Clamped to the endpoints: before `start` this is `from`, and once the
    /// full duration has elapsed it is exactly `to` (no floating-point
    /// residue from the interpolation).
    pub fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed >= PROGRESS_ANIMATION_DURATION {
            return self.to;
        }
        let fraction = elapsed.as_secs_f32() / PROGRESS_ANIMATION_DURATION.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out(fraction)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= PROGRESS_ANIMATION_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_the_endpoints() {
        assert!(ease_in_out(0.0).abs() < 1e-6);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
        // out-of-range input clamps
        assert!(ease_in_out(-1.0).abs() < 1e-6);
        assert!((ease_in_out(2.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_in_out(i as f32 / 100.0);
            assert!(v >= prev - 1e-6, "eased value regressed at step {i}");
            prev = v;
        }
    }

    #[test]
    fn values_run_monotonically_to_the_target() {
        let start = Instant::now();
        let anim = ProgressAnimation::new(10.0, 80.0, start);
        assert_eq!(anim.target(), 80.0);

        let mut prev = anim.value_at(start);
        assert!((prev - 10.0).abs() < 1e-5);
        for ms in (0..=1000).step_by(50) {
            let v = anim.value_at(start + Duration::from_millis(ms));
            assert!(v >= prev - 1e-4, "value regressed at {ms} ms");
            assert!((10.0..=80.0).contains(&v));
            prev = v;
        }
        assert_eq!(anim.value_at(start + Duration::from_millis(1000)), 80.0);
    }

    #[test]
    fn descending_transitions_work_too() {
        let start = Instant::now();
        let anim = ProgressAnimation::new(90.0, 30.0, start);
        let mid = anim.value_at(start + Duration::from_millis(500));
        assert!(mid < 90.0 && mid > 30.0);
        assert_eq!(anim.value_at(start + Duration::from_millis(1500)), 30.0);
    }

    #[test]
    fn final_value_is_exact() {
        let start = Instant::now();
        let anim = ProgressAnimation::new(0.1, 0.3, start);
        assert_eq!(anim.value_at(start + PROGRESS_ANIMATION_DURATION), 0.3);
        assert!(anim.is_finished(start + PROGRESS_ANIMATION_DURATION));
        assert!(!anim.is_finished(start + Duration::from_millis(999)));
    }

    #[test]
    fn before_start_reads_the_initial_value() {
        let start = Instant::now() + Duration::from_secs(10);
        let anim = ProgressAnimation::new(5.0, 50.0, start);
        assert!((anim.value_at(Instant::now()) - 5.0).abs() < 1e-5);
    }
}
