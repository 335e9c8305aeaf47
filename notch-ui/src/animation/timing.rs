//! Timed transitions along an easing curve.

use std::time::Duration;

use super::easing::Easing;

/// Default duration of a timed transition.
pub const DEFAULT_TIMING_DURATION: Duration = Duration::from_millis(150);

/// Parameters of a timed transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    /// Length of the transition once it starts moving.
    pub duration: Duration,
    /// Time the value holds its start before moving.
    pub delay: Duration,
    /// Progress curve.
    pub easing: Easing,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_TIMING_DURATION,
            delay: Duration::ZERO,
            easing: Easing::EaseInOut,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TimingMotion {
    from: f64,
    to: f64,
    config: TimingConfig,
}

impl TimingMotion {
    pub(crate) fn new(from: f64, to: f64, config: TimingConfig) -> Self {
        Self { from, to, config }
    }

    /// Returns the value at `elapsed` and whether the transition finished.
    pub(crate) fn sample(&self, elapsed: Duration) -> (f64, bool) {
        let Some(moving) = elapsed.checked_sub(self.config.delay) else {
            return (self.from, false);
        };
        if self.config.duration.is_zero() || moving >= self.config.duration {
            return (self.to, true);
        }
        let fraction = moving.as_secs_f64() / self.config.duration.as_secs_f64();
        let eased = self.config.easing.apply(fraction);
        (self.from + (self.to - self.from) * eased, false)
    }

    /// Approximate velocity in value units per second. A spring that takes
    /// over mid-curve starts with it.
    pub(crate) fn velocity(&self, elapsed: Duration) -> f64 {
        const STEP: Duration = Duration::from_millis(1);
        let (a, _) = self.sample(elapsed);
        let (b, _) = self.sample(elapsed + STEP);
        (b - a) / STEP.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progress() {
        let motion = TimingMotion::new(
            0.0,
            8.0,
            TimingConfig {
                easing: Easing::Linear,
                ..TimingConfig::default()
            },
        );
        assert_eq!(motion.sample(Duration::ZERO), (0.0, false));
        let (mid, done) = motion.sample(Duration::from_millis(75));
        assert!((mid - 4.0).abs() < 1e-9);
        assert!(!done);
        assert_eq!(motion.sample(Duration::from_millis(150)), (8.0, true));
        assert_eq!(motion.sample(Duration::from_secs(3)), (8.0, true));
    }

    #[test]
    fn test_delay_holds_start() {
        let motion = TimingMotion::new(
            1.0,
            2.0,
            TimingConfig {
                delay: Duration::from_millis(100),
                ..TimingConfig::default()
            },
        );
        assert_eq!(motion.sample(Duration::from_millis(99)), (1.0, false));
        assert_eq!(motion.sample(Duration::from_millis(100)), (1.0, false));
        assert_eq!(motion.sample(Duration::from_millis(250)), (2.0, true));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let motion = TimingMotion::new(
            1.0,
            5.0,
            TimingConfig {
                duration: Duration::ZERO,
                ..TimingConfig::default()
            },
        );
        assert_eq!(motion.sample(Duration::ZERO), (5.0, true));
    }

    #[test]
    fn test_velocity_sign_follows_direction() {
        let motion = TimingMotion::new(10.0, 0.0, TimingConfig::default());
        assert!(motion.velocity(Duration::from_millis(75)) < 0.0);
    }
}
