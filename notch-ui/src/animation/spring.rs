//! Damped spring transitions.
//!
//! Springs are configured with the `friction`/`tension` pair used by mobile
//! toolkits and converted to stiffness/damping for a unit mass. Motion is
//! evaluated in closed form, so sampling is independent of the frame rate.

use std::time::Duration;

/// Parameters of a spring transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Controls bounciness; lower values overshoot more.
    pub friction: f64,
    /// Controls speed; higher values settle faster.
    pub tension: f64,
    /// Initial velocity in value units per second.
    pub velocity: f64,
    /// Maximum distance from the target that counts as resting.
    pub rest_displacement_threshold: f64,
    /// Maximum speed that counts as resting.
    pub rest_speed_threshold: f64,
    /// Stop as soon as the target is crossed instead of oscillating.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            friction: 7.0,
            tension: 100.0,
            velocity: 0.0,
            rest_displacement_threshold: 0.001,
            rest_speed_threshold: 0.001,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Spring stiffness derived from `tension`.
    pub fn stiffness(&self) -> f64 {
        (self.tension - 30.0) * 3.62 + 194.0
    }

    /// Damping coefficient derived from `friction`.
    pub fn damping(&self) -> f64 {
        (self.friction - 8.0) * 3.0 + 25.0
    }
}

/// Position and velocity of a spring at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SpringSample {
    pub position: f64,
    pub velocity: f64,
    pub at_rest: bool,
}

#[derive(Debug, Clone, Copy)]
enum Regime {
    /// Spring too weak to move; jumps to the target.
    Snap,
    Under { decay: f64, omega: f64, a: f64, b: f64 },
    Critical { omega: f64, a: f64, b: f64 },
    Over { r1: f64, r2: f64, c1: f64, c2: f64 },
}

/// A spring heading from `from` to `to`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SpringMotion {
    to: f64,
    from: f64,
    regime: Regime,
    config: SpringConfig,
}

impl SpringMotion {
    pub(crate) fn new(from: f64, to: f64, initial_velocity: f64, config: SpringConfig) -> Self {
        let stiffness = config.stiffness();
        let damping = config.damping().max(0.0);
        // Displacement from the target; the motion decays it to zero.
        let d0 = from - to;

        let regime = if stiffness <= 0.0 || !stiffness.is_finite() {
            Regime::Snap
        } else {
            let omega0 = stiffness.sqrt();
            let zeta = damping / (2.0 * omega0);
            if zeta < 1.0 {
                let decay = zeta * omega0;
                let omega = omega0 * (1.0 - zeta * zeta).sqrt();
                Regime::Under {
                    decay,
                    omega,
                    a: d0,
                    b: (initial_velocity + decay * d0) / omega,
                }
            } else if zeta == 1.0 {
                Regime::Critical {
                    omega: omega0,
                    a: d0,
                    b: initial_velocity + omega0 * d0,
                }
            } else {
                let root = (zeta * zeta - 1.0).sqrt();
                let r1 = -omega0 * (zeta - root);
                let r2 = -omega0 * (zeta + root);
                let c2 = (initial_velocity - r1 * d0) / (r2 - r1);
                Regime::Over {
                    r1,
                    r2,
                    c1: d0 - c2,
                    c2,
                }
            }
        };

        Self {
            to,
            from,
            regime,
            config,
        }
    }

    pub(crate) fn sample(&self, elapsed: Duration) -> SpringSample {
        let t = elapsed.as_secs_f64();
        let (displacement, velocity) = match self.regime {
            Regime::Snap => (0.0, 0.0),
            Regime::Under { decay, omega, a, b } => {
                let envelope = (-decay * t).exp();
                let (sin, cos) = (omega * t).sin_cos();
                let displacement = envelope * (a * cos + b * sin);
                let velocity =
                    envelope * ((omega * b - decay * a) * cos - (decay * b + omega * a) * sin);
                (displacement, velocity)
            }
            Regime::Critical { omega, a, b } => {
                let envelope = (-omega * t).exp();
                let displacement = envelope * (a + b * t);
                let velocity = envelope * (b - omega * (a + b * t));
                (displacement, velocity)
            }
            Regime::Over { r1, r2, c1, c2 } => {
                let e1 = (r1 * t).exp();
                let e2 = (r2 * t).exp();
                (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
            }
        };

        let position = self.to + displacement;
        let overshot = self.config.overshoot_clamping
            && self.from != self.to
            && if self.from < self.to {
                position > self.to
            } else {
                position < self.to
            };
        let resting = displacement.abs() <= self.config.rest_displacement_threshold
            && velocity.abs() <= self.config.rest_speed_threshold;

        if matches!(self.regime, Regime::Snap) || overshot || resting {
            SpringSample {
                position: self.to,
                velocity: 0.0,
                at_rest: true,
            }
        } else {
            SpringSample {
                position,
                velocity,
                at_rest: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(motion: &SpringMotion) -> (Duration, f64) {
        let mut elapsed = Duration::ZERO;
        let mut max_position = f64::MIN;
        loop {
            let sample = motion.sample(elapsed);
            max_position = max_position.max(sample.position);
            if sample.at_rest {
                assert_eq!(sample.position, motion.to);
                return (elapsed, max_position);
            }
            assert!(elapsed < Duration::from_secs(10), "spring never settled");
            elapsed += Duration::from_millis(16);
        }
    }

    #[test]
    fn test_default_conversion() {
        let config = SpringConfig::default();
        assert!((config.stiffness() - 447.4).abs() < 1e-9);
        assert_eq!(config.damping(), 22.0);
    }

    #[test]
    fn test_underdamped_spring_overshoots_and_settles() {
        let motion = SpringMotion::new(0.0, 8.0, 0.0, SpringConfig::default());
        assert_eq!(motion.sample(Duration::ZERO).position, 0.0);
        let (_, max_position) = settle(&motion);
        assert!(max_position > 8.0);
    }

    #[test]
    fn test_overshoot_clamping_stops_at_target() {
        let config = SpringConfig {
            overshoot_clamping: true,
            ..SpringConfig::default()
        };
        let motion = SpringMotion::new(0.0, 8.0, 0.0, config);
        let (_, max_position) = settle(&motion);
        assert!(max_position <= 8.0);
    }

    #[test]
    fn test_overdamped_and_critical_springs_settle() {
        let heavy = SpringConfig {
            friction: 60.0,
            ..SpringConfig::default()
        };
        let motion = SpringMotion::new(10.0, 2.0, 0.0, heavy);
        let (_, max_position) = settle(&motion);
        assert!(max_position <= 10.0 + 1e-9);

        // damping 2 * sqrt(stiffness) with stiffness 400 -> damping 40.
        let critical = SpringConfig {
            tension: (400.0 - 194.0) / 3.62 + 30.0,
            friction: (40.0 - 25.0) / 3.0 + 8.0,
            ..SpringConfig::default()
        };
        settle(&SpringMotion::new(0.0, 1.0, 0.0, critical));
    }

    #[test]
    fn test_zero_stiffness_snaps() {
        let config = SpringConfig {
            tension: -100.0,
            ..SpringConfig::default()
        };
        let sample = SpringMotion::new(0.0, 3.0, 0.0, config).sample(Duration::ZERO);
        assert!(sample.at_rest);
        assert_eq!(sample.position, 3.0);
    }

    #[test]
    fn test_initial_velocity_is_respected() {
        let motion = SpringMotion::new(0.0, 0.0, 5.0, SpringConfig::default());
        let sample = motion.sample(Duration::ZERO);
        assert!((sample.velocity - 5.0).abs() < 1e-9);
        assert!(!sample.at_rest);
        assert!(motion.sample(Duration::from_millis(10)).position > 0.0);
    }
}
