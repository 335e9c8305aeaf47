//! Easing curves for timed transitions.

/// Maps linear progress in `[0.0, 1.0]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// A gentle acceleration, `cubic-bezier(0.42, 0, 1, 1)`.
    Ease,
    /// [`Easing::Ease`] run forwards for the first half and mirrored for the
    /// second half.
    #[default]
    EaseInOut,
    /// Quadratic ease-in-out.
    QuadInOut,
    /// Cubic ease-in-out.
    CubicInOut,
    /// A custom CSS-style cubic bezier curve.
    Bezier(CubicBezier),
}

impl Easing {
    /// Applies the curve. Input is clamped to `[0.0, 1.0]`.
    pub fn apply(&self, progress: f64) -> f64 {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        match self {
            Easing::Linear => t,
            Easing::Ease => EASE.solve(t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    EASE.solve(t * 2.0) / 2.0
                } else {
                    1.0 - EASE.solve((1.0 - t) * 2.0) / 2.0
                }
            }
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Bezier(curve) => curve.solve(t),
        }
    }
}

const EASE: CubicBezier = CubicBezier {
    x1: 0.42,
    y1: 0.0,
    x2: 1.0,
    y2: 1.0,
};

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f64 = 1e-3;
const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 32;

/// A cubic bezier from `(0, 0)` to `(1, 1)` with two control points.
///
/// The x coordinates of the control points are clamped to `[0, 1]` so the
/// curve stays a function of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// Creates a curve from two control points.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn sample(p1: f64, p2: f64, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        ((a * t + b) * t + c) * t
    }

    fn slope(p1: f64, p2: f64, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    fn t_for_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let slope = Self::slope(self.x1, self.x2, t);
            if slope.abs() < NEWTON_MIN_SLOPE {
                break;
            }
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < SUBDIVISION_PRECISION {
                return t;
            }
            t -= error / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            let current = Self::sample(self.x1, self.x2, t);
            if (current - x).abs() < SUBDIVISION_PRECISION {
                break;
            }
            if current < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Evaluates the curve's y for a given x in `[0, 1]`.
    pub fn solve(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        if self.x1 == self.y1 && self.x2 == self.y2 {
            return x;
        }
        Self::sample(self.y1, self.y2, self.t_for_x(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::Ease,
            Easing::EaseInOut,
            Easing::QuadInOut,
            Easing::CubicInOut,
            Easing::Bezier(CubicBezier::new(0.25, 0.1, 0.25, 1.0)),
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let easing = Easing::EaseInOut;
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-6);
        for t in [0.1, 0.2, 0.3, 0.4] {
            let sum = easing.apply(t) + easing.apply(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-6, "t = {t}, sum = {sum}");
        }
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut previous = 0.0;
        for i in 1..=100 {
            let value = Easing::Ease.apply(i as f64 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let curve = CubicBezier::new(0.3, 0.3, 0.7, 0.7);
        assert_eq!(curve.solve(0.25), 0.25);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(Easing::CubicInOut.apply(-1.0), 0.0);
        assert_eq!(Easing::CubicInOut.apply(3.0), 1.0);
        assert_eq!(Easing::Linear.apply(f64::NAN), 0.0);
    }
}
