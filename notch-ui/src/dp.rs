//! # Density-Independent Pixels (Dp)
//!
//! Widget styles are specified in dp, the same unit the host layout system
//! reports measured sizes in. A value of `Dp(20.0)` describes a length that
//! appears roughly the same physical size on any screen density; the host is
//! responsible for the conversion to physical pixels.
//!
//! ## Usage
//!
//! ```
//! use notch_ui::Dp;
//!
//! const THUMB_SIZE: Dp = Dp::new(20.0);
//! let half = THUMB_SIZE / 2.0;
//! assert_eq!(half, Dp(10.0));
//! ```

use std::ops::{Add, Div, Mul, Sub};

/// Density-independent pixels (dp).
///
/// The `Dp` struct wraps a single `f64` value, matching the precision of the
/// geometry types in [`crate::geometry`].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero length.
    pub const ZERO: Dp = Dp(0.0);

    /// Creates a new `Dp` instance with the specified value.
    ///
    /// This is a const function, allowing `Dp` values to be created at
    /// compile time.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Returns the raw value.
    pub const fn to_f64(self) -> f64 {
        self.0
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp::new(value)
    }
}

impl From<Dp> for f64 {
    fn from(value: Dp) -> Self {
        value.0
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Self) -> Self::Output {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Self) -> Self::Output {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f64> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f64) -> Self::Output {
        Dp(self.0 * rhs)
    }
}

impl Div<f64> for Dp {
    type Output = Dp;

    fn div(self, rhs: f64) -> Self::Output {
        Dp(self.0 / rhs)
    }
}
