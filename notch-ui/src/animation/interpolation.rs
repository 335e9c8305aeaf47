//! Range mapping for animated values.
//!
//! ## Usage
//!
//! Derive positions, widths or colors from a single animated scalar without
//! storing them separately.

use crate::color::Color;

use super::AnimatedValue;

/// How [`Interpolation::apply`] treats input outside its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Continue the linear mapping past the range.
    #[default]
    Extend,
    /// Pin the input to the nearest range bound.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// A linear mapping from an input range to an output range.
///
/// ```
/// use notch_ui::animation::{Extrapolate, Interpolation};
///
/// let half = Interpolation::new([0.0, 10.0], [0.0, 5.0]);
/// assert_eq!(half.apply(4.0), 2.0);
/// assert_eq!(half.apply(20.0), 10.0);
/// assert_eq!(half.extrapolate(Extrapolate::Clamp).apply(20.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    input: [f64; 2],
    output: [f64; 2],
    extrapolate_left: Extrapolate,
    extrapolate_right: Extrapolate,
}

impl Interpolation {
    /// Maps `input[0]..input[1]` onto `output[0]..output[1]`.
    pub fn new(input: [f64; 2], output: [f64; 2]) -> Self {
        Self {
            input,
            output,
            extrapolate_left: Extrapolate::Extend,
            extrapolate_right: Extrapolate::Extend,
        }
    }

    /// Sets the extrapolation on both sides.
    pub fn extrapolate(self, extrapolate: Extrapolate) -> Self {
        Self {
            extrapolate_left: extrapolate,
            extrapolate_right: extrapolate,
            ..self
        }
    }

    /// Sets the extrapolation below the input range.
    pub fn extrapolate_left(self, extrapolate: Extrapolate) -> Self {
        Self {
            extrapolate_left: extrapolate,
            ..self
        }
    }

    /// Sets the extrapolation above the input range.
    pub fn extrapolate_right(self, extrapolate: Extrapolate) -> Self {
        Self {
            extrapolate_right: extrapolate,
            ..self
        }
    }

    /// Maps a single input.
    pub fn apply(&self, input: f64) -> f64 {
        let [in_min, in_max] = self.input;
        let [out_min, out_max] = self.output;
        if input.is_nan() {
            return out_min;
        }

        let mut x = input;
        if x < in_min {
            match self.extrapolate_left {
                Extrapolate::Identity => return x,
                Extrapolate::Clamp => x = in_min,
                Extrapolate::Extend => {}
            }
        }
        if x > in_max {
            match self.extrapolate_right {
                Extrapolate::Identity => return x,
                Extrapolate::Clamp => x = in_max,
                Extrapolate::Extend => {}
            }
        }

        if out_min == out_max {
            return out_min;
        }
        if in_min == in_max {
            return if x <= in_min { out_min } else { out_max };
        }

        let progress = (x - in_min) / (in_max - in_min);
        out_min + progress * (out_max - out_min)
    }
}

/// A value derived from an [`AnimatedValue`], recomputed on every read.
#[derive(Clone, Debug)]
pub struct AnimatedInterpolation {
    source: AnimatedValue,
    interpolation: Interpolation,
    offset: f64,
}

impl AnimatedInterpolation {
    pub(crate) fn new(source: AnimatedValue, interpolation: Interpolation) -> Self {
        Self {
            source,
            interpolation,
            offset: 0.0,
        }
    }

    /// Current derived value.
    pub fn get(&self) -> f64 {
        self.interpolation.apply(self.source.get()) + self.offset
    }

    /// Derives `self + offset`.
    pub fn add(&self, offset: f64) -> Self {
        Self {
            offset: self.offset + offset,
            ..self.clone()
        }
    }

    /// The value this interpolation reads from.
    pub fn source(&self) -> &AnimatedValue {
        &self.source
    }
}

/// A color blended between two endpoints by an [`AnimatedValue`].
///
/// The interpolation output is treated as the blend factor and clamped to
/// `[0.0, 1.0]`.
#[derive(Clone, Debug)]
pub struct AnimatedColor {
    source: AnimatedValue,
    interpolation: Interpolation,
    from: Color,
    to: Color,
}

impl AnimatedColor {
    /// Blends `from` into `to` as `interpolation` goes from 0 to 1.
    pub fn new(
        source: AnimatedValue,
        interpolation: Interpolation,
        from: Color,
        to: Color,
    ) -> Self {
        Self {
            source,
            interpolation,
            from,
            to,
        }
    }

    /// Current color.
    pub fn get(&self) -> Color {
        let t = self.interpolation.apply(self.source.get());
        self.from.lerp(self.to, t as f32)
    }
}
