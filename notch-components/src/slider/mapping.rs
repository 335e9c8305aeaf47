//! Conversion between slider values and thumb pixel offsets.

/// The inclusive `[min, max]` range of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl ValueRange {
    /// Creates a range. No ordering is enforced; see [`ValueRange::clamp`].
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `max > min`.
    pub fn is_valid(&self) -> bool {
        self.max > self.min
    }

    /// Pins `value` into the range.
    ///
    /// Degenerate ranges and NaN inputs resolve to `min`; infinities go to
    /// the nearest bound.
    pub fn clamp(&self, value: f64) -> f64 {
        if !self.is_valid() || value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }
}

/// Negative, NaN and infinite steps mean "continuous".
pub(crate) fn effective_step(step: f64) -> f64 {
    if step.is_finite() && step > 0.0 {
        step
    } else {
        0.0
    }
}

/// Distance of the thumb's left edge from the track start for `value`.
pub fn thumb_pixel_offset(
    value: f64,
    range: ValueRange,
    container_width: f64,
    thumb_width: f64,
) -> f64 {
    if !range.is_valid() {
        return 0.0;
    }
    let track_length = (container_width - thumb_width).max(0.0);
    let ratio = (value - range.min) / range.span();
    let offset = ratio * track_length;
    if offset.is_finite() { offset } else { 0.0 }
}

/// Value under a thumb whose left edge sits `pixel_offset` along a track of
/// `track_length`, snapped to `step` when it is positive.
pub fn value_from_pixel_offset(
    pixel_offset: f64,
    range: ValueRange,
    step: f64,
    track_length: f64,
) -> f64 {
    if track_length <= 0.0 || track_length.is_nan() || !range.is_valid() {
        return range.min;
    }
    let ratio = pixel_offset / track_length;
    let step = effective_step(step);
    if step > 0.0 {
        let steps = (ratio * range.span() / step).round();
        range.clamp(range.min + steps * step)
    } else {
        range.clamp(range.min + ratio * range.span())
    }
}
