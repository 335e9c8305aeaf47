//! Bookkeeping for the sizes the host reports for each slider part.

use notch_ui::Size;
use tracing::debug;

/// A slider part whose size is reported by the host layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasuredPart {
    /// The outer container.
    Container,
    /// The background track.
    Track,
    /// The thumb.
    Thumb,
}

/// The three sizes the slider geometry depends on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    /// Container size.
    pub container: Size,
    /// Track size.
    pub track: Size,
    /// Thumb size.
    pub thumb: Size,
}

/// Result of reporting a size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureOutcome {
    /// The size matched what was stored.
    Unchanged,
    /// Stored, but at least one part is still unknown.
    Stored,
    /// The last unknown part arrived. Reported once per tracker.
    AllMeasured(Measurements),
    /// A part changed after everything was known.
    Resized(Measurements),
}

impl MeasureOutcome {
    /// Whether the geometry derived from the sizes changed.
    pub fn needs_relayout(&self) -> bool {
        matches!(self, Self::AllMeasured(_) | Self::Resized(_))
    }
}

/// Collects part sizes and reports when all of them are known.
#[derive(Debug, Clone, Default)]
pub struct MeasurementTracker {
    container: Option<Size>,
    track: Option<Size>,
    thumb: Option<Size>,
    all_measured: bool,
}

impl MeasurementTracker {
    /// Creates a tracker with nothing measured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the size of `part`.
    pub fn set(&mut self, part: MeasuredPart, size: Size) -> MeasureOutcome {
        let slot = match part {
            MeasuredPart::Container => &mut self.container,
            MeasuredPart::Track => &mut self.track,
            MeasuredPart::Thumb => &mut self.thumb,
        };
        if *slot == Some(size) {
            return MeasureOutcome::Unchanged;
        }
        *slot = Some(size);

        let Some(measurements) = self.measurements() else {
            debug!(?part, ?size, "part measured");
            return MeasureOutcome::Stored;
        };
        if self.all_measured {
            debug!(?part, ?size, "part resized");
            MeasureOutcome::Resized(measurements)
        } else {
            self.all_measured = true;
            debug!(?measurements, "all slider parts measured");
            MeasureOutcome::AllMeasured(measurements)
        }
    }

    /// Records the container size.
    pub fn set_container(&mut self, size: Size) -> MeasureOutcome {
        self.set(MeasuredPart::Container, size)
    }

    /// Records the track size.
    pub fn set_track(&mut self, size: Size) -> MeasureOutcome {
        self.set(MeasuredPart::Track, size)
    }

    /// Records the thumb size.
    pub fn set_thumb(&mut self, size: Size) -> MeasureOutcome {
        self.set(MeasuredPart::Thumb, size)
    }

    /// Whether every part has been measured.
    pub fn all_measured(&self) -> bool {
        self.all_measured
    }

    /// All three sizes, once known.
    pub fn measurements(&self) -> Option<Measurements> {
        Some(Measurements {
            container: self.container?,
            track: self.track?,
            thumb: self.thumb?,
        })
    }

    /// The sizes known so far, with unknown parts at zero.
    pub fn sizes(&self) -> Measurements {
        Measurements {
            container: self.container.unwrap_or(Size::ZERO),
            track: self.track.unwrap_or(Size::ZERO),
            thumb: self.thumb.unwrap_or(Size::ZERO),
        }
    }
}
