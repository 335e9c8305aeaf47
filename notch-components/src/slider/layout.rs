use notch_ui::{Point, Rect, Size};
use smallvec::SmallVec;
use tracing::debug;

use super::{
    SliderDefaults,
    mapping::{ValueRange, effective_step, thumb_pixel_offset},
    measure::Measurements,
};

/// Geometry of a measured slider.
///
/// Rects are in container coordinates unless noted otherwise. Parts are
/// centred vertically in the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    /// Measured part sizes.
    pub measurements: Measurements,
    /// Requested size of the area that grabs the thumb.
    pub thumb_touch_size: Size,
    /// Value range the thumb travels over.
    pub range: ValueRange,
}

/// Position of one interval dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalDot {
    /// The slider value this dot marks.
    pub value: f64,
    /// Dot rect in container coordinates.
    pub rect: Rect,
}

pub(super) type IntervalDots = SmallVec<[IntervalDot; 16]>;

impl SliderLayout {
    fn centered_y(&self, height: f64) -> f64 {
        (self.measurements.container.height - height) / 2.0
    }

    /// Distance the thumb's left edge can travel.
    pub fn track_length(&self) -> f64 {
        (self.measurements.container.width - self.measurements.thumb.width).max(0.0)
    }

    /// How far the touch-capture area extends past the thumb horizontally and
    /// past the container vertically, in total.
    pub fn touch_overflow(&self) -> Size {
        let Measurements {
            container, thumb, ..
        } = self.measurements;
        Size::new(
            (self.thumb_touch_size.width - thumb.width).max(0.0),
            (self.thumb_touch_size.height - container.height).max(0.0),
        )
    }

    /// The touch-capture area: the container grown by half the overflow on
    /// every side.
    pub fn touch_area_rect(&self) -> Rect {
        let overflow = self.touch_overflow();
        let container = self.measurements.container;
        Rect::new(
            -overflow.width / 2.0,
            -overflow.height / 2.0,
            container.width + overflow.width,
            container.height + overflow.height,
        )
    }

    /// Converts a point in container coordinates to touch-area coordinates.
    pub fn to_touch_area(&self, point: Point) -> Point {
        let origin = self.touch_area_rect().origin();
        point - origin
    }

    /// Left edge of the thumb for `value`.
    pub fn thumb_left(&self, value: f64) -> f64 {
        thumb_pixel_offset(
            value,
            self.range,
            self.measurements.container.width,
            self.measurements.thumb.width,
        )
    }

    /// The visual thumb.
    pub fn thumb_rect(&self, value: f64) -> Rect {
        let thumb = self.measurements.thumb;
        Rect::new(
            self.thumb_left(value),
            self.centered_y(thumb.height),
            thumb.width,
            thumb.height,
        )
    }

    /// The area that grabs the thumb, in touch-area coordinates.
    ///
    /// It has the requested touch size and is centred on the visual thumb.
    pub fn thumb_touch_rect(&self, value: f64) -> Rect {
        let overflow = self.touch_overflow();
        let touch = self.thumb_touch_size;
        let Measurements {
            container, thumb, ..
        } = self.measurements;
        Rect::new(
            overflow.width / 2.0 + self.thumb_left(value) + (thumb.width - touch.width) / 2.0,
            overflow.height / 2.0 + (container.height - touch.height) / 2.0,
            touch.width,
            touch.height,
        )
    }

    /// The background track.
    pub fn track_rect(&self) -> Rect {
        let track = self.measurements.track;
        Rect::new(0.0, self.centered_y(track.height), track.width, track.height)
    }

    /// Track from its start to the thumb's centre.
    pub fn filled_track_rect(&self, thumb_left: f64) -> Rect {
        let track = self.track_rect();
        Rect {
            width: (thumb_left + self.measurements.thumb.width / 2.0).max(0.0),
            ..track
        }
    }

    /// Dots marking each step, spread edge to edge across the track.
    ///
    /// There are `floor((max - min + 1) / step)` of them; none without a
    /// positive step or when there would be more than
    /// [`SliderDefaults::MAX_INTERVAL_DOTS`].
    pub(super) fn interval_dots(&self, step: f64, dot: Size, row_height: f64) -> IntervalDots {
        let step = effective_step(step);
        if step == 0.0 || !self.range.is_valid() {
            return IntervalDots::new();
        }
        let count = ((self.range.span() + 1.0) / step).floor();
        if !count.is_finite() || count < 1.0 {
            return IntervalDots::new();
        }
        if count > SliderDefaults::MAX_INTERVAL_DOTS as f64 {
            debug!(count, step, "too many interval dots, drawing none");
            return IntervalDots::new();
        }
        let count = count as usize;
        let row_width = self.measurements.track.width;
        let gap = if count > 1 {
            ((row_width - dot.width * count as f64) / (count - 1) as f64).max(0.0)
        } else {
            0.0
        };
        let y = self.centered_y(row_height) + (row_height - dot.height) / 2.0;
        (0..count)
            .map(|i| IntervalDot {
                value: self.range.min + i as f64 * step,
                rect: Rect::new(i as f64 * (dot.width + gap), y, dot.width, dot.height),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(container: Size, thumb: Size) -> SliderLayout {
        SliderLayout {
            measurements: Measurements {
                container,
                track: Size::new(container.width, 4.0),
                thumb,
            },
            thumb_touch_size: Size::new(40.0, 40.0),
            range: ValueRange::new(0.0, 10.0),
        }
    }

    #[test]
    fn test_touch_overflow_and_area() {
        let layout = layout(Size::new(110.0, 40.0), Size::new(10.0, 10.0));
        assert_eq!(layout.touch_overflow(), Size::new(30.0, 0.0));
        assert_eq!(layout.touch_area_rect(), Rect::new(-15.0, 0.0, 140.0, 40.0));
        assert_eq!(layout.to_touch_area(Point::new(0.0, 5.0)), Point::new(15.0, 5.0));

        let short = self::layout(Size::new(200.0, 30.0), Size::new(50.0, 20.0));
        assert_eq!(short.touch_overflow(), Size::new(0.0, 10.0));
        assert_eq!(short.touch_area_rect(), Rect::new(0.0, -5.0, 200.0, 40.0));
    }

    #[test]
    fn test_thumb_touch_rect_is_centered_on_thumb() {
        let layout = layout(Size::new(110.0, 40.0), Size::new(10.0, 10.0));
        assert_eq!(layout.thumb_touch_rect(0.0), Rect::new(0.0, 0.0, 40.0, 40.0));
        assert_eq!(layout.thumb_touch_rect(5.0), Rect::new(50.0, 0.0, 40.0, 40.0));

        // In container coordinates the touch rect shares the thumb's centre.
        let thumb = layout.thumb_rect(5.0);
        let touch = layout
            .thumb_touch_rect(5.0)
            .translate(layout.touch_area_rect().x, layout.touch_area_rect().y);
        assert_eq!(thumb.x + thumb.width / 2.0, touch.x + touch.width / 2.0);
        assert_eq!(thumb.y + thumb.height / 2.0, touch.y + touch.height / 2.0);
    }

    #[test]
    fn test_track_rects() {
        let layout = layout(Size::new(110.0, 40.0), Size::new(10.0, 10.0));
        assert_eq!(layout.track_rect(), Rect::new(0.0, 18.0, 110.0, 4.0));
        assert_eq!(layout.thumb_rect(10.0), Rect::new(100.0, 15.0, 10.0, 10.0));
        assert_eq!(
            layout.filled_track_rect(layout.thumb_left(5.0)),
            Rect::new(0.0, 18.0, 55.0, 4.0)
        );
        assert_eq!(layout.track_length(), 100.0);
    }

    #[test]
    fn test_interval_dots() {
        let layout = layout(Size::new(110.0, 40.0), Size::new(10.0, 10.0));
        let dots = layout.interval_dots(2.0, Size::new(8.0, 8.0), 20.0);
        // floor((10 - 0 + 1) / 2)
        assert_eq!(dots.len(), 5);
        assert_eq!(dots[0].rect, Rect::new(0.0, 16.0, 8.0, 8.0));
        assert_eq!(dots[4].rect.x + dots[4].rect.width, 110.0);
        assert_eq!(dots[3].value, 6.0);

        assert!(layout.interval_dots(0.0, Size::new(8.0, 8.0), 20.0).is_empty());
        assert!(layout.interval_dots(-1.0, Size::new(8.0, 8.0), 20.0).is_empty());
        assert_eq!(layout.interval_dots(20.0, Size::new(8.0, 8.0), 20.0).len(), 0);
        assert_eq!(layout.interval_dots(11.0, Size::new(8.0, 8.0), 20.0).len(), 1);
    }

    #[test]
    fn test_dot_count_is_bounded() {
        let mut layout = layout(Size::new(110.0, 40.0), Size::new(10.0, 10.0));
        layout.range = ValueRange::new(0.0, 1000.0);
        assert!(layout.interval_dots(1e-6, Size::new(8.0, 8.0), 20.0).is_empty());

        layout.range = ValueRange::new(0.0, 511.0);
        let dots = layout.interval_dots(1.0, Size::new(8.0, 8.0), 20.0);
        assert_eq!(dots.len(), SliderDefaults::MAX_INTERVAL_DOTS);
    }

    #[test]
    fn test_crowded_dots_do_not_overlap_backwards() {
        let layout = layout(Size::new(20.0, 40.0), Size::new(10.0, 10.0));
        let dots = layout.interval_dots(1.0, Size::new(8.0, 8.0), 20.0);
        assert_eq!(dots.len(), 11);
        assert_eq!(dots[1].rect.x, 8.0);
    }
}
