//! A draggable slider for picking a number from a range.
//!
//! ## Usage
//!
//! Use for settings like volume or brightness, or for any user-adjustable
//! value. The host reports the measured size of the container, track and
//! thumb, routes touches through a [`TouchDispatcher`], ticks
//! [`Slider::advance_frame`] on its frame clock and draws the
//! [`SliderScene`] returned by [`Slider::render`].
//!
//! [`TouchDispatcher`]: notch_ui::TouchDispatcher

use std::{sync::Arc, time::Instant};

use derive_setters::Setters;
use notch_ui::{
    AnimatedValue, AnimationOverrides, AnimationType, CallbackWith, Color, Dp, GestureResponder,
    GestureState, Point, Size,
};
use tracing::debug;

use crate::image::{ImageData, ImageError, ImageSource, load_image_from_source};
use interaction::{DragTarget, GestureController};

pub use layout::{IntervalDot, SliderLayout};
pub use mapping::{ValueRange, thumb_pixel_offset, value_from_pixel_offset};
pub use measure::{MeasureOutcome, MeasuredPart, MeasurementTracker, Measurements};
pub use render::{SceneNode, SceneNodeKind, SliderScene};

mod interaction;
mod layout;
mod mapping;
mod measure;
mod render;

/// Default sizes and colors used by [`Slider`].
pub struct SliderDefaults;

impl SliderDefaults {
    /// Track thickness.
    pub const TRACK_SIZE: Dp = Dp(4.0);
    /// Thumb diameter.
    pub const THUMB_SIZE: Dp = Dp(20.0);
    /// Container height.
    pub const CONTAINER_HEIGHT: Dp = Dp(40.0);
    /// Interval dot diameter.
    pub const INTERVAL_DOT_SIZE: Dp = Dp(8.0);
    /// Height of the row the interval dots are centred in.
    pub const INTERVAL_ROW_HEIGHT: Dp = Dp(20.0);
    /// Size of the area that grabs the thumb.
    pub const THUMB_TOUCH_SIZE: Size = Size::from_dp(Dp(40.0), Dp(40.0));
    /// Color of the track left of the thumb.
    pub const MINIMUM_TRACK_TINT: Color = Color::from_rgb_u8(0x3f, 0x3f, 0x3f);
    /// Color of the track right of the thumb.
    pub const MAXIMUM_TRACK_TINT: Color = Color::from_rgb_u8(0xb3, 0xb3, 0xb3);
    /// Thumb color.
    pub const THUMB_TINT: Color = Color::from_rgb_u8(0x34, 0x34, 0x34);
    /// Fill of the touch area when debugging.
    pub const DEBUG_TOUCH_AREA_COLOR: Color = Color::ORANGE;
    /// Fill of the thumb touch rect when debugging.
    pub const DEBUG_THUMB_TOUCH_RECT_COLOR: Color = Color::GREEN;
    /// Opacity of both debug overlays.
    pub const DEBUG_OPACITY: f32 = 0.5;
    /// Most interval dots drawn. Finer steps draw none.
    pub const MAX_INTERVAL_DOTS: usize = 512;
}

/// Style overrides for one slider part.
#[derive(Debug, Clone, Copy, PartialEq, Default, Setters)]
#[setters(strip_option)]
pub struct PartStyle {
    /// Requested width.
    pub width: Option<Dp>,
    /// Requested height.
    pub height: Option<Dp>,
    /// Corner radius.
    pub corner_radius: Option<Dp>,
    /// Fill color, taking precedence over the tint props.
    pub background: Option<Color>,
    /// Opacity.
    pub opacity: Option<f32>,
}

/// Arguments for [`Slider`].
#[derive(PartialEq, Clone, Debug, Setters)]
pub struct SliderArgs {
    /// The value the slider shows. Clamped to the range.
    pub value: f64,
    /// Lower end of the range.
    pub minimum_value: f64,
    /// Upper end of the range.
    pub maximum_value: f64,
    /// Value granularity; zero or less means continuous.
    pub step: f64,
    /// Ignore user interaction.
    pub disabled: bool,
    /// Size of the area that grabs the thumb.
    #[setters(into)]
    pub thumb_touch_size: Size,
    /// Color of the track left of the thumb.
    pub minimum_track_tint_color: Color,
    /// Color of the track right of the thumb.
    pub maximum_track_tint_color: Color,
    /// Thumb color.
    pub thumb_tint_color: Color,
    /// Called with the new value on each drag move.
    #[setters(skip)]
    pub on_value_change: CallbackWith<f64>,
    /// Called when a drag begins.
    #[setters(skip)]
    pub on_sliding_start: CallbackWith<f64>,
    /// Called when a drag ends.
    #[setters(skip)]
    pub on_sliding_complete: CallbackWith<f64>,
    /// Image drawn inside the thumb.
    #[setters(strip_option, into)]
    pub thumb_image: Option<Arc<ImageData>>,
    /// Draw the touch area and the thumb touch rect.
    pub debug_touch_area: bool,
    /// Animate changes of [`value`](Self::value) instead of jumping.
    pub animate_transitions: bool,
    /// Transition kind for animated value changes.
    pub animation_type: AnimationType,
    /// Overrides applied to the transition defaults.
    pub animation_config: AnimationOverrides,
    /// Draw a dot for every step, up to
    /// [`SliderDefaults::MAX_INTERVAL_DOTS`] of them.
    pub should_show_intervals: bool,
    /// Container style.
    pub style: PartStyle,
    /// Track style.
    pub track_style: PartStyle,
    /// Thumb style.
    pub thumb_style: PartStyle,
    /// Interval dot style.
    pub interval_style: PartStyle,
}

impl SliderArgs {
    /// Sets the on_value_change handler.
    pub fn on_value_change<F>(mut self, on_value_change: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_value_change = CallbackWith::new(on_value_change);
        self
    }

    /// Sets the on_value_change handler using a shared callback.
    pub fn on_value_change_shared(mut self, on_value_change: impl Into<CallbackWith<f64>>) -> Self {
        self.on_value_change = on_value_change.into();
        self
    }

    /// Sets the on_sliding_start handler.
    pub fn on_sliding_start<F>(mut self, on_sliding_start: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_sliding_start = CallbackWith::new(on_sliding_start);
        self
    }

    /// Sets the on_sliding_start handler using a shared callback.
    pub fn on_sliding_start_shared(
        mut self,
        on_sliding_start: impl Into<CallbackWith<f64>>,
    ) -> Self {
        self.on_sliding_start = on_sliding_start.into();
        self
    }

    /// Sets the on_sliding_complete handler.
    pub fn on_sliding_complete<F>(mut self, on_sliding_complete: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_sliding_complete = CallbackWith::new(on_sliding_complete);
        self
    }

    /// Sets the on_sliding_complete handler using a shared callback.
    pub fn on_sliding_complete_shared(
        mut self,
        on_sliding_complete: impl Into<CallbackWith<f64>>,
    ) -> Self {
        self.on_sliding_complete = on_sliding_complete.into();
        self
    }

    /// Decodes `source` and draws it inside the thumb.
    pub fn thumb_image_from(self, source: &ImageSource) -> Result<Self, ImageError> {
        Ok(self.thumb_image(load_image_from_source(source)?))
    }

    /// The value range.
    pub fn range(&self) -> ValueRange {
        ValueRange::new(self.minimum_value, self.maximum_value)
    }

    /// Size of each interval dot.
    pub fn interval_dot_size(&self) -> Size {
        Size::from_dp(
            self.interval_style
                .width
                .unwrap_or(SliderDefaults::INTERVAL_DOT_SIZE),
            self.interval_style
                .height
                .unwrap_or(SliderDefaults::INTERVAL_DOT_SIZE),
        )
    }

    /// Sizes the host should give each part before it measures them.
    pub fn layout_hints(&self) -> LayoutHints {
        LayoutHints {
            container_height: self
                .style
                .height
                .unwrap_or(SliderDefaults::CONTAINER_HEIGHT),
            track_height: self
                .track_style
                .height
                .unwrap_or(SliderDefaults::TRACK_SIZE),
            thumb_size: Size::from_dp(
                self.thumb_style
                    .width
                    .unwrap_or(SliderDefaults::THUMB_SIZE),
                self.thumb_style
                    .height
                    .unwrap_or(SliderDefaults::THUMB_SIZE),
            ),
        }
    }
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            value: 0.0,
            minimum_value: 0.0,
            maximum_value: 1.0,
            step: 0.0,
            disabled: false,
            thumb_touch_size: SliderDefaults::THUMB_TOUCH_SIZE,
            minimum_track_tint_color: SliderDefaults::MINIMUM_TRACK_TINT,
            maximum_track_tint_color: SliderDefaults::MAXIMUM_TRACK_TINT,
            thumb_tint_color: SliderDefaults::THUMB_TINT,
            on_value_change: CallbackWith::default(),
            on_sliding_start: CallbackWith::default(),
            on_sliding_complete: CallbackWith::default(),
            thumb_image: None,
            debug_touch_area: false,
            animate_transitions: false,
            animation_type: AnimationType::default(),
            animation_config: AnimationOverrides::default(),
            should_show_intervals: false,
            style: PartStyle::default(),
            track_style: PartStyle::default(),
            thumb_style: PartStyle::default(),
            interval_style: PartStyle::default(),
        }
    }
}

/// Preferred part sizes derived from the style props.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutHints {
    /// Container height; the width comes from the host.
    pub container_height: Dp,
    /// Track height; the track spans the container width.
    pub track_height: Dp,
    /// Thumb size.
    pub thumb_size: Size,
}

/// # slider
///
/// A horizontal slider whose thumb follows a drag across the track.
///
/// ## Usage
///
/// Create it once, keep it alive across frames and feed it host events.
/// Implements [`GestureResponder`], so wrap it in a [`TouchDispatcher`] to
/// route touches to it. Touch points are in touch-area coordinates, see
/// [`SliderLayout::touch_area_rect`].
///
/// ## Parameters
///
/// - `args` — configures the slider's value, range, appearance and
///   callbacks; see [`SliderArgs`].
///
/// ## Examples
///
/// ```
/// use notch_components::slider::{Slider, SliderArgs};
/// use notch_ui::{Point, Size, TouchDispatcher};
///
/// let mut slider = TouchDispatcher::new(Slider::new(
///     SliderArgs::default()
///         .maximum_value(10.0)
///         .on_value_change(|value| println!("slider moved to {value}")),
/// ));
/// slider.responder_mut().on_container_layout(Size::new(110.0, 40.0));
/// slider.responder_mut().on_track_layout(Size::new(110.0, 4.0));
/// slider.responder_mut().on_thumb_layout(Size::new(10.0, 10.0));
///
/// assert!(slider.touch_start(1, Point::new(20.0, 20.0)));
/// slider.touch_move(1, Point::new(70.0, 20.0));
/// slider.touch_end(1);
/// assert_eq!(slider.responder().value(), 5.0);
/// ```
///
/// [`TouchDispatcher`]: notch_ui::TouchDispatcher
#[derive(Debug)]
pub struct Slider {
    args: SliderArgs,
    value: AnimatedValue,
    measurements: MeasurementTracker,
    gesture: GestureController,
}

fn layout_for(args: &SliderArgs, measurements: &MeasurementTracker) -> Option<SliderLayout> {
    if !measurements.all_measured() {
        return None;
    }
    Some(SliderLayout {
        measurements: measurements.measurements()?,
        thumb_touch_size: args.thumb_touch_size,
        range: args.range(),
    })
}

impl Slider {
    /// Creates a slider showing `args.value`.
    pub fn new(args: SliderArgs) -> Self {
        let value = AnimatedValue::new(args.range().clamp(args.value));
        Self {
            args,
            value,
            measurements: MeasurementTracker::new(),
            gesture: GestureController::default(),
        }
    }

    /// Current arguments.
    pub fn args(&self) -> &SliderArgs {
        &self.args
    }

    /// The value currently shown, mid-animation included.
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// The shared value driving the thumb.
    pub fn animated_value(&self) -> &AnimatedValue {
        &self.value
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Replaces the arguments, syncing the shown value if the value prop
    /// changed.
    pub fn update_args(&mut self, args: SliderArgs) {
        self.update_args_at(args, Instant::now());
    }

    /// [`update_args`](Self::update_args) with an explicit transition start.
    pub fn update_args_at(&mut self, args: SliderArgs, now: Instant) {
        let previous = std::mem::replace(&mut self.args, args);
        let range = self.args.range();

        if previous.value != self.args.value && !self.gesture.is_dragging() {
            let target = range.clamp(self.args.value);
            debug!(
                from = self.value.get(),
                to = target,
                animated = self.args.animate_transitions,
                "slider value prop changed"
            );
            if self.args.animate_transitions {
                let config = self
                    .args
                    .animation_config
                    .resolve(self.args.animation_type);
                self.value.animate_to_at(target, &config, now);
            } else {
                self.value.set(target);
            }
        } else if range != previous.range() {
            let current = self.value.get();
            let clamped = range.clamp(current);
            if clamped != current {
                self.value.set(clamped);
            }
        }
    }

    /// Records a part size. Returns whether the scene must be rebuilt.
    pub fn on_layout(&mut self, part: MeasuredPart, size: Size) -> bool {
        self.measurements.set(part, size) != MeasureOutcome::Unchanged
    }

    /// Records the container size.
    pub fn on_container_layout(&mut self, size: Size) -> bool {
        self.on_layout(MeasuredPart::Container, size)
    }

    /// Records the track size.
    pub fn on_track_layout(&mut self, size: Size) -> bool {
        self.on_layout(MeasuredPart::Track, size)
    }

    /// Records the thumb size.
    pub fn on_thumb_layout(&mut self, size: Size) -> bool {
        self.on_layout(MeasuredPart::Thumb, size)
    }

    /// Whether every part has been measured.
    pub fn all_measured(&self) -> bool {
        self.measurements.all_measured()
    }

    /// Steps a running value transition. Returns whether it is still
    /// running.
    pub fn advance_frame(&mut self, now: Instant) -> bool {
        self.value.tick(now)
    }

    /// Geometry for the current sizes, once every part is measured.
    pub fn layout(&self) -> Option<SliderLayout> {
        layout_for(&self.args, &self.measurements)
    }

    /// Describes what to draw for the current state.
    pub fn render(&self) -> SliderScene {
        render::build_scene(
            &self.args,
            &self.value,
            self.measurements.sizes(),
            self.layout(),
        )
    }

    fn drag_parts(&mut self) -> (&mut GestureController, DragTarget<'_>) {
        let layout = layout_for(&self.args, &self.measurements);
        (
            &mut self.gesture,
            DragTarget {
                args: &self.args,
                value: &self.value,
                layout,
            },
        )
    }
}

impl GestureResponder for Slider {
    fn on_start_should_set(&self, point: Point) -> bool {
        let target = DragTarget {
            args: &self.args,
            value: &self.value,
            layout: self.layout(),
        };
        self.gesture.should_capture(point, &target)
    }

    fn on_grant(&mut self, _state: &GestureState) {
        let (gesture, target) = self.drag_parts();
        gesture.grant(&target);
    }

    fn on_move(&mut self, state: &GestureState) {
        let (gesture, target) = self.drag_parts();
        gesture.drag(state, &target);
    }

    fn on_release(&mut self, state: &GestureState) {
        let (gesture, target) = self.drag_parts();
        gesture.finish(state, &target);
    }

    fn on_terminate(&mut self, state: &GestureState) {
        let (gesture, target) = self.drag_parts();
        gesture.finish(state, &target);
    }
}
