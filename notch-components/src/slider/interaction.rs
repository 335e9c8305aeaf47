use notch_ui::{AnimatedValue, GestureState, Point};
use tracing::{debug, trace};

use super::{SliderArgs, SliderLayout, mapping::value_from_pixel_offset};

/// A drag between grant and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct DragSession {
    /// Thumb offset when the drag began; moves are applied relative to it.
    anchor_pixel_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// What a drag operation acts on.
pub(super) struct DragTarget<'a> {
    pub args: &'a SliderArgs,
    pub value: &'a AnimatedValue,
    /// `None` until every part has been measured.
    pub layout: Option<SliderLayout>,
}

impl DragTarget<'_> {
    fn value_for(&self, session: &DragSession, dx: f64) -> Option<f64> {
        let layout = self.layout?;
        Some(value_from_pixel_offset(
            session.anchor_pixel_offset + dx,
            layout.range,
            self.args.step,
            layout.track_length(),
        ))
    }
}

/// Turns responder callbacks into value updates and slider notifications.
#[derive(Debug, Clone, Default)]
pub(super) struct GestureController {
    state: DragState,
}

impl GestureController {
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Whether a touch at `point`, in touch-area coordinates, grabs the thumb.
    pub fn should_capture(&self, point: Point, target: &DragTarget<'_>) -> bool {
        if self.is_dragging() || target.args.disabled {
            return false;
        }
        let Some(layout) = target.layout else {
            return false;
        };
        layout.thumb_touch_rect(target.value.get()).contains(point)
    }

    pub fn grant(&mut self, target: &DragTarget<'_>) {
        let value = target.value.get();
        let anchor_pixel_offset = target.layout.map_or(0.0, |layout| layout.thumb_left(value));
        debug!(value, anchor_pixel_offset, "slider drag granted");
        self.state = DragState::Dragging(DragSession {
            anchor_pixel_offset,
        });
        target.args.on_sliding_start.call(value);
    }

    pub fn drag(&mut self, gesture: &GestureState, target: &DragTarget<'_>) {
        let DragState::Dragging(session) = self.state else {
            return;
        };
        if target.args.disabled {
            return;
        }
        let Some(value) = target.value_for(&session, gesture.dx) else {
            return;
        };
        trace!(dx = gesture.dx, value, "slider drag");
        target.value.set(value);
        target.args.on_value_change.call(target.value.get());
    }

    /// Ends the drag, for a release or a forced termination alike.
    pub fn finish(&mut self, gesture: &GestureState, target: &DragTarget<'_>) {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return;
        };
        if target.args.disabled {
            debug!("disabled slider drag ended");
            return;
        }
        if let Some(value) = target.value_for(&session, gesture.dx) {
            target.value.set(value);
        }
        let value = target.value.get();
        debug!(dx = gesture.dx, value, "slider drag finished");
        target.args.on_sliding_complete.call(value);
    }
}
