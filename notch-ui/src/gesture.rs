//! Touch gesture negotiation.
//!
//! A widget that wants to own a touch stream implements [`GestureResponder`].
//! The host feeds raw touches into a [`TouchDispatcher`], which asks the
//! responder whether it wants the gesture, then delivers grant, move, release
//! and termination with the displacement accumulated since the touch began.
//!
//! ```
//! use notch_ui::geometry::Point;
//! use notch_ui::gesture::{GestureResponder, GestureState, TouchDispatcher};
//!
//! #[derive(Default)]
//! struct Recorder {
//!     last_dx: f64,
//! }
//!
//! impl GestureResponder for Recorder {
//!     fn on_start_should_set(&self, _point: Point) -> bool {
//!         true
//!     }
//!     fn on_grant(&mut self, _state: &GestureState) {}
//!     fn on_move(&mut self, state: &GestureState) {
//!         self.last_dx = state.dx;
//!     }
//!     fn on_release(&mut self, _state: &GestureState) {}
//!     fn on_terminate(&mut self, _state: &GestureState) {}
//! }
//!
//! let mut dispatcher = TouchDispatcher::new(Recorder::default());
//! assert!(dispatcher.touch_start(1, Point::new(10.0, 10.0)));
//! dispatcher.touch_move(1, Point::new(25.0, 12.0));
//! assert_eq!(dispatcher.responder().last_dx, 15.0);
//! ```

use tracing::{debug, trace};

use crate::geometry::Point;

/// Touch progress reported to a responder.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    /// Horizontal displacement since the touch began.
    pub dx: f64,
    /// Vertical displacement since the touch began.
    pub dy: f64,
    /// Latest touch x in widget coordinates.
    pub move_x: f64,
    /// Latest touch y in widget coordinates.
    pub move_y: f64,
    /// Touches currently on the screen.
    pub number_active_touches: usize,
}

/// The capability a widget exposes to claim and follow a touch stream.
pub trait GestureResponder {
    /// Asked when a touch starts. Returning `true` claims the gesture.
    fn on_start_should_set(&self, point: Point) -> bool;

    /// Asked on each move of an unclaimed touch.
    fn on_move_should_set(&self, _point: Point, _state: &GestureState) -> bool {
        false
    }

    /// The gesture now belongs to this responder.
    fn on_grant(&mut self, state: &GestureState);

    /// The touch moved while owned.
    fn on_move(&mut self, state: &GestureState);

    /// The touch lifted while owned.
    fn on_release(&mut self, state: &GestureState);

    /// Another party wants the gesture. Returning `true` gives it up.
    fn on_termination_request(&self) -> bool {
        true
    }

    /// The gesture was taken away or cancelled by the host.
    fn on_terminate(&mut self, state: &GestureState);
}

#[derive(Debug, Clone, Copy)]
struct ActiveTouch {
    id: u64,
    origin: Point,
    last: Point,
    granted: bool,
}

impl ActiveTouch {
    fn state(&self, number_active_touches: usize) -> GestureState {
        GestureState {
            dx: self.last.x - self.origin.x,
            dy: self.last.y - self.origin.y,
            move_x: self.last.x,
            move_y: self.last.y,
            number_active_touches,
        }
    }
}

/// Routes a single touch stream to a [`GestureResponder`].
///
/// Only one touch is tracked at a time; touches that start while another is
/// down are ignored.
#[derive(Debug)]
pub struct TouchDispatcher<R> {
    responder: R,
    active: Option<ActiveTouch>,
}

impl<R: GestureResponder> TouchDispatcher<R> {
    /// Wraps a responder.
    pub fn new(responder: R) -> Self {
        Self {
            responder,
            active: None,
        }
    }

    /// The wrapped responder.
    pub fn responder(&self) -> &R {
        &self.responder
    }

    /// The wrapped responder, mutably.
    pub fn responder_mut(&mut self) -> &mut R {
        &mut self.responder
    }

    /// Unwraps the responder.
    pub fn into_inner(self) -> R {
        self.responder
    }

    /// Whether the responder currently owns a gesture.
    pub fn is_responding(&self) -> bool {
        self.active.is_some_and(|touch| touch.granted)
    }

    /// A touch went down. Returns whether the responder claimed it.
    pub fn touch_start(&mut self, id: u64, point: Point) -> bool {
        if let Some(active) = self.active {
            debug!(id, active = active.id, "ignoring additional touch");
            return false;
        }
        let mut touch = ActiveTouch {
            id,
            origin: point,
            last: point,
            granted: false,
        };
        if self.responder.on_start_should_set(point) {
            touch.granted = true;
            trace!(id, x = point.x, y = point.y, "touch claimed on start");
            self.responder.on_grant(&touch.state(1));
        }
        self.active = Some(touch);
        touch.granted
    }

    /// A touch moved.
    pub fn touch_move(&mut self, id: u64, point: Point) {
        let Some(touch) = self.active.as_mut().filter(|touch| touch.id == id) else {
            return;
        };
        touch.last = point;
        let state = touch.state(1);
        if touch.granted {
            self.responder.on_move(&state);
        } else if self.responder.on_move_should_set(point, &state) {
            touch.granted = true;
            trace!(id, x = point.x, y = point.y, "touch claimed on move");
            self.responder.on_grant(&state);
        }
    }

    /// A touch lifted.
    pub fn touch_end(&mut self, id: u64) {
        if let Some(touch) = self.take_active(id)
            && touch.granted
        {
            self.responder.on_release(&touch.state(0));
        }
    }

    /// The host cancelled a touch.
    pub fn touch_cancel(&mut self, id: u64) {
        if let Some(touch) = self.take_active(id)
            && touch.granted
        {
            self.responder.on_terminate(&touch.state(0));
        }
    }

    /// An ancestor wants to take over the current gesture.
    ///
    /// Returns whether the stream is now free: either nothing was owned or
    /// the responder agreed to give it up.
    pub fn request_termination(&mut self) -> bool {
        let Some(touch) = self.active else {
            return true;
        };
        if !touch.granted {
            self.active = None;
            return true;
        }
        if !self.responder.on_termination_request() {
            debug!(id = touch.id, "responder refused termination");
            return false;
        }
        self.active = None;
        self.responder.on_terminate(&touch.state(0));
        true
    }

    fn take_active(&mut self, id: u64) -> Option<ActiveTouch> {
        self.active.take_if(|touch| touch.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        claim_start: bool,
        claim_move: bool,
        refuse_termination: bool,
        events: Vec<(&'static str, f64)>,
    }

    impl GestureResponder for Recorder {
        fn on_start_should_set(&self, point: Point) -> bool {
            self.claim_start && point.x >= 0.0
        }

        fn on_move_should_set(&self, _point: Point, state: &GestureState) -> bool {
            self.claim_move && state.dx.abs() > 5.0
        }

        fn on_grant(&mut self, state: &GestureState) {
            self.events.push(("grant", state.dx));
        }

        fn on_move(&mut self, state: &GestureState) {
            self.events.push(("move", state.dx));
        }

        fn on_release(&mut self, state: &GestureState) {
            self.events.push(("release", state.dx));
        }

        fn on_termination_request(&self) -> bool {
            !self.refuse_termination
        }

        fn on_terminate(&mut self, state: &GestureState) {
            self.events.push(("terminate", state.dx));
        }
    }

    fn claiming() -> Recorder {
        Recorder {
            claim_start: true,
            ..Recorder::default()
        }
    }

    #[test]
    fn test_claimed_touch_lifecycle() {
        let mut dispatcher = TouchDispatcher::new(claiming());
        assert!(dispatcher.touch_start(7, Point::new(10.0, 5.0)));
        assert!(dispatcher.is_responding());
        dispatcher.touch_move(7, Point::new(30.0, 9.0));
        dispatcher.touch_move(7, Point::new(60.0, 9.0));
        dispatcher.touch_end(7);
        assert!(!dispatcher.is_responding());
        assert_eq!(
            dispatcher.responder().events,
            vec![("grant", 0.0), ("move", 20.0), ("move", 50.0), ("release", 50.0)]
        );
    }

    #[test]
    fn test_unclaimed_touch_is_not_delivered() {
        let mut dispatcher = TouchDispatcher::new(Recorder::default());
        assert!(!dispatcher.touch_start(1, Point::new(0.0, 0.0)));
        dispatcher.touch_move(1, Point::new(40.0, 0.0));
        dispatcher.touch_end(1);
        assert!(dispatcher.responder().events.is_empty());
    }

    #[test]
    fn test_claim_on_move() {
        let mut dispatcher = TouchDispatcher::new(Recorder {
            claim_move: true,
            ..Recorder::default()
        });
        assert!(!dispatcher.touch_start(1, Point::new(0.0, 0.0)));
        dispatcher.touch_move(1, Point::new(3.0, 0.0));
        dispatcher.touch_move(1, Point::new(8.0, 0.0));
        dispatcher.touch_move(1, Point::new(12.0, 0.0));
        dispatcher.touch_end(1);
        assert_eq!(
            dispatcher.responder().events,
            vec![("grant", 8.0), ("move", 12.0), ("release", 12.0)]
        );
    }

    #[test]
    fn test_second_touch_is_ignored() {
        let mut dispatcher = TouchDispatcher::new(claiming());
        assert!(dispatcher.touch_start(1, Point::new(0.0, 0.0)));
        assert!(!dispatcher.touch_start(2, Point::new(50.0, 0.0)));
        dispatcher.touch_move(2, Point::new(80.0, 0.0));
        dispatcher.touch_end(2);
        assert!(dispatcher.is_responding());
        assert_eq!(dispatcher.responder().events, vec![("grant", 0.0)]);
    }

    #[test]
    fn test_cancel_terminates() {
        let mut dispatcher = TouchDispatcher::new(claiming());
        dispatcher.touch_start(1, Point::new(0.0, 0.0));
        dispatcher.touch_move(1, Point::new(4.0, 0.0));
        dispatcher.touch_cancel(1);
        assert_eq!(
            dispatcher.responder().events,
            vec![("grant", 0.0), ("move", 4.0), ("terminate", 4.0)]
        );
    }

    #[test]
    fn test_termination_request() {
        let mut dispatcher = TouchDispatcher::new(claiming());
        assert!(dispatcher.request_termination());
        dispatcher.touch_start(1, Point::new(0.0, 0.0));
        assert!(dispatcher.request_termination());
        assert!(!dispatcher.is_responding());
        dispatcher.touch_move(1, Point::new(9.0, 0.0));
        assert_eq!(dispatcher.responder().events, vec![("grant", 0.0), ("terminate", 0.0)]);

        let mut stubborn = TouchDispatcher::new(Recorder {
            refuse_termination: true,
            ..claiming()
        });
        stubborn.touch_start(1, Point::new(0.0, 0.0));
        assert!(!stubborn.request_termination());
        assert!(stubborn.is_responding());
    }
}
