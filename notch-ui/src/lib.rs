//! Runtime primitives for notch widgets.
//!
//! `notch-ui` holds the pieces a widget needs but does not own itself:
//!
//! - [`geometry`]: points, sizes and rectangles in logical units.
//! - [`Color`] and [`Dp`] for styling.
//! - [`CallbackWith`] for comparable handler props.
//! - [`animation`]: a shared [`AnimatedValue`] driven by timing curves or
//!   springs, with derived interpolations.
//! - [`gesture`]: the responder protocol and a single-touch dispatcher.
//!
//! The crate does not render or lay anything out. A host reports sizes and
//! touches, ticks animations on its frame clock and draws whatever the widget
//! describes.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod color;
pub mod dp;
pub mod geometry;
pub mod gesture;
pub mod prop;

pub use crate::{
    animation::{AnimatedValue, AnimationConfig, AnimationOverrides, AnimationType},
    color::{Color, ColorParseError},
    dp::Dp,
    geometry::{Point, Rect, Size},
    gesture::{GestureResponder, GestureState, TouchDispatcher},
    prop::CallbackWith,
};
