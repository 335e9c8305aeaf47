//! Widgets built on `notch-ui`.
//!
//! # Usage
//!
//! A widget is a plain struct. The host owns it, reports part sizes after its
//! layout pass, routes touches through a [`TouchDispatcher`], ticks animations
//! on its frame clock and draws the scene the widget describes.
//!
//! # Example
//!
//! ```
//! use notch_components::slider::{SceneNodeKind, Slider, SliderArgs};
//! use notch_ui::Size;
//!
//! let mut slider = Slider::new(SliderArgs::default().maximum_value(100.0).value(25.0));
//! slider.on_container_layout(Size::new(220.0, 40.0));
//! slider.on_track_layout(Size::new(220.0, 4.0));
//! slider.on_thumb_layout(Size::new(20.0, 20.0));
//!
//! let scene = slider.render();
//! let thumb = scene.node(SceneNodeKind::Thumb).map(|node| node.rect().x);
//! assert_eq!(thumb, Some(50.0));
//! ```
//!
//! [`TouchDispatcher`]: notch_ui::TouchDispatcher
#![deny(missing_docs, clippy::unwrap_used)]

pub mod image;
pub mod slider;

pub use crate::{
    image::{ImageData, ImageError, ImageSource, load_image_from_source},
    slider::{Slider, SliderArgs},
};
