use std::sync::Arc;

use notch_ui::{
    Color, Dp, Rect,
    animation::{AnimatedColor, AnimatedInterpolation, AnimatedValue, Extrapolate, Interpolation},
};

use crate::image::ImageData;

use super::{
    PartStyle, SliderArgs, SliderDefaults, SliderLayout, mapping::effective_step,
    measure::Measurements,
};

/// Which slider part a [`SceneNode`] draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneNodeKind {
    /// The outer container.
    Container,
    /// The unfilled background track.
    Track,
    /// One interval dot, by index from the minimum.
    IntervalDot(usize),
    /// The track from its start to the thumb.
    FilledTrack,
    /// The thumb.
    Thumb,
    /// The area that captures touches.
    TouchArea,
    /// The area that grabs the thumb, drawn only when debugging.
    ThumbTouchRect,
}

/// How a node follows the slider value between renders.
#[derive(Debug, Clone)]
enum Binding {
    Fixed,
    /// The left edge tracks the value.
    X(AnimatedInterpolation),
    /// The width tracks the value.
    Width(AnimatedInterpolation),
    Color(AnimatedColor),
}

/// One rounded rectangle the host should draw.
///
/// Nodes that depend on the slider value read it on every call to
/// [`rect`](Self::rect) or [`color`](Self::color), so a scene stays current
/// while the value animates or is dragged. Rebuild the scene only when the
/// args or the measured sizes change.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// The part this node draws.
    pub kind: SceneNodeKind,
    rect: Rect,
    color: Color,
    binding: Binding,
    /// Opacity applied on top of the color's alpha.
    pub opacity: f32,
    /// Corner radius.
    pub corner_radius: Dp,
    /// Image drawn inside the node, if any.
    pub image: Option<Arc<ImageData>>,
}

impl SceneNode {
    fn new(kind: SceneNodeKind, rect: Rect, color: Color) -> Self {
        Self {
            kind,
            rect,
            color,
            binding: Binding::Fixed,
            opacity: 1.0,
            corner_radius: Dp::ZERO,
            image: None,
        }
    }

    fn bound(mut self, binding: Binding) -> Self {
        self.binding = binding;
        self
    }

    fn styled(mut self, style: &PartStyle, default_radius: Dp) -> Self {
        self.corner_radius = style.corner_radius.unwrap_or(default_radius);
        if let Some(opacity) = style.opacity {
            self.opacity = opacity;
        }
        self
    }

    /// Bounds in container coordinates for the current value.
    pub fn rect(&self) -> Rect {
        match &self.binding {
            Binding::X(x) => Rect {
                x: x.get(),
                ..self.rect
            },
            Binding::Width(width) => Rect {
                width: width.get().max(0.0),
                ..self.rect
            },
            Binding::Fixed | Binding::Color(_) => self.rect,
        }
    }

    /// Fill color for the current value.
    pub fn color(&self) -> Color {
        match &self.binding {
            Binding::Color(color) => color.get(),
            _ => self.color,
        }
    }

    /// Whether the node changes with the slider value.
    pub fn follows_value(&self) -> bool {
        !matches!(self.binding, Binding::Fixed)
    }

    /// Whether the node would show anything.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.color().a > 0.0
    }
}

/// Everything the host needs to draw a slider, back to front.
#[derive(Debug, Clone, Default)]
pub struct SliderScene {
    /// Nodes in paint order.
    pub nodes: Vec<SceneNode>,
}

impl SliderScene {
    /// The first node of `kind`.
    pub fn node(&self, kind: SceneNodeKind) -> Option<&SceneNode> {
        self.nodes.iter().find(|node| node.kind == kind)
    }

    /// The interval dots, in order.
    pub fn interval_dots(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes
            .iter()
            .filter(|node| matches!(node.kind, SceneNodeKind::IntervalDot(_)))
    }
}

/// Color of the dot that marks `dot_value`, blending from the maximum tint to
/// the minimum tint as the value climbs over the step below the dot.
pub(super) fn interval_color(
    value: &AnimatedValue,
    dot_value: f64,
    step: f64,
    args: &SliderArgs,
) -> AnimatedColor {
    AnimatedColor::new(
        value.clone(),
        Interpolation::new([dot_value - step, dot_value], [0.0, 1.0])
            .extrapolate(Extrapolate::Clamp),
        args.maximum_track_tint_color,
        args.minimum_track_tint_color,
    )
}

pub(super) fn build_scene(
    args: &SliderArgs,
    value: &AnimatedValue,
    sizes: Measurements,
    layout: Option<SliderLayout>,
) -> SliderScene {
    let all_measured = layout.is_some();
    let layout = layout.unwrap_or(SliderLayout {
        measurements: sizes,
        thumb_touch_size: args.thumb_touch_size,
        range: args.range(),
    });
    let measurements = layout.measurements;
    let value_opacity = if all_measured { 1.0 } else { 0.0 };

    // A reversed or empty range pins the thumb to the start of the track.
    let travel = if layout.range.is_valid() {
        layout.track_length()
    } else {
        0.0
    };
    let thumb_left = value.interpolate(
        Interpolation::new([layout.range.min, layout.range.max], [0.0, travel])
            .extrapolate(Extrapolate::Clamp),
    );

    let mut nodes = Vec::new();

    let container = Rect::new(
        0.0,
        0.0,
        measurements.container.width,
        measurements.container.height,
    );
    nodes.push(
        SceneNode::new(
            SceneNodeKind::Container,
            container,
            args.style.background.unwrap_or(Color::TRANSPARENT),
        )
        .styled(&args.style, Dp::ZERO),
    );

    nodes.push(
        SceneNode::new(
            SceneNodeKind::Track,
            layout.track_rect(),
            args.track_style
                .background
                .unwrap_or(args.maximum_track_tint_color),
        )
        .styled(&args.track_style, SliderDefaults::TRACK_SIZE / 2.0),
    );

    if args.should_show_intervals {
        let dot_size = args.interval_dot_size();
        let step = effective_step(args.step);
        let dots = layout.interval_dots(step, dot_size, SliderDefaults::INTERVAL_ROW_HEIGHT.0);
        for (index, dot) in dots.iter().enumerate() {
            let node = match args.interval_style.background {
                Some(background) => {
                    SceneNode::new(SceneNodeKind::IntervalDot(index), dot.rect, background)
                }
                None => {
                    let color = interval_color(value, dot.value, step, args);
                    SceneNode::new(SceneNodeKind::IntervalDot(index), dot.rect, color.get())
                        .bound(Binding::Color(color))
                }
            };
            nodes.push(node.styled(
                &args.interval_style,
                Dp(dot_size.width.min(dot_size.height) / 2.0),
            ));
        }
    }

    let mut filled = SceneNode::new(
        SceneNodeKind::FilledTrack,
        layout.filled_track_rect(thumb_left.get()),
        args.minimum_track_tint_color,
    )
    .bound(Binding::Width(thumb_left.add(measurements.thumb.width / 2.0)))
    .styled(&args.track_style, SliderDefaults::TRACK_SIZE / 2.0);
    filled.opacity *= value_opacity;
    nodes.push(filled);

    let mut thumb = SceneNode::new(
        SceneNodeKind::Thumb,
        layout.thumb_rect(layout.range.min),
        args.thumb_style.background.unwrap_or(args.thumb_tint_color),
    )
    .bound(Binding::X(thumb_left.clone()))
    .styled(&args.thumb_style, SliderDefaults::THUMB_SIZE / 2.0);
    thumb.opacity *= value_opacity;
    thumb.image = args.thumb_image.clone();
    nodes.push(thumb);

    let touch_area = if all_measured {
        layout.touch_area_rect()
    } else {
        container
    };
    let mut touch = SceneNode::new(SceneNodeKind::TouchArea, touch_area, Color::TRANSPARENT);
    if args.debug_touch_area {
        touch.color = SliderDefaults::DEBUG_TOUCH_AREA_COLOR;
        touch.opacity = SliderDefaults::DEBUG_OPACITY;
    }
    nodes.push(touch);

    if args.debug_touch_area && all_measured {
        let origin = touch_area.origin();
        let at_start = layout
            .thumb_touch_rect(layout.range.min)
            .translate(origin.x, origin.y);
        let mut debug_rect = SceneNode::new(
            SceneNodeKind::ThumbTouchRect,
            at_start,
            SliderDefaults::DEBUG_THUMB_TOUCH_RECT_COLOR,
        )
        .bound(Binding::X(thumb_left.add(at_start.x)));
        debug_rect.opacity = SliderDefaults::DEBUG_OPACITY;
        nodes.push(debug_rect);
    }

    SliderScene { nodes }
}
