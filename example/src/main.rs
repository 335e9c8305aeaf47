use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use notch_components::{
    ImageSource,
    slider::{SceneNodeKind, Slider, SliderArgs},
};
use notch_ui::{AnimationType, Point, Size, TouchDispatcher};
use tracing::info;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Clone, Copy, ValueEnum)]
enum Transition {
    /// Jump straight to the new value
    None,
    /// Eased curve
    Timing,
    /// Damped spring
    Spring,
}

#[derive(Parser)]
#[command(name = "example")]
#[command(version, about = "Drives a slider through a scripted drag and update", long_about = None)]
struct Cli {
    /// Container width in dp
    #[arg(long, default_value_t = 220.0)]
    width: f64,
    /// Lower end of the range
    #[arg(long, default_value_t = 0.0)]
    min: f64,
    /// Upper end of the range
    #[arg(long, default_value_t = 10.0)]
    max: f64,
    /// Step size; 0 for continuous
    #[arg(long, default_value_t = 0.0)]
    step: f64,
    /// Horizontal drag distance in dp
    #[arg(long, default_value_t = 100.0, allow_hyphen_values = true)]
    drag: f64,
    /// Value pushed from outside after the drag
    #[arg(long)]
    set_value: Option<f64>,
    /// How the pushed value is applied
    #[arg(long, value_enum, default_value_t = Transition::Timing)]
    transition: Transition,
    /// Draw interval dots
    #[arg(long)]
    intervals: bool,
    /// Draw the touch areas
    #[arg(long)]
    debug_touch_area: bool,
    /// Image file drawn inside the thumb
    #[arg(long)]
    thumb_image: Option<String>,
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,example=info,notch_ui=info,notch_components=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .try_init();
}

fn slider_args(cli: &Cli) -> Result<SliderArgs> {
    if !(cli.width.is_finite() && cli.width > 0.0) {
        bail!("width must be a positive number, got {}", cli.width);
    }
    let mut args = SliderArgs::default()
        .minimum_value(cli.min)
        .maximum_value(cli.max)
        .step(cli.step)
        .should_show_intervals(cli.intervals)
        .debug_touch_area(cli.debug_touch_area)
        .on_sliding_start(|value| info!(value, "sliding started"))
        .on_value_change(|value| info!(value, "value changed"))
        .on_sliding_complete(|value| info!(value, "sliding complete"));
    match cli.transition {
        Transition::None => {}
        Transition::Timing => {
            args = args
                .animate_transitions(true)
                .animation_type(AnimationType::Timing);
        }
        Transition::Spring => {
            args = args
                .animate_transitions(true)
                .animation_type(AnimationType::Spring);
        }
    }
    if let Some(path) = &cli.thumb_image {
        args = args
            .thumb_image_from(&ImageSource::Path(path.clone()))
            .with_context(|| format!("failed to load thumb image {path}"))?;
    }
    Ok(args)
}

fn log_scene(slider: &Slider) {
    for node in slider.render().nodes.iter().filter(|node| node.is_visible()) {
        let rect = node.rect();
        info!(
            kind = ?node.kind,
            x = rect.x,
            y = rect.y,
            w = rect.width,
            h = rect.height,
            opacity = node.opacity,
            "node"
        );
    }
}

fn measure(slider: &mut Slider, width: f64) {
    let hints = slider.args().layout_hints();
    slider.on_container_layout(Size::new(width, hints.container_height.to_f64()));
    slider.on_track_layout(Size::new(width, hints.track_height.to_f64()));
    slider.on_thumb_layout(hints.thumb_size);
}

fn drag(dispatcher: &mut TouchDispatcher<Slider>, distance: f64) -> Result<()> {
    let slider = dispatcher.responder();
    let Some(layout) = slider.layout() else {
        bail!("slider has not been measured");
    };
    let grab = layout.thumb_touch_rect(slider.value());
    let start = Point::new(grab.x + grab.width / 2.0, grab.y + grab.height / 2.0);
    if !dispatcher.touch_start(1, start) {
        bail!("the slider did not take the touch at {start:?}");
    }

    const MOVES: u32 = 5;
    for i in 1..=MOVES {
        let dx = distance * f64::from(i) / f64::from(MOVES);
        dispatcher.touch_move(1, start.offset(dx, 0.0));
    }
    dispatcher.touch_end(1);
    Ok(())
}

fn push_value(slider: &mut Slider, value: f64) {
    // One scene for the whole transition; the thumb node reads the live value.
    let scene = slider.render();
    let thumb = scene.node(SceneNodeKind::Thumb);

    let start = Instant::now();
    slider.update_args_at(slider.args().clone().value(value), start);
    let mut now = start;
    let mut frames = 0;
    while slider.advance_frame(now + FRAME) {
        now += FRAME;
        frames += 1;
        let thumb_x = thumb.map(|node| node.rect().x);
        tracing::debug!(frame = frames, value = slider.value(), ?thumb_x, "frame");
    }
    info!(frames, value = slider.value(), "transition settled");
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut slider = Slider::new(slider_args(&cli)?);
    measure(&mut slider, cli.width);
    info!(value = slider.value(), "initial scene");
    log_scene(&slider);

    let mut dispatcher = TouchDispatcher::new(slider);
    drag(&mut dispatcher, cli.drag)?;
    let mut slider = dispatcher.into_inner();
    info!(value = slider.value(), "after drag");
    log_scene(&slider);

    if let Some(value) = cli.set_value {
        push_value(&mut slider, value);
        log_scene(&slider);
    }
    Ok(())
}
