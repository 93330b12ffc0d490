//! Demo host for the circular progress ring
//!
//! The host analog of an activity wiring a slider to the widget: it sets the
//! maximum once at startup, replays a scripted sequence of slider positions
//! (one of which lands while the previous animation is still in flight and
//! replaces it), runs a fixed-timestep frame loop, and writes the final
//! frame as a PNG.
//!
//! Run with: cargo run -p ringview-demo [-- --out ring.png --frames]

use std::env;
use std::time::{Duration, Instant};

use ringview_widget::{Canvas, CircularProgress, CircularProgressConfig, colors};
use tracing::{debug, info};
use tracing_subscriber::filter::EnvFilter;

/// Side length the host proposes to the widget.
const PROPOSED_SIDE: f32 = 480.0;

/// Duration of one frame, ~60fps.
const FRAME_DURATION: Duration = Duration::from_millis(16);

/// A scripted slider change: fires at `at` after startup with `value`.
struct SliderEvent {
    at: Duration,
    value: i32,
}

/// The script stands in for slider callbacks. The 700 ms event arrives while
/// the 600 ms animation is still running and replaces it.
const SLIDER_SCRIPT: [SliderEvent; 3] = [
    SliderEvent {
        at: Duration::ZERO,
        value: 25,
    },
    SliderEvent {
        at: Duration::from_millis(600),
        value: 60,
    },
    SliderEvent {
        at: Duration::from_millis(700),
        value: 85,
    },
];

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let mut out_path = "ring.png".to_string();
    let mut dump_frames = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" if i + 1 < args.len() => {
                out_path = args[i + 1].clone();
                i += 1;
            }
            "--frames" => dump_frames = true,
            other => {
                eprintln!("Usage: ringview-demo [--out <path>] [--frames]");
                eprintln!("Unknown argument: {other}");
                return;
            }
        }
        i += 1;
    }

    let mut widget = CircularProgress::new(CircularProgressConfig::default());
    widget.set_max_progress(100);

    let (width, height) = widget.measure(PROPOSED_SIDE, Some(PROPOSED_SIDE));
    let mut canvas = match Canvas::new(width as u32, height as u32) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create canvas: {e}");
            return;
        }
    };

    info!(width, height, "rendering circular progress demo");

    let start = Instant::now();
    let mut next_event = 0;
    let mut frame_index = 0u32;
    loop {
        let now = Instant::now();
        let elapsed = now.duration_since(start);

        // forward due slider positions to the widget
        while next_event < SLIDER_SCRIPT.len() && elapsed >= SLIDER_SCRIPT[next_event].at {
            let value = SLIDER_SCRIPT[next_event].value;
            debug!(value, "slider moved");
            widget.set_progress_at(value, now);
            next_event += 1;
        }

        let animating = widget.tick(now);

        canvas.clear(colors::backdrop());
        widget.render(&mut canvas);

        if dump_frames {
            let frame_path = format!("frame_{frame_index:04}.png");
            if let Err(e) = canvas.save_png(&frame_path) {
                eprintln!("Failed to write {frame_path}: {e}");
                return;
            }
        }
        frame_index += 1;

        if next_event == SLIDER_SCRIPT.len() && !animating {
            break;
        }
        std::thread::sleep(FRAME_DURATION);
    }

    match canvas.save_png(&out_path) {
        Ok(()) => info!(
            path = %out_path,
            frames = frame_index,
            progress = widget.progress(),
            "demo finished"
        ),
        Err(e) => eprintln!("Failed to write {out_path}: {e}"),
    }
}
