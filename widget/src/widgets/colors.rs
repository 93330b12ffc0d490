//! Color palette for the ring widgets
//!
//! Centralizes every color the widgets draw with, plus the fixed 11-stop
//! sweep ramp used to fill the progress arc.

use tiny_skia::Color;

/// Background track ring (deep blue).
pub fn track() -> Color {
    Color::from_rgba8(21, 34, 56, 255)
}

/// Default solid progress color, used when the sweep ramp is disabled.
pub fn progress_blue() -> Color {
    Color::from_rgba8(30, 136, 229, 255)
}

/// Base ring drawn on top of the drop shadow.
pub fn ring_base() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}

/// Drop shadow tint at a given opacity.
pub fn shadow(alpha: u8) -> Color {
    Color::from_rgba8(10, 12, 16, alpha)
}

/// Outer halo of the leading-edge dot.
pub fn dot_halo() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}

/// Inner core of the leading-edge dot.
pub fn dot_core() -> Color {
    Color::from_rgba8(41, 121, 255, 255)
}

/// Backdrop the demo clears the canvas with.
pub fn backdrop() -> Color {
    Color::from_rgba8(30, 30, 30, 255)
}

/// The fixed 11-stop sweep ramp: a blue cycle, evenly spaced around the
/// circle. First and last stops match so the gradient closes seamlessly at
/// the 3 o'clock seam.
pub fn sweep_ramp() -> [Color; 11] {
    [
        Color::from_rgba8(13, 71, 161, 255), // wrap color
        Color::from_rgba8(227, 242, 253, 255),
        Color::from_rgba8(187, 222, 251, 255),
        Color::from_rgba8(144, 202, 249, 255),
        Color::from_rgba8(100, 181, 246, 255),
        Color::from_rgba8(66, 165, 245, 255),
        Color::from_rgba8(33, 150, 243, 255),
        Color::from_rgba8(30, 136, 229, 255),
        Color::from_rgba8(25, 118, 210, 255),
        Color::from_rgba8(21, 101, 192, 255),
        Color::from_rgba8(13, 71, 161, 255), // wrap color again
    ]
}
