//! Canvas: CPU drawing surface for the widgets
//!
//! Wraps a `tiny_skia::Pixmap` and exposes the stroke/fill primitives the
//! widgets draw with. tiny-skia has no conic gradient shader, so sweep
//! gradients are drawn as short arc slices with per-slice sampled colors.

use std::path::Path as FsPath;

use thiserror::Error;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Stroke,
    Transform,
};

use crate::geometry::point_on_circle;

/// Angular step used when flattening an arc into a polyline, degrees.
const ARC_STEP_DEG: f32 = 2.0;

/// Angular width of one sweep-gradient slice, degrees.
const RAMP_SLICE_DEG: f32 = 3.0;

/// Slices overlap slightly so antialiased edges don't leave seams.
const RAMP_SLICE_OVERLAP_DEG: f32 = 0.6;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("png encoding failed: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

/// An in-memory RGBA surface the widgets render into.
///
/// The host decides what happens to the pixels afterwards: present them,
/// blit them into a window, or encode them with [`Canvas::save_png`].
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill the whole surface with one color.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color);
    }

    /// Draw a filled circle.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.push_circle(cx, cy, radius);
        let Some(path) = pb.finish() else { return };
        self.pixmap.fill_path(
            &path,
            &paint_for(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Stroke a full circle outline; a wide stroke yields an annulus.
    pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, stroke_width: f32, color: Color) {
        if radius <= 0.0 || stroke_width <= 0.0 {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.push_circle(cx, cy, radius);
        let Some(path) = pb.finish() else { return };
        let stroke = Stroke {
            width: stroke_width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint_for(color),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    /// Stroke an arc starting at `start_deg`, sweeping `sweep_deg` clockwise.
    ///
    /// The arc is flattened into a polyline with round joins; `round_caps`
    /// selects round or butt line caps.
    pub fn stroke_arc(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        stroke_width: f32,
        color: Color,
        round_caps: bool,
    ) {
        if radius <= 0.0 || stroke_width <= 0.0 || sweep_deg == 0.0 {
            return;
        }
        let steps = (sweep_deg.abs() / ARC_STEP_DEG).ceil().max(1.0) as usize;
        let mut pb = PathBuilder::new();
        let (x0, y0) = point_on_circle(cx, cy, radius, start_deg);
        pb.move_to(x0, y0);
        for i in 1..=steps {
            let angle = start_deg + sweep_deg * (i as f32 / steps as f32);
            let (x, y) = point_on_circle(cx, cy, radius, angle);
            pb.line_to(x, y);
        }
        let Some(path) = pb.finish() else { return };
        let stroke = Stroke {
            width: stroke_width,
            line_cap: if round_caps { LineCap::Round } else { LineCap::Butt },
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint_for(color),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    /// Stroke an arc filled with a sweep ramp.
    ///
    /// `stops` are evenly spaced around the full circle, position 0.0 at
    /// 3 o'clock, increasing clockwise; the arc picks up whatever portion of
    /// the ramp it passes through. Round caps are drawn at both ends in the
    /// sampled end colors.
    pub fn stroke_arc_ramp(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        stroke_width: f32,
        stops: &[Color],
    ) {
        if radius <= 0.0 || stroke_width <= 0.0 || sweep_deg <= 0.0 || stops.is_empty() {
            return;
        }
        let slices = (sweep_deg / RAMP_SLICE_DEG).ceil().max(1.0) as usize;
        let slice_sweep = sweep_deg / slices as f32;
        for i in 0..slices {
            let slice_start = start_deg + slice_sweep * i as f32;
            // every slice but the last extends into its neighbor
            let extend = if i + 1 == slices { 0.0 } else { RAMP_SLICE_OVERLAP_DEG };
            let mid = slice_start + slice_sweep / 2.0;
            let color = sample_ramp(stops, circle_fraction(mid));
            self.stroke_arc(
                cx,
                cy,
                radius,
                slice_start,
                slice_sweep + extend,
                stroke_width,
                color,
                false,
            );
        }

        let cap_radius = stroke_width / 2.0;
        let (sx, sy) = point_on_circle(cx, cy, radius, start_deg);
        self.fill_circle(sx, sy, cap_radius, sample_ramp(stops, circle_fraction(start_deg)));
        let end_deg = start_deg + sweep_deg;
        let (ex, ey) = point_on_circle(cx, cy, radius, end_deg);
        self.fill_circle(ex, ey, cap_radius, sample_ramp(stops, circle_fraction(end_deg)));
    }

    /// Encode the surface as a PNG file.
    pub fn save_png(&self, path: impl AsRef<FsPath>) -> Result<(), CanvasError> {
        self.pixmap.save_png(path)?;
        Ok(())
    }

    /// Premultiplied pixel at (x, y); `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremultipliedColorU8> {
        self.pixmap.pixel(x, y)
    }

    /// Raw premultiplied RGBA bytes, for hosts that blit the surface.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    paint
}

/// Fraction of the full circle for an angle, wrapped into [0, 1).
fn circle_fraction(angle_deg: f32) -> f32 {
    angle_deg.rem_euclid(360.0) / 360.0
}

/// Sample an evenly spaced color ramp at `t` in [0, 1].
pub fn sample_ramp(stops: &[Color], t: f32) -> Color {
    if stops.is_empty() {
        return Color::TRANSPARENT;
    }
    if stops.len() == 1 {
        return stops[0];
    }
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (stops.len() - 1) as f32;
    let index = (scaled.floor() as usize).min(stops.len() - 2);
    let frac = scaled - index as f32;
    lerp_color(stops[index], stops[index + 1], frac)
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let lerp = |x: f32, y: f32| (x + (y - x) * t).clamp(0.0, 1.0);
    Color::from_rgba(
        lerp(a.red(), b.red()),
        lerp(a.green(), b.green()),
        lerp(a.blue(), b.blue()),
        lerp(a.alpha(), b.alpha()),
    )
    .unwrap_or(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(canvas: &Canvas, x: u32, y: u32) -> bool {
        canvas.pixel(x, y).is_some_and(|p| p.alpha() > 0)
    }

    #[test]
    fn zero_sized_canvas_is_an_error() {
        assert!(matches!(
            Canvas::new(0, 100),
            Err(CanvasError::InvalidSize { .. })
        ));
        assert!(matches!(
            Canvas::new(100, 0),
            Err(CanvasError::InvalidSize { .. })
        ));
    }

    #[test]
    fn fill_circle_touches_its_center() {
        let mut canvas = Canvas::new(100, 100).expect("canvas");
        canvas.fill_circle(50.0, 50.0, 10.0, Color::WHITE);
        assert!(painted(&canvas, 50, 50));
        assert!(!painted(&canvas, 80, 80));
    }

    #[test]
    fn stroke_circle_leaves_the_center_empty() {
        let mut canvas = Canvas::new(100, 100).expect("canvas");
        canvas.stroke_circle(50.0, 50.0, 30.0, 6.0, Color::WHITE);
        assert!(painted(&canvas, 80, 50));
        assert!(painted(&canvas, 50, 20));
        assert!(!painted(&canvas, 50, 50));
    }

    #[test]
    fn arc_covers_only_its_sweep() {
        let mut canvas = Canvas::new(100, 100).expect("canvas");
        // 0..90 degrees: from 3 o'clock clockwise to 6 o'clock
        canvas.stroke_arc(50.0, 50.0, 30.0, 0.0, 90.0, 8.0, Color::WHITE, false);
        assert!(painted(&canvas, 80, 50)); // 3 o'clock
        assert!(painted(&canvas, 50, 80)); // 6 o'clock
        assert!(!painted(&canvas, 50, 20)); // 12 o'clock untouched
    }

    #[test]
    fn ramp_arc_paints_like_a_plain_arc() {
        let mut canvas = Canvas::new(100, 100).expect("canvas");
        let stops = [Color::WHITE, Color::BLACK];
        canvas.stroke_arc_ramp(50.0, 50.0, 30.0, 0.0, 90.0, 8.0, &stops);
        assert!(painted(&canvas, 80, 50));
        assert!(painted(&canvas, 50, 80));
        assert!(!painted(&canvas, 20, 50)); // 9 o'clock untouched
    }

    #[test]
    fn sample_ramp_interpolates_between_stops() {
        let stops = [
            Color::from_rgba8(0, 0, 0, 255),
            Color::from_rgba8(255, 255, 255, 255),
        ];
        assert_eq!(sample_ramp(&stops, 0.0), stops[0]);
        assert_eq!(sample_ramp(&stops, 1.0), stops[1]);
        let mid = sample_ramp(&stops, 0.5);
        assert!((mid.red() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn sample_ramp_handles_degenerate_stop_lists() {
        assert_eq!(sample_ramp(&[], 0.5), Color::TRANSPARENT);
        let single = [Color::from_rgba8(10, 20, 30, 255)];
        assert_eq!(sample_ramp(&single, 0.9), single[0]);
    }

    #[test]
    fn circle_fraction_wraps_past_a_full_turn() {
        assert_eq!(circle_fraction(0.0), 0.0);
        assert_eq!(circle_fraction(180.0), 0.5);
        // 270 + 360 ≡ 270
        assert_eq!(circle_fraction(630.0), 0.75);
        assert_eq!(circle_fraction(-90.0), 0.75);
    }
}
