//! Ring geometry
//!
//! Pure math for the progress ring: sweep angles, concentric bounding
//! squares, and points on the ring. Everything here is derived from the
//! widget's current size and diameter on each draw pass; nothing is stored
//! between frames.

/// Starting angle of the progress arc: 12 o'clock in the convention where
/// 0° points at 3 o'clock and angles grow clockwise (y grows downward).
pub const START_ANGLE_DEG: f32 = 270.0;

/// Extra radius of the shadow ring over the inner ring.
pub const SHADOW_RING_EXTRA: f32 = 15.0;

/// Angular extent of the filled arc for a progress/max pair.
///
/// A maximum of zero has no meaningful sweep; returns 0° instead of dividing
/// by zero. Negative maximums are treated the same way.
pub fn sweep_angle(progress: f32, max_progress: i32) -> f32 {
    if max_progress <= 0 {
        return 0.0;
    }
    360.0 * progress / max_progress as f32
}

/// Point on a circle at `angle_deg` degrees, clockwise from 3 o'clock.
pub fn point_on_circle(cx: f32, cy: f32, radius: f32, angle_deg: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// Axis-aligned square bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Square of the given radius centered on (cx, cy).
    fn around(cx: f32, cy: f32, radius: f32) -> Self {
        Self {
            left: cx - radius,
            top: cy - radius,
            right: cx + radius,
            bottom: cy + radius,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Geometry of the ring inside a widget of a given size.
///
/// Built fresh on every draw pass from the current canvas size and the
/// diameter resolved by the last measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub center_x: f32,
    pub center_y: f32,
    pub inner_radius: f32,
    pub shadow_radius: f32,
    pub inner_bounds: Bounds,
    pub shadow_bounds: Bounds,
}

impl RingGeometry {
    pub fn compute(width: f32, height: f32, diameter: f32) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        let inner_radius = diameter / 2.0;
        let shadow_radius = inner_radius + SHADOW_RING_EXTRA;
        Self {
            center_x,
            center_y,
            inner_radius,
            shadow_radius,
            inner_bounds: Bounds::around(center_x, center_y, inner_radius),
            shadow_bounds: Bounds::around(center_x, center_y, shadow_radius),
        }
    }
}

/// Position of the leading-edge dot: the end point of the current arc.
pub fn leading_dot(geometry: &RingGeometry, sweep_deg: f32) -> (f32, f32) {
    point_on_circle(
        geometry.center_x,
        geometry.center_y,
        geometry.inner_radius,
        START_ANGLE_DEG + sweep_deg,
    )
}
