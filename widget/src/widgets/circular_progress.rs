//! Circular progress ring widget
//!
//! Renders a ring-shaped progress indicator: a soft drop shadow, a white
//! base ring, a background track, a sweep-gradient progress arc starting at
//! 12 o'clock, and a two-layer dot marking the arc's leading edge. Progress
//! changes animate over a fixed duration with an accelerate-decelerate
//! curve; ticks are host-driven.

use std::time::Instant;

use tiny_skia::Color;
use tracing::{debug, trace};

use crate::animation::ProgressAnimation;
use crate::canvas::Canvas;
use crate::geometry::{RingGeometry, START_ANGLE_DEG, leading_dot, sweep_angle};
use crate::widgets::colors;

/// Thickness of the progress stroke when none is configured, dp.
const DEFAULT_THICKNESS_DP: f32 = 40.0;

/// Padding subtracted from the measured side to get the ring diameter, dp.
const PADDING_DP: f32 = 50.0;

/// Fallback side when the host proposes no height constraint.
const DEFAULT_MEASURED_SIDE: f32 = 200.0;

/// Extra stroke width of the track and shadow rings over the progress arc.
const TRACK_EXTRA_WIDTH: f32 = 25.0;

/// The dot core is this much narrower than the dot halo.
const DOT_CORE_INSET: f32 = 14.0;

/// Vertical drop of the shadow passes.
const SHADOW_OFFSET_Y: f32 = 8.0;

/// Shadow passes, widest and faintest first: (extra stroke width, alpha).
const SHADOW_PASSES: [(f32, u8); 4] = [(30.0, 26), (20.0, 38), (10.0, 50), (4.0, 60)];

/// Convert density-independent units to device pixels.
fn dp_to_px(dp: f32, density: f32) -> f32 {
    (dp * density).ceil()
}

/// Construction-time configuration for [`CircularProgress`].
///
/// Every field has a sensible default; use the `with_*` builders to override
/// individual options.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularProgressConfig {
    /// Initial progress value. Not clamped; keeping it within
    /// `0..=max_progress` is the caller's responsibility.
    pub progress: f32,
    /// Stroke thickness of the progress arc, dp.
    pub thickness_dp: f32,
    /// Arc color when the sweep ramp is disabled.
    pub progress_color: Color,
    /// Color of the background track ring.
    pub background_color: Color,
    /// Progress value that corresponds to a full circle. A maximum of 0
    /// renders an empty ring.
    pub max_progress: i32,
    /// Pixels per density-independent unit on the host surface.
    pub density: f32,
    /// Fill the arc with the fixed sweep ramp instead of `progress_color`.
    pub use_sweep_ramp: bool,
}

impl Default for CircularProgressConfig {
    fn default() -> Self {
        Self {
            progress: 0.0,
            thickness_dp: DEFAULT_THICKNESS_DP,
            progress_color: colors::progress_blue(),
            background_color: colors::track(),
            max_progress: 0,
            density: 1.0,
            use_sweep_ramp: true,
        }
    }
}

impl CircularProgressConfig {
    pub fn with_progress(mut self, progress: f32) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_thickness_dp(mut self, thickness_dp: f32) -> Self {
        self.thickness_dp = thickness_dp;
        self
    }

    pub fn with_progress_color(mut self, color: Color) -> Self {
        self.progress_color = color;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_max_progress(mut self, max_progress: i32) -> Self {
        self.max_progress = max_progress;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_sweep_ramp(mut self, use_sweep_ramp: bool) -> Self {
        self.use_sweep_ramp = use_sweep_ramp;
        self
    }
}

/// Animated circular progress indicator.
pub struct CircularProgress {
    diameter: f32,
    progress: f32,
    max_progress: i32,
    thickness: f32,
    progress_color: Color,
    background_color: Color,
    density: f32,
    use_sweep_ramp: bool,
    animation: Option<ProgressAnimation>,
}

impl CircularProgress {
    pub fn new(config: CircularProgressConfig) -> Self {
        Self {
            diameter: 0.0,
            progress: config.progress,
            max_progress: config.max_progress,
            thickness: dp_to_px(config.thickness_dp, config.density),
            progress_color: config.progress_color,
            background_color: config.background_color,
            density: config.density,
            use_sweep_ramp: config.use_sweep_ramp,
            animation: None,
        }
    }

    /// Current progress value, possibly mid-animation.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn max_progress(&self) -> i32 {
        self.max_progress
    }

    /// Ring diameter resolved by the last measure pass.
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    /// Set the progress value that corresponds to a full circle.
    pub fn set_max_progress(&mut self, max_progress: i32) {
        self.max_progress = max_progress;
    }

    /// Animate towards `target`, sampling the wall clock for the start time.
    ///
    /// Equivalent to `set_progress_at(target, Instant::now())`.
    pub fn set_progress(&mut self, target: i32) {
        self.set_progress_at(target, Instant::now());
    }

    /// Animate from the current value towards `target`, starting at `now`.
    ///
    /// The target is clamped to `0..=max_progress`. Any in-flight animation
    /// is replaced: its remaining timeline is dropped, so it cannot touch
    /// the progress value again.
    pub fn set_progress_at(&mut self, target: i32, now: Instant) {
        let max = self.max_progress.max(0);
        let target = target.clamp(0, max) as f32;
        debug!(from = self.progress, to = target, "starting progress animation");
        self.animation = Some(ProgressAnimation::new(self.progress, target, now));
    }

    /// Advance the animation timeline to `now`.
    ///
    /// Updates the stored progress and returns `true` while the animation is
    /// still in flight (another tick is needed). The settling tick lands
    /// exactly on the target.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(anim) = self.animation else {
            return false;
        };
        self.progress = anim.value_at(now);
        if anim.is_finished(now) {
            debug!(value = self.progress, "progress animation settled");
            self.animation = None;
            false
        } else {
            true
        }
    }

    /// Resolve the widget size for the host's proposed constraints.
    ///
    /// Resolves to a square of side `min(width, height)`, clamped to ≥ 0,
    /// where a missing height constraint falls back to a fixed default. The
    /// ring diameter is the side minus padding, floored at zero.
    ///
    /// # Arguments
    /// * `proposed_width` - Width offered by the host layout
    /// * `proposed_height` - Height offered by the host layout, if any
    pub fn measure(&mut self, proposed_width: f32, proposed_height: Option<f32>) -> (f32, f32) {
        let height = proposed_height.unwrap_or(DEFAULT_MEASURED_SIDE);
        let side = proposed_width.min(height).max(0.0);
        self.diameter = (side - dp_to_px(PADDING_DP, self.density)).max(0.0);
        trace!(side, diameter = self.diameter, "measured");
        (side, side)
    }

    /// Draw the ring onto `canvas`.
    ///
    /// Draw order: shadow passes, base ring, background track, progress arc,
    /// leading-edge dot. Geometry is recomputed from the canvas size and the
    /// last measured diameter on every call.
    pub fn render(&self, canvas: &mut Canvas) {
        let geo = RingGeometry::compute(
            canvas.width() as f32,
            canvas.height() as f32,
            self.diameter,
        );
        let ring_width = self.thickness + TRACK_EXTRA_WIDTH;

        // Soft drop shadow: widening translucent passes dropped below the
        // ring, then the base ring on top of them.
        for (spread, alpha) in SHADOW_PASSES {
            canvas.stroke_circle(
                geo.center_x,
                geo.center_y + SHADOW_OFFSET_Y,
                geo.shadow_radius,
                ring_width + spread,
                colors::shadow(alpha),
            );
        }
        canvas.stroke_circle(
            geo.center_x,
            geo.center_y,
            geo.shadow_radius,
            ring_width,
            colors::ring_base(),
        );

        // Background track
        canvas.stroke_circle(
            geo.center_x,
            geo.center_y,
            geo.inner_radius,
            ring_width,
            self.background_color,
        );

        // Progress arc, from 12 o'clock clockwise
        let sweep = sweep_angle(self.progress, self.max_progress);
        if self.use_sweep_ramp {
            canvas.stroke_arc_ramp(
                geo.center_x,
                geo.center_y,
                geo.inner_radius,
                START_ANGLE_DEG,
                sweep,
                self.thickness,
                &colors::sweep_ramp(),
            );
        } else {
            canvas.stroke_arc(
                geo.center_x,
                geo.center_y,
                geo.inner_radius,
                START_ANGLE_DEG,
                sweep,
                self.thickness,
                self.progress_color,
                true,
            );
        }

        // Leading-edge dot: halo, then the narrower core
        let (dot_x, dot_y) = leading_dot(&geo, sweep);
        canvas.fill_circle(dot_x, dot_y, self.thickness / 2.0, colors::dot_halo());
        let core_radius = ((self.thickness - DOT_CORE_INSET) / 2.0).max(0.0);
        canvas.fill_circle(dot_x, dot_y, core_radius, colors::dot_core());
    }
}
