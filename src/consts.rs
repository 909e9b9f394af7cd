//! Shared numeric constants for the camera engine.

// ── Zoom ────────────────────────────────────────────────────────

/// Default lower zoom-factor bound applied to a freshly constructed camera.
pub const DEFAULT_ZOOM_MIN: f64 = 0.001;

/// Default upper zoom-factor bound applied to a freshly constructed camera.
pub const DEFAULT_ZOOM_MAX: f64 = 100.0;

/// Lower zoom bound installed by `set_bounds_to_content`: the content may be
/// zoomed into but never shrunk below its natural size.
pub const CONTENT_ZOOM_MIN: f64 = 1.0;

/// Wheel deltas are doubled before being folded into the zoom ratio.
pub const WHEEL_ZOOM_SCALE: f64 = 2.0;

/// Non-wheel zoom deltas are halved to match gesture sensitivity.
pub const GESTURE_ZOOM_DIVISOR: f64 = 2.0;

// ── Inertia ─────────────────────────────────────────────────────

/// Per-frame velocity multiplier while decelerating.
pub const FRICTION: f64 = 0.84;

/// Velocities below this magnitude (virtual units per frame) snap to zero.
pub const MIN_VELOCITY: f64 = 0.2;

/// Multiplier applied to release velocity reported by the gesture layer.
pub const VELOCITY_BOOST: f64 = 20.0;
