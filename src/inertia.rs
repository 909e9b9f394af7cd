//! Friction-based deceleration after a drag is released.
//!
//! [`step`] is one animation frame: a pure function of the working values and
//! the current velocity. The camera calls it once per frame while animating
//! and stops scheduling frames once it returns [`Velocity::ZERO`].

#[cfg(test)]
#[path = "inertia_test.rs"]
mod inertia_test;

use serde::{Deserialize, Serialize};

use crate::bounds::{AxisBound, ViewportBounds};
use crate::consts::{FRICTION, MIN_VELOCITY, VELOCITY_BOOST};
use crate::values::CameraValues;

/// Camera velocity in virtual-space units per frame.
///
/// The center moves by `-velocity` each frame, matching the drag direction
/// of the gesture that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Tuning for the deceleration animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InertiaConfig {
    /// Per-frame velocity multiplier, in `(0, 1)`.
    pub friction: f64,
    /// Velocities below this magnitude snap to zero.
    pub min_velocity: f64,
    /// Multiplier on the release velocity reported by the gesture layer.
    pub velocity_boost: f64,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self { friction: FRICTION, min_velocity: MIN_VELOCITY, velocity_boost: VELOCITY_BOOST }
    }
}

/// Convert a client-space release velocity into camera velocity. Dividing by
/// the zoom keeps the glide distance on screen the same at every zoom level.
#[must_use]
pub fn release_velocity(vx: f64, vy: f64, zoom_factor: f64, config: &InertiaConfig) -> Velocity {
    Velocity {
        x: vx * config.velocity_boost / zoom_factor,
        y: vy * config.velocity_boost / zoom_factor,
    }
}

/// Advance the glide by one frame.
///
/// Velocity decays first. When both components reach zero the values are
/// returned untouched. Otherwise each axis moves independently; a move that
/// would carry the visible edge past a bound in the direction of travel
/// snaps to the bound and reflects that axis's velocity.
#[must_use]
pub fn step(
    values: CameraValues,
    velocity: Velocity,
    bounds: Option<&ViewportBounds>,
    config: &InertiaConfig,
) -> (CameraValues, Velocity) {
    let velocity = Velocity { x: decay(velocity.x, config), y: decay(velocity.y, config) };
    if velocity.is_zero() {
        return (values, Velocity::ZERO);
    }

    let (x_bound, y_bound) = bounds.map_or((AxisBound::UNBOUNDED, AxisBound::UNBOUNDED), |b| (b.x, b.y));
    let (center_x, vx) = glide(values.center_x, values.width, velocity.x, &x_bound);
    let (center_y, vy) = glide(values.center_y, values.height, velocity.y, &y_bound);

    (values.with_center(center_x, center_y), Velocity { x: vx, y: vy })
}

fn decay(velocity: f64, config: &InertiaConfig) -> f64 {
    let decayed = velocity * config.friction;
    if decayed.abs() < config.min_velocity { 0.0 } else { decayed }
}

fn glide(center: f64, extent: f64, velocity: f64, bound: &AxisBound) -> (f64, f64) {
    let half = extent / 2.0;
    let next = center - velocity;
    if velocity > 0.0 {
        if let Some(min) = bound.min
            && next - half < min
        {
            return (min + half, -velocity);
        }
    } else if velocity < 0.0 {
        if let Some(max) = bound.max
            && next + half > max
        {
            return (max - half, -velocity);
        }
    }
    (next, velocity)
}
