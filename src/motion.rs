//! Pure pan/zoom transforms on [`CameraValues`].
//!
//! Each function takes the current working values and returns the next ones.
//! Bounds are passed in explicitly: `bounds` for the x/y axis clamps and
//! `zoom_bounds` for the already-derived effective zoom range.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use serde::{Deserialize, Serialize};

use crate::bounds::{AxisBound, ViewportBounds, clamp_center_to_axis_extent, clamp_to_range};
use crate::consts::{GESTURE_ZOOM_DIVISOR, WHEEL_ZOOM_SCALE};
use crate::values::CameraValues;

/// Kind of device that produced a pan/zoom delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    Mouse,
    Touch,
    /// Scroll wheel or trackpad scroll; zooms at a rate independent of the current zoom.
    Wheel,
}

/// One raw delta from the gesture layer, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanZoomDelta {
    #[serde(default)]
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
    #[serde(default)]
    pub dz: f64,
    /// Pointer position relative to the container, used as the zoom anchor.
    #[serde(default)]
    pub pointer_x: f64,
    #[serde(default)]
    pub pointer_y: f64,
    #[serde(default)]
    pub source: Option<InputSource>,
}

impl PanZoomDelta {
    /// A pure drag with no zoom component.
    #[must_use]
    pub fn pan(dx: f64, dy: f64) -> Self {
        Self { dx, dy, ..Self::default() }
    }

    /// A pure zoom anchored at a pointer position.
    #[must_use]
    pub fn zoom(dz: f64, pointer_x: f64, pointer_y: f64, source: InputSource) -> Self {
        Self { dz, pointer_x, pointer_y, source: Some(source), ..Self::default() }
    }
}

/// Unclamped zoom factor requested by a `dz` delta.
#[must_use]
pub fn requested_zoom_factor(values: &CameraValues, dz: f64, source: Option<InputSource>) -> f64 {
    match source {
        Some(InputSource::Wheel) => {
            values.container_height * values.zoom_factor / (values.container_height + dz * WHEEL_ZOOM_SCALE)
        }
        _ => values.zoom_factor + dz / GESTURE_ZOOM_DIVISOR,
    }
}

/// Clamp a requested zoom factor to the effective range.
///
/// A non-positive request lands on the lower bound, or keeps the current
/// zoom when there is none. Non-finite requests keep the current zoom.
#[must_use]
pub fn resolve_zoom_factor(requested: f64, current: f64, zoom_bounds: &AxisBound) -> f64 {
    if !requested.is_finite() {
        return current;
    }
    if requested <= 0.0 {
        return zoom_bounds.min.map_or(current, |min| clamp_to_range(min, zoom_bounds));
    }
    clamp_to_range(requested, zoom_bounds)
}

/// Apply a pan/zoom delta, keeping the virtual point under the pointer fixed
/// while zooming.
#[must_use]
pub fn pan_zoom(
    values: CameraValues,
    delta: &PanZoomDelta,
    bounds: Option<&ViewportBounds>,
    zoom_bounds: &AxisBound,
) -> CameraValues {
    let mut zoom = values.zoom_factor;
    if delta.dz != 0.0 {
        let requested = requested_zoom_factor(&values, delta.dz, delta.source);
        zoom = resolve_zoom_factor(requested, values.zoom_factor, zoom_bounds);
    }

    // Dragging content right moves the camera left.
    let panned_left = values.left - delta.dx / zoom;
    let panned_top = values.top - delta.dy / zoom;

    let zoomed = values.with_zoom(zoom);
    let (shift_x, shift_y) = if zoom == values.zoom_factor {
        (0.0, 0.0)
    } else {
        (
            (zoomed.width - values.width) * focus_fraction(delta.pointer_x, values.container_width),
            (zoomed.height - values.height) * focus_fraction(delta.pointer_y, values.container_height),
        )
    };

    clamp_center(
        zoomed,
        panned_left - shift_x + zoomed.width / 2.0,
        panned_top - shift_y + zoomed.height / 2.0,
        bounds,
    )
}

fn focus_fraction(pointer: f64, container: f64) -> f64 {
    if container > 0.0 { pointer / container } else { 0.0 }
}

/// Jump the center to `(x, y)`, optionally changing zoom around the new center.
#[must_use]
pub fn recentered(
    values: CameraValues,
    x: f64,
    y: f64,
    zoom_factor: Option<f64>,
    bounds: Option<&ViewportBounds>,
    zoom_bounds: &AxisBound,
) -> CameraValues {
    let values = rezoomed(values, zoom_factor, zoom_bounds);
    clamp_center(values, x, y, bounds)
}

/// Jump the top-left corner to `(x, y)`, optionally changing zoom. The extent
/// change from a new zoom is anchored at the top-left, not the center.
#[must_use]
pub fn moved_top_left(
    values: CameraValues,
    x: f64,
    y: f64,
    zoom_factor: Option<f64>,
    bounds: Option<&ViewportBounds>,
    zoom_bounds: &AxisBound,
) -> CameraValues {
    let values = rezoomed(values, zoom_factor, zoom_bounds).with_top_left(x, y);
    if bounds.is_none_or(|b| b.x.is_unbounded() && b.y.is_unbounded()) {
        return values;
    }
    clamp_center(values, values.center_x, values.center_y, bounds)
}

/// Adopt a new container size at constant zoom. On the first sizing the view
/// is centered on the middle of the container.
#[must_use]
pub fn resized(values: CameraValues, width: f64, height: f64, first_sizing: bool) -> CameraValues {
    let values = CameraValues { container_width: width, container_height: height, ..values }
        .with_zoom(values.zoom_factor);
    if first_sizing {
        values.with_center(values.width / 2.0, values.height / 2.0)
    } else {
        values.rederive_top_left()
    }
}

/// Pull zoom, extent and center back inside the current bounds.
#[must_use]
pub fn reclamped(values: CameraValues, bounds: Option<&ViewportBounds>, zoom_bounds: &AxisBound) -> CameraValues {
    let values = rezoomed(values, Some(values.zoom_factor), zoom_bounds);
    clamp_center(values, values.center_x, values.center_y, bounds)
}

/// Zoom factor at which a `width` x `height` area exactly fits the container.
#[must_use]
pub fn fit_zoom_factor(values: &CameraValues, width: f64, height: f64) -> f64 {
    (values.container_width / width).min(values.container_height / height)
}

fn rezoomed(values: CameraValues, zoom_factor: Option<f64>, zoom_bounds: &AxisBound) -> CameraValues {
    match zoom_factor {
        Some(requested) => values.with_zoom(resolve_zoom_factor(requested, values.zoom_factor, zoom_bounds)),
        None => values,
    }
}

fn clamp_center(values: CameraValues, center_x: f64, center_y: f64, bounds: Option<&ViewportBounds>) -> CameraValues {
    let (x_bound, y_bound) = bounds.map_or((AxisBound::UNBOUNDED, AxisBound::UNBOUNDED), |b| (b.x, b.y));
    values.with_center(
        clamp_center_to_axis_extent(center_x, values.width, &x_bound),
        clamp_center_to_axis_extent(center_y, values.height, &y_bound),
    )
}
