//! Axis and zoom bounds plus the clamping helpers built on them.
//!
//! Every endpoint is independently optional; `None` means unbounded on that
//! side. Clamping never fails: inverted ranges collapse instead of erroring.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CONTENT_ZOOM_MIN, DEFAULT_ZOOM_MAX, DEFAULT_ZOOM_MIN};

/// Inclusive `[min, max]` range with optional endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisBound {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl AxisBound {
    /// No restriction on either side.
    pub const UNBOUNDED: Self = Self { min: None, max: None };

    #[must_use]
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Bound with both endpoints present.
    #[must_use]
    pub fn between(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Distance between the endpoints when both are present.
    #[must_use]
    pub fn span(&self) -> Option<f64> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(max - min),
            _ => None,
        }
    }
}

fn tighter(a: Option<f64>, b: Option<f64>, pick: fn(f64, f64) -> f64) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

/// Per-axis clamps for the camera: `x`/`y` in virtual space, `z` on the zoom factor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportBounds {
    #[serde(default)]
    pub x: AxisBound,
    #[serde(default)]
    pub y: AxisBound,
    #[serde(default)]
    pub z: AxisBound,
}

impl ViewportBounds {
    /// Bounds a fresh camera starts with: only a wide zoom range.
    #[must_use]
    pub fn camera_default() -> Self {
        Self::zoom_only(Some(DEFAULT_ZOOM_MIN), Some(DEFAULT_ZOOM_MAX))
    }

    /// Bounds restricting only the zoom factor.
    #[must_use]
    pub fn zoom_only(min: Option<f64>, max: Option<f64>) -> Self {
        Self { z: AxisBound::new(min, max), ..Self::default() }
    }

    /// Bounds matching a container rectangle anchored at the virtual origin.
    /// The content can be zoomed into but not out past its natural size.
    #[must_use]
    pub fn content(container_width: f64, container_height: f64) -> Self {
        Self {
            x: AxisBound::between(0.0, container_width),
            y: AxisBound::between(0.0, container_height),
            z: AxisBound::new(Some(CONTENT_ZOOM_MIN), None),
        }
    }
}

/// Restrict `value` to the inclusive range. When the range is inverted the
/// lower bound wins.
#[must_use]
pub fn clamp_to_range(value: f64, bound: &AxisBound) -> f64 {
    let mut clamped = value;
    if let Some(max) = bound.max
        && clamped > max
    {
        clamped = max;
    }
    if let Some(min) = bound.min
        && clamped < min
    {
        clamped = min;
    }
    clamped
}

/// Clamp a center coordinate so the visible region of size `extent` stays
/// within `bound`. A region wider than the bound is centered inside it.
#[must_use]
pub fn clamp_center_to_axis_extent(center: f64, extent: f64, bound: &AxisBound) -> f64 {
    let half = extent / 2.0;
    let allowed = AxisBound {
        min: bound.min.map(|min| min + half),
        max: bound.max.map(|max| max - half),
    };
    if let (Some(lo), Some(hi), Some(min), Some(max)) = (allowed.min, allowed.max, bound.min, bound.max)
        && lo > hi
    {
        return min + (max - min) / 2.0;
    }
    clamp_to_range(center, &allowed)
}

/// Effective zoom-factor range for the given bounds and container size.
///
/// A fully bounded axis caps how far out the camera may zoom: below
/// `container / span` the view would show space past the bound. The most
/// restrictive lower limit wins; only `z.max` limits zooming in. The result
/// may be inverted when a derived minimum exceeds `z.max`; [`clamp_to_range`]
/// then resolves to the minimum.
#[must_use]
pub fn derive_zoom_bounds(bounds: Option<&ViewportBounds>, container_width: f64, container_height: f64) -> AxisBound {
    let Some(bounds) = bounds else {
        return AxisBound::UNBOUNDED;
    };

    let axis_minimums = [
        axis_zoom_minimum(&bounds.x, container_width),
        axis_zoom_minimum(&bounds.y, container_height),
    ];
    let min = axis_minimums
        .into_iter()
        .flatten()
        .fold(bounds.z.min, |acc, candidate| tighter(acc, Some(candidate), f64::max));

    AxisBound { min, max: bounds.z.max }
}

fn axis_zoom_minimum(axis: &AxisBound, container_dim: f64) -> Option<f64> {
    axis.span().filter(|span| *span > 0.0).map(|span| container_dim / span)
}
