#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// AxisBound
// =============================================================

#[test]
fn unbounded_has_no_endpoints() {
    assert!(AxisBound::UNBOUNDED.is_unbounded());
    assert!(AxisBound::default().is_unbounded());
    assert!(!AxisBound::new(Some(0.0), None).is_unbounded());
}

#[test]
fn span_requires_both_endpoints() {
    assert_eq!(AxisBound::between(10.0, 30.0).span(), Some(20.0));
    assert_eq!(AxisBound::new(Some(10.0), None).span(), None);
    assert_eq!(AxisBound::new(None, Some(10.0)).span(), None);
}

#[test]
fn bound_deserializes_with_missing_endpoints() {
    let b: AxisBound = serde_json::from_str(r#"{"min": 2.0}"#).unwrap();
    assert_eq!(b, AxisBound::new(Some(2.0), None));
}

// =============================================================
// ViewportBounds constructors
// =============================================================

#[test]
fn camera_default_only_bounds_zoom() {
    let b = ViewportBounds::camera_default();
    assert!(b.x.is_unbounded());
    assert!(b.y.is_unbounded());
    assert_eq!(b.z, AxisBound::between(0.001, 100.0));
}

#[test]
fn content_bounds_match_container() {
    let b = ViewportBounds::content(800.0, 600.0);
    assert_eq!(b.x, AxisBound::between(0.0, 800.0));
    assert_eq!(b.y, AxisBound::between(0.0, 600.0));
    assert_eq!(b.z, AxisBound::new(Some(1.0), None));
}

#[test]
fn viewport_bounds_deserialize_partial() {
    let b: ViewportBounds = serde_json::from_str(r#"{"x": {"min": 0, "max": 1000}}"#).unwrap();
    assert_eq!(b.x, AxisBound::between(0.0, 1000.0));
    assert!(b.y.is_unbounded());
    assert!(b.z.is_unbounded());
}

// =============================================================
// clamp_to_range
// =============================================================

#[test]
fn clamp_to_range_inside_is_unchanged() {
    assert_eq!(clamp_to_range(5.0, &AxisBound::between(0.0, 10.0)), 5.0);
}

#[test]
fn clamp_to_range_limits_both_sides() {
    let b = AxisBound::between(0.5, 4.0);
    assert_eq!(clamp_to_range(10.0, &b), 4.0);
    assert_eq!(clamp_to_range(0.1, &b), 0.5);
}

#[test]
fn clamp_to_range_open_side_is_unrestricted() {
    let b = AxisBound::new(Some(1.0), None);
    assert_eq!(clamp_to_range(1e9, &b), 1e9);
    assert_eq!(clamp_to_range(-3.0, &b), 1.0);
}

#[test]
fn clamp_to_range_inverted_prefers_min() {
    let b = AxisBound::between(5.0, 1.0);
    assert_eq!(clamp_to_range(3.0, &b), 5.0);
}

// =============================================================
// clamp_center_to_axis_extent
// =============================================================

#[test]
fn center_clamp_keeps_left_edge_inside() {
    let b = AxisBound::between(0.0, 1000.0);
    assert_eq!(clamp_center_to_axis_extent(100.0, 800.0, &b), 400.0);
}

#[test]
fn center_clamp_keeps_right_edge_inside() {
    let b = AxisBound::between(0.0, 1000.0);
    assert_eq!(clamp_center_to_axis_extent(900.0, 800.0, &b), 600.0);
}

#[test]
fn center_clamp_one_sided() {
    let b = AxisBound::new(None, Some(100.0));
    assert_eq!(clamp_center_to_axis_extent(500.0, 50.0, &b), 75.0);
    assert_eq!(clamp_center_to_axis_extent(-500.0, 50.0, &b), -500.0);
}

#[test]
fn center_clamp_extent_wider_than_bound_centers_within() {
    let b = AxisBound::between(100.0, 300.0);
    assert_eq!(clamp_center_to_axis_extent(0.0, 1000.0, &b), 200.0);
    assert_eq!(clamp_center_to_axis_extent(9999.0, 1000.0, &b), 200.0);
}

#[test]
fn center_clamp_unbounded_is_identity() {
    assert_eq!(clamp_center_to_axis_extent(-42.0, 10.0, &AxisBound::UNBOUNDED), -42.0);
}

// =============================================================
// derive_zoom_bounds
// =============================================================

#[test]
fn derive_without_bounds_is_unbounded() {
    assert!(derive_zoom_bounds(None, 800.0, 600.0).is_unbounded());
}

#[test]
fn derive_passes_through_explicit_zoom() {
    let b = ViewportBounds::zoom_only(Some(0.5), Some(4.0));
    assert_eq!(derive_zoom_bounds(Some(&b), 800.0, 600.0), AxisBound::between(0.5, 4.0));
}

#[test]
fn derive_axis_bound_raises_minimum() {
    let b = ViewportBounds {
        x: AxisBound::between(0.0, 1000.0),
        ..ViewportBounds::zoom_only(Some(0.001), Some(100.0))
    };
    let z = derive_zoom_bounds(Some(&b), 800.0, 600.0);
    assert!(approx_eq(z.min.unwrap(), 0.8));
    assert_eq!(z.max, Some(100.0));
}

#[test]
fn derive_takes_most_restrictive_axis() {
    let b = ViewportBounds {
        x: AxisBound::between(0.0, 1600.0),
        y: AxisBound::between(0.0, 600.0),
        z: AxisBound::UNBOUNDED,
    };
    let z = derive_zoom_bounds(Some(&b), 800.0, 600.0);
    assert!(approx_eq(z.min.unwrap(), 1.0));
    assert_eq!(z.max, None);
}

#[test]
fn derive_explicit_minimum_can_dominate() {
    let b = ViewportBounds {
        x: AxisBound::between(0.0, 8000.0),
        ..ViewportBounds::zoom_only(Some(2.0), None)
    };
    let z = derive_zoom_bounds(Some(&b), 800.0, 600.0);
    assert_eq!(z.min, Some(2.0));
}

#[test]
fn derive_ignores_half_open_axis() {
    let b = ViewportBounds { x: AxisBound::new(Some(0.0), None), ..ViewportBounds::default() };
    assert!(derive_zoom_bounds(Some(&b), 800.0, 600.0).is_unbounded());
}

#[test]
fn derive_ignores_degenerate_span() {
    let b = ViewportBounds { x: AxisBound::between(5.0, 5.0), ..ViewportBounds::default() };
    assert!(derive_zoom_bounds(Some(&b), 800.0, 600.0).is_unbounded());
}

#[test]
fn derive_keeps_configured_maximum_below_derived_minimum() {
    let b = ViewportBounds {
        x: AxisBound::between(0.0, 100.0),
        ..ViewportBounds::zoom_only(None, Some(4.0))
    };
    let z = derive_zoom_bounds(Some(&b), 800.0, 600.0);
    assert_eq!(z, AxisBound::between(8.0, 4.0));
    // The inverted range still clamps to the derived minimum.
    assert_eq!(clamp_to_range(1.0, &z), 8.0);
    assert_eq!(clamp_to_range(20.0, &z), 8.0);
}

#[test]
fn derive_content_bounds_is_zoom_in_only() {
    let b = ViewportBounds::content(800.0, 600.0);
    assert_eq!(derive_zoom_bounds(Some(&b), 800.0, 600.0), AxisBound::new(Some(1.0), None));
}
