#![allow(clippy::float_cmp)]

use super::*;
use crate::values::Point;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn assert_consistent(v: &CameraValues) {
    assert!(approx_eq(v.width, v.container_width / v.zoom_factor), "width drifted: {v:?}");
    assert!(approx_eq(v.height, v.container_height / v.zoom_factor), "height drifted: {v:?}");
    assert!(approx_eq(v.left, v.center_x - v.width / 2.0), "left drifted: {v:?}");
    assert!(approx_eq(v.top, v.center_y - v.height / 2.0), "top drifted: {v:?}");
}

fn base() -> CameraValues {
    CameraValues::sized(800.0, 600.0)
}

fn wide_zoom() -> AxisBound {
    AxisBound::between(0.001, 100.0)
}

// =============================================================
// Zoom requests
// =============================================================

#[test]
fn wheel_zoom_uses_container_ratio() {
    let v = base();
    let z = requested_zoom_factor(&v, -100.0, Some(InputSource::Wheel));
    assert!(approx_eq(z, 600.0 / 400.0));
}

#[test]
fn gesture_zoom_is_additive_half_delta() {
    let v = base();
    assert!(approx_eq(requested_zoom_factor(&v, 1.0, Some(InputSource::Touch)), 1.5));
    assert!(approx_eq(requested_zoom_factor(&v, 1.0, None), 1.5));
}

#[test]
fn resolve_clamps_non_positive_zoom_to_minimum() {
    let bounds = AxisBound::between(0.5, 4.0);
    assert_eq!(resolve_zoom_factor(-1.0, 2.0, &bounds), 0.5);
    assert_eq!(resolve_zoom_factor(0.0, 2.0, &bounds), 0.5);
    assert_eq!(resolve_zoom_factor(-1.0, 2.0, &AxisBound::new(Some(0.25), None)), 0.25);
}

#[test]
fn resolve_keeps_zoom_without_lower_bound() {
    assert_eq!(resolve_zoom_factor(-1.0, 2.0, &AxisBound::UNBOUNDED), 2.0);
    assert_eq!(resolve_zoom_factor(0.0, 2.0, &AxisBound::new(None, Some(4.0))), 2.0);
}

#[test]
fn resolve_keeps_zoom_for_non_finite_requests() {
    let bounds = AxisBound::between(0.5, 4.0);
    assert_eq!(resolve_zoom_factor(f64::INFINITY, 2.0, &bounds), 2.0);
    assert_eq!(resolve_zoom_factor(f64::NAN, 2.0, &bounds), 2.0);
}

#[test]
fn resolve_clamps_to_bounds() {
    assert_eq!(resolve_zoom_factor(10.0, 1.0, &AxisBound::between(0.5, 4.0)), 4.0);
}

// =============================================================
// pan_zoom
// =============================================================

#[test]
fn pan_moves_camera_opposite_to_drag() {
    let v = pan_zoom(base(), &PanZoomDelta::pan(100.0, 50.0), None, &wide_zoom());
    assert!(approx_eq(v.left, -100.0));
    assert!(approx_eq(v.top, -50.0));
    assert_consistent(&v);
}

#[test]
fn pan_is_scaled_by_zoom() {
    let start = base().with_zoom(2.0).rederive_top_left();
    let v = pan_zoom(start, &PanZoomDelta::pan(100.0, 0.0), None, &wide_zoom());
    assert!(approx_eq(v.left, start.left - 50.0));
}

#[test]
fn wheel_zoom_keeps_bottom_right_anchored() {
    for dz in [-150.0, -20.0, 30.0, 120.0] {
        let start = base();
        let anchor_before = start.client_to_virtual(Point::new(800.0, 600.0));
        let v = pan_zoom(start, &PanZoomDelta::zoom(dz, 800.0, 600.0, InputSource::Wheel), None, &wide_zoom());
        let anchor_after = v.client_to_virtual(Point::new(800.0, 600.0));
        assert!(approx_eq(anchor_before.x, anchor_after.x), "dz={dz}");
        assert!(approx_eq(anchor_before.y, anchor_after.y), "dz={dz}");
        assert!(v.zoom_factor != start.zoom_factor);
        assert_consistent(&v);
    }
}

#[test]
fn zoom_keeps_arbitrary_pointer_anchored() {
    let start = base().with_zoom(1.5).with_center(120.0, -40.0);
    let pointer = Point::new(250.0, 75.0);
    let before = start.client_to_virtual(pointer);
    let v = pan_zoom(start, &PanZoomDelta::zoom(0.8, pointer.x, pointer.y, InputSource::Touch), None, &wide_zoom());
    let after = v.client_to_virtual(pointer);
    assert!(approx_eq(before.x, after.x));
    assert!(approx_eq(before.y, after.y));
}

#[test]
fn zoom_clamped_at_limit_leaves_pan_only() {
    let start = base().with_zoom(4.0).rederive_top_left();
    let limit = AxisBound::between(0.5, 4.0);
    let v = pan_zoom(start, &PanZoomDelta::zoom(2.0, 10.0, 10.0, InputSource::Mouse), None, &limit);
    assert_eq!(v.zoom_factor, 4.0);
    assert!(approx_eq(v.left, start.left));
}

#[test]
fn pan_respects_axis_bounds() {
    let bounds = ViewportBounds { x: AxisBound::between(0.0, 1000.0), ..ViewportBounds::default() };
    let left = pan_zoom(base(), &PanZoomDelta::pan(500.0, 0.0), Some(&bounds), &wide_zoom());
    assert!(approx_eq(left.left, 0.0));
    let right = pan_zoom(base(), &PanZoomDelta::pan(-500.0, 0.0), Some(&bounds), &wide_zoom());
    assert!(approx_eq(right.right(), 1000.0));
}

#[test]
fn pan_before_sizing_stays_finite() {
    let v = pan_zoom(CameraValues::default(), &PanZoomDelta::zoom(1.0, 5.0, 5.0, InputSource::Mouse), None, &wide_zoom());
    assert!(v.center_x.is_finite());
    assert!(v.center_y.is_finite());
}

// =============================================================
// recentered / moved_top_left
// =============================================================

#[test]
fn recenter_sets_center_and_zoom() {
    let v = recentered(base(), 10.0, 20.0, Some(2.0), None, &wide_zoom());
    assert_eq!(v.center_x, 10.0);
    assert_eq!(v.center_y, 20.0);
    assert_eq!(v.zoom_factor, 2.0);
    assert_consistent(&v);
}

#[test]
fn recenter_without_zoom_keeps_zoom() {
    let v = recentered(base().with_zoom(3.0), 0.0, 0.0, None, None, &wide_zoom());
    assert_eq!(v.zoom_factor, 3.0);
}

#[test]
fn top_left_anchors_zoom_at_corner() {
    let v = moved_top_left(base(), 10.0, 20.0, Some(2.0), None, &wide_zoom());
    assert!(approx_eq(v.left, 10.0));
    assert!(approx_eq(v.top, 20.0));
    assert!(approx_eq(v.center_x, 210.0));
    assert!(approx_eq(v.center_y, 170.0));

    let c = recentered(base(), 10.0, 20.0, Some(2.0), None, &wide_zoom());
    assert!(!approx_eq(c.left, v.left));
}

#[test]
fn top_left_respects_axis_bounds() {
    let bounds = ViewportBounds { y: AxisBound::between(0.0, 600.0), ..ViewportBounds::default() };
    let v = moved_top_left(base(), 0.0, -200.0, None, Some(&bounds), &wide_zoom());
    assert!(approx_eq(v.top, 0.0));
}

// =============================================================
// resized / reclamped / fit
// =============================================================

#[test]
fn first_sizing_centers_on_container() {
    let v = resized(CameraValues::default(), 800.0, 600.0, true);
    assert_eq!(v.center_x, 400.0);
    assert_eq!(v.center_y, 300.0);
    assert_consistent(&v);
}

#[test]
fn later_resize_keeps_center() {
    let start = base().with_zoom(2.0).with_center(50.0, 60.0);
    let v = resized(start, 400.0, 300.0, false);
    assert_eq!(v.center_x, 50.0);
    assert_eq!(v.center_y, 60.0);
    assert!(approx_eq(v.width, 200.0));
    assert_consistent(&v);
}

#[test]
fn reclamp_pulls_zoom_and_center_back() {
    let start = base().with_zoom(0.1).with_center(-5000.0, 0.0);
    let bounds = ViewportBounds { x: AxisBound::between(0.0, 1000.0), ..ViewportBounds::default() };
    let v = reclamped(start, Some(&bounds), &AxisBound::new(Some(0.8), None));
    assert!(approx_eq(v.zoom_factor, 0.8));
    assert!(approx_eq(v.left, 0.0));
    assert_consistent(&v);
}

#[test]
fn fit_zoom_uses_tighter_axis() {
    assert_eq!(fit_zoom_factor(&base(), 400.0, 300.0), 2.0);
    assert_eq!(fit_zoom_factor(&base(), 1600.0, 300.0), 0.5);
}

#[test]
fn delta_deserializes_with_defaults() {
    let d: PanZoomDelta = serde_json::from_str(r#"{"dz": -3, "source": "wheel"}"#).unwrap();
    assert_eq!(d.dz, -3.0);
    assert_eq!(d.dx, 0.0);
    assert_eq!(d.source, Some(InputSource::Wheel));
}
