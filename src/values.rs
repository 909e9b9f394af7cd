//! Camera value model and coordinate conversions.
//!
//! [`CameraValues`] is a plain `Copy` record. Every camera operation takes one
//! by value and returns the next one, so the camera never aliases its working
//! and published state.

#[cfg(test)]
#[path = "values_test.rs"]
mod values_test;

use serde::{Deserialize, Serialize};

/// A point in either client or virtual space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Observable camera state.
///
/// `container_*` are in client pixels; everything else except `zoom_factor`
/// is in virtual-space units. After every published update:
///
/// - `left == center_x - width / 2`, `top == center_y - height / 2`
/// - `width == container_width / zoom_factor`,
///   `height == container_height / zoom_factor`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraValues {
    pub container_width: f64,
    pub container_height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// 2 is zoomed in, 1 maps one virtual unit to one client pixel, 0.5 is zoomed out.
    pub zoom_factor: f64,
}

impl Default for CameraValues {
    fn default() -> Self {
        Self {
            container_width: 0.0,
            container_height: 0.0,
            center_x: 0.0,
            center_y: 0.0,
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            zoom_factor: 1.0,
        }
    }
}

impl CameraValues {
    /// Values for a container of the given size, centered on its middle at zoom 1.
    #[must_use]
    pub fn sized(container_width: f64, container_height: f64) -> Self {
        Self { container_width, container_height, ..Self::default() }
            .with_zoom(1.0)
            .with_center(container_width / 2.0, container_height / 2.0)
    }

    /// Set the zoom factor and recompute the visible extent. Center and
    /// top-left are left alone; callers re-anchor afterwards.
    #[must_use]
    pub fn with_zoom(self, zoom_factor: f64) -> Self {
        Self {
            zoom_factor,
            width: self.container_width / zoom_factor,
            height: self.container_height / zoom_factor,
            ..self
        }
    }

    /// Move the center and re-derive the top-left corner.
    #[must_use]
    pub fn with_center(self, center_x: f64, center_y: f64) -> Self {
        Self {
            center_x,
            center_y,
            left: center_x - self.width / 2.0,
            top: center_y - self.height / 2.0,
            ..self
        }
    }

    /// Move the top-left corner and re-derive the center.
    #[must_use]
    pub fn with_top_left(self, left: f64, top: f64) -> Self {
        Self {
            left,
            top,
            center_x: left + self.width / 2.0,
            center_y: top + self.height / 2.0,
            ..self
        }
    }

    /// Re-derive the top-left corner from the current center and extent.
    #[must_use]
    pub fn rederive_top_left(self) -> Self {
        self.with_center(self.center_x, self.center_y)
    }

    /// Right edge of the visible region in virtual space.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge of the visible region in virtual space.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Convert a container-relative client point to virtual space.
    #[must_use]
    pub fn client_to_virtual(&self, client: Point) -> Point {
        Point {
            x: self.left + client.x / self.zoom_factor,
            y: self.top + client.y / self.zoom_factor,
        }
    }

    /// Convert a virtual-space point to container-relative client pixels.
    #[must_use]
    pub fn virtual_to_client(&self, virt: Point) -> Point {
        Point {
            x: (virt.x - self.left) * self.zoom_factor,
            y: (virt.y - self.top) * self.zoom_factor,
        }
    }

    /// Convert a client-space distance (pixels) to a virtual-space distance.
    #[must_use]
    pub fn client_dist_to_virtual(&self, client_dist: f64) -> f64 {
        client_dist / self.zoom_factor
    }
}
