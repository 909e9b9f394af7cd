//! Thin coordinating wrapper between a host UI and the camera.
//!
//! [`Viewport`] owns a [`ViewportCamera`], installs the configured zoom
//! limits and inertia, filters resize reports, routes gesture events and
//! converts coordinates against the published camera values. It holds no
//! camera math of its own.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::bounds::ViewportBounds;
use crate::camera::ViewportCamera;
use crate::config::ViewportConfig;
use crate::motion::PanZoomDelta;
use crate::scheduler::FrameScheduler;
use crate::values::{CameraValues, Point};

/// One event from the gesture layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanZoomEvent {
    /// An incremental pan/zoom delta while the gesture is in progress.
    Move(PanZoomDelta),
    /// The gesture finished, with residual release velocity in client pixels.
    End { vx: f64, vy: f64 },
}

/// Host-facing viewport: camera plus gesture and resize plumbing.
pub struct Viewport {
    camera: ViewportCamera,
    gesture_blocked: bool,
}

impl Viewport {
    /// Create an unsized viewport. It stays inert until the first
    /// [`Viewport::update_container_dimensions`].
    #[must_use]
    pub fn new(config: &ViewportConfig, scheduler: Box<dyn FrameScheduler>) -> Self {
        let mut camera = ViewportCamera::new(CameraValues::default(), scheduler).with_inertia(config.inertia);
        camera.set_bounds(Some(ViewportBounds::zoom_only(config.zoom_factor_min, config.zoom_factor_max)));
        Self { camera, gesture_blocked: false }
    }

    /// Attach the listener fired after every published update.
    #[must_use]
    pub fn with_listener(mut self, listener: impl FnMut(&CameraValues) + 'static) -> Self {
        self.camera.set_listener(Some(Box::new(listener)));
        self
    }

    // --- Accessors ---

    #[must_use]
    pub fn camera(&self) -> &ViewportCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut ViewportCamera {
        &mut self.camera
    }

    /// Published camera values, as last seen by the renderer.
    #[must_use]
    pub fn values(&self) -> &CameraValues {
        self.camera.values()
    }

    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.camera.working_values().container_width
    }

    #[must_use]
    pub fn container_height(&self) -> f64 {
        self.camera.working_values().container_height
    }

    // --- Host inputs ---

    /// Report the container's measured size. Unchanged sizes are dropped by
    /// the camera.
    pub fn update_container_dimensions(&mut self, width: f64, height: f64) {
        self.camera.handle_container_size_changed(width, height);
    }

    /// Place the view's top-left corner and zoom in one step.
    pub fn update(&mut self, left: f64, top: f64, zoom_factor: f64) {
        self.camera.update_top_left(left, top, Some(zoom_factor));
    }

    /// Ignore the rest of the current gesture, e.g. because it started on
    /// an element that handles its own pointer input. Cleared by the
    /// gesture's end event.
    pub fn block_current_gesture(&mut self) {
        self.gesture_blocked = true;
    }

    #[must_use]
    pub fn is_gesture_blocked(&self) -> bool {
        self.gesture_blocked
    }

    /// Route one gesture event into the camera.
    pub fn process_pan_zoom_event(&mut self, event: PanZoomEvent) {
        match event {
            PanZoomEvent::Move(delta) => {
                if self.gesture_blocked {
                    tracing::trace!("pan/zoom delta dropped for blocked gesture");
                    return;
                }
                self.camera.move_by_in_client_space(&delta);
            }
            PanZoomEvent::End { vx, vy } => {
                if self.gesture_blocked {
                    self.gesture_blocked = false;
                    return;
                }
                if vx != 0.0 || vy != 0.0 {
                    self.camera.move_by_deceleration_in_client_space(vx, vy);
                }
            }
        }
    }

    /// Forward an animation frame from the host's frame source.
    pub fn on_animation_frame(&mut self) {
        self.camera.on_animation_frame();
    }

    pub fn destroy(&mut self) {
        self.camera.destroy();
    }

    // --- Coordinate conversion ---

    /// Map a container-relative client position to virtual space.
    #[must_use]
    pub fn translate_client_xy_coordinates_to_virtual_space(&self, x: f64, y: f64) -> Point {
        self.values().client_to_virtual(Point::new(x, y))
    }

    /// Map a virtual-space position to container-relative client pixels.
    #[must_use]
    pub fn translate_virtual_space_to_client_xy_coordinates(&self, x: f64, y: f64) -> Point {
        self.values().virtual_to_client(Point::new(x, y))
    }

    #[must_use]
    pub fn client_distance_to_virtual(&self, distance: f64) -> f64 {
        self.values().client_dist_to_virtual(distance)
    }
}
