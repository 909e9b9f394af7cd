//! The viewport camera engine.
//!
//! ARCHITECTURE
//! ============
//! [`ViewportCamera`] owns two copies of [`CameraValues`]:
//!
//! - `working`: always current. Every operation replaces it synchronously
//!   using the pure transforms in [`crate::motion`] and [`crate::inertia`].
//! - `published`: what the renderer reads. Overwritten from `working` only
//!   inside [`ViewportCamera::on_animation_frame`], which then notifies the
//!   listener.
//!
//! Any number of gesture deltas between two frames collapse into a single
//! publish, because at most one frame request is outstanding at a time.
//!
//! Interactive operations perform a "hard update": they stop any running
//! glide and request a frame. Only
//! [`ViewportCamera::move_by_deceleration_in_client_space`] starts a glide.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::bounds::{AxisBound, ViewportBounds, clamp_to_range, derive_zoom_bounds};
use crate::error::CameraError;
use crate::inertia::{self, InertiaConfig, Velocity};
use crate::motion::{self, PanZoomDelta};
use crate::scheduler::FrameScheduler;
use crate::values::CameraValues;

/// Callback fired after every publish with the freshly published values.
pub type UpdateListener = Box<dyn FnMut(&CameraValues)>;

/// Pan/zoom camera over an unbounded virtual plane.
pub struct ViewportCamera {
    published: CameraValues,
    working: CameraValues,
    bounds: Option<ViewportBounds>,
    zoom_bounds: AxisBound,
    inertia: InertiaConfig,
    velocity: Velocity,
    animating: bool,
    sized: bool,
    frame_pending: bool,
    destroyed: bool,
    scheduler: Box<dyn FrameScheduler>,
    on_updated: Option<UpdateListener>,
}

impl ViewportCamera {
    /// Create a camera starting from `initial`, with the default zoom range
    /// and no axis bounds. Nothing is published until the first frame.
    #[must_use]
    pub fn new(initial: CameraValues, scheduler: Box<dyn FrameScheduler>) -> Self {
        let bounds = ViewportBounds::camera_default();
        let zoom_bounds = derive_zoom_bounds(Some(&bounds), initial.container_width, initial.container_height);
        Self {
            published: initial,
            working: initial,
            bounds: Some(bounds),
            zoom_bounds,
            inertia: InertiaConfig::default(),
            velocity: Velocity::ZERO,
            animating: false,
            sized: initial.container_width != 0.0 || initial.container_height != 0.0,
            frame_pending: false,
            destroyed: false,
            scheduler,
            on_updated: None,
        }
    }

    /// Attach the update listener.
    #[must_use]
    pub fn with_listener(mut self, listener: impl FnMut(&CameraValues) + 'static) -> Self {
        self.on_updated = Some(Box::new(listener));
        self
    }

    /// Replace the deceleration tuning.
    #[must_use]
    pub fn with_inertia(mut self, inertia: InertiaConfig) -> Self {
        self.inertia = inertia;
        self
    }

    /// Replace (or remove) the update listener.
    pub fn set_listener(&mut self, listener: Option<UpdateListener>) {
        self.on_updated = listener;
    }

    // --- Queries ---

    /// Values as of the last published frame.
    #[must_use]
    pub fn values(&self) -> &CameraValues {
        &self.published
    }

    /// Current working values, including changes not yet published.
    #[must_use]
    pub fn working_values(&self) -> &CameraValues {
        &self.working
    }

    #[must_use]
    pub fn bounds(&self) -> Option<&ViewportBounds> {
        self.bounds.as_ref()
    }

    /// Zoom range after combining `bounds.z` with the axis-derived zoom-out limit.
    #[must_use]
    pub fn effective_zoom_bounds(&self) -> AxisBound {
        self.zoom_bounds
    }

    #[must_use]
    pub fn inertia(&self) -> &InertiaConfig {
        &self.inertia
    }

    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Whether a frame has been requested and not yet handled.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.frame_pending
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // --- Interactive mutations ---

    /// Apply one raw pan/zoom delta from the gesture layer.
    pub fn move_by_in_client_space(&mut self, delta: &PanZoomDelta) {
        self.working = motion::pan_zoom(self.working, delta, self.bounds.as_ref(), &self.zoom_bounds);
        tracing::trace!(
            dx = delta.dx,
            dy = delta.dy,
            dz = delta.dz,
            zoom = self.working.zoom_factor,
            "camera moved"
        );
        self.schedule_hard_update();
    }

    /// Add release velocity from a finished drag and start gliding.
    pub fn move_by_deceleration_in_client_space(&mut self, vx: f64, vy: f64) {
        let boost = inertia::release_velocity(vx, vy, self.working.zoom_factor, &self.inertia);
        self.velocity = Velocity::new(self.velocity.x + boost.x, self.velocity.y + boost.y);
        tracing::debug!(vx = self.velocity.x, vy = self.velocity.y, "inertia started");
        self.schedule_animation();
    }

    /// Center the view on a virtual-space point, optionally changing zoom.
    pub fn recenter(&mut self, x: f64, y: f64, zoom_factor: Option<f64>) {
        self.working = motion::recentered(self.working, x, y, zoom_factor, self.bounds.as_ref(), &self.zoom_bounds);
        self.schedule_hard_update();
    }

    /// Place the view's top-left corner at a virtual-space point, optionally
    /// changing zoom. A zoom change grows or shrinks the view from that corner.
    pub fn update_top_left(&mut self, x: f64, y: f64, zoom_factor: Option<f64>) {
        self.working =
            motion::moved_top_left(self.working, x, y, zoom_factor, self.bounds.as_ref(), &self.zoom_bounds);
        self.schedule_hard_update();
    }

    /// Zoom so the given area fits the container exactly and center on it.
    ///
    /// `extra_zoom_bounds` narrows the allowed zoom for this call only.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::DegenerateArea`] when `width` or `height` is not
    /// a positive finite number. The camera is left unchanged.
    pub fn center_fit_area_into_view(
        &mut self,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        extra_zoom_bounds: Option<AxisBound>,
    ) -> Result<(), CameraError> {
        check_area(width, height)?;
        let requested = motion::fit_zoom_factor(&self.working, width, height);
        let zoom = self.fit_zoom(requested, extra_zoom_bounds);
        self.recenter(left + width / 2.0, top + height / 2.0, Some(zoom));
        Ok(())
    }

    /// Zoom so the given horizontal span fills the container width and center
    /// on it, keeping the current top edge.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::DegenerateSpan`] when `width` is not a positive
    /// finite number. The camera is left unchanged.
    pub fn center_fit_horizontal_area_into_view(
        &mut self,
        left: f64,
        width: f64,
        extra_zoom_bounds: Option<AxisBound>,
    ) -> Result<(), CameraError> {
        if !is_valid_side(width) {
            tracing::warn!(width, "rejected degenerate fit span");
            return Err(CameraError::DegenerateSpan { width });
        }
        let requested = self.working.container_width / width;
        let zoom = self.fit_zoom(requested, extra_zoom_bounds);
        let center_x = left + width / 2.0;
        let visible_width = self.working.container_width / zoom;
        self.update_top_left(center_x - visible_width / 2.0, self.working.top, Some(zoom));
        Ok(())
    }

    fn fit_zoom(&self, requested: f64, extra_zoom_bounds: Option<AxisBound>) -> f64 {
        let narrowed = extra_zoom_bounds.map_or(requested, |extra| clamp_to_range(requested, &extra));
        motion::resolve_zoom_factor(narrowed, self.working.zoom_factor, &self.zoom_bounds)
    }

    // --- Host notifications ---

    /// Adopt a new container size reported by the resize collaborator.
    /// Repeating the current size is a no-op.
    pub fn handle_container_size_changed(&mut self, width: f64, height: f64) {
        if width == self.working.container_width && height == self.working.container_height {
            return;
        }

        let first_sizing = !self.sized;
        self.working = motion::resized(self.working, width, height, first_sizing);
        self.sized = true;
        tracing::debug!(width, height, first_sizing, "container resized");

        // The container size feeds the axis-derived zoom-out limit.
        self.apply_bounds_change();
    }

    /// Replace the bounds wholesale. `None` removes every limit, including zoom.
    pub fn set_bounds(&mut self, bounds: Option<ViewportBounds>) {
        self.bounds = bounds;
        self.apply_bounds_change();
    }

    /// Bound panning to the current container rectangle at the origin and
    /// forbid zooming out past it.
    pub fn set_bounds_to_content(&mut self) {
        self.bounds = Some(ViewportBounds::content(self.working.container_width, self.working.container_height));
        self.apply_bounds_change();
    }

    /// Cancel any outstanding frame. The camera schedules nothing afterwards.
    pub fn destroy(&mut self) {
        if self.frame_pending {
            self.scheduler.cancel_frame();
            self.frame_pending = false;
        }
        self.animating = false;
        self.velocity = Velocity::ZERO;
        self.destroyed = true;
    }

    // --- Frame handling ---

    /// Handle one animation frame: advance any glide, publish the working
    /// values and notify the listener.
    pub fn on_animation_frame(&mut self) {
        self.scheduler.frame_delivered();
        self.frame_pending = false;

        if self.animating {
            let (working, velocity) = inertia::step(self.working, self.velocity, self.bounds.as_ref(), &self.inertia);
            self.working = working;
            self.velocity = velocity;
            if velocity.is_zero() {
                self.animating = false;
                tracing::debug!(center_x = working.center_x, center_y = working.center_y, "inertia settled");
            } else {
                self.schedule_frame();
            }
        }

        self.published = self.working;
        if let Some(listener) = self.on_updated.as_mut() {
            listener(&self.published);
        }
    }

    /// Fire frames back to back until none is pending or `max_frames` have
    /// run. Returns the number of frames handled. Meant for hosts with a
    /// manual clock.
    pub fn settle(&mut self, max_frames: usize) -> usize {
        let mut frames = 0;
        while self.frame_pending && frames < max_frames {
            self.on_animation_frame();
            frames += 1;
        }
        frames
    }

    // --- Internals ---

    fn apply_bounds_change(&mut self) {
        self.zoom_bounds =
            derive_zoom_bounds(self.bounds.as_ref(), self.working.container_width, self.working.container_height);
        self.working = motion::reclamped(self.working, self.bounds.as_ref(), &self.zoom_bounds);
        tracing::debug!(
            zoom_min = ?self.zoom_bounds.min,
            zoom_max = ?self.zoom_bounds.max,
            zoom = self.working.zoom_factor,
            "camera bounds derived"
        );
        self.schedule_hard_update();
    }

    fn schedule_animation(&mut self) {
        self.animating = !self.destroyed;
        self.schedule_frame();
    }

    fn schedule_hard_update(&mut self) {
        self.animating = false;
        self.velocity = Velocity::ZERO;
        self.schedule_frame();
    }

    fn schedule_frame(&mut self) {
        if self.destroyed || self.frame_pending {
            return;
        }
        match self.scheduler.request_frame() {
            Ok(()) => self.frame_pending = true,
            Err(error) => tracing::warn!(%error, "failed to schedule camera frame"),
        }
    }
}

impl Drop for ViewportCamera {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn check_area(width: f64, height: f64) -> Result<(), CameraError> {
    if is_valid_side(width) && is_valid_side(height) {
        Ok(())
    } else {
        Err(degenerate_area(width, height))
    }
}

fn is_valid_side(side: f64) -> bool {
    side.is_finite() && side > 0.0
}

fn degenerate_area(width: f64, height: f64) -> CameraError {
    tracing::warn!(width, height, "rejected degenerate fit area");
    CameraError::DegenerateArea { width, height }
}
