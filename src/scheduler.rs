//! Frame scheduling seam between the camera and its host.
//!
//! The camera never drives time itself. It asks a [`FrameScheduler`] for the
//! next frame and the host calls
//! [`ViewportCamera::on_animation_frame`](crate::camera::ViewportCamera::on_animation_frame)
//! when that frame arrives. The camera debounces requests, so a scheduler sees
//! at most one outstanding request at a time.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::error::SchedulerError;

/// Host-provided "call me on the next frame" primitive.
pub trait FrameScheduler {
    /// Request a single callback on the next frame.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError`] when no frame can be requested; the camera
    /// stays consistent and retries on its next mutation.
    fn request_frame(&mut self) -> Result<(), SchedulerError>;

    /// Cancel the outstanding request, if any.
    fn cancel_frame(&mut self);

    /// Called by the camera at the start of every frame it handles. Sources
    /// that track their own outstanding request clear it here.
    fn frame_delivered(&mut self) {}
}

/// Scheduler that only records requests. The owner fires frames by hand,
/// which gives tests and headless tools a fixed-step clock.
///
/// Clones share their counters, so a clone kept outside the camera observes
/// the requests the camera makes.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    requested: Rc<Cell<usize>>,
    cancelled: Rc<Cell<usize>>,
    pending: Rc<Cell<bool>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total frames requested so far.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested.get()
    }

    /// Total cancellations so far.
    #[must_use]
    pub fn cancelled(&self) -> usize {
        self.cancelled.get()
    }

    /// Whether a request is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Mark the outstanding request as delivered. Returns whether one was pending.
    pub fn take_pending(&self) -> bool {
        self.pending.replace(false)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<(), SchedulerError> {
        self.requested.set(self.requested.get() + 1);
        self.pending.set(true);
        Ok(())
    }

    fn cancel_frame(&mut self) {
        if self.pending.replace(false) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    fn frame_delivered(&mut self) {
        self.pending.set(false);
    }
}
