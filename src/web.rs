//! Browser frame source built on `requestAnimationFrame`.
//!
//! The scheduler holds a `Weak` reference back to whatever owns the camera,
//! so the camera (which owns the scheduler) is never kept alive by its own
//! pending frame callback.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::{JsCast, closure::Closure};

use crate::camera::ViewportCamera;
use crate::config::ViewportConfig;
use crate::error::SchedulerError;
use crate::scheduler::FrameScheduler;
use crate::values::CameraValues;
use crate::viewport::Viewport;

/// Anything that consumes animation frames.
pub trait FrameTarget {
    fn on_animation_frame(&mut self);
}

impl FrameTarget for ViewportCamera {
    fn on_animation_frame(&mut self) {
        ViewportCamera::on_animation_frame(self);
    }
}

impl FrameTarget for Viewport {
    fn on_animation_frame(&mut self) {
        Viewport::on_animation_frame(self);
    }
}

/// Outstanding request: the browser handle plus the callback it will invoke.
type FrameSlot = Rc<RefCell<Option<(i32, Closure<dyn FnMut(f64)>)>>>;

pub struct AnimationFrameScheduler<T: FrameTarget + 'static> {
    target: Weak<RefCell<T>>,
    slot: FrameSlot,
}

impl<T: FrameTarget + 'static> AnimationFrameScheduler<T> {
    #[must_use]
    pub fn new(target: Weak<RefCell<T>>) -> Self {
        Self { target, slot: Rc::new(RefCell::new(None)) }
    }
}

impl<T: FrameTarget + 'static> FrameScheduler for AnimationFrameScheduler<T> {
    fn request_frame(&mut self) -> Result<(), SchedulerError> {
        let window = web_sys::window().ok_or(SchedulerError::Unavailable)?;

        let target = Weak::clone(&self.target);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            let Some(target) = target.upgrade() else {
                return;
            };
            match target.try_borrow_mut() {
                Ok(mut target) => target.on_animation_frame(),
                Err(_) => tracing::warn!("camera borrowed during animation frame; frame skipped"),
            }
        }) as Box<dyn FnMut(f64)>);

        let handle = window
            .request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>())
            .map_err(|err| SchedulerError::Request(format!("{err:?}")))?;
        *self.slot.borrow_mut() = Some((handle, cb));
        Ok(())
    }

    fn cancel_frame(&mut self) {
        let Some((handle, _cb)) = self.slot.borrow_mut().take() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.cancel_animation_frame(handle) {
            tracing::warn!(handle, error = ?err, "cancelAnimationFrame failed");
        }
    }

    fn frame_delivered(&mut self) {
        self.slot.borrow_mut().take();
    }
}

/// Create a camera driven by the browser's animation frames.
pub fn mount_camera(
    initial: CameraValues,
    listener: impl FnMut(&CameraValues) + 'static,
) -> Rc<RefCell<ViewportCamera>> {
    Rc::new_cyclic(|weak: &Weak<RefCell<ViewportCamera>>| {
        let scheduler = AnimationFrameScheduler::new(Weak::clone(weak));
        RefCell::new(ViewportCamera::new(initial, Box::new(scheduler)).with_listener(listener))
    })
}

/// Create a [`Viewport`] driven by the browser's animation frames.
pub fn mount_viewport(
    config: &ViewportConfig,
    listener: impl FnMut(&CameraValues) + 'static,
) -> Rc<RefCell<Viewport>> {
    Rc::new_cyclic(|weak: &Weak<RefCell<Viewport>>| {
        let scheduler = AnimationFrameScheduler::new(Weak::clone(weak));
        RefCell::new(Viewport::new(config, Box::new(scheduler)).with_listener(listener))
    })
}
