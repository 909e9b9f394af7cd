//! Pan/zoom viewport camera over an unbounded virtual plane.
//!
//! A host UI feeds the camera raw gesture deltas, release velocities,
//! container resizes and explicit placement requests. The camera keeps a
//! working copy of its values that changes immediately, and publishes that
//! copy to the renderer at most once per animation frame. Frames come from a
//! host-supplied [`scheduler::FrameScheduler`]; in the browser that is
//! `requestAnimationFrame` (feature `web`), in tests and headless tools it is
//! a [`scheduler::ManualScheduler`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`camera`] | The [`camera::ViewportCamera`] engine: working/published values and frame handling |
//! | [`viewport`] | Host-facing [`viewport::Viewport`] wrapper: gesture routing, resize filtering, conversions |
//! | [`values`] | [`values::CameraValues`] and client/virtual coordinate conversions |
//! | [`bounds`] | Axis bounds, clamping primitives and effective zoom derivation |
//! | [`motion`] | Pure pan, zoom, recenter, resize and fit transforms |
//! | [`inertia`] | Release velocity and the per-frame glide with edge bounce |
//! | [`scheduler`] | Frame scheduling seam and the manual test clock |
//! | [`config`] | [`config::ViewportConfig`] from env or JSON |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants (zoom limits, friction, etc.) |
//! | `web` | `requestAnimationFrame` scheduler (feature `web`) |

pub mod bounds;
pub mod camera;
pub mod config;
pub mod consts;
pub mod error;
pub mod inertia;
pub mod motion;
pub mod scheduler;
pub mod values;
pub mod viewport;
#[cfg(feature = "web")]
pub mod web;
