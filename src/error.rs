//! Error types for the camera engine.
//!
//! Numeric anomalies (out-of-range zoom, bounds narrower than the view) are
//! normalized silently and never surface here. These cover the few requests
//! the engine refuses outright.

/// Error returned by the fit-into-view operations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CameraError {
    /// The requested area has a zero, negative or non-finite side, which has
    /// no zoom factor that fits it.
    #[error("cannot fit degenerate area {width} x {height} into view")]
    DegenerateArea { width: f64, height: f64 },
    /// The requested horizontal span is zero, negative or non-finite.
    #[error("cannot fit degenerate span of width {width} into view")]
    DegenerateSpan { width: f64 },
}

/// Error returned by a [`crate::scheduler::FrameScheduler`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    /// No frame source exists in this environment (e.g. no browser window).
    #[error("no animation frame source available")]
    Unavailable,
    /// The frame source rejected the request.
    #[error("animation frame request failed: {0}")]
    Request(String),
}

/// Error returned while loading a [`crate::config::ViewportConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held something other than a number.
    #[error("invalid number in {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    /// A value parsed but falls outside its allowed range.
    #[error("{field} out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },
    /// A JSON config document could not be parsed.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
