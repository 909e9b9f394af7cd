//! JSON-lines gesture scripts replayed against a headless viewport.
//!
//! Each non-blank line is one [`Command`], tagged by `op`. Lines starting
//! with `#` are comments. After every command the replay runs at most one
//! frame, so deltas between two commands behave like input arriving between
//! two display refreshes. Each published frame is written to the output as
//! one JSON line.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::io::{self, BufRead, Write};

use serde::Deserialize;
use zoomable::bounds::{AxisBound, ViewportBounds};
use zoomable::config::ViewportConfig;
use zoomable::error::CameraError;
use zoomable::motion::PanZoomDelta;
use zoomable::scheduler::ManualScheduler;
use zoomable::viewport::{PanZoomEvent, Viewport};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: invalid command: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: {source}")]
    Camera {
        line: usize,
        #[source]
        source: CameraError,
    },
    #[error("i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode camera values: {0}")]
    Encode(serde_json::Error),
}

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Resize {
        width: f64,
        height: f64,
    },
    Move(PanZoomDelta),
    /// End of a drag with release velocity in client pixels.
    Fling {
        vx: f64,
        vy: f64,
    },
    Recenter {
        x: f64,
        y: f64,
        #[serde(default)]
        zoom: Option<f64>,
    },
    TopLeft {
        x: f64,
        y: f64,
        #[serde(default)]
        zoom: Option<f64>,
    },
    Fit {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        #[serde(default)]
        zoom_bounds: Option<AxisBound>,
    },
    FitHorizontal {
        left: f64,
        width: f64,
        #[serde(default)]
        zoom_bounds: Option<AxisBound>,
    },
    Bounds(ViewportBounds),
    BoundsToContent,
    ClearBounds,
    /// Run up to `count` frames, stopping early once nothing is pending.
    Frames {
        count: usize,
    },
    /// Run frames until nothing is pending, capped by the replay's frame limit.
    Settle,
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
///
/// # Errors
///
/// Returns the JSON error for a malformed command.
pub fn parse_line(line: &str) -> Result<Option<Command>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}

/// Totals reported once a replay finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub commands: usize,
    pub frames: usize,
}

/// Headless viewport plus the sink its published frames go to.
pub struct Replay<W: Write> {
    viewport: Viewport,
    out: W,
    max_frames: usize,
    summary: ReplaySummary,
}

impl<W: Write> Replay<W> {
    pub fn new(config: &ViewportConfig, max_frames: usize, out: W) -> Self {
        Self {
            viewport: Viewport::new(config, Box::new(ManualScheduler::new())),
            out,
            max_frames,
            summary: ReplaySummary::default(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replay every command from `reader`, then flush the output.
    ///
    /// # Errors
    ///
    /// Stops at the first unreadable, malformed or rejected line.
    pub fn run(&mut self, reader: impl BufRead) -> Result<ReplaySummary, ScriptError> {
        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let Some(command) = parse_line(&line?).map_err(|source| ScriptError::Parse { line: line_no, source })?
            else {
                continue;
            };
            self.apply(line_no, &command)?;
        }
        self.out.flush()?;
        Ok(self.summary)
    }

    /// Apply one command and run the frames it calls for.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Camera`] when the camera rejects the command,
    /// or an output error.
    pub fn apply(&mut self, line: usize, command: &Command) -> Result<(), ScriptError> {
        tracing::trace!(line, ?command, "replaying command");
        let camera_err = |source| ScriptError::Camera { line, source };

        match command {
            Command::Resize { width, height } => self.viewport.update_container_dimensions(*width, *height),
            Command::Move(delta) => self.viewport.process_pan_zoom_event(PanZoomEvent::Move(*delta)),
            Command::Fling { vx, vy } => {
                self.viewport.process_pan_zoom_event(PanZoomEvent::End { vx: *vx, vy: *vy });
            }
            Command::Recenter { x, y, zoom } => self.viewport.camera_mut().recenter(*x, *y, *zoom),
            Command::TopLeft { x, y, zoom } => self.viewport.camera_mut().update_top_left(*x, *y, *zoom),
            Command::Fit { left, top, width, height, zoom_bounds } => self
                .viewport
                .camera_mut()
                .center_fit_area_into_view(*left, *top, *width, *height, *zoom_bounds)
                .map_err(camera_err)?,
            Command::FitHorizontal { left, width, zoom_bounds } => self
                .viewport
                .camera_mut()
                .center_fit_horizontal_area_into_view(*left, *width, *zoom_bounds)
                .map_err(camera_err)?,
            Command::Bounds(bounds) => self.viewport.camera_mut().set_bounds(Some(*bounds)),
            Command::BoundsToContent => self.viewport.camera_mut().set_bounds_to_content(),
            Command::ClearBounds => self.viewport.camera_mut().set_bounds(None),
            Command::Frames { count } => {
                self.summary.commands += 1;
                return self.run_frames(*count);
            }
            Command::Settle => {
                self.summary.commands += 1;
                self.run_frames(self.max_frames)?;
                if self.viewport.camera().has_pending_frame() {
                    tracing::warn!(line, max_frames = self.max_frames, "camera still moving after frame limit");
                }
                return Ok(());
            }
        }

        self.summary.commands += 1;
        self.run_frames(1)
    }

    fn run_frames(&mut self, limit: usize) -> Result<(), ScriptError> {
        let mut ran = 0;
        while ran < limit && self.viewport.camera().has_pending_frame() {
            self.viewport.on_animation_frame();
            self.emit()?;
            ran += 1;
        }
        self.summary.frames += ran;
        Ok(())
    }

    fn emit(&mut self) -> Result<(), ScriptError> {
        let rendered = serde_json::to_string(self.viewport.values()).map_err(ScriptError::Encode)?;
        writeln!(self.out, "{rendered}")?;
        Ok(())
    }
}
