//! Viewport configuration parsed from environment variables or JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ZOOM_MAX, DEFAULT_ZOOM_MIN};
use crate::error::ConfigError;
use crate::inertia::InertiaConfig;

pub const ENV_ZOOM_MIN: &str = "ZOOMABLE_ZOOM_MIN";
pub const ENV_ZOOM_MAX: &str = "ZOOMABLE_ZOOM_MAX";
pub const ENV_FRICTION: &str = "ZOOMABLE_FRICTION";
pub const ENV_MIN_VELOCITY: &str = "ZOOMABLE_MIN_VELOCITY";
pub const ENV_VELOCITY_BOOST: &str = "ZOOMABLE_VELOCITY_BOOST";

/// Settings for a [`crate::viewport::Viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Lowest zoom factor the user may reach. `None` leaves that side open.
    pub zoom_factor_min: Option<f64>,
    /// Highest zoom factor the user may reach. `None` leaves that side open.
    pub zoom_factor_max: Option<f64>,
    pub inertia: InertiaConfig,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            zoom_factor_min: Some(DEFAULT_ZOOM_MIN),
            zoom_factor_max: Some(DEFAULT_ZOOM_MAX),
            inertia: InertiaConfig::default(),
        }
    }
}

impl ViewportConfig {
    /// Build config from environment variables.
    ///
    /// All optional, defaults in parentheses:
    /// - `ZOOMABLE_ZOOM_MIN` (0.001)
    /// - `ZOOMABLE_ZOOM_MAX` (100)
    /// - `ZOOMABLE_FRICTION` (0.84)
    /// - `ZOOMABLE_MIN_VELOCITY` (0.2)
    /// - `ZOOMABLE_VELOCITY_BOOST` (20)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is not a number or the
    /// resulting config fails [`ViewportConfig::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup, using the same keys as
    /// [`ViewportConfig::from_env`].
    ///
    /// # Errors
    ///
    /// See [`ViewportConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            zoom_factor_min: parse_f64(&lookup, ENV_ZOOM_MIN)?.or(defaults.zoom_factor_min),
            zoom_factor_max: parse_f64(&lookup, ENV_ZOOM_MAX)?.or(defaults.zoom_factor_max),
            inertia: InertiaConfig {
                friction: parse_f64(&lookup, ENV_FRICTION)?.unwrap_or(defaults.inertia.friction),
                min_velocity: parse_f64(&lookup, ENV_MIN_VELOCITY)?.unwrap_or(defaults.inertia.min_velocity),
                velocity_boost: parse_f64(&lookup, ENV_VELOCITY_BOOST)?.unwrap_or(defaults.inertia.velocity_boost),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input, or a range error
    /// from [`ViewportConfig::validate`].
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is usable by the camera.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(min) = self.zoom_factor_min {
            positive("zoom_factor_min", min)?;
        }
        if let Some(max) = self.zoom_factor_max {
            positive("zoom_factor_max", max)?;
        }
        if let (Some(min), Some(max)) = (self.zoom_factor_min, self.zoom_factor_max)
            && min > max
        {
            return Err(out_of_range("zoom_factor_min", format!("{min} exceeds zoom_factor_max {max}")));
        }

        let inertia = &self.inertia;
        if !(inertia.friction > 0.0 && inertia.friction < 1.0) {
            return Err(out_of_range("inertia.friction", format!("{} is not within (0, 1)", inertia.friction)));
        }
        if !(inertia.min_velocity.is_finite() && inertia.min_velocity >= 0.0) {
            return Err(out_of_range("inertia.min_velocity", format!("{} is negative", inertia.min_velocity)));
        }
        positive("inertia.velocity_boost", inertia.velocity_boost)
    }
}

fn parse_f64(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<Option<f64>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber { var, value: raw.clone() })
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(out_of_range(field, format!("{value} is not a positive number")))
    }
}

fn out_of_range(field: &'static str, reason: String) -> ConfigError {
    ConfigError::OutOfRange { field, reason }
}
