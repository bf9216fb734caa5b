//! Zoom configuration: scale bounds and reset duration.
//!
//! Every write is floor-clamped independently, matching the per-property
//! behavior hosts expect from an image view. Strict validation (inverted
//! bounds, non-finite values) is available through [`ZoomConfig::validated`]
//! for callers that want to reject bad input instead of normalizing it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MAX_ZOOM_SCALE, DEFAULT_MIN_ZOOM_SCALE, DEFAULT_RESET_ANIMATION_DURATION, MAX_ZOOM_SCALE_FLOOR,
    MIN_ZOOM_SCALE_FLOOR, RESET_DURATION_FLOOR,
};

/// Errors produced while parsing or validating a [`ZoomConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `min_zoom_scale` ended up larger than `max_zoom_scale` after floor-clamping.
    #[error("min zoom scale {min} exceeds max zoom scale {max}")]
    InvertedBounds { min: f64, max: f64 },

    /// A field was NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    /// The JSON payload could not be decoded.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Scale bounds and reset timing for one engine instance.
///
/// Deserializes from camelCase keys (`minZoomScale`) with snake_case aliases;
/// missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoomConfig {
    #[serde(alias = "min_zoom_scale")]
    pub min_zoom_scale: f64,
    #[serde(alias = "max_zoom_scale")]
    pub max_zoom_scale: f64,
    /// Seconds.
    #[serde(alias = "reset_animation_duration")]
    pub reset_animation_duration: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom_scale: DEFAULT_MIN_ZOOM_SCALE,
            max_zoom_scale: DEFAULT_MAX_ZOOM_SCALE,
            reset_animation_duration: DEFAULT_RESET_ANIMATION_DURATION,
        }
    }
}

impl ZoomConfig {
    /// Build a config from raw values, floor-clamping each one.
    #[must_use]
    pub fn new(min_zoom_scale: f64, max_zoom_scale: f64, reset_animation_duration: f64) -> Self {
        let mut config = Self::default();
        config.set_min_zoom_scale(min_zoom_scale);
        config.set_max_zoom_scale(max_zoom_scale);
        config.set_reset_animation_duration(reset_animation_duration);
        config
    }

    /// Parse a JSON object and floor-clamp the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(Self::new(parsed.min_zoom_scale, parsed.max_zoom_scale, parsed.reset_animation_duration))
    }

    /// Floor-clamp to 0.1. Non-finite values are ignored.
    pub fn set_min_zoom_scale(&mut self, value: f64) {
        if let Some(v) = floor_clamp(value, MIN_ZOOM_SCALE_FLOOR) {
            self.min_zoom_scale = v;
        }
    }

    /// Floor-clamp to 1.0. Non-finite values are ignored.
    pub fn set_max_zoom_scale(&mut self, value: f64) {
        if let Some(v) = floor_clamp(value, MAX_ZOOM_SCALE_FLOOR) {
            self.max_zoom_scale = v;
        }
    }

    /// Floor-clamp to 0.0 seconds. Non-finite values are ignored.
    pub fn set_reset_animation_duration(&mut self, value: f64) {
        if let Some(v) = floor_clamp(value, RESET_DURATION_FLOOR) {
            self.reset_animation_duration = v;
        }
    }

    /// Whether `min_zoom_scale > max_zoom_scale`.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.min_zoom_scale > self.max_zoom_scale
    }

    /// Clamp `scale` into `[min_zoom_scale, max_zoom_scale]`.
    ///
    /// With inverted bounds the upper bound wins, so the result never exceeds
    /// `max_zoom_scale`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_zoom_scale).min(self.max_zoom_scale)
    }

    /// Reject configs that floor-clamping alone cannot make sensible.
    pub fn validated(self) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("min_zoom_scale", self.min_zoom_scale),
            ("max_zoom_scale", self.max_zoom_scale),
            ("reset_animation_duration", self.reset_animation_duration),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        let normalized = Self::new(self.min_zoom_scale, self.max_zoom_scale, self.reset_animation_duration);
        if normalized.is_inverted() {
            return Err(ConfigError::InvertedBounds { min: normalized.min_zoom_scale, max: normalized.max_zoom_scale });
        }
        Ok(normalized)
    }
}

fn floor_clamp(value: f64, floor: f64) -> Option<f64> {
    if value.is_finite() { Some(value.max(floor)) } else { None }
}
