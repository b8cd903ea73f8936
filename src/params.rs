//! Explosion parameters
//!
//! The immutable configuration record for one synthesis run. Values come
//! from the built-in defaults, an optional JSON config file and command
//! line overrides, and are validated once before synthesis starts. The DSP
//! primitives themselves never validate.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExplodeError, Result};

// ============================================================================
// Constants
// ============================================================================

/// Longest explosion accepted, in seconds
pub const MAX_DURATION_SECS: f64 = 60.0;

/// Slowest final speed factor accepted
pub const MIN_SPEED_FACTOR: f64 = 0.1;

/// Fastest final speed factor accepted
pub const MAX_SPEED_FACTOR: f64 = 10.0;

// ============================================================================
// Parameter Struct
// ============================================================================

/// Parameters of one explosion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionParams {
    /// Duration of the main explosion in seconds (roughly; speed change and
    /// reverb extend it)
    pub duration: f64,
    /// Number of noise layers per explosion
    pub layer_count: usize,
    /// Number of pre-explosions mixed in before the main explosion
    pub preexplosions: usize,
    /// Window in seconds for the random offset of each pre-explosion
    pub preexplosion_delay: f64,
    /// Low-pass coefficient applied to the pre-explosion burst, in (0, 1)
    pub preexplosion_lp_factor: f64,
    /// How many times the pre-explosion low-pass is applied
    pub preexplosion_lp_count: usize,
    /// Final playback speed; below 1.0 slows the explosion down
    pub final_speed_factor: f64,
    /// Early reverb reflections
    pub early_reflections: usize,
    /// Late reverb reflections
    pub late_reflections: usize,
}

impl Default for ExplosionParams {
    fn default() -> Self {
        Self {
            duration: 4.0,
            layer_count: 4,
            preexplosions: 1,
            preexplosion_delay: 0.2,
            preexplosion_lp_factor: 0.5,
            preexplosion_lp_count: 1,
            final_speed_factor: 0.25,
            early_reflections: 10,
            late_reflections: 50,
        }
    }
}

impl ExplosionParams {
    /// Validate all parameters are within their domains
    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 || self.duration > MAX_DURATION_SECS
        {
            return Err(ExplodeError::invalid_parameter(
                "duration",
                self.duration,
                format!("> 0 and <= {} seconds", MAX_DURATION_SECS),
            ));
        }
        if self.layer_count == 0 {
            return Err(ExplodeError::invalid_parameter(
                "layer_count",
                self.layer_count,
                "at least 1",
            ));
        }
        if !self.preexplosion_delay.is_finite() || self.preexplosion_delay < 0.0 {
            return Err(ExplodeError::invalid_parameter(
                "preexplosion_delay",
                self.preexplosion_delay,
                ">= 0 seconds",
            ));
        }
        if !(self.preexplosion_lp_factor > 0.0 && self.preexplosion_lp_factor < 1.0) {
            return Err(ExplodeError::invalid_parameter(
                "preexplosion_lp_factor",
                self.preexplosion_lp_factor,
                "between 0.0 and 1.0 (exclusive)",
            ));
        }
        if !(MIN_SPEED_FACTOR..=MAX_SPEED_FACTOR).contains(&self.final_speed_factor) {
            return Err(ExplodeError::invalid_parameter(
                "final_speed_factor",
                self.final_speed_factor,
                format!("between {} and {}", MIN_SPEED_FACTOR, MAX_SPEED_FACTOR),
            ));
        }
        Ok(())
    }

    /// Load parameters from a JSON file
    ///
    /// Keys missing from the file keep their default values. The result is
    /// not validated here; callers apply overrides first.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExplodeError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Render the parameters as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
