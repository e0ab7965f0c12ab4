//! Controller configuration parameters
//!
//! Thresholds for the window and ventilation rules. Defaults are the
//! factory values; a host may override them from a JSON document.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Decision thresholds for the room controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    // --- Window ---
    /// Lower edge of the comfort band (Celsius, inclusive)
    pub comfort_min_c: f32,
    /// Upper edge of the comfort band (Celsius, inclusive)
    pub comfort_max_c: f32,
    /// Indoor/outdoor difference that must be exceeded before the window moves
    pub window_differential_c: f32,

    // --- Ventilation ---
    /// CO2 concentration (ppm) at or above which the fan starts
    pub co2_fan_on_ppm: u16,
    /// CO2 concentration (ppm) below which the fan stops
    pub co2_fan_off_ppm: u16,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            // Window
            comfort_min_c: 18.0,
            comfort_max_c: 30.0,
            window_differential_c: 2.0,

            // Ventilation
            co2_fan_on_ppm: 800,
            co2_fan_off_ppm: 500,
        }
    }
}

impl RoomConfig {
    /// Parse a JSON document and validate it. Missing fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the rules meaningless.
    /// Invalid ranges are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.comfort_min_c.is_finite() || !self.comfort_max_c.is_finite() {
            return Err(ConfigError::ValidationFailed("comfort band must be finite"));
        }
        if self.comfort_min_c > self.comfort_max_c {
            return Err(ConfigError::ValidationFailed(
                "comfort_min_c above comfort_max_c",
            ));
        }
        if !self.window_differential_c.is_finite() || self.window_differential_c < 0.0 {
            return Err(ConfigError::ValidationFailed(
                "window_differential_c must be a non-negative number",
            ));
        }
        if self.co2_fan_off_ppm > self.co2_fan_on_ppm {
            return Err(ConfigError::ValidationFailed(
                "co2_fan_off_ppm above co2_fan_on_ppm",
            ));
        }
        Ok(())
    }
}
