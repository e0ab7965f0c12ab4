//! Transition rules for the three actuators.
//!
//! Pure functions: readings in, target state out. `None` means "leave the
//! actuator where it is". Whether a command is actually sent is decided by
//! the controller, not here.

use crate::config::RoomConfig;

/// Light target: on only when someone is present and it is too dark.
pub fn light_target(occupied: bool, enough_light: bool) -> bool {
    occupied && !enough_light
}

/// Window target from one indoor and one outdoor reading.
///
/// Inside the comfort band the window follows the temperature difference;
/// outside it (or on a NaN reading) the window is forced shut.
pub fn window_target(config: &RoomConfig, indoor_c: f32, outdoor_c: f32) -> Option<bool> {
    let band = config.comfort_min_c..=config.comfort_max_c;
    if !(band.contains(&indoor_c) && band.contains(&outdoor_c)) {
        return Some(false);
    }

    if outdoor_c - indoor_c > config.window_differential_c {
        Some(true)
    } else if indoor_c - outdoor_c > config.window_differential_c {
        Some(false)
    } else {
        None
    }
}

/// Fan target with a dead band between the off and on thresholds.
pub fn fan_target(config: &RoomConfig, co2_ppm: u16) -> Option<bool> {
    if co2_ppm >= config.co2_fan_on_ppm {
        Some(true)
    } else if co2_ppm < config.co2_fan_off_ppm {
        Some(false)
    } else {
        None
    }
}
