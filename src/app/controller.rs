//! The room controller: sensor queries, decisions and actuator state.
//!
//! [`RoomController`] owns the hardware ports and the last commanded state
//! of the light, the window and the fan. Each decision reads the sensors it
//! needs, asks [`control::rules`](crate::control::rules) for a target, and
//! actuates according to that actuator's policy:
//!
//! | actuator | command sent                         |
//! |----------|--------------------------------------|
//! | light    | every call, even if unchanged        |
//! | window   | only when the target differs         |
//! | fan      | only when the target differs         |
//!
//! A sensor error aborts the decision before anything is written; the flag
//! keeps its previous value and the error is returned unchanged.
//!
//! The controller does no logging; callers observe it through the returned
//! [`Decision`]s.
//!
//! Every decision takes `&mut self`. Sharing one controller between threads
//! needs an outer lock; decisions are never interleaved otherwise.

use crate::config::RoomConfig;
use crate::control::rules;
use crate::error::{ConfigError, SensorError};
use crate::pins;

use super::events::{ActuatorState, Decision};
use super::ports::{ActuatorPort, SensorPort};

pub struct RoomController<H> {
    hw: H,
    config: RoomConfig,
    state: ActuatorState,
}

impl<H: SensorPort + ActuatorPort> RoomController<H> {
    /// Controller with factory thresholds; light off, window closed, fan off.
    pub fn new(hw: H) -> Self {
        Self {
            hw,
            config: RoomConfig::default(),
            state: ActuatorState::default(),
        }
    }

    /// Controller with custom thresholds. The config is validated first.
    pub fn with_config(hw: H, config: RoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            hw,
            config,
            state: ActuatorState::default(),
        })
    }

    /// Seed the actuator flags at construction, e.g. when the host knows the
    /// window was left open before a restart.
    #[must_use]
    pub fn with_initial_state(mut self, state: ActuatorState) -> Self {
        self.state = state;
        self
    }

    // ── Sensor queries ────────────────────────────────────────

    /// Raw presence reading.
    pub fn check_room_occupancy(&mut self) -> Result<bool, SensorError> {
        self.hw.read_digital(pins::INFRARED_PIN)
    }

    /// Raw photoresistor reading (`true` = enough light). A faulty sensor is
    /// reported, never mapped to a light level.
    pub fn check_enough_light(&mut self) -> Result<bool, SensorError> {
        self.hw.read_digital(pins::PHOTO_PIN)
    }

    // ── Decisions ─────────────────────────────────────────────

    /// Switch the light on when the room is occupied and too dark, off
    /// otherwise. The command is written on every call.
    pub fn manage_light_level(&mut self) -> Result<Decision, SensorError> {
        let occupied = self.check_room_occupancy()?;
        let enough_light = self.check_enough_light()?;
        let target = rules::light_target(occupied, enough_light);

        let before = self.state.light_on;
        self.hw.write_digital(pins::LED_PIN, target);
        self.state.light_on = target;

        Ok(Decision {
            before,
            after: target,
            commanded: true,
        })
    }

    /// Open or close the window from one indoor and one outdoor sample
    /// (read in that order). The servo only moves on a transition.
    pub fn manage_window(&mut self) -> Result<Decision, SensorError> {
        let indoor = self.hw.indoor_temperature()?;
        let outdoor = self.hw.outdoor_temperature()?;

        let before = self.state.window_open;
        let Some(open) = rules::window_target(&self.config, indoor, outdoor) else {
            return Ok(Self::hold(before));
        };
        if open == before {
            return Ok(Self::hold(before));
        }

        let angle = if open {
            pins::WINDOW_OPEN_ANGLE
        } else {
            pins::WINDOW_CLOSED_ANGLE
        };
        self.hw.set_servo_angle(angle);
        self.state.window_open = open;

        Ok(Decision {
            before,
            after: open,
            commanded: true,
        })
    }

    /// Run the fan from one CO2 sample, with a dead band between the off and
    /// on thresholds. The relay is only written on a transition.
    pub fn monitor_air_quality(&mut self) -> Result<Decision, SensorError> {
        let co2 = self.hw.co2_ppm()?;

        let before = self.state.fan_on;
        let Some(on) = rules::fan_target(&self.config, co2) else {
            return Ok(Self::hold(before));
        };
        if on == before {
            return Ok(Self::hold(before));
        }

        self.hw.write_digital(pins::FAN_PIN, on);
        self.state.fan_on = on;

        Ok(Decision {
            before,
            after: on,
            commanded: true,
        })
    }

    fn hold(state: bool) -> Decision {
        Decision {
            before: state,
            after: state,
            commanded: false,
        }
    }
}

impl<H> RoomController<H> {
    // ── Queries ───────────────────────────────────────────────

    pub fn light_on(&self) -> bool {
        self.state.light_on
    }

    pub fn window_open(&self) -> bool {
        self.state.window_open
    }

    pub fn fan_on(&self) -> bool {
        self.state.fan_on
    }

    /// All three flags at once.
    pub fn state(&self) -> ActuatorState {
        self.state
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Borrow the hardware adapter (tests inspect recorded commands here).
    pub fn hardware(&self) -> &H {
        &self.hw
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    /// Give the hardware back to the caller.
    pub fn into_hardware(self) -> H {
        self.hw
    }
}
