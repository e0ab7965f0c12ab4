//! embedded-hal adapter. Bridges real peripherals to the domain port traits.
//!
//! Owns the GPIO pins, the window servo PWM channel and the two probe
//! drivers, exposing them through [`SensorPort`] and [`ActuatorPort`]. This
//! is the only module in the crate that touches hardware traits.
//!
//! Actuator writes have no error channel in the domain, so a failed write
//! is logged and dropped.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;
use log::error;

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::error::SensorError;
use crate::pins;
use crate::sensors::{Co2Probe, TemperatureProbe};

/// The GPIO side of the board, one field per wired pin.
pub struct RoomPins<I, O, S> {
    /// Presence sensor input at [`pins::INFRARED_PIN`].
    pub presence: I,
    /// Photoresistor input at [`pins::PHOTO_PIN`].
    pub photo: I,
    /// Light relay output at [`pins::LED_PIN`].
    pub light: O,
    /// Fan relay output at [`pins::FAN_PIN`].
    pub fan: O,
    /// Window servo PWM channel.
    pub servo: S,
}

/// Concrete adapter that combines all hardware behind port traits.
///
/// The indoor and outdoor thermometers may be different driver types (or two
/// different closures).
pub struct HalAdapter<I, O, S, TI, TO, C> {
    pins: RoomPins<I, O, S>,
    indoor: TI,
    outdoor: TO,
    co2: C,
}

impl<I, O, S, TI, TO, C> HalAdapter<I, O, S, TI, TO, C> {
    pub fn new(pins: RoomPins<I, O, S>, indoor: TI, outdoor: TO, co2: C) -> Self {
        Self {
            pins,
            indoor,
            outdoor,
            co2,
        }
    }

    /// Hand the peripherals back (e.g. to put the board to sleep).
    pub fn release(self) -> (RoomPins<I, O, S>, TI, TO, C) {
        (self.pins, self.indoor, self.outdoor, self.co2)
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<I, O, S, TI, TO, C> SensorPort for HalAdapter<I, O, S, TI, TO, C>
where
    I: InputPin,
    TI: TemperatureProbe,
    TO: TemperatureProbe,
    C: Co2Probe,
{
    fn read_digital(&mut self, pin: u8) -> Result<bool, SensorError> {
        let input = match pin {
            pins::INFRARED_PIN => &mut self.pins.presence,
            pins::PHOTO_PIN => &mut self.pins.photo,
            other => return Err(SensorError::UnknownPin(other)),
        };
        input.is_high().map_err(|_| SensorError::GpioReadFailed)
    }

    fn indoor_temperature(&mut self) -> Result<f32, SensorError> {
        self.indoor.read_celsius()
    }

    fn outdoor_temperature(&mut self) -> Result<f32, SensorError> {
        self.outdoor.read_celsius()
    }

    fn co2_ppm(&mut self) -> Result<u16, SensorError> {
        self.co2.read_ppm()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<I, O, S, TI, TO, C> ActuatorPort for HalAdapter<I, O, S, TI, TO, C>
where
    O: OutputPin,
    S: SetDutyCycle,
{
    fn write_digital(&mut self, pin: u8, high: bool) {
        let output = match pin {
            pins::LED_PIN => &mut self.pins.light,
            pins::FAN_PIN => &mut self.pins.fan,
            other => {
                error!("write to unmapped pin {} dropped", other);
                return;
            }
        };
        if let Err(e) = output.set_state(PinState::from(high)) {
            error!("GPIO write to pin {} failed: {:?}", pin, e);
        }
    }

    fn set_servo_angle(&mut self, angle: u8) {
        if let Err(e) = self.pins.servo.set_duty_cycle_percent(angle) {
            error!("servo duty {}% failed: {:?}", angle, e);
        }
    }
}
