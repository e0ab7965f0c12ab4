//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RoomController (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, event sinks) implement these traits.
//! The [`RoomController`](super::controller::RoomController) owns one value
//! implementing both hardware ports, injected at construction, so the domain
//! core never touches hardware directly.

use crate::error::SensorError;

use super::events::RoomEvent;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain sensor data.
///
/// Every method may fail with a [`SensorError`]; the domain propagates it
/// untouched.
pub trait SensorPort {
    /// Read a digital input (presence sensor, photoresistor) by pin number.
    fn read_digital(&mut self, pin: u8) -> Result<bool, SensorError>;

    /// One indoor temperature sample in Celsius.
    fn indoor_temperature(&mut self) -> Result<f32, SensorError>;

    /// One outdoor temperature sample in Celsius.
    fn outdoor_temperature(&mut self) -> Result<f32, SensorError>;

    /// One CO2 concentration sample in ppm.
    fn co2_ppm(&mut self) -> Result<u16, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Drive a digital output (light relay, fan relay) high or low.
    fn write_digital(&mut self, pin: u8, high: bool);

    /// Move the window servo to the given position.
    fn set_servo_angle(&mut self, angle: u8);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The service emits structured [`RoomEvent`]s through this port.
/// Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &RoomEvent);
}
