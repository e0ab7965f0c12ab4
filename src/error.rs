//! Error types for the room controller.
//!
//! All variants are `Copy` so a fault can be handed back to the caller,
//! logged, and carried in an event without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

/// A sensor could not produce a reading.
///
/// The controller never recovers from these: every decision returns the
/// error to its caller exactly as the sensor port produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The device did not answer at all (unplugged, broken wire).
    Disconnected,
    /// A GPIO read returned an error.
    GpioReadFailed,
    /// An I2C / UART transaction with the probe failed.
    BusError,
    /// The probe answered with data that could not be decoded.
    InvalidReading,
    /// No sensor is wired to the requested pin.
    UnknownPin(u8),
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "sensor disconnected"),
            Self::GpioReadFailed => write!(f, "GPIO read failed"),
            Self::BusError => write!(f, "sensor bus error"),
            Self::InvalidReading => write!(f, "invalid sensor reading"),
            Self::UnknownPin(pin) => write!(f, "no sensor on pin {pin}"),
        }
    }
}

impl std::error::Error for SensorError {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from loading or validating a [`RoomConfig`](crate::config::RoomConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// The serialized config could not be parsed.
    Malformed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::Malformed => write!(f, "config malformed"),
        }
    }
}

impl std::error::Error for ConfigError {}
