//! Probe traits for the bus-attached sensors.
//!
//! The temperature pair (barometric sensors on I2C) and the CO2 sensor
//! (UART) are driven by external driver crates. Wrap each driver in one of
//! these traits and hand it to the [`HalAdapter`](crate::adapters::hal::HalAdapter).
//! Plain closures work too.

use crate::error::SensorError;

/// A single temperature probe.
pub trait TemperatureProbe {
    /// One sample in Celsius.
    fn read_celsius(&mut self) -> Result<f32, SensorError>;
}

/// A CO2 concentration probe.
pub trait Co2Probe {
    /// One sample in ppm.
    fn read_ppm(&mut self) -> Result<u16, SensorError>;
}

impl<F> TemperatureProbe for F
where
    F: FnMut() -> Result<f32, SensorError>,
{
    fn read_celsius(&mut self) -> Result<f32, SensorError> {
        self()
    }
}

impl<F> Co2Probe for F
where
    F: FnMut() -> Result<u16, SensorError>,
{
    fn read_ppm(&mut self) -> Result<u16, SensorError> {
        self()
    }
}
