//! Application core — pure domain logic, zero I/O.
//!
//! The decision rules for the room live here: the [`controller`] owns the
//! actuator state, the [`service`] runs one cycle per tick. All interaction
//! with hardware happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod controller;
pub mod events;
pub mod ports;
pub mod service;
