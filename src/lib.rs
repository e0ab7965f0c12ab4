//! SmartRoom controller library.
//!
//! Rule-based control of a room's light, window and ventilation fan from
//! presence, light, temperature and CO2 sensors. The decision core lives in
//! [`app`]; hardware is reached only through the port traits in
//! [`app::ports`], so everything runs on the host under test.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod pins;
pub mod sensors;
