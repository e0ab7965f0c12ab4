//! Threshold and hysteresis rules with no I/O.

pub mod rules;
