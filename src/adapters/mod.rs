//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements    | Connects to                      |
//! |------------|---------------|----------------------------------|
//! | `hal`      | SensorPort    | embedded-hal GPIO, probe drivers |
//! |            | ActuatorPort  | embedded-hal GPIO, PWM           |
//! | `log_sink` | EventSink     | `log` facade                     |

pub mod hal;
pub mod log_sink;
