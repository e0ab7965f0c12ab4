//! Outbound application events and decision outcomes.
//!
//! The [`RoomService`](super::service::RoomService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.

use crate::error::SensorError;

/// Last commanded position of every actuator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActuatorState {
    pub light_on: bool,
    pub window_open: bool,
    pub fan_on: bool,
}

/// What one decision operation did.
///
/// `before` / `after` are the controller's flag for that actuator; for the
/// window `true` means open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub before: bool,
    pub after: bool,
    /// Whether an actuation command was sent to the hardware.
    pub commanded: bool,
}

impl Decision {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Which decision operation an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    Light,
    Window,
    AirQuality,
}

/// Structured events emitted by the service.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomEvent {
    /// The service has started (carries the initial actuator state).
    Started(ActuatorState),

    /// The light changed state.
    LightSwitched { on: bool },

    /// The window moved.
    WindowMoved { open: bool },

    /// The fan changed state.
    FanSwitched { on: bool },

    /// A decision was aborted because a sensor failed.
    SensorFault {
        decision: DecisionKind,
        error: SensorError,
    },

    /// End-of-cycle snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryData {
    pub tick: u64,
    pub state: ActuatorState,
    /// Number of decisions that failed during this tick (0–3).
    pub faults: u8,
}
