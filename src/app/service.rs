//! Application service: one decision cycle per tick.
//!
//! [`RoomService`] wraps a [`RoomController`] for the host process. It runs
//! the three decisions, turns their outcomes into [`RoomEvent`]s and logs
//! sensor faults. It has no timer of its own: the host decides when to tick.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │      RoomService        │
//! ActuatorPort ◀──│  light · window · fan   │
//!                 └────────────────────────┘
//! ```

use log::warn;

use crate::error::SensorError;

use super::controller::RoomController;
use super::events::{ActuatorState, Decision, DecisionKind, RoomEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink, SensorPort};

/// Outcome of every decision in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub light: Result<Decision, SensorError>,
    pub window: Result<Decision, SensorError>,
    pub air_quality: Result<Decision, SensorError>,
}

impl CycleReport {
    /// Number of decisions aborted by a sensor fault.
    pub fn fault_count(&self) -> u8 {
        [&self.light, &self.window, &self.air_quality]
            .iter()
            .filter(|r| r.is_err())
            .count() as u8
    }

    pub fn is_clean(&self) -> bool {
        self.fault_count() == 0
    }
}

pub struct RoomService<H> {
    controller: RoomController<H>,
    tick_count: u64,
}

impl<H: SensorPort + ActuatorPort> RoomService<H> {
    pub fn new(controller: RoomController<H>) -> Self {
        Self {
            controller,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the initial actuator state.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        let state = self.controller.state();
        sink.emit(&RoomEvent::Started(state));
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run light, window and air-quality decisions once each, in that order.
    ///
    /// A fault in one decision does not stop the others.
    pub fn tick(&mut self, sink: &mut impl EventSink) -> CycleReport {
        self.tick_count += 1;

        let light = self.controller.manage_light_level();
        Self::report(DecisionKind::Light, &light, sink);

        let window = self.controller.manage_window();
        Self::report(DecisionKind::Window, &window, sink);

        let air_quality = self.controller.monitor_air_quality();
        Self::report(DecisionKind::AirQuality, &air_quality, sink);

        let report = CycleReport {
            light,
            window,
            air_quality,
        };
        sink.emit(&RoomEvent::Telemetry(
            self.build_telemetry(report.fault_count()),
        ));
        report
    }

    fn report(
        kind: DecisionKind,
        outcome: &Result<Decision, SensorError>,
        sink: &mut impl EventSink,
    ) {
        match outcome {
            Ok(decision) if decision.changed() => {
                let event = match kind {
                    DecisionKind::Light => RoomEvent::LightSwitched { on: decision.after },
                    DecisionKind::Window => RoomEvent::WindowMoved { open: decision.after },
                    DecisionKind::AirQuality => RoomEvent::FanSwitched { on: decision.after },
                };
                sink.emit(&event);
            }
            Ok(_) => {}
            Err(error) => {
                warn!("{:?} decision aborted: {}", kind, error);
                sink.emit(&RoomEvent::SensorFault {
                    decision: kind,
                    error: *error,
                });
            }
        }
    }
}

impl<H> RoomService<H> {
    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current state.
    pub fn build_telemetry(&self, faults: u8) -> TelemetryData {
        TelemetryData {
            tick: self.tick_count,
            state: self.controller.state(),
            faults,
        }
    }

    pub fn state(&self) -> ActuatorState {
        self.controller.state()
    }

    /// Ticks executed since construction.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn controller(&self) -> &RoomController<H> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut RoomController<H> {
        &mut self.controller
    }
}
