//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing room events to the `log` facade.
//! The host picks the backend (serial console, journald, ...).

use log::info;

use crate::app::events::RoomEvent;
use crate::app::ports::EventSink;

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

fn open_closed(open: bool) -> &'static str {
    if open { "OPEN" } else { "CLOSED" }
}

/// The single log line written for `event`.
pub fn format_event(event: &RoomEvent) -> String {
    match event {
        RoomEvent::Started(s) => format!(
            "START | light={} window={} fan={}",
            on_off(s.light_on),
            open_closed(s.window_open),
            on_off(s.fan_on),
        ),
        RoomEvent::LightSwitched { on } => format!("LIGHT | {}", on_off(*on)),
        RoomEvent::WindowMoved { open } => format!("WINDOW | {}", open_closed(*open)),
        RoomEvent::FanSwitched { on } => format!("FAN | {}", on_off(*on)),
        RoomEvent::SensorFault { decision, error } => {
            format!("FAULT | {:?}: {}", decision, error)
        }
        RoomEvent::Telemetry(t) => format!(
            "TELEM | tick={} | light={} window={} fan={} | faults={}",
            t.tick,
            on_off(t.state.light_on),
            open_closed(t.state.window_open),
            on_off(t.state.fan_on),
            t.faults,
        ),
    }
}

/// Adapter that logs every [`RoomEvent`] at `info` level.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &RoomEvent) {
        info!("{}", format_event(event));
    }
}
