//! RoomService: one tick runs every decision and reports through the sink.

use crate::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

use smartroom::adapters::log_sink::{LogEventSink, format_event};
use smartroom::app::controller::RoomController;
use smartroom::app::events::{ActuatorState, DecisionKind, RoomEvent, TelemetryData};
use smartroom::app::service::RoomService;
use smartroom::error::SensorError;
use smartroom::pins::{FAN_PIN, LED_PIN, WINDOW_OPEN_ANGLE};
use std::collections::VecDeque;

fn make_service(hw: MockHardware) -> (RoomService<MockHardware>, RecordingSink) {
    let mut service = RoomService::new(RoomController::new(hw));
    let mut sink = RecordingSink::new();
    service.start(&mut sink);
    (service, sink)
}

#[test]
fn start_announces_initial_state() {
    let (service, sink) = make_service(MockHardware::new());
    assert_eq!(sink.events, vec![RoomEvent::Started(ActuatorState::default())]);
    assert_eq!(service.tick_count(), 0);
}

#[test]
fn first_cycle_switches_everything_on() {
    let (mut service, mut sink) = make_service(MockHardware::room(true, false, 20.0, 23.0, 800));
    sink.events.clear();

    let report = service.tick(&mut sink);

    assert!(report.is_clean());
    assert_eq!(
        service.controller().hardware().calls,
        vec![
            ActuatorCall::Digital {
                pin: LED_PIN,
                high: true
            },
            ActuatorCall::Servo(WINDOW_OPEN_ANGLE),
            ActuatorCall::Digital {
                pin: FAN_PIN,
                high: true
            },
        ]
    );
    let on = ActuatorState {
        light_on: true,
        window_open: true,
        fan_on: true,
    };
    assert_eq!(service.state(), on);
    assert_eq!(
        sink.events,
        vec![
            RoomEvent::LightSwitched { on: true },
            RoomEvent::WindowMoved { open: true },
            RoomEvent::FanSwitched { on: true },
            RoomEvent::Telemetry(TelemetryData {
                tick: 1,
                state: on,
                faults: 0
            }),
        ]
    );
}

#[test]
fn steady_cycle_only_rewrites_the_light() {
    let (mut service, mut sink) = make_service(MockHardware::room(true, false, 20.0, 23.0, 800));
    service.tick(&mut sink);
    service
        .controller_mut()
        .hardware_mut()
        .digital = VecDeque::from([Ok(true), Ok(false)]);
    service.controller_mut().hardware_mut().calls.clear();
    sink.events.clear();

    service.tick(&mut sink);

    assert_eq!(
        service.controller().hardware().calls,
        vec![ActuatorCall::Digital {
            pin: LED_PIN,
            high: true
        }]
    );
    assert_eq!(sink.events.len(), 1, "only telemetry expected: {:?}", sink.events);
    assert!(matches!(sink.events[0], RoomEvent::Telemetry(TelemetryData { tick: 2, .. })));
}

#[test]
fn window_fault_does_not_block_light_or_fan() {
    let mut hw = MockHardware::room(true, false, 20.0, 23.0, 900);
    hw.outdoor = VecDeque::from([Err(SensorError::BusError)]);
    let (mut service, mut sink) = make_service(hw);
    sink.events.clear();

    let report = service.tick(&mut sink);

    assert_eq!(report.window, Err(SensorError::BusError));
    assert!(report.light.is_ok());
    assert!(report.air_quality.is_ok());
    assert_eq!(report.fault_count(), 1);
    assert!(service.controller().light_on());
    assert!(!service.controller().window_open());
    assert!(service.controller().fan_on());
    assert!(sink.events.contains(&RoomEvent::SensorFault {
        decision: DecisionKind::Window,
        error: SensorError::BusError,
    }));
    assert!(matches!(
        sink.events.last(),
        Some(RoomEvent::Telemetry(TelemetryData { faults: 1, .. }))
    ));
}

#[test]
fn unplugged_board_reports_three_faults() {
    let (mut service, mut sink) = make_service(MockHardware::new());

    let report = service.tick(&mut sink);

    assert_eq!(report.fault_count(), 3);
    assert!(service.controller().hardware().calls.is_empty());
    assert_eq!(service.state(), ActuatorState::default());
}

#[test]
fn tick_count_advances() {
    let (mut service, mut sink) = make_service(MockHardware::room(false, true, 22.0, 22.0, 600));
    for _ in 0..5 {
        service.tick(&mut sink);
    }
    assert_eq!(service.tick_count(), 5);
    assert_eq!(service.build_telemetry(0).tick, 5);
}

#[test]
fn log_sink_renders_one_line_per_cycle_event() {
    let (mut service, mut sink) = make_service(MockHardware::room(true, false, 20.0, 23.0, 800));
    service.tick(&mut sink);

    let lines: Vec<String> = sink.events.iter().map(format_event).collect();
    assert_eq!(
        lines,
        vec![
            "START | light=OFF window=CLOSED fan=OFF",
            "LIGHT | ON",
            "WINDOW | OPEN",
            "FAN | ON",
            "TELEM | tick=1 | light=ON window=OPEN fan=ON | faults=0",
        ]
    );

    let mut log = LogEventSink::new();
    let report = service.tick(&mut log);
    assert!(report.is_clean());
    assert_eq!(service.tick_count(), 2);
}
