//! Integration tests for the controller's per-tick contract: sensor fusion,
//! alert timing, indicator updates, events and shutdown.

use gatecount::app::events::AppEvent;
use gatecount::app::ports::Indicator;
use gatecount::config::SystemConfig;
use gatecount::occupancy::alert::{AlertKind, AlertState};
use gatecount::occupancy::{GateId, Instant, Side};

use crate::mock_hw::{ActuatorCall, Rig};

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_clears_outputs_and_lights_green() {
    let rig = Rig::with_capacity(10);
    assert_eq!(
        rig.hw.calls,
        vec![
            ActuatorCall::AllOff,
            ActuatorCall::Indicator(Indicator::Green, true),
            ActuatorCall::Indicator(Indicator::Red, false),
        ]
    );
    assert_eq!(rig.sink.events, vec![AppEvent::Started { capacity: 10 }]);
}

// ── Sensor fusion ─────────────────────────────────────────────

#[test]
fn either_sensor_alone_triggers_the_gate() {
    for side in Side::ALL {
        let mut rig = Rig::with_capacity(10);
        rig.hw.set_reading(GateId::Entry, side, Some(3.0));
        assert_eq!(rig.tick_at(0).entered, 1, "{side:?} sensor alone");
    }
}

#[test]
fn both_sensors_are_read_even_when_first_detects() {
    let mut rig = Rig::with_capacity(10);
    rig.hw.set_reading(GateId::Entry, Side::Left, Some(3.0));
    rig.tick_at(0);
    assert!(rig.hw.reads.contains(&(GateId::Entry, Side::Left)));
    assert!(rig.hw.reads.contains(&(GateId::Entry, Side::Right)));
}

#[test]
fn reading_at_threshold_does_not_detect() {
    let mut rig = Rig::with_capacity(10);
    rig.hw.set_reading(GateId::Entry, Side::Left, Some(10.0));
    rig.hw.set_reading(GateId::Entry, Side::Right, None);
    assert_eq!(rig.tick_at(0).entered, 0);

    rig.hw.set_reading(GateId::Entry, Side::Right, Some(9.99));
    assert_eq!(rig.tick_at(20).entered, 1);
}

#[test]
fn timeouts_on_both_sides_mean_no_detection() {
    let mut rig = Rig::with_capacity(10);
    for t in (0..200).step_by(20) {
        rig.tick_at(t);
    }
    assert_eq!(rig.ctl.status().entered, 0);
    assert_eq!(rig.hw.calls.len(), 3, "only the start-up writes");
}

// ── Per-tick events ───────────────────────────────────────────

#[test]
fn status_is_emitted_exactly_once_per_tick() {
    let mut rig = Rig::with_capacity(10);
    rig.pass(GateId::Entry, 0);
    for t in (20..2_000).step_by(20) {
        rig.tick_at(t);
    }
    assert_eq!(
        rig.sink.count(|e| matches!(e, AppEvent::Status(_))) as u64,
        rig.ctl.tick_count()
    );
}

#[test]
fn repeated_empty_ticks_are_idempotent() {
    let mut rig = Rig::with_capacity(10);
    let a = rig.tick_at(0);
    let b = rig.tick_at(0);
    let c = rig.tick_at(20);
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn exit_with_nobody_inside_is_rejected_every_tick() {
    let mut rig = Rig::with_capacity(10);
    rig.hw.occupy(GateId::Exit);
    rig.tick_at(0);
    rig.tick_at(20);

    assert_eq!(rig.ctl.rejected_exits(), 2);
    assert_eq!(rig.sink.count(|e| *e == AppEvent::ExitRejected), 2);
    assert_eq!(rig.ctl.status().exited, 0);
    // A rejected exit does not start the cross-gate window.
    rig.hw.clear(GateId::Exit);
    assert_eq!(rig.pass(GateId::Entry, 40).entered, 1);
}

// ── Alert timing ──────────────────────────────────────────────

#[test]
fn short_beep_ends_after_its_duration() {
    let mut rig = Rig::with_capacity(10);
    rig.pass(GateId::Entry, 0);
    assert!(rig.hw.buzzer_on());
    assert!(rig.sink.contains(&AppEvent::AlertStarted(AlertKind::ShortBeep)));

    rig.tick_at(499);
    assert!(rig.hw.buzzer_on());

    rig.tick_at(500);
    assert!(!rig.hw.buzzer_on());
    assert!(rig.sink.contains(&AppEvent::AlertEnded(AlertKind::ShortBeep)));
    assert_eq!(rig.ctl.alert_state(), AlertState::Idle);
}

#[test]
fn short_beep_during_long_alert_is_ignored() {
    let mut rig = Rig::new(SystemConfig {
        capacity: 1,
        disable_time_ms: 100,
        ..Default::default()
    });

    rig.pass(GateId::Entry, 0);
    rig.pass(GateId::Entry, 1_000);
    assert_eq!(
        rig.ctl.alert_state(),
        AlertState::Active { kind: AlertKind::LongAlert, end: Instant::from_millis(3_000) }
    );
    let beeps = rig.sink.count(|e| *e == AppEvent::AlertStarted(AlertKind::ShortBeep));

    let status = rig.pass(GateId::Exit, 1_500);
    assert_eq!(status.inside, 1);
    assert_eq!(
        rig.sink.count(|e| *e == AppEvent::AlertStarted(AlertKind::ShortBeep)),
        beeps,
        "beep must not replace the running long alert"
    );
    assert_eq!(
        rig.ctl.alert_state(),
        AlertState::Active { kind: AlertKind::LongAlert, end: Instant::from_millis(3_000) }
    );

    rig.tick_at(2_999);
    assert!(rig.hw.buzzer_on());
    rig.tick_at(3_000);
    assert!(!rig.hw.buzzer_on());
    assert!(rig.sink.contains(&AppEvent::AlertEnded(AlertKind::LongAlert)));
}

// ── Capacity boundary and indicators ──────────────────────────

#[test]
fn capacity_boundary_flips_indicators_once() {
    let mut rig = Rig::new(SystemConfig {
        capacity: 2,
        disable_time_ms: 100,
        ..Default::default()
    });
    let indicator_writes =
        |rig: &Rig| rig.hw.calls.iter().filter(|c| matches!(c, ActuatorCall::Indicator(..))).count();

    rig.pass(GateId::Entry, 0);
    let at_capacity = rig.pass(GateId::Entry, 1_000);
    assert_eq!(at_capacity.exceeding, 0);
    assert!(!rig.sink.events.iter().any(|e| matches!(e, AppEvent::CapacityExceeded { .. })));
    assert_eq!(indicator_writes(&rig), 2, "only the start-up writes");

    let over = rig.pass(GateId::Entry, 2_000);
    assert_eq!(over.exceeding, 1);
    assert!(rig.sink.contains(&AppEvent::CapacityExceeded { exceeding: 1 }));
    assert!(rig.hw.indicator_on(Indicator::Red));
    assert!(!rig.hw.indicator_on(Indicator::Green));
    assert_eq!(indicator_writes(&rig), 4);

    let back = rig.pass(GateId::Exit, 2_500);
    assert_eq!(back.exceeding, 0);
    assert!(rig.hw.indicator_on(Indicator::Green));
    assert!(!rig.hw.indicator_on(Indicator::Red));
    assert_eq!(indicator_writes(&rig), 6);
}

// ── Shutdown ──────────────────────────────────────────────────

#[test]
fn shutdown_silences_alert_and_turns_everything_off() {
    let mut rig = Rig::with_capacity(10);
    rig.pass(GateId::Entry, 0);
    assert!(rig.hw.buzzer_on());

    rig.ctl.shutdown(&mut rig.hw, &mut rig.sink);

    assert_eq!(rig.hw.calls.last(), Some(&ActuatorCall::AllOff));
    assert!(!rig.hw.buzzer_on());
    assert_eq!(rig.ctl.alert_state(), AlertState::Idle);
    let n = rig.sink.events.len();
    assert_eq!(rig.sink.events[n - 2], AppEvent::AlertEnded(AlertKind::ShortBeep));
    assert!(matches!(rig.sink.events[n - 1], AppEvent::Shutdown(s) if s.inside == 1));
}
