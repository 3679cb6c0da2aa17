//! End-to-end counting scenarios against mock hardware and a fake clock.
//!
//! Each test drives the full controller pipeline (detect, cooldown,
//! count, alert) through the port traits exactly as the device loop does.

use gatecount::app::events::AppEvent;
use gatecount::app::ports::Indicator;
use gatecount::occupancy::alert::{AlertKind, AlertState};
use gatecount::occupancy::cooldown::GateState;
use gatecount::occupancy::counter::OccupancyStatus;
use gatecount::occupancy::{GateId, Instant};

use crate::mock_hw::Rig;

// ── Over-capacity after sequential entries ────────────────────

#[test]
fn six_entries_over_capacity_five_raises_long_alert() {
    let mut rig = Rig::with_capacity(5);

    let mut status = OccupancyStatus::default();
    for i in 0..6 {
        status = rig.pass(GateId::Entry, i * 1_000);
    }

    assert_eq!(
        status,
        OccupancyStatus { entered: 6, exited: 0, inside: 6, exceeding: 1 }
    );
    assert!(matches!(
        rig.ctl.alert_state(),
        AlertState::Active { kind: AlertKind::LongAlert, .. }
    ));
    assert!(rig.hw.buzzer_on());
    assert!(rig.hw.indicator_on(Indicator::Red));
    assert!(!rig.hw.indicator_on(Indicator::Green));
    assert_eq!(rig.sink.count(|e| matches!(e, AppEvent::CapacityExceeded { .. })), 1);
}

// ── Exit with nobody inside ───────────────────────────────────

#[test]
fn fourth_exit_after_three_in_three_out_is_rejected() {
    let mut rig = Rig::with_capacity(5);

    for t in [0, 1_000, 2_000] {
        rig.pass(GateId::Entry, t);
    }
    // Exit was disabled by the entry at 2000 until 7000.
    for t in [7_000, 8_000, 9_000] {
        rig.pass(GateId::Exit, t);
    }
    // Let the last beep run out.
    rig.tick_at(9_600);
    assert!(!rig.hw.buzzer_on());

    let calls_before = rig.hw.calls.len();
    let status = rig.pass(GateId::Exit, 10_000);

    assert_eq!(status.exited, 3);
    assert_eq!(status.inside, 0);
    assert_eq!(rig.ctl.rejected_exits(), 1);
    assert_eq!(rig.sink.events.iter().rev().nth(1), Some(&AppEvent::ExitRejected));
    assert_eq!(rig.hw.calls.len(), calls_before, "rejected exit must not touch actuators");
}

// ── Cross-gate disable window ─────────────────────────────────

#[test]
fn entry_disables_exit_for_the_disable_window() {
    let mut rig = Rig::with_capacity(5);

    rig.pass(GateId::Entry, 0);
    assert_eq!(
        rig.ctl.gate_state(GateId::Exit),
        GateState::Disabled { since: Instant::from_millis(0) }
    );

    rig.hw.reads.clear();
    let status = rig.pass(GateId::Exit, 3_000);
    assert_eq!(status.inside, 1, "exit at 3s must be ignored");
    assert!(
        rig.hw.reads.iter().all(|(gate, _)| *gate == GateId::Entry),
        "a disabled gate is not sampled"
    );
    assert!(matches!(rig.ctl.gate_state(GateId::Exit), GateState::Disabled { .. }));

    let status = rig.pass(GateId::Exit, 6_000);
    assert_eq!(status.inside, 0, "exit at 6s must be accepted");
    assert!(rig.sink.contains(&AppEvent::GateEnabled(GateId::Exit)));
}

#[test]
fn exit_crossing_disables_entry_too() {
    let mut rig = Rig::with_capacity(5);
    rig.pass(GateId::Entry, 0);
    rig.pass(GateId::Exit, 5_000);

    assert!(matches!(rig.ctl.gate_state(GateId::Entry), GateState::Disabled { .. }));
    let status = rig.pass(GateId::Entry, 9_000);
    assert_eq!(status.entered, 1, "entry still inside the exit's window");
    let status = rig.pass(GateId::Entry, 10_000);
    assert_eq!(status.entered, 2);
}

// ── Debounce of a lingering occupant ──────────────────────────

#[test]
fn lingering_occupant_counts_once_per_min_delay() {
    let mut rig = Rig::with_capacity(10);
    rig.hw.occupy(GateId::Entry);

    for t in (0..1_000).step_by(20) {
        rig.tick_at(t);
    }
    assert_eq!(rig.ctl.status().entered, 1);

    rig.tick_at(1_000);
    assert_eq!(rig.ctl.status().entered, 2);
    assert_eq!(
        rig.sink.count(|e| *e == AppEvent::GateDisabled(GateId::Exit)),
        1,
        "re-disabling an already disabled gate is silent"
    );
}

#[test]
fn first_pass_after_boot_counts_immediately() {
    let mut rig = Rig::with_capacity(10);
    assert_eq!(rig.pass(GateId::Entry, 0).entered, 1);
}

// ── Same-tick detection at both gates ─────────────────────────

#[test]
fn entry_wins_when_both_gates_detect_in_one_tick() {
    let mut rig = Rig::with_capacity(10);
    rig.hw.occupy(GateId::Entry);
    rig.hw.occupy(GateId::Exit);

    let status = rig.tick_at(0);

    assert_eq!(status.entered, 1);
    assert_eq!(status.exited, 0);
    assert_eq!(rig.ctl.rejected_exits(), 0);
    assert!(rig.hw.reads.iter().all(|(gate, _)| *gate == GateId::Entry));
}

// ── Timestamp rollover ────────────────────────────────────────

#[test]
fn disable_window_survives_clock_rollover() {
    let mut rig = Rig::with_capacity(10);
    let start = u32::MAX - 999;
    rig.pass(GateId::Entry, start);

    // 4000 ms after the crossing, across the wrap.
    rig.pass(GateId::Exit, 3_000);
    assert_eq!(rig.ctl.status().exited, 0);

    // Exactly 5000 ms after.
    rig.pass(GateId::Exit, 4_000);
    assert_eq!(rig.ctl.status().exited, 1);
}
