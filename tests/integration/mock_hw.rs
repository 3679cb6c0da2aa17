//! Mock hardware adapter for integration tests.
//!
//! Scripted range readings per (gate, side), a settable fake clock, and a
//! recorder for every actuator call and emitted event, so tests can assert
//! on the full history without touching real GPIO.

use std::cell::Cell;

use gatecount::app::controller::OccupancyController;
use gatecount::app::events::AppEvent;
use gatecount::app::ports::{ActuatorPort, ClockPort, EventSink, Indicator, RangeSensorPort};
use gatecount::config::SystemConfig;
use gatecount::occupancy::counter::OccupancyStatus;
use gatecount::occupancy::{Distance, GateId, Instant, Side};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Buzzer(bool),
    Indicator(Indicator, bool),
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Reading returned for `[gate][side]`; `None` = timeout.
    readings: [[Option<f32>; 2]; 2],
    pub reads: Vec<(GateId, Side)>,
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self { readings: [[None; 2]; 2], reads: Vec::new(), calls: Vec::new() }
    }

    pub fn set_reading(&mut self, gate: GateId, side: Side, cm: Option<f32>) {
        self.readings[gate as usize][side as usize] = cm;
    }

    /// Put something within range of both sensors of `gate`.
    pub fn occupy(&mut self, gate: GateId) {
        self.set_reading(gate, Side::Left, Some(5.0));
        self.set_reading(gate, Side::Right, Some(5.0));
    }

    /// Nothing in front of either sensor of `gate`.
    pub fn clear(&mut self, gate: GateId) {
        self.set_reading(gate, Side::Left, None);
        self.set_reading(gate, Side::Right, None);
    }

    pub fn buzzer_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::Buzzer(on) => Some(*on),
                ActuatorCall::AllOff => Some(false),
                ActuatorCall::Indicator(..) => None,
            })
            .unwrap_or(false)
    }

    pub fn indicator_on(&self, which: Indicator) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::Indicator(i, on) if *i == which => Some(*on),
                ActuatorCall::AllOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeSensorPort for MockHardware {
    fn measure_distance(&mut self, gate: GateId, side: Side) -> Option<Distance> {
        self.reads.push((gate, side));
        self.readings[gate as usize][side as usize].and_then(Distance::from_cm)
    }
}

impl ActuatorPort for MockHardware {
    fn set_buzzer(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Buzzer(on));
    }

    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.calls.push(ActuatorCall::Indicator(indicator, on));
    }

    fn all_off(&mut self) {
        self.calls.push(ActuatorCall::AllOff);
    }
}

// ── FakeClock ─────────────────────────────────────────────────

#[derive(Default)]
pub struct FakeClock {
    now_ms: Cell<u32>,
}

impl FakeClock {
    pub fn set(&self, ms: u32) {
        self.now_ms.set(ms);
    }
}

impl ClockPort for FakeClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.now_ms.get())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn contains(&self, event: &AppEvent) -> bool {
        self.events.contains(event)
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Rig: controller + mocks wired together ────────────────────

pub struct Rig {
    pub ctl: OccupancyController,
    pub hw: MockHardware,
    pub clock: FakeClock,
    pub sink: RecordingSink,
}

#[allow(dead_code)]
impl Rig {
    pub fn new(config: SystemConfig) -> Self {
        let mut rig = Self {
            ctl: OccupancyController::new(config).expect("valid test config"),
            hw: MockHardware::new(),
            clock: FakeClock::default(),
            sink: RecordingSink::default(),
        };
        rig.ctl.start(&mut rig.hw, &mut rig.sink);
        rig
    }

    pub fn with_capacity(capacity: u64) -> Self {
        Self::new(SystemConfig { capacity, ..Default::default() })
    }

    /// Advance the fake clock to `ms` and run one tick.
    pub fn tick_at(&mut self, ms: u32) -> OccupancyStatus {
        self.clock.set(ms);
        self.ctl.tick(&self.clock, &mut self.hw, &mut self.sink)
    }

    /// One crossing at `gate` at `ms`: occupy, tick, clear.
    pub fn pass(&mut self, gate: GateId, ms: u32) -> OccupancyStatus {
        self.hw.occupy(gate);
        let status = self.tick_at(ms);
        self.hw.clear(gate);
        status
    }
}
