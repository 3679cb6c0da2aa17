//! Occupancy controller: the hexagonal core.
//!
//! [`OccupancyController`] owns every piece of mutable state (both gates'
//! cooldowns, the counter, the alert timer) and advances it once per
//! control tick.  All I/O flows through port traits injected at call
//! sites, so the whole controller runs against mock adapters in tests.
//!
//! ```text
//!  RangeSensorPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!  ClockPort ────────▶ │     OccupancyController      │
//!  ActuatorPort ◀───── │ Detect · Cooldown · Count ·  │
//!                      │ Alert                        │
//!                      └──────────────────────────────┘
//! ```
//!
//! ## Tick order
//!
//! 1. Re-enable gates whose disable window has run out.
//! 2. Entry gate: sample if allowed; count, beep, disable Exit.
//! 3. Exit gate: sample if allowed; count (if anyone is inside), beep,
//!    disable Entry.
//! 4. After a counted crossing, raise the capacity alert if over capacity.
//! 5. Expire finished alerts.
//! 6. Emit the status snapshot.
//!
//! Entry is always evaluated before Exit.  If both gates detect in the
//! same tick, Entry wins: counting it disables Exit before Exit is looked at.

use log::{info, warn};

use crate::config::SystemConfig;
use crate::occupancy::alert::{AlertKind, AlertState, AlertTimer, ScheduleOutcome};
use crate::occupancy::cooldown::{CooldownGate, GateState};
use crate::occupancy::counter::{OccupancyCounter, OccupancyStatus};
use crate::occupancy::detector::GateDetector;
use crate::occupancy::{GateId, Instant};

use super::events::AppEvent;
use super::ports::{ActuatorPort, ClockPort, ConfigError, EventSink, Indicator, RangeSensorPort};

/// Per-gate detector and cooldown, indexed by [`GateId`].
struct Gate {
    detector: GateDetector,
    cooldown: CooldownGate,
}

pub struct OccupancyController {
    config: SystemConfig,
    gates: [Gate; 2],
    counter: OccupancyCounter,
    alert: AlertTimer,
    /// Last over-capacity state pushed to the indicators.
    indicated_over: Option<bool>,
    tick_count: u64,
    rejected_exits: u64,
}

impl OccupancyController {
    /// Validate `config` and build the controller.  An invalid config is
    /// refused here, before any control loop can start.
    pub fn new(config: SystemConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let gate = |id| Gate {
            detector: GateDetector::new(id, config.detection_threshold_cm),
            cooldown: CooldownGate::new(config.disable_time_ms, config.min_sample_delay_ms),
        };
        let gates = [gate(GateId::Entry), gate(GateId::Exit)];

        Ok(Self {
            counter: OccupancyCounter::new(config.capacity),
            config,
            gates,
            alert: AlertTimer::new(),
            indicated_over: None,
            tick_count: 0,
            rejected_exits: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Put every actuator in a known state and announce the start.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.all_off();
        self.update_indicators(hw);
        sink.emit(&AppEvent::Started { capacity: self.config.capacity });
        info!(
            "OccupancyController started (capacity={}, threshold={}cm)",
            self.config.capacity, self.config.detection_threshold_cm
        );
    }

    /// Silence the buzzer and switch every indicator off.
    pub fn shutdown(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        if let Some(kind) = self.alert.cancel(hw) {
            sink.emit(&AppEvent::AlertEnded(kind));
        }
        hw.all_off();
        self.indicated_over = None;
        let status = self.status();
        sink.emit(&AppEvent::Shutdown(status));
        info!("OccupancyController shut down ({:?})", status);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one control cycle and return the status snapshot it emitted.
    ///
    /// The `hw` parameter satisfies **both** [`RangeSensorPort`] and
    /// [`ActuatorPort`], which avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        clock: &impl ClockPort,
        hw: &mut (impl RangeSensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) -> OccupancyStatus {
        self.tick_count += 1;
        let now = clock.now();

        // 1. Time-based re-enable, independent of sampling
        for id in GateId::ALL {
            if self.gate_mut(id).cooldown.refresh(now) {
                info!("{:?} gate re-enabled", id);
                sink.emit(&AppEvent::GateEnabled(id));
            }
        }

        // 2. Entry
        if self.sample_gate(GateId::Entry, now, hw) {
            self.counter.record_entry();
            let status = self.counter.status();
            info!("Entry counted: inside={}", status.inside);
            sink.emit(&AppEvent::EntryCounted(status));
            self.on_crossing(GateId::Entry, now, hw, sink);
        }

        // 3. Exit
        if self.sample_gate(GateId::Exit, now, hw) {
            if self.counter.record_exit() {
                let status = self.counter.status();
                info!("Exit counted: inside={}", status.inside);
                sink.emit(&AppEvent::ExitCounted(status));
                self.on_crossing(GateId::Exit, now, hw, sink);
            } else {
                self.rejected_exits += 1;
                sink.emit(&AppEvent::ExitRejected);
            }
        }

        // 5. Alert expiry
        if let Some(kind) = self.alert.tick(now, hw) {
            sink.emit(&AppEvent::AlertEnded(kind));
        }

        // 6. Status report
        let status = self.counter.status();
        sink.emit(&AppEvent::Status(status));
        status
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn status(&self) -> OccupancyStatus {
        self.counter.status()
    }

    pub fn gate_state(&self, id: GateId) -> GateState {
        self.gates[id.index()].cooldown.state()
    }

    pub fn alert_state(&self) -> AlertState {
        self.alert.state()
    }

    /// Exit detections refused because nobody was inside.
    pub fn rejected_exits(&self) -> u64 {
        self.rejected_exits
    }

    /// Total control ticks executed since construction.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn gate_mut(&mut self, id: GateId) -> &mut Gate {
        &mut self.gates[id.index()]
    }

    /// Sample `id` if its cooldown allows it; true on detection.
    fn sample_gate(&self, id: GateId, now: Instant, sensors: &mut impl RangeSensorPort) -> bool {
        let gate = &self.gates[id.index()];
        gate.cooldown.can_sample(now) && gate.detector.detect(sensors)
    }

    /// Side effects shared by every accepted crossing at `id`.
    fn on_crossing(
        &mut self,
        id: GateId,
        now: Instant,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        self.schedule_alert(AlertKind::ShortBeep, now, hw, sink);

        let other = id.opposite();
        if self.gate_mut(other).cooldown.disable(now) {
            sink.emit(&AppEvent::GateDisabled(other));
        }
        self.gate_mut(id).cooldown.record_crossing(now);

        // 4. Capacity check after every accepted mutation
        let status = self.counter.status();
        if status.over_capacity() {
            warn!(
                "ALERT: {} over capacity (inside={}, capacity={})",
                status.exceeding,
                status.inside,
                self.counter.capacity()
            );
            sink.emit(&AppEvent::CapacityExceeded { exceeding: status.exceeding });
            self.schedule_alert(AlertKind::LongAlert, now, hw, sink);
        }
        self.update_indicators(hw);
    }

    fn schedule_alert(
        &mut self,
        kind: AlertKind,
        now: Instant,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        let duration = match kind {
            AlertKind::ShortBeep => self.config.beep_duration_ms,
            AlertKind::LongAlert => self.config.alert_duration_ms,
        };
        match self.alert.schedule(kind, duration, now, hw) {
            ScheduleOutcome::Started | ScheduleOutcome::Preempted { .. } => {
                sink.emit(&AppEvent::AlertStarted(kind));
            }
            ScheduleOutcome::Ignored => {}
        }
    }

    /// Green while within capacity, red while over.  Only written on change.
    fn update_indicators(&mut self, hw: &mut impl ActuatorPort) {
        let over = self.counter.status().over_capacity();
        if self.indicated_over == Some(over) {
            return;
        }
        hw.set_indicator(Indicator::Green, !over);
        hw.set_indicator(Indicator::Red, over);
        self.indicated_over = Some(over);
    }
}
