//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorArray`] and the buzzer / indicator drivers, exposing
//! them through [`RangeSensorPort`] and [`ActuatorPort`].  This is the only
//! module that the controller's I/O ever reaches.  On non-espidf targets
//! the underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, Indicator, RangeSensorPort};
use crate::drivers::buzzer::BuzzerDriver;
use crate::drivers::indicator::IndicatorLeds;
use crate::occupancy::{Distance, GateId, Side};
use crate::sensors::{RangeSensor, SensorArray};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<S> {
    sensors: SensorArray<S>,
    buzzer: BuzzerDriver,
    leds: IndicatorLeds,
}

impl<S: RangeSensor> HardwareAdapter<S> {
    pub fn new(sensors: SensorArray<S>, buzzer: BuzzerDriver, leds: IndicatorLeds) -> Self {
        Self { sensors, buzzer, leds }
    }

    pub fn buzzer(&self) -> &BuzzerDriver {
        &self.buzzer
    }

    pub fn leds(&self) -> &IndicatorLeds {
        &self.leds
    }
}

// ── RangeSensorPort implementation ────────────────────────────

impl<S: RangeSensor> RangeSensorPort for HardwareAdapter<S> {
    fn measure_distance(&mut self, gate: GateId, side: Side) -> Option<Distance> {
        self.sensors.measure(gate, side)
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<S: RangeSensor> ActuatorPort for HardwareAdapter<S> {
    fn set_buzzer(&mut self, on: bool) {
        self.buzzer.set(on);
    }

    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.leds.set(indicator, on);
    }

    fn all_off(&mut self) {
        self.buzzer.off();
        self.leds.off();
    }
}
