//! Sensor subsystem: range sensor drivers and the aggregating [`SensorArray`].
//!
//! The array owns all four sensors (two per gate) and answers single
//! `(gate, side)` reads for the hardware adapter.

pub mod ultrasonic;

use crate::occupancy::{Distance, GateId, Side};

/// A single-shot range sensor.  `None` means nothing in range, a timeout
/// or a faulted read; implementations never retry.
pub trait RangeSensor {
    fn measure(&mut self) -> Option<Distance>;
}

/// The four sensors, indexed `[gate][side]`.
pub struct SensorArray<S> {
    sensors: [[S; 2]; 2],
}

impl<S: RangeSensor> SensorArray<S> {
    pub fn new(entry_left: S, entry_right: S, exit_left: S, exit_right: S) -> Self {
        Self {
            sensors: [[entry_left, entry_right], [exit_left, exit_right]],
        }
    }

    /// Build the array by calling `make` once per position, Entry first.
    pub fn from_fn(mut make: impl FnMut(GateId, Side) -> S) -> Self {
        Self::new(
            make(GateId::Entry, Side::Left),
            make(GateId::Entry, Side::Right),
            make(GateId::Exit, Side::Left),
            make(GateId::Exit, Side::Right),
        )
    }

    pub fn measure(&mut self, gate: GateId, side: Side) -> Option<Distance> {
        self.sensors[gate.index()][side.index()].measure()
    }

    pub fn get_mut(&mut self, gate: GateId, side: Side) -> &mut S {
        &mut self.sensors[gate.index()][side.index()]
    }
}
