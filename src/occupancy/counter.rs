//! Entry/exit tallies and the capacity computation.
//!
//! Invariant: `exited <= entered` in every reachable state.  `record_exit`
//! is the only place `exited` moves and it refuses when nobody is inside,
//! so a spurious exit trigger can never drive occupancy negative.

use log::debug;
use serde::Serialize;

/// Point-in-time view of the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OccupancyStatus {
    pub entered: u64,
    pub exited: u64,
    pub inside: u64,
    /// `max(0, inside - capacity)`
    pub exceeding: u64,
}

impl OccupancyStatus {
    pub fn over_capacity(&self) -> bool {
        self.exceeding > 0
    }
}

pub struct OccupancyCounter {
    entered: u64,
    exited: u64,
    capacity: u64,
}

impl OccupancyCounter {
    pub fn new(capacity: u64) -> Self {
        Self { entered: 0, exited: 0, capacity }
    }

    /// Capacity is an alerting threshold, not a cap on counting.
    pub fn record_entry(&mut self) {
        self.entered = self.entered.saturating_add(1);
    }

    /// Returns whether the exit was accepted.  A rejected exit leaves the
    /// counter untouched.
    pub fn record_exit(&mut self) -> bool {
        if self.exited < self.entered {
            self.exited += 1;
            true
        } else {
            debug!("no occupants to exit (entered={}, exited={})", self.entered, self.exited);
            false
        }
    }

    pub fn status(&self) -> OccupancyStatus {
        let inside = self.entered - self.exited;
        OccupancyStatus {
            entered: self.entered,
            exited: self.exited,
            inside,
            exceeding: inside.saturating_sub(self.capacity),
        }
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }
}
