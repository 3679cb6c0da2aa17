//! Dual-gate occupancy core: pure state-transition logic, zero I/O.
//!
//! ```text
//!  RangeSensor ×4 ──▶ GateDetector ×2 ──▶ CooldownGate ×2 ──▶ OccupancyCounter
//!                                                         └──▶ AlertTimer
//! ```
//!
//! Everything in here is driven by explicit [`Instant`] values handed in by
//! the caller; nothing sleeps and nothing reads a clock on its own.  The
//! orchestration lives in [`crate::app::controller`].

pub mod alert;
pub mod clock;
pub mod cooldown;
pub mod counter;
pub mod detector;

pub use clock::Instant;

use serde::{Deserialize, Serialize};

/// One of the two monitored crossing points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateId {
    Entry,
    Exit,
}

impl GateId {
    pub const ALL: [GateId; 2] = [GateId::Entry, GateId::Exit];

    /// The gate whose crossings disable this one.
    pub const fn opposite(self) -> GateId {
        match self {
            GateId::Entry => GateId::Exit,
            GateId::Exit => GateId::Entry,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Position of a sensor within its gate's redundant pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Speed of sound in cm/µs at ~20 °C.
const SOUND_CM_PER_US: f32 = 0.0343;

/// A non-negative range reading in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f32);

impl Distance {
    /// Returns `None` for negative or non-finite values; callers treat that
    /// exactly like a sensor timeout.
    pub fn from_cm(cm: f32) -> Option<Self> {
        (cm.is_finite() && cm >= 0.0).then_some(Self(cm))
    }

    /// Convert an HC-SR04 echo pulse width (round trip) into a distance.
    pub fn from_echo_us(pulse_us: u32) -> Self {
        Self(pulse_us as f32 * SOUND_CM_PER_US / 2.0)
    }

    pub fn cm(self) -> f32 {
        self.0
    }

    /// Strictly closer than `threshold_cm`.
    pub fn is_within(self, threshold_cm: f32) -> bool {
        self.0 < threshold_cm
    }
}
