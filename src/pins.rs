//! GPIO / peripheral pin assignments for the GateCount main board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.
//!
//! Each gate has two HC-SR04 sensors mounted left and right of the doorway.
//! Echo lines are 5 V on the sensor side and go through a 2:1 divider.

use crate::occupancy::{GateId, Side};

/// Trigger (output) and echo (input) GPIOs of one ultrasonic sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorPins {
    pub trigger: i32,
    pub echo: i32,
}

// ---------------------------------------------------------------------------
// Entry gate (gate A)
// ---------------------------------------------------------------------------

pub const ENTRY_LEFT: SensorPins = SensorPins { trigger: 2, echo: 3 };
pub const ENTRY_RIGHT: SensorPins = SensorPins { trigger: 8, echo: 9 };

// ---------------------------------------------------------------------------
// Exit gate (gate B)
// ---------------------------------------------------------------------------

pub const EXIT_LEFT: SensorPins = SensorPins { trigger: 14, echo: 15 };
pub const EXIT_RIGHT: SensorPins = SensorPins { trigger: 10, echo: 11 };

/// Pin pair for the sensor at `side` of `gate`.
pub const fn sensor_pins(gate: GateId, side: Side) -> SensorPins {
    match (gate, side) {
        (GateId::Entry, Side::Left) => ENTRY_LEFT,
        (GateId::Entry, Side::Right) => ENTRY_RIGHT,
        (GateId::Exit, Side::Left) => EXIT_LEFT,
        (GateId::Exit, Side::Right) => EXIT_RIGHT,
    }
}

// ---------------------------------------------------------------------------
// Buzzer and status indicators
// ---------------------------------------------------------------------------

/// Active buzzer via NPN low-side switch (HIGH = sounding).
pub const BUZZER_GPIO: i32 = 5;
/// Green LED, lit while occupancy is within capacity.
pub const GREEN_LED_GPIO: i32 = 6;
/// Red LED, lit while occupancy is over capacity.
pub const RED_LED_GPIO: i32 = 7;
