//! Outbound application events.
//!
//! The [`OccupancyController`](super::controller::OccupancyController) emits
//! these through the [`EventSink`](super::ports::EventSink) port.  Adapters
//! on the other side decide what to do with them: log to serial, drive a
//! display, etc.  The core itself never formats text.

use crate::occupancy::GateId;
use crate::occupancy::alert::AlertKind;
use crate::occupancy::counter::OccupancyStatus;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The controller has started.
    Started { capacity: u64 },

    /// Snapshot of the counters, emitted exactly once per tick.
    Status(OccupancyStatus),

    /// An entry crossing was counted.
    EntryCounted(OccupancyStatus),

    /// An exit crossing was counted.
    ExitCounted(OccupancyStatus),

    /// The exit gate detected a crossing but nobody was inside.
    ExitRejected,

    /// Occupancy is over capacity after a counted crossing.
    CapacityExceeded { exceeding: u64 },

    /// A crossing at the opposite gate disabled this gate.
    GateDisabled(GateId),

    /// The gate's disable window ran out.
    GateEnabled(GateId),

    AlertStarted(AlertKind),

    AlertEnded(AlertKind),

    /// Actuators are off; final counts.
    Shutdown(OccupancyStatus),
}
