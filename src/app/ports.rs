//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ OccupancyController (domain)
//! ```
//!
//! Driven adapters (range sensors, buzzer/LEDs, event sinks, config storage)
//! implement these traits.  The [`OccupancyController`](super::controller::OccupancyController)
//! consumes them via generics, so the domain core never touches hardware
//! directly and every test can substitute scripted sensors and a fake clock.

use crate::config::SystemConfig;
use crate::occupancy::{Distance, GateId, Instant, Side};

// ───────────────────────────────────────────────────────────────
// Range sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one single-shot range reading per call.
pub trait RangeSensorPort {
    /// Measure the sensor at `side` of `gate`.
    ///
    /// Must return within the sensor's bounded echo timeout and must not
    /// retry internally.  `None` means "nothing in range" (a timeout or a
    /// faulted sensor) and is never an error.
    fn measure_distance(&mut self, gate: GateId, side: Side) -> Option<Distance>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Status indicator LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Lit while occupancy is within capacity.
    Green,
    /// Lit while occupancy is over capacity.
    Red,
}

/// Write-side port.  Every call is idempotent.
pub trait ActuatorPort {
    fn set_buzzer(&mut self, on: bool);

    fn set_indicator(&mut self, indicator: Indicator, on: bool);

    /// Buzzer and every indicator off (safe shutdown).
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock, sampled once per control tick.
pub trait ClockPort {
    fn now(&self) -> Instant;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / display)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide how they are rendered.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists system configuration.
///
/// Implementations MUST validate before persisting and report invalid
/// values as [`ConfigError::ValidationFailed`] rather than clamping them.
pub trait ConfigPort {
    /// Load configuration from persistent storage.
    fn load(&self) -> Result<SystemConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations and config validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found in storage (first boot).
    NotFound,
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Underlying storage is full.
    StorageFull,
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::StorageFull => write!(f, "storage full"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}
