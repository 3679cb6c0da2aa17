//! Per-gate debounce and cross-gate disable.
//!
//! Two independent guards decide whether a gate may be sampled:
//!
//! 1. **Minimum sample delay**: after this gate counts a crossing it is not
//!    sampled again until `min_sample_delay_ms` has passed, so one body
//!    lingering in front of the sensors counts once.
//! 2. **Cross-gate disable**: a crossing at the *opposite* gate puts this
//!    gate into `Disabled` for `disable_time_ms`.  A person walking through
//!    the entry can brush the exit sensors; the coupling keeps that from
//!    turning into an entry *and* an exit.
//!
//! ```text
//!            opposite gate counted
//!   Enabled ───────────────────────▶ Disabled { since }
//!      ▲                                  │
//!      └──── now - since >= disable_time ─┘   (checked every tick)
//! ```
//!
//! A second disable while already disabled restarts the window.

use super::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Enabled,
    Disabled { since: Instant },
}

pub struct CooldownGate {
    state: GateState,
    /// `None` until this gate counts its first crossing.
    last_crossing: Option<Instant>,
    disable_time_ms: u32,
    min_sample_delay_ms: u32,
}

impl CooldownGate {
    pub fn new(disable_time_ms: u32, min_sample_delay_ms: u32) -> Self {
        Self {
            state: GateState::Enabled,
            last_crossing: None,
            disable_time_ms,
            min_sample_delay_ms,
        }
    }

    /// Re-enable the gate if its disable window has run out, and forget a
    /// crossing stamp once its min-delay window has passed so a wrapped
    /// clock can never land back inside it.
    /// Returns `true` only on the tick the gate flips back to `Enabled`.
    pub fn refresh(&mut self, now: Instant) -> bool {
        if self.min_delay_elapsed(now) {
            self.last_crossing = None;
        }
        match self.state {
            GateState::Disabled { since } if now.has_elapsed(since, self.disable_time_ms) => {
                self.state = GateState::Enabled;
                true
            }
            _ => false,
        }
    }

    /// Enabled and outside its own min-delay window.
    pub fn can_sample(&self, now: Instant) -> bool {
        self.is_enabled() && self.min_delay_elapsed(now)
    }

    pub fn min_delay_elapsed(&self, now: Instant) -> bool {
        self.last_crossing
            .is_none_or(|at| now.has_elapsed(at, self.min_sample_delay_ms))
    }

    /// The opposite gate just counted a crossing.
    /// Returns `true` if this gate was enabled before the call.
    pub fn disable(&mut self, now: Instant) -> bool {
        let was_enabled = self.is_enabled();
        self.state = GateState::Disabled { since: now };
        was_enabled
    }

    /// This gate just counted a crossing.
    pub fn record_crossing(&mut self, now: Instant) {
        self.last_crossing = Some(now);
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == GateState::Enabled
    }
}
