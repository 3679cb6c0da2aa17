//! Non-blocking buzzer scheduler.
//!
//! An alert is a deadline, not a sleep: `schedule` switches the buzzer on
//! and records when it should stop, `tick` switches it off once the clock
//! reaches that point.  The control loop keeps polling sensors the whole
//! time the buzzer sounds.
//!
//! ## Priority
//!
//! | Running     | Requested   | Result                               |
//! |-------------|-------------|--------------------------------------|
//! | (idle)      | any         | started                              |
//! | `ShortBeep` | `ShortBeep` | restarted (new deadline)             |
//! | `ShortBeep` | `LongAlert` | pre-empted by the long alert         |
//! | `LongAlert` | `LongAlert` | restarted (new deadline)             |
//! | `LongAlert` | `ShortBeep` | ignored; a routine beep never cuts   |
//! |             |             | a capacity alert short               |

use log::debug;

use super::Instant;
use crate::app::ports::ActuatorPort;

/// Alert kinds, ordered by priority (`LongAlert` > `ShortBeep`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertKind {
    /// Acknowledges a counted crossing.
    ShortBeep,
    /// Sounds while occupancy is over capacity.
    LongAlert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    Idle,
    Active { kind: AlertKind, end: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// Nothing was sounding; the buzzer was switched on.
    Started,
    /// A running alert of lower or equal priority was replaced.
    Preempted { previous: AlertKind },
    /// A higher-priority alert is running; the request was dropped.
    Ignored,
}

pub struct AlertTimer {
    state: AlertState,
}

impl Default for AlertTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertTimer {
    pub fn new() -> Self {
        Self { state: AlertState::Idle }
    }

    pub fn schedule(
        &mut self,
        kind: AlertKind,
        duration_ms: u32,
        now: Instant,
        out: &mut impl ActuatorPort,
    ) -> ScheduleOutcome {
        let outcome = match self.state {
            AlertState::Idle => ScheduleOutcome::Started,
            AlertState::Active { kind: running, .. } if kind >= running => {
                debug!("{:?} replaces running {:?}", kind, running);
                ScheduleOutcome::Preempted { previous: running }
            }
            AlertState::Active { kind: running, .. } => {
                debug!("{:?} ignored while {:?} sounds", kind, running);
                return ScheduleOutcome::Ignored;
            }
        };

        self.state = AlertState::Active {
            kind,
            end: now.offset(duration_ms),
        };
        out.set_buzzer(true);
        outcome
    }

    /// Switch the buzzer off if the running alert has reached its deadline.
    /// Returns the kind that just ended.
    pub fn tick(&mut self, now: Instant, out: &mut impl ActuatorPort) -> Option<AlertKind> {
        match self.state {
            AlertState::Active { kind, end } if now.is_at_or_after(end) => {
                self.state = AlertState::Idle;
                out.set_buzzer(false);
                Some(kind)
            }
            _ => None,
        }
    }

    /// Stop whatever is sounding (shutdown path).
    pub fn cancel(&mut self, out: &mut impl ActuatorPort) -> Option<AlertKind> {
        let AlertState::Active { kind, .. } = self.state else {
            return None;
        };
        self.state = AlertState::Idle;
        out.set_buzzer(false);
        Some(kind)
    }

    pub fn state(&self) -> AlertState {
        self.state
    }
}
