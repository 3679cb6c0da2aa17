//! Wraparound-safe millisecond timestamps.
//!
//! The control loop samples a free-running 32-bit millisecond counter once
//! per tick.  The counter rolls over after ~49.7 days of uptime, so every
//! comparison in the core goes through wrapping arithmetic, never a plain
//! `now - then`.
//!
//! Two flavours of comparison are provided:
//!
//! | Method            | Question answered                         | Valid span        |
//! |-------------------|-------------------------------------------|-------------------|
//! | `elapsed_since`   | how long ago was `earlier`?               | < 2^32 ms         |
//! | `is_at_or_after`  | has the clock reached `deadline` yet?     | < 2^31 ms         |
//!
//! `is_at_or_after` uses the signed difference (MicroPython `ticks_diff`
//! semantics), which is why every configured window is capped at
//! `i32::MAX` milliseconds.

/// Largest window (ms) for which deadline comparison stays unambiguous.
pub const MAX_WINDOW_MS: u32 = i32::MAX as u32;

/// A point on the monotonic millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Instant(u32);

impl Instant {
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Truncate a 64-bit microsecond uptime to the 32-bit millisecond clock.
    pub const fn from_micros(us: u64) -> Self {
        Self((us / 1_000) as u32)
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`, correct across one rollover.
    pub const fn elapsed_since(self, earlier: Instant) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// True once at least `window_ms` has passed since `since`.
    pub const fn has_elapsed(self, since: Instant, window_ms: u32) -> bool {
        self.elapsed_since(since) >= window_ms
    }

    /// The instant `ms` milliseconds after `self` (wrapping).
    pub const fn offset(self, ms: u32) -> Instant {
        Self(self.0.wrapping_add(ms))
    }

    /// True if `self` is at or past `deadline`.
    pub const fn is_at_or_after(self, deadline: Instant) -> bool {
        (self.0.wrapping_sub(deadline.0) as i32) >= 0
    }
}
