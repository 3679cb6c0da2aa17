//! ESP32 time adapter.
//!
//! Provides the monotonic clocks the GateCount system needs:
//!
//! - [`ClockPort`]: 32-bit millisecond [`Instant`]s for the control loop
//!   (wraps after ~49.7 days; all comparisons are wrap-safe).
//! - [`PulseClock`]: microseconds for timing HC-SR04 echo pulses.
//!
//! Both come from `esp_timer_get_time()` on the device and from
//! `std::time::Instant` on the host (via `hw_init::now_us`).

use crate::app::ports::ClockPort;
use crate::drivers::hw_init;
use crate::occupancy::Instant;
use crate::sensors::ultrasonic::PulseClock;

/// Time adapter for the ESP32-S3 platform.  Zero-sized and `Copy`, so each
/// sensor driver can hold its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct Esp32TimeAdapter;

impl Esp32TimeAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Microseconds since boot (monotonic).
    pub fn uptime_us(&self) -> u64 {
        hw_init::now_us()
    }
}

impl ClockPort for Esp32TimeAdapter {
    fn now(&self) -> Instant {
        Instant::from_micros(self.uptime_us())
    }
}

impl PulseClock for Esp32TimeAdapter {
    fn micros(&self) -> u64 {
        self.uptime_us()
    }
}
