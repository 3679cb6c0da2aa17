//! System configuration parameters
//!
//! All tunable parameters for the occupancy counter.  Loaded once at boot
//! (NVS or defaults) and fixed for the life of the control loop.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::occupancy::clock::MAX_WINDOW_MS;

/// Ultrasonic sensors stop being useful beyond ~4 m.
const MAX_THRESHOLD_CM: f32 = 400.0;
const SENSOR_TIMEOUT_RANGE_US: core::ops::RangeInclusive<u32> = 1_000..=60_000;
const LOOP_INTERVAL_RANGE_MS: core::ops::RangeInclusive<u32> = 1..=1_000;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Occupancy ---
    /// Occupants allowed inside before the capacity alert sounds
    pub capacity: u64,
    /// A reading strictly below this counts as a detection (cm)
    pub detection_threshold_cm: f32,

    // --- Debounce ---
    /// How long a crossing at one gate disables the other (ms)
    pub disable_time_ms: u32,
    /// Minimum time before a gate is sampled again after it counted (ms)
    pub min_sample_delay_ms: u32,

    // --- Buzzer ---
    /// Acknowledgement beep on each counted crossing (ms)
    pub beep_duration_ms: u32,
    /// Capacity alert length (ms)
    pub alert_duration_ms: u32,

    // --- Timing ---
    /// Echo wait ceiling per sensor read (µs)
    pub sensor_timeout_us: u32,
    /// Control loop interval (milliseconds)
    pub control_loop_interval_ms: u32,
    /// Task watchdog timeout (milliseconds)
    pub watchdog_timeout_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Occupancy
            capacity: 10,
            detection_threshold_cm: 10.0,

            // Debounce
            disable_time_ms: 5_000,
            min_sample_delay_ms: 1_000,

            // Buzzer
            beep_duration_ms: 500,
            alert_duration_ms: 2_000,

            // Timing
            sensor_timeout_us: 30_000,     // HC-SR04 max echo ≈ 4 m
            control_loop_interval_ms: 20,  // 50 Hz
            watchdog_timeout_ms: 10_000,
        }
    }
}

impl SystemConfig {
    /// Reject values the control loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ValidationFailed("capacity must be at least 1"));
        }
        let t = self.detection_threshold_cm;
        if !(t.is_finite() && t > 0.0 && t <= MAX_THRESHOLD_CM) {
            return Err(ConfigError::ValidationFailed(
                "detection_threshold_cm must be in (0, 400]",
            ));
        }

        let windows = [
            (self.disable_time_ms, "disable_time_ms out of range"),
            (self.min_sample_delay_ms, "min_sample_delay_ms out of range"),
            (self.beep_duration_ms, "beep_duration_ms out of range"),
            (self.alert_duration_ms, "alert_duration_ms out of range"),
        ];
        for (value, msg) in windows {
            if !(1..=MAX_WINDOW_MS).contains(&value) {
                return Err(ConfigError::ValidationFailed(msg));
            }
        }

        if !SENSOR_TIMEOUT_RANGE_US.contains(&self.sensor_timeout_us) {
            return Err(ConfigError::ValidationFailed(
                "sensor_timeout_us must be 1000–60000",
            ));
        }
        if !LOOP_INTERVAL_RANGE_MS.contains(&self.control_loop_interval_ms) {
            return Err(ConfigError::ValidationFailed(
                "control_loop_interval_ms must be 1–1000",
            ));
        }
        if self.watchdog_timeout_ms <= self.worst_case_tick_ms() {
            return Err(ConfigError::ValidationFailed(
                "watchdog_timeout_ms shorter than one worst-case tick",
            ));
        }
        Ok(())
    }

    /// Four sensor reads that all time out, plus the loop period.
    pub fn worst_case_tick_ms(&self) -> u32 {
        (4 * self.sensor_timeout_us.div_ceil(1_000)).saturating_add(self.control_loop_interval_ms)
    }

    /// Encode for persistence (postcard).
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::Corrupted)
    }

    /// Decode a persisted blob.  Never panics on arbitrary input.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)
    }

    /// Boot-time load: stored config if present and valid, defaults otherwise.
    pub fn load_or_default(port: &impl ConfigPort) -> Self {
        match port.load().and_then(|cfg| cfg.validate().map(|()| cfg)) {
            Ok(cfg) => {
                info!("Config loaded from storage");
                cfg
            }
            Err(ConfigError::NotFound) => {
                info!("No stored config, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!("Stored config unusable ({}), using defaults", e);
                Self::default()
            }
        }
    }
}
