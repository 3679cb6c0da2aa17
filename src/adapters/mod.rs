//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements         | Connects to                 |
//! |------------|--------------------|-----------------------------|
//! | `hardware` | RangeSensorPort    | 4 × HC-SR04 (GPIO)          |
//! |            | ActuatorPort       | buzzer, green/red LEDs      |
//! | `log_sink` | EventSink          | Serial log output           |
//! | `nvs`      | ConfigPort         | NVS / in-memory store       |
//! | `time`     | ClockPort          | ESP32 system timer          |
//! |            | PulseClock         |                             |

pub mod hardware;
pub mod log_sink;
pub mod nvs;
pub mod time;
