//! Active buzzer driver (NPN low-side switch on [`pins::BUZZER_GPIO`]).
//!
//! Dumb on/off actuator.  Timing of beeps and alerts lives in
//! `occupancy::alert`; this driver never blocks.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct BuzzerDriver {
    gpio: i32,
    on: bool,
}

impl Default for BuzzerDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl BuzzerDriver {
    pub fn new() -> Self {
        Self::on_pin(pins::BUZZER_GPIO)
    }

    pub fn on_pin(gpio: i32) -> Self {
        Self { gpio, on: false }
    }

    pub fn set(&mut self, on: bool) {
        if on == self.on {
            return;
        }
        hw_init::gpio_write(self.gpio, on);
        self.on = on;
    }

    pub fn off(&mut self) {
        hw_init::gpio_write(self.gpio, false);
        self.on = false;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
