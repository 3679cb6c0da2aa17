//! Green / red capacity indicator LEDs.
//!
//! Two discrete LEDs on plain GPIOs: green while occupancy is within
//! capacity, red while it is over.  Which one is lit is decided by the
//! controller; this driver only switches pins.

use crate::app::ports::Indicator;
use crate::drivers::hw_init;
use crate::pins;

pub struct IndicatorLeds {
    green_gpio: i32,
    red_gpio: i32,
    green: bool,
    red: bool,
}

impl Default for IndicatorLeds {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorLeds {
    pub fn new() -> Self {
        Self {
            green_gpio: pins::GREEN_LED_GPIO,
            red_gpio: pins::RED_LED_GPIO,
            green: false,
            red: false,
        }
    }

    pub fn set(&mut self, which: Indicator, on: bool) {
        match which {
            Indicator::Green => {
                hw_init::gpio_write(self.green_gpio, on);
                self.green = on;
            }
            Indicator::Red => {
                hw_init::gpio_write(self.red_gpio, on);
                self.red = on;
            }
        }
    }

    pub fn off(&mut self) {
        self.set(Indicator::Green, false);
        self.set(Indicator::Red, false);
    }

    /// `(green, red)`
    pub fn current(&self) -> (bool, bool) {
        (self.green, self.red)
    }
}
