//! `embedded-hal` 1.0 views over the raw GPIO helpers.
//!
//! The ultrasonic driver is generic over `OutputPin` / `InputPin` /
//! `DelayNs`, so it can be unit-tested with mock pins on the host.  On
//! the device these zero-sized wrappers forward to [`hw_init`].

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::drivers::hw_init;

/// A GPIO already configured by [`hw_init::init_peripherals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioPin {
    num: i32,
}

impl GpioPin {
    pub const fn new(num: i32) -> Self {
        Self { num }
    }
}

impl ErrorType for GpioPin {
    type Error = Infallible;
}

impl OutputPin for GpioPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.num, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.num, true);
        Ok(())
    }
}

impl InputPin for GpioPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(hw_init::gpio_read(self.num))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!hw_init::gpio_read(self.num))
    }
}

/// ROM busy-wait delay.  Only used for the microsecond-scale trigger pulse.
#[derive(Debug, Default, Clone, Copy)]
pub struct BusyDelay;

impl DelayNs for BusyDelay {
    fn delay_ns(&mut self, ns: u32) {
        hw_init::delay_us(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        hw_init::delay_us(us);
    }
}
