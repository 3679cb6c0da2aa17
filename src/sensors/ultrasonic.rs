//! HC-SR04 ultrasonic range sensor driver.
//!
//! ## Measurement cycle
//!
//! ```text
//!  trigger  ‾‾\__ 2µs __/‾‾ 10µs ‾‾\_____________________________
//!  echo     ____________________________/‾‾‾‾ pulse ‾‾‾‾\_______
//!                                       │◀── round trip ──▶│
//! ```
//!
//! `distance_cm = pulse_us × 0.0343 / 2`.  The wait for the rising edge and
//! the pulse itself share one deadline, `timeout_us` after the trigger; an
//! echo that has not ended by then yields `Ok(None)` (nothing in range),
//! never an error.
//!
//! The driver is generic over `embedded-hal` 1.0 pins and delay plus a
//! [`PulseClock`] microsecond source, so the whole cycle runs against mocks
//! on the host.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::debug;

use crate::error::SensorError;
use crate::occupancy::Distance;

use super::RangeSensor;

/// Settle time with trigger held low before the pulse.
const TRIGGER_SETTLE_US: u32 = 2;
/// Trigger pulse width required by the HC-SR04.
const TRIGGER_PULSE_US: u32 = 10;

/// Free-running microsecond counter used to time the echo pulse.
pub trait PulseClock {
    fn micros(&self) -> u64;
}

pub struct Hcsr04<T, E, D, C> {
    trigger: T,
    echo: E,
    delay: D,
    clock: C,
    timeout_us: u32,
}

impl<T, E, D, C> Hcsr04<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
    C: PulseClock,
{
    pub fn new(trigger: T, echo: E, delay: D, clock: C, timeout_us: u32) -> Self {
        Self { trigger, echo, delay, clock, timeout_us }
    }

    /// One full trigger/echo cycle.
    ///
    /// `Ok(None)` on timeout.  `Err` only for a line that cannot be driven or
    /// read, or an echo that is already high before we trigger.
    pub fn try_measure(&mut self) -> Result<Option<Distance>, SensorError> {
        if self.echo.is_high().map_err(|_| SensorError::PinFault)? {
            return Err(SensorError::EchoStuckHigh);
        }

        self.trigger.set_low().map_err(|_| SensorError::PinFault)?;
        self.delay.delay_us(TRIGGER_SETTLE_US);
        self.trigger.set_high().map_err(|_| SensorError::PinFault)?;
        self.delay.delay_us(TRIGGER_PULSE_US);
        self.trigger.set_low().map_err(|_| SensorError::PinFault)?;

        // One deadline, armed at the trigger, bounds the whole read.
        let deadline = self.clock.micros().saturating_add(u64::from(self.timeout_us));

        // Wait for the rising edge
        let rise = loop {
            let now = self.clock.micros();
            if self.echo.is_high().map_err(|_| SensorError::PinFault)? {
                break now;
            }
            if now > deadline {
                return Ok(None);
            }
        };

        // Time the high pulse
        loop {
            let now = self.clock.micros();
            if now > deadline {
                return Ok(None);
            }
            if !self.echo.is_high().map_err(|_| SensorError::PinFault)? {
                let pulse_us = now.saturating_sub(rise) as u32;
                return Ok(Some(Distance::from_echo_us(pulse_us)));
            }
        }
    }

}

impl<T, E, D, C> RangeSensor for Hcsr04<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
    C: PulseClock,
{
    fn measure(&mut self) -> Option<Distance> {
        self.try_measure().unwrap_or_else(|e| {
            debug!("HC-SR04 read failed ({}), treating as timeout", e);
            None
        })
    }
}
