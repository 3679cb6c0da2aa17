//! Application core: orchestration and the port boundary.
//!
//! The [`controller`] drives the pure occupancy logic in
//! [`crate::occupancy`] once per tick.  All interaction with hardware
//! happens through **port traits** defined in [`ports`], keeping this layer
//! fully testable without real peripherals.

pub mod controller;
pub mod events;
pub mod ports;
