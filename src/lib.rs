//! GateCount firmware library.
//!
//! Exposes the pure-logic modules for integration testing and the binary.
//! All ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module, with simulation stubs on the host.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod occupancy;
pub mod pins;

pub mod adapters;
pub mod drivers;
pub mod sensors;
