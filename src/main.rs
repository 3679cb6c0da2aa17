//! GateCount Firmware: Main Entry Point
//!
//! Hexagonal architecture with a single fixed-period control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter        LogEventSink   NvsAdapter  Esp32Time   │
//! │  (RangeSensor+Actuator) (EventSink)    (Config)    (Clock)     │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │           OccupancyController (pure logic)             │    │
//! │  │  GateDetector · CooldownGate · Counter · AlertTimer    │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::{error, info, warn};

use gatecount::adapters::hardware::HardwareAdapter;
use gatecount::adapters::log_sink::LogEventSink;
use gatecount::adapters::nvs::NvsAdapter;
use gatecount::adapters::time::Esp32TimeAdapter;
use gatecount::app::controller::OccupancyController;
use gatecount::config::SystemConfig;
use gatecount::drivers::buzzer::BuzzerDriver;
use gatecount::drivers::gpio::{BusyDelay, GpioPin};
use gatecount::drivers::hw_init;
use gatecount::drivers::indicator::IndicatorLeds;
use gatecount::drivers::watchdog::Watchdog;
use gatecount::error::Error;
use gatecount::pins;
use gatecount::sensors::SensorArray;
use gatecount::sensors::ultrasonic::Hcsr04;

/// Runs inside `esp_restart()`: silence the buzzer and LEDs before reset.
unsafe extern "C" fn outputs_off_on_restart() {
    for pin in [pins::BUZZER_GPIO, pins::GREEN_LED_GPIO, pins::RED_LED_GPIO] {
        hw_init::gpio_write(pin, false);
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  GateCount v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        error!("HAL init failed: {}", e);
        return Err(Error::from(e).into());
    }
    // SAFETY: registering a plain function pointer during single-threaded boot.
    let ret = unsafe {
        esp_idf_svc::sys::esp_register_shutdown_handler(Some(outputs_off_on_restart))
    };
    if ret != esp_idf_svc::sys::ESP_OK {
        warn!("Shutdown handler not registered ({})", ret);
    }

    // ── 3. Load config from NVS (or defaults) ─────────────────
    let config = match NvsAdapter::new() {
        Ok(nvs) => SystemConfig::load_or_default(&nvs),
        Err(e) => {
            warn!("NVS init failed ({}), running with defaults", e);
            SystemConfig::default()
        }
    };

    // ── 4. Construct the core (fatal on bad config) ───────────
    let mut controller = match OccupancyController::new(config.clone()) {
        Ok(c) => c,
        Err(e) => {
            error!("Refusing to start: {}", e);
            return Err(Error::from(e).into());
        }
    };

    // ── 5. Construct adapters ─────────────────────────────────
    let clock = Esp32TimeAdapter::new();
    let sensors = SensorArray::from_fn(|gate, side| {
        let p = pins::sensor_pins(gate, side);
        Hcsr04::new(
            GpioPin::new(p.trigger),
            GpioPin::new(p.echo),
            BusyDelay,
            clock,
            config.sensor_timeout_us,
        )
    });
    let mut hw = HardwareAdapter::new(sensors, BuzzerDriver::new(), IndicatorLeds::new());
    let mut log_sink = LogEventSink::new();
    let watchdog = Watchdog::new(config.watchdog_timeout_ms);

    controller.start(&mut hw, &mut log_sink);
    info!(
        "System ready. Entering control loop ({}ms period, worst-case tick {}ms).",
        config.control_loop_interval_ms,
        config.worst_case_tick_ms()
    );

    // ── 6. Control loop ───────────────────────────────────────
    loop {
        controller.tick(&clock, &mut hw, &mut log_sink);
        watchdog.feed();
        FreeRtos::delay_ms(config.control_loop_interval_ms);
    }
}
