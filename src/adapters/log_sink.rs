//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).
//! A display adapter would implement the same trait.
//!
//! The per-tick `Status` snapshot is only rendered when it differs from
//! the last one rendered, so an idle loop stays quiet.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::occupancy::counter::OccupancyStatus;

/// Adapter that logs [`AppEvent`]s to the serial console.
#[derive(Default)]
pub struct LogEventSink {
    last_status: Option<OccupancyStatus>,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_status(status: &OccupancyStatus) {
        info!(
            "COUNT | ENTERED={} EXITED={} INSIDE={} EXCEEDING={}",
            status.entered, status.exited, status.inside, status.exceeding
        );
        if status.over_capacity() {
            warn!("ALERT | {} over capacity", status.exceeding);
        }
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Status(status) => {
                if self.last_status.as_ref() != Some(status) {
                    Self::render_status(status);
                    self.last_status = Some(*status);
                }
            }
            AppEvent::EntryCounted(_) => info!("GATE  | entry counted"),
            AppEvent::ExitCounted(_) => info!("GATE  | exit counted"),
            AppEvent::ExitRejected => warn!("GATE  | no occupants to exit"),
            AppEvent::CapacityExceeded { exceeding } => {
                warn!("ALERT | capacity exceeded by {}", exceeding);
            }
            AppEvent::GateDisabled(gate) => info!("GATE  | {:?} disabled", gate),
            AppEvent::GateEnabled(gate) => info!("GATE  | {:?} enabled", gate),
            AppEvent::AlertStarted(kind) => info!("BUZZ  | {:?} on", kind),
            AppEvent::AlertEnded(kind) => info!("BUZZ  | {:?} off", kind),
            AppEvent::Started { capacity } => {
                info!("START | capacity={}", capacity);
                self.last_status = None;
            }
            AppEvent::Shutdown(status) => {
                info!("STOP  | final counts:");
                Self::render_status(status);
            }
        }
    }
}
