//! Per-gate sensor-pair fusion.
//!
//! Each gate carries two range sensors (left and right of the doorway).
//! A gate "detects" when **either** reading is present and strictly below
//! the threshold.  It is a logical OR, never an average, so an occupant hugging
//! one side of the doorway still counts.  A timed-out sensor contributes
//! nothing; two timeouts simply mean "no detection".

use log::debug;

use super::{Distance, GateId, Side};
use crate::app::ports::RangeSensorPort;

/// Both readings taken for one gate in one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateSample {
    pub left: Option<Distance>,
    pub right: Option<Distance>,
}

impl GateSample {
    pub fn detected(&self, threshold_cm: f32) -> bool {
        let within = |d: Option<Distance>| d.is_some_and(|d| d.is_within(threshold_cm));
        within(self.left) || within(self.right)
    }
}

pub struct GateDetector {
    gate: GateId,
    threshold_cm: f32,
}

impl GateDetector {
    pub fn new(gate: GateId, threshold_cm: f32) -> Self {
        Self { gate, threshold_cm }
    }

    /// Read both sensors of this gate.  Both are always sampled, even if the
    /// first one already detects.
    pub fn sample(&self, sensors: &mut impl RangeSensorPort) -> GateSample {
        let left = sensors.measure_distance(self.gate, Side::Left);
        let right = sensors.measure_distance(self.gate, Side::Right);
        GateSample { left, right }
    }

    pub fn detect(&self, sensors: &mut impl RangeSensorPort) -> bool {
        let sample = self.sample(sensors);
        let detected = sample.detected(self.threshold_cm);
        if detected {
            debug!(
                "{:?} gate detection: left={:?} right={:?}",
                self.gate,
                sample.left.map(Distance::cm),
                sample.right.map(Distance::cm)
            );
        }
        detected
    }
}
