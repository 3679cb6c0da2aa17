//! Fuzz target: persisted `SystemConfig` blob decoder
//!
//! The NVS adapter hands whatever bytes are in flash to
//! `SystemConfig::from_bytes`.  Verifies:
//! - No panics under arbitrary byte inputs
//! - Anything that decodes re-encodes to a blob that decodes identically
//! - A decoded config that validates can build a controller
//!
//! cargo fuzz run fuzz_config_blob

#![no_main]

use gatecount::app::controller::OccupancyController;
use gatecount::config::SystemConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(cfg) = SystemConfig::from_bytes(data) else {
        return;
    };

    let bytes = cfg.to_bytes().expect("decoded config must re-encode");
    let again = SystemConfig::from_bytes(&bytes).expect("re-encoded blob must decode");
    // NaN thresholds decode fine but never compare equal.
    if cfg.detection_threshold_cm.is_nan() {
        assert!(again.detection_threshold_cm.is_nan());
    } else {
        assert_eq!(cfg, again);
    }

    match cfg.validate() {
        Ok(()) => assert!(OccupancyController::new(cfg).is_ok()),
        Err(_) => assert!(OccupancyController::new(cfg).is_err()),
    }
});
