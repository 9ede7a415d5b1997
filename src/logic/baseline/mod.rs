//! Baseline Module - Reference Entropy Calibration
//!
//! Computes the fixed entropy reference a detection session measures
//! against, and persists it with layout validation.
//!
//! # Architecture
//! - `types.rs`: `EntropyBaseline` + calibration
//! - `validate.rs`: layout/version validation
//! - `storage.rs`: persistent storage with validation
//!
//! # Failure Strategy
//! If a persisted baseline's version/layout mismatches on load, recalibrate
//! from fresh traffic instead of trusting stale reference values.

pub mod storage;
pub mod types;
pub mod validate;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::logic::traffic::Packet;

pub use types::EntropyBaseline;
pub use validate::BaselineError;

/// Load a persisted baseline, falling back to fresh calibration when the
/// file is missing, unreadable, or laid out for another channel set.
pub fn load_or_calibrate(path: &Path, name: &str, sample: &[Packet]) -> EntropyBaseline {
    match storage::load_baseline(path) {
        Ok(baseline) => {
            log::info!(
                "Loaded baseline '{}' v{} (hash: {:x}, samples: {})",
                baseline.name,
                baseline.channel_version,
                baseline.layout_hash,
                baseline.samples
            );
            baseline
        }
        Err(e) => {
            log::warn!("Baseline load failed/invalid: {}. Calibrating from sample.", e);
            let baseline = EntropyBaseline::calibrate(name, sample);

            if let Err(save_err) = storage::save_baseline(&baseline, path) {
                log::error!("Failed to save calibrated baseline: {}", save_err);
            }

            baseline
        }
    }
}
