//! Session & Detector Configuration
//!
//! Defaults carry the calibrated values the simulator has always shipped
//! with; named constructors give the common sensitivity variants.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Detection thresholds and activation bound
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Windows smaller than this never trigger
    pub min_window: usize,

    /// Attack when source-address entropy ratio drops below this
    pub ip_ratio_threshold: f64,

    /// Attack when size entropy ratio drops below this
    pub size_ratio_threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_window: constants::DEFAULT_MIN_WINDOW,
            ip_ratio_threshold: constants::DEFAULT_IP_RATIO_THRESHOLD,
            size_ratio_threshold: constants::DEFAULT_SIZE_RATIO_THRESHOLD,
        }
    }
}

impl DetectorConfig {
    /// High sensitivity (ratios trip closer to baseline)
    pub fn high_sensitivity() -> Self {
        Self {
            ip_ratio_threshold: 0.9,
            size_ratio_threshold: 0.85,
            ..Default::default()
        }
    }

    /// Low sensitivity (only deep entropy collapses trip)
    pub fn low_sensitivity() -> Self {
        Self {
            ip_ratio_threshold: 0.6,
            size_ratio_threshold: 0.5,
            ..Default::default()
        }
    }
}

/// Full detection session parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Sliding window capacity in packets
    pub window_capacity: usize,

    pub detector: DetectorConfig,

    /// Score and persist every N window advances
    pub score_interval: usize,

    /// Playback speed multiplier; affects external pacing only
    pub playback_speed: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window_capacity: constants::DEFAULT_WINDOW_CAPACITY,
            detector: DetectorConfig::default(),
            score_interval: constants::DEFAULT_SCORE_INTERVAL,
            playback_speed: 1.0,
        }
    }
}
