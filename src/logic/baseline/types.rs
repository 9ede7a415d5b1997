use serde::{Deserialize, Serialize};

use crate::logic::entropy::{self, layout::{layout_hash, CHANNEL_VERSION}};
use crate::logic::traffic::Packet;

// ============================================================================
// VERSIONED ENTROPY BASELINE
// ============================================================================

/// Reference entropies calibrated from an attack-free traffic sample.
///
/// Calibrated once per session and never recomputed mid-session; detection
/// ratios are always relative to this fixed reference. Carries the channel
/// layout version + hash so a stale persisted baseline is rejected at load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntropyBaseline {
    pub channel_version: u8,
    pub layout_hash: u32,
    /// Packets in the calibration sample
    pub samples: u64,

    /// Reference source-address entropy
    pub ip_entropy: f64,
    /// Reference size-bucket entropy
    pub size_entropy: f64,

    pub id: String,
    pub name: String,
    pub created_at: i64, // Unix timestamp
}

impl EntropyBaseline {
    /// Empty baseline shell with current layout metadata.
    pub fn new(name: &str) -> Self {
        Self {
            channel_version: CHANNEL_VERSION,
            layout_hash: layout_hash(),
            samples: 0,
            ip_entropy: 0.0,
            size_entropy: 0.0,
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Calibrate reference entropies from a sample presumed attack-free.
    pub fn calibrate(name: &str, packets: &[Packet]) -> Self {
        let mut baseline = Self::new(name);
        baseline.samples = packets.len() as u64;
        baseline.ip_entropy = entropy::source_address_entropy(packets);
        baseline.size_entropy = entropy::size_entropy(packets);

        if baseline.is_degenerate() {
            log::warn!(
                "Baseline '{}' calibrated with a zero channel (ip: {:.4}, size: {:.4}); \
                 that channel will carry no detection signal",
                name,
                baseline.ip_entropy,
                baseline.size_entropy
            );
        }

        baseline
    }

    /// True when either channel calibrated to zero entropy.
    pub fn is_degenerate(&self) -> bool {
        self.ip_entropy == 0.0 || self.size_entropy == 0.0
    }
}
