//! Simulated Packet Record
//!
//! Immutable, timestamped packets are the unit everything else in the
//! engine consumes. Field names on the wire match the historical export
//! format (`sourceIP`, `destinationIP`, `isAttack`) so captures round-trip
//! across tool versions.

use serde::{Deserialize, Serialize};

/// One simulated network packet.
///
/// Created by the traffic generator and never mutated afterwards. The
/// `is_attack` flag is the ground-truth label used for scoring, not
/// something the detector is allowed to look at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    /// Sequence number, unique within a run
    pub id: u64,
    /// Dotted-quad source address
    #[serde(rename = "sourceIP", alias = "sourceAddress")]
    pub source_address: String,
    /// Fixed sentinel target
    #[serde(rename = "destinationIP", alias = "destinationAddress")]
    pub destination_address: String,
    /// Creation time in Unix milliseconds, non-decreasing per generator
    pub timestamp: u64,
    /// Payload size in bytes, always > 0
    pub size: u32,
    /// Ground-truth label; absent in imports means normal traffic
    #[serde(rename = "isAttack", default)]
    pub is_attack: bool,
}

impl Packet {
    /// Size bucket this packet falls into (100-byte granularity).
    pub fn size_bucket(&self) -> u32 {
        (self.size / crate::constants::SIZE_BUCKET_BYTES) * crate::constants::SIZE_BUCKET_BYTES
    }
}
