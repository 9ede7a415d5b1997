//! Channel Layout - Centralized Feature Channel Definition
//!
//! ## Rules (NEVER break these):
//! 1. Add channel -> increment CHANNEL_VERSION
//! 2. Change order -> increment CHANNEL_VERSION
//! 3. Remove channel -> increment CHANNEL_VERSION
//!
//! Persisted baselines carry the version + hash so a baseline calibrated
//! under an older channel set is rejected at load instead of silently
//! feeding wrong reference values into detection.

use crc32fast::Hasher;

// ============================================================================
// CHANNEL VERSION
// ============================================================================

/// Current channel layout version
pub const CHANNEL_VERSION: u8 = 1;

// ============================================================================
// CHANNEL LAYOUT (Authoritative source)
// ============================================================================

/// Entropy channel names, in the order they are reported everywhere
pub const CHANNEL_LAYOUT: &[&str] = &[
    "source_address_entropy", // 0: entropy of the source address distribution
    "packet_size_entropy",    // 1: entropy of the 100-byte size buckets
];

/// Total number of entropy channels
/// IMPORTANT: Must match CHANNEL_LAYOUT.len()!
pub const CHANNEL_COUNT: usize = 2;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the channel layout
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[CHANNEL_VERSION]);
    for name in CHANNEL_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when the channel layout doesn't match expected
#[derive(Debug, Clone)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Channel layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version, self.expected_hash, self.actual_version, self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that incoming data matches the current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != CHANNEL_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: CHANNEL_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
