//! Central Configuration Constants
//!
//! Single source of truth for all simulation defaults.
//! To change the canned scenario or thresholds, only edit this file.

/// Sentinel target address every simulated packet is sent to
pub const TARGET_ADDRESS: &str = "192.168.1.1";

/// Attack traffic draws its source addresses from a pool this large
pub const ATTACK_POOL_SIZE: usize = 5;

/// Attack packet sizes: uniform in [ATTACK_SIZE_MIN, ATTACK_SIZE_MAX]
pub const ATTACK_SIZE_MIN: u32 = 512;
pub const ATTACK_SIZE_MAX: u32 = 521;

/// Normal packet sizes: uniform in [NORMAL_SIZE_MIN, NORMAL_SIZE_MAX]
pub const NORMAL_SIZE_MIN: u32 = 64;
pub const NORMAL_SIZE_MAX: u32 = 1463;

/// Packet sizes are grouped into buckets this wide for entropy analysis
pub const SIZE_BUCKET_BYTES: u32 = 100;

/// Packets in the attack-free calibration sample
pub const BASELINE_PACKET_COUNT: usize = 200;

/// Canned scenario: (packet count, attack probability) per phase.
/// Ids continue monotonically across phases.
pub const SCENARIO_PHASES: &[(usize, f64)] = &[
    (100, 0.0), // normal traffic
    (150, 0.7), // attack phase 1
    (50, 0.0),  // brief normal period
    (200, 0.9), // attack phase 2
    (100, 0.0), // return to normal
];

/// Sliding window capacity (packets)
pub const DEFAULT_WINDOW_CAPACITY: usize = 50;

/// Minimum window fill before detection activates
pub const DEFAULT_MIN_WINDOW: usize = 10;

/// Source-address entropy ratio below this flags an attack
pub const DEFAULT_IP_RATIO_THRESHOLD: f64 = 0.8;

/// Size entropy ratio below this flags an attack
pub const DEFAULT_SIZE_RATIO_THRESHOLD: f64 = 0.7;

/// Score and persist every N window advances
pub const DEFAULT_SCORE_INTERVAL: usize = 10;

/// Base delay between window advances when pacing (milliseconds)
pub const PACING_BASE_MS: u64 = 100;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "entropy-sentinel";
