//! Synthetic Traffic Generator
//!
//! Produces packet streams, optionally biased toward attack-like patterns:
//! attack packets come from a small fixed pool of source addresses and carry
//! near-uniform sizes, which is exactly the entropy collapse the detector
//! looks for.
//!
//! All randomness flows through the injected `Rng`, so a seeded generator
//! replays identical traffic run after run.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{
    ATTACK_POOL_SIZE, ATTACK_SIZE_MAX, ATTACK_SIZE_MIN, BASELINE_PACKET_COUNT, NORMAL_SIZE_MAX,
    NORMAL_SIZE_MIN, SCENARIO_PHASES, TARGET_ADDRESS,
};
use super::packet::Packet;

/// Output of the canned attack scenario
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Attack-free sample for baseline calibration
    pub baseline: Vec<Packet>,
    /// Traffic with interleaved attack phases
    pub traffic: Vec<Packet>,
}

/// Packet source with an injectable random source.
///
/// The attack address pool is redrawn once per batch, so every attack phase
/// reuses one fixed set of addresses.
pub struct TrafficGenerator<R: Rng> {
    rng: R,
    attack_pool: Vec<String>,
    last_timestamp: u64,
}

impl TrafficGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for TrafficGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TrafficGenerator<R> {
    pub fn with_rng(mut rng: R) -> Self {
        let attack_pool = draw_pool(&mut rng);
        Self {
            rng,
            attack_pool,
            last_timestamp: 0,
        }
    }

    /// Random dotted-quad address, four octets each uniform in [0, 255].
    pub fn random_address(&mut self) -> String {
        random_address(&mut self.rng)
    }

    /// Generate one packet. Attack packets draw their source from the
    /// current pool (indexed by `id % pool size`) and a narrow size band;
    /// normal packets get a fully random address and a broad size band.
    pub fn generate_packet(&mut self, id: u64, is_attack: bool) -> Packet {
        let source_address = if is_attack {
            self.attack_pool[(id % ATTACK_POOL_SIZE as u64) as usize].clone()
        } else {
            self.random_address()
        };

        let size = if is_attack {
            self.rng.gen_range(ATTACK_SIZE_MIN..=ATTACK_SIZE_MAX)
        } else {
            self.rng.gen_range(NORMAL_SIZE_MIN..=NORMAL_SIZE_MAX)
        };

        Packet {
            id,
            source_address,
            destination_address: TARGET_ADDRESS.to_string(),
            timestamp: self.next_timestamp(),
            size,
            is_attack,
        }
    }

    /// Generate `count` packets with ids `start_id..start_id + count`; each
    /// packet is independently an attack with `attack_probability`.
    pub fn generate_batch(
        &mut self,
        count: usize,
        start_id: u64,
        attack_probability: f64,
    ) -> Vec<Packet> {
        self.refresh_attack_pool();

        (0..count as u64)
            .map(|offset| {
                let is_attack = self.rng.gen::<f64>() < attack_probability;
                self.generate_packet(start_id + offset, is_attack)
            })
            .collect()
    }

    /// Produce the canned scenario: a clean calibration sample plus traffic
    /// with two attack waves. Ids continue monotonically across phases.
    pub fn simulate_scenario(&mut self) -> Scenario {
        let baseline = self.generate_batch(BASELINE_PACKET_COUNT, 0, 0.0);

        let mut traffic = Vec::new();
        let mut current_id = 0u64;
        for &(packet_count, attack_probability) in SCENARIO_PHASES {
            traffic.extend(self.generate_batch(packet_count, current_id, attack_probability));
            current_id += packet_count as u64;
        }

        log::debug!(
            "Scenario generated: {} baseline packets, {} traffic packets",
            baseline.len(),
            traffic.len()
        );

        Scenario { baseline, traffic }
    }

    fn refresh_attack_pool(&mut self) {
        self.attack_pool = draw_pool(&mut self.rng);
    }

    /// Wall-clock ms, clamped so timestamps never run backwards within one
    /// generator.
    fn next_timestamp(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last_timestamp = self.last_timestamp.max(now);
        self.last_timestamp
    }
}

fn draw_pool<R: Rng>(rng: &mut R) -> Vec<String> {
    (0..ATTACK_POOL_SIZE).map(|_| random_address(rng)).collect()
}

fn random_address<R: Rng>(rng: &mut R) -> String {
    let octets: [u8; 4] = [
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
    ];
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}
