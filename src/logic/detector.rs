//! Ratio-Threshold Detector
//!
//! Compares a window's entropy against the session baseline. An attack
//! suppresses entropy in at least one feature channel: a flood from few
//! sources collapses address entropy, uniform-size packets collapse size
//! entropy. Either ratio dropping below its threshold flags the window.
//!
//! Stateless; called once per window advance.

use serde::{Deserialize, Serialize};

use crate::logic::baseline::EntropyBaseline;
use crate::logic::config::DetectorConfig;
use crate::logic::entropy;
use crate::logic::window::PacketWindow;

/// Outcome of evaluating one window position.
///
/// A ratio is `None` when its baseline channel calibrated to zero entropy:
/// that channel carries no signal and is excluded from the verdict rather
/// than producing a NaN-driven trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub ip_entropy: f64,
    pub size_entropy: f64,
    pub ip_ratio: Option<f64>,
    pub size_ratio: Option<f64>,
    pub is_attack: bool,
}

/// Evaluate a window against the baseline.
///
/// Windows below `min_window` never flag: too few packets for a meaningful
/// distribution estimate. Entropies are still reported for the sample log.
pub fn evaluate(
    window: &PacketWindow,
    baseline: &EntropyBaseline,
    config: &DetectorConfig,
) -> Detection {
    let ip_entropy = entropy::source_address_entropy(window);
    let size_entropy = entropy::size_entropy(window);

    let ip_ratio = channel_ratio(ip_entropy, baseline.ip_entropy);
    let size_ratio = channel_ratio(size_entropy, baseline.size_entropy);

    let is_attack = window.len() >= config.min_window
        && (below(ip_ratio, config.ip_ratio_threshold)
            || below(size_ratio, config.size_ratio_threshold));

    Detection {
        ip_entropy,
        size_entropy,
        ip_ratio,
        size_ratio,
        is_attack,
    }
}

/// Boolean form: is this window an attack?
pub fn detect(window: &PacketWindow, baseline: &EntropyBaseline, config: &DetectorConfig) -> bool {
    evaluate(window, baseline, config).is_attack
}

fn channel_ratio(current: f64, reference: f64) -> Option<f64> {
    if reference == 0.0 {
        None
    } else {
        Some(current / reference)
    }
}

fn below(ratio: Option<f64>, threshold: f64) -> bool {
    matches!(ratio, Some(r) if r < threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::traffic::{Packet, TrafficGenerator};

    fn window_of(packets: Vec<Packet>, capacity: usize) -> PacketWindow {
        let mut window = PacketWindow::new(capacity);
        for packet in packets {
            window.push(packet);
        }
        window
    }

    fn fixed_baseline(ip: f64, size: f64) -> EntropyBaseline {
        let mut baseline = EntropyBaseline::new("fixed");
        baseline.ip_entropy = ip;
        baseline.size_entropy = size;
        baseline
    }

    fn single_source_window(count: usize) -> PacketWindow {
        let packets = (0..count as u64)
            .map(|id| Packet {
                id,
                source_address: "203.0.113.9".to_string(),
                destination_address: crate::constants::TARGET_ADDRESS.to_string(),
                timestamp: id,
                size: 512,
                is_attack: true,
            })
            .collect();
        window_of(packets, 50)
    }

    #[test]
    fn test_small_window_never_flags() {
        let baseline = fixed_baseline(5.0, 3.0);
        let config = DetectorConfig::default();

        // Even a maximally suspicious window stays quiet under the minimum
        let window = single_source_window(9);
        assert!(!detect(&window, &baseline, &config));

        let empty = PacketWindow::new(50);
        assert!(!detect(&empty, &baseline, &config));
    }

    #[test]
    fn test_single_source_window_flags() {
        let baseline = fixed_baseline(5.0, 3.0);
        let config = DetectorConfig::default();

        let window = single_source_window(50);
        let detection = evaluate(&window, &baseline, &config);

        assert_eq!(detection.ip_entropy, 0.0);
        assert_eq!(detection.ip_ratio, Some(0.0));
        assert!(detection.is_attack, "IP ratio 0 < 0.8 must trigger");
    }

    #[test]
    fn test_normal_window_quiet_against_matched_baseline() {
        // Baseline sample sized like the window, so a healthy window's
        // entropy ratio sits near 1.0 on both channels
        let mut gen = TrafficGenerator::seeded(21);
        let sample = gen.generate_batch(50, 0, 0.0);
        let baseline = EntropyBaseline::calibrate("matched", &sample);
        let config = DetectorConfig::default();

        let window = window_of(gen.generate_batch(50, 50, 0.0), 50);
        let detection = evaluate(&window, &baseline, &config);

        assert!(!detection.is_attack, "detection: {:?}", detection);
    }

    #[test]
    fn test_attack_window_flags() {
        let mut gen = TrafficGenerator::seeded(22);
        let sample = gen.generate_batch(200, 0, 0.0);
        let baseline = EntropyBaseline::calibrate("normal", &sample);
        let config = DetectorConfig::default();

        let window = window_of(gen.generate_batch(50, 200, 1.0), 50);
        assert!(detect(&window, &baseline, &config));
    }

    #[test]
    fn test_either_channel_alone_triggers() {
        let config = DetectorConfig::default();
        let window = single_source_window(50);

        // Size channel satisfied (current size entropy is 0, but make the
        // size baseline zero so that channel is excluded), IP channel trips
        let baseline = fixed_baseline(5.0, 0.0);
        let detection = evaluate(&window, &baseline, &config);
        assert_eq!(detection.size_ratio, None);
        assert!(detection.is_attack);

        // IP channel excluded, size channel trips
        let baseline = fixed_baseline(0.0, 3.0);
        let detection = evaluate(&window, &baseline, &config);
        assert_eq!(detection.ip_ratio, None);
        assert_eq!(detection.size_ratio, Some(0.0));
        assert!(detection.is_attack);
    }

    #[test]
    fn test_fully_degenerate_baseline_never_flags() {
        let baseline = fixed_baseline(0.0, 0.0);
        let config = DetectorConfig::default();

        let window = single_source_window(50);
        let detection = evaluate(&window, &baseline, &config);

        assert_eq!(detection.ip_ratio, None);
        assert_eq!(detection.size_ratio, None);
        assert!(!detection.is_attack, "no signal channels, no verdict");
    }
}
