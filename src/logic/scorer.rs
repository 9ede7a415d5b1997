//! Detection Scorer
//!
//! Tallies classification outcomes against ground-truth labels. The matrix
//! is a streaming accumulator, updated O(1) per window advance; the batch
//! form `score` recomputes from paired slices and must always agree with it.

use serde::{Deserialize, Serialize};

use crate::logic::traffic::Packet;

// ============================================================================
// CONFUSION MATRIX
// ============================================================================

/// Four-way tally of detections vs ground truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positives: u64,
    pub false_positives: u64,
    pub true_negatives: u64,
    pub false_negatives: u64,
}

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one (ground truth, detected) pair.
    pub fn record(&mut self, is_attack: bool, detected: bool) {
        match (is_attack, detected) {
            (true, true) => self.true_positives += 1,
            (false, true) => self.false_positives += 1,
            (false, false) => self.true_negatives += 1,
            (true, false) => self.false_negatives += 1,
        }
    }

    /// Labeled samples considered so far.
    pub fn total(&self) -> u64 {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    /// (TP + TN) / total; 0 for an empty matrix.
    pub fn accuracy(&self) -> f64 {
        ratio(
            self.true_positives + self.true_negatives,
            self.total(),
        )
    }

    /// TP / (TP + FP); 0 when nothing was flagged.
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    /// TP / (TP + FN); 0 when no attacks existed.
    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    /// Harmonic mean of precision and recall; 0 when both are 0.
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }

    pub fn stats(&self) -> DetectionStats {
        DetectionStats {
            accuracy: self.accuracy(),
            precision: self.precision(),
            recall: self.recall(),
            f1_score: self.f1(),
            true_positives: self.true_positives,
            false_positives: self.false_positives,
            true_negatives: self.true_negatives,
            false_negatives: self.false_negatives,
        }
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

// ============================================================================
// BATCH SCORING
// ============================================================================

/// Score paired ground truth and detections index-wise.
///
/// The slices must be the same length; pairs beyond the shorter slice would
/// silently skew every derived metric.
pub fn score(packets: &[Packet], detected: &[bool]) -> ConfusionMatrix {
    debug_assert_eq!(
        packets.len(),
        detected.len(),
        "packets and detections must pair index-wise"
    );

    let mut matrix = ConfusionMatrix::new();
    for (packet, &flagged) in packets.iter().zip(detected.iter()) {
        matrix.record(packet.is_attack, flagged);
    }
    matrix
}

// ============================================================================
// DERIVED STATS SNAPSHOT
// ============================================================================

/// Serializable snapshot of the matrix plus its derived ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionStats {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub true_positives: u64,
    pub false_positives: u64,
    pub true_negatives: u64,
    pub false_negatives: u64,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::traffic::TrafficGenerator;

    fn labeled_packets(labels: &[bool]) -> Vec<Packet> {
        labels
            .iter()
            .enumerate()
            .map(|(i, &is_attack)| Packet {
                id: i as u64,
                source_address: "10.0.0.1".to_string(),
                destination_address: crate::constants::TARGET_ADDRESS.to_string(),
                timestamp: i as u64,
                size: 64,
                is_attack,
            })
            .collect()
    }

    #[test]
    fn test_counters_sum_to_length() {
        let packets = labeled_packets(&[true, false, true, false, false, true, true]);
        let detected = vec![true, true, false, false, true, true, false];
        let matrix = score(&packets, &detected);
        assert_eq!(matrix.total(), packets.len() as u64);
    }

    #[test]
    fn test_mixed_scenario_all_metrics_half() {
        // TP, TN, FN, FP: one of each
        let packets = labeled_packets(&[true, false, true, false]);
        let detected = vec![true, false, false, true];
        let matrix = score(&packets, &detected);

        assert_eq!(matrix.true_positives, 1);
        assert_eq!(matrix.false_positives, 1);
        assert_eq!(matrix.true_negatives, 1);
        assert_eq!(matrix.false_negatives, 1);
        assert_eq!(matrix.accuracy(), 0.5);
        assert_eq!(matrix.precision(), 0.5);
        assert_eq!(matrix.recall(), 0.5);
        assert_eq!(matrix.f1(), 0.5);
    }

    #[test]
    fn test_empty_matrix_metrics_are_zero() {
        let matrix = ConfusionMatrix::new();
        assert_eq!(matrix.total(), 0);
        assert_eq!(matrix.accuracy(), 0.0);
        assert_eq!(matrix.precision(), 0.0);
        assert_eq!(matrix.recall(), 0.0);
        assert_eq!(matrix.f1(), 0.0);
    }

    #[test]
    fn test_zero_denominator_fallbacks() {
        // Nothing flagged: precision denominator empty
        let packets = labeled_packets(&[true, true]);
        let matrix = score(&packets, &[false, false]);
        assert_eq!(matrix.precision(), 0.0);
        assert_eq!(matrix.recall(), 0.0);
        assert_eq!(matrix.f1(), 0.0);

        // No attacks: recall denominator empty
        let packets = labeled_packets(&[false, false]);
        let matrix = score(&packets, &[true, false]);
        assert_eq!(matrix.recall(), 0.0);
    }

    #[test]
    fn test_perfect_detection() {
        let packets = labeled_packets(&[true, false, true, false]);
        let matrix = score(&packets, &[true, false, true, false]);
        assert_eq!(matrix.accuracy(), 1.0);
        assert_eq!(matrix.precision(), 1.0);
        assert_eq!(matrix.recall(), 1.0);
        assert_eq!(matrix.f1(), 1.0);
    }

    #[test]
    fn test_streaming_matches_batch() {
        let mut gen = TrafficGenerator::seeded(31);
        let packets = gen.generate_batch(500, 0, 0.4);
        // Arbitrary deterministic detector stand-in
        let detected: Vec<bool> = packets.iter().map(|p| p.size < 700).collect();

        let batch = score(&packets, &detected);

        let mut streaming = ConfusionMatrix::new();
        for (packet, &flagged) in packets.iter().zip(detected.iter()) {
            streaming.record(packet.is_attack, flagged);
        }

        assert_eq!(streaming, batch);
        assert_eq!(streaming.stats(), batch.stats());
    }

    #[test]
    fn test_stats_snapshot_matches_accessors() {
        let packets = labeled_packets(&[true, false, true]);
        let matrix = score(&packets, &[true, true, true]);
        let stats = matrix.stats();

        assert_eq!(stats.accuracy, matrix.accuracy());
        assert_eq!(stats.precision, matrix.precision());
        assert_eq!(stats.recall, matrix.recall());
        assert_eq!(stats.f1_score, matrix.f1());
        assert_eq!(stats.true_positives, 2);
        assert_eq!(stats.false_positives, 1);
    }
}
