//! Detection Session Driver
//!
//! Feeds packets one at a time into the sliding window, evaluates the
//! detector at each advance, keeps the streaming score current, and
//! periodically pushes a record through the injected history port.
//!
//! Single-threaded by construction: one window advance at a time, no locks
//! in the loop. Persistence is fire-and-forget; a failing store is logged
//! and never stalls or corrupts the in-memory session.

use serde::{Deserialize, Serialize};

use crate::logic::baseline::EntropyBaseline;
use crate::logic::config::SessionConfig;
use crate::logic::detector;
use crate::logic::history::{DetectionRecord, HistoryStore};
use crate::logic::scorer::{ConfusionMatrix, DetectionStats};
use crate::logic::traffic::Packet;
use crate::logic::window::PacketWindow;

/// Result of one detection step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntropySample {
    /// 1-based window position (packets consumed so far)
    pub index: usize,
    pub ip_entropy: f64,
    pub size_entropy: f64,
    /// Ground truth of the packet that advanced the window
    pub is_attack: bool,
    pub detected_attack: bool,
}

/// End-of-run summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub packets_processed: usize,
    pub windows_flagged: usize,
    pub stats: DetectionStats,
}

/// Owns the window, the baseline reference, and the running score for one
/// detection session.
pub struct SessionDriver {
    config: SessionConfig,
    baseline: EntropyBaseline,
    window: PacketWindow,
    scorer: ConfusionMatrix,
    samples: Vec<EntropySample>,
    history: Box<dyn HistoryStore>,
    processed: usize,
}

impl SessionDriver {
    pub fn new(
        config: SessionConfig,
        baseline: EntropyBaseline,
        history: Box<dyn HistoryStore>,
    ) -> Self {
        let window = PacketWindow::new(config.window_capacity);
        log::info!(
            "Session started: window={}, min={}, thresholds ip<{} size<{}, baseline ip={:.4} size={:.4}",
            config.window_capacity,
            config.detector.min_window,
            config.detector.ip_ratio_threshold,
            config.detector.size_ratio_threshold,
            baseline.ip_entropy,
            baseline.size_entropy
        );

        Self {
            config,
            baseline,
            window,
            scorer: ConfusionMatrix::new(),
            samples: Vec::new(),
            history,
            processed: 0,
        }
    }

    /// Advance the window by one packet and evaluate it.
    pub fn step(&mut self, packet: Packet) -> EntropySample {
        let is_attack = packet.is_attack;
        self.window.push(packet);
        self.processed += 1;

        let detection = detector::evaluate(&self.window, &self.baseline, &self.config.detector);
        self.scorer.record(is_attack, detection.is_attack);

        let sample = EntropySample {
            index: self.processed,
            ip_entropy: detection.ip_entropy,
            size_entropy: detection.size_entropy,
            is_attack,
            detected_attack: detection.is_attack,
        };
        self.samples.push(sample);

        if self.processed % self.config.score_interval == 0 {
            self.persist(&sample);
        }

        sample
    }

    /// Run a whole packet sequence through the session.
    pub fn run(&mut self, packets: Vec<Packet>) -> SessionReport {
        for packet in packets {
            self.step(packet);
        }
        self.report()
    }

    fn persist(&self, sample: &EntropySample) {
        let record = DetectionRecord::new(
            sample.ip_entropy,
            sample.size_entropy,
            sample.is_attack,
            sample.detected_attack,
        );
        if let Err(e) = self.history.append(&record) {
            // The loop keeps running; only the operator hears about it
            log::error!("Failed to persist detection record: {}", e);
        }
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            packets_processed: self.processed,
            windows_flagged: self.samples.iter().filter(|s| s.detected_attack).count(),
            stats: self.scorer.stats(),
        }
    }

    pub fn stats(&self) -> DetectionStats {
        self.scorer.stats()
    }

    pub fn samples(&self) -> &[EntropySample] {
        &self.samples
    }

    pub fn baseline(&self) -> &EntropyBaseline {
        &self.baseline
    }
}
