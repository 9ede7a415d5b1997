use crate::logic::entropy::layout::{layout_hash, CHANNEL_VERSION};
use crate::logic::traffic::TrafficGenerator;
use super::storage::{load_baseline, save_baseline};
use super::types::EntropyBaseline;
use super::validate::{validate_baseline, BaselineError};

#[test]
fn test_baseline_creation() {
    let b = EntropyBaseline::new("test");
    assert_eq!(b.channel_version, CHANNEL_VERSION);
    assert_eq!(b.layout_hash, layout_hash());
    assert_eq!(b.samples, 0);
    assert!(b.is_degenerate());
}

#[test]
fn test_calibrate_from_normal_traffic() {
    let mut gen = TrafficGenerator::seeded(11);
    let sample = gen.generate_batch(200, 0, 0.0);
    let b = EntropyBaseline::calibrate("default", &sample);

    assert_eq!(b.samples, 200);
    // 200 random addresses: entropy well above zero, bounded by log2(200)
    assert!(b.ip_entropy > 4.0);
    assert!(b.ip_entropy <= 200f64.log2() + 1e-9);
    // 15 possible size buckets (0..=1400) for normal traffic
    assert!(b.size_entropy > 0.0);
    assert!(b.size_entropy <= 15f64.log2() + 1e-9);
    assert!(!b.is_degenerate());
}

#[test]
fn test_calibrate_single_source_is_degenerate() {
    let mut gen = TrafficGenerator::seeded(12);
    let mut sample = gen.generate_batch(50, 0, 0.0);
    for packet in &mut sample {
        packet.source_address = "10.0.0.1".to_string();
    }
    let b = EntropyBaseline::calibrate("flat", &sample);
    assert_eq!(b.ip_entropy, 0.0);
    assert!(b.is_degenerate());
}

#[test]
fn test_calibrate_empty_sample() {
    let b = EntropyBaseline::calibrate("empty", &[]);
    assert_eq!(b.samples, 0);
    assert_eq!(b.ip_entropy, 0.0);
    assert_eq!(b.size_entropy, 0.0);
}

#[test]
fn test_baseline_validation_success() {
    let b = EntropyBaseline::new("valid");
    assert!(validate_baseline(&b).is_ok());
}

#[test]
fn test_reject_version_mismatch() {
    let mut b = EntropyBaseline::new("invalid_version");
    b.channel_version = CHANNEL_VERSION + 1;

    match validate_baseline(&b) {
        Err(BaselineError::LayoutMismatch {
            expected_version,
            actual_version,
            ..
        }) => {
            assert_eq!(expected_version, CHANNEL_VERSION);
            assert_eq!(actual_version, CHANNEL_VERSION + 1);
        }
        other => panic!("Expected LayoutMismatch error, got {:?}", other),
    }
}

#[test]
fn test_reject_layout_hash_mismatch() {
    let mut b = EntropyBaseline::new("invalid_hash");
    b.layout_hash = !layout_hash();

    match validate_baseline(&b) {
        Err(BaselineError::LayoutMismatch {
            expected_hash,
            actual_hash,
            ..
        }) => {
            assert_eq!(expected_hash, layout_hash());
            assert_ne!(actual_hash, layout_hash());
        }
        other => panic!("Expected LayoutMismatch error, got {:?}", other),
    }
}

#[test]
fn test_save_load_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.json");

    let mut gen = TrafficGenerator::seeded(13);
    let sample = gen.generate_batch(100, 0, 0.0);
    let original = EntropyBaseline::calibrate("persist", &sample);

    save_baseline(&original, &path).unwrap();
    let loaded = load_baseline(&path).unwrap();

    assert_eq!(loaded.id, original.id);
    assert_eq!(loaded.samples, 100);
    assert_eq!(loaded.ip_entropy, original.ip_entropy);
    assert_eq!(loaded.size_entropy, original.size_entropy);
    assert!(validate_baseline(&loaded).is_ok());
}

#[test]
fn test_load_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.json");
    std::fs::write(&path, "not json at all").unwrap();

    match load_baseline(&path) {
        Err(BaselineError::SerializationError(_)) => {}
        other => panic!("Expected SerializationError, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_stale_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.json");

    let mut b = EntropyBaseline::new("stale");
    b.channel_version = CHANNEL_VERSION + 1;
    // Bypass validation on the way out to simulate a file from a newer build
    let json = serde_json::to_vec_pretty(&b).unwrap();
    std::fs::write(&path, json).unwrap();

    assert!(matches!(
        load_baseline(&path),
        Err(BaselineError::LayoutMismatch { .. })
    ));
}

#[test]
fn test_load_or_calibrate_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("baseline.json");

    let mut gen = TrafficGenerator::seeded(14);
    let sample = gen.generate_batch(100, 0, 0.0);
    let baseline = super::load_or_calibrate(&path, "fresh", &sample);

    assert_eq!(baseline.name, "fresh");
    assert_eq!(baseline.samples, 100);
    // Calibration result was persisted for the next run
    assert!(path.exists());
    let reloaded = load_baseline(&path).unwrap();
    assert_eq!(reloaded.id, baseline.id);
}
