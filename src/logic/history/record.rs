//! Detection History Record
//!
//! Immutable, timestamped rows for the append-only detection history.

use serde::{Deserialize, Serialize};

/// One persisted detection step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    /// Unix milliseconds at persistence time
    pub timestamp: i64,
    /// Session the record belongs to (one uuid per app run)
    pub session_id: String,
    pub ip_entropy: f64,
    pub size_entropy: f64,
    /// Ground-truth label of the packet that advanced the window
    pub is_attack: bool,
    pub detected_attack: bool,
}

impl DetectionRecord {
    pub fn new(ip_entropy: f64, size_entropy: f64, is_attack: bool, detected_attack: bool) -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp_millis(),
            session_id: super::get_session_id(),
            ip_entropy,
            size_entropy,
            is_attack,
            detected_attack,
        }
    }

    /// Serialize to one JSONL line.
    pub fn to_jsonl(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_to_jsonl_single_line() {
        let record = DetectionRecord::new(5.2, 3.1, true, true);
        let line = record.to_jsonl();
        assert!(!line.contains('\n'));
        let parsed: DetectionRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_session_id_consistent() {
        let a = DetectionRecord::new(1.0, 1.0, false, false);
        let b = DetectionRecord::new(2.0, 2.0, true, false);
        assert_eq!(a.session_id, b.session_id);
    }
}
