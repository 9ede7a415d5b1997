//! History Module - Detection Result Persistence
//!
//! Append-only storage of detection records behind an injected port.
//! Without history you can't audit why a window was flagged or replay a
//! session's verdicts.
//!
//! ## Structure
//! - `record.rs` - `DetectionRecord` (immutable, timestamped)
//! - `store.rs` - `HistoryStore` trait + JSONL and null implementations

pub mod record;
pub mod store;

use std::path::PathBuf;

use once_cell::sync::Lazy;

pub use record::DetectionRecord;
pub use store::{HistoryStore, JsonlHistoryStore, NullHistoryStore};

static SESSION_ID: Lazy<String> = Lazy::new(|| uuid::Uuid::new_v4().to_string());

/// Session ID, generated once per app run.
pub fn get_session_id() -> String {
    SESSION_ID.clone()
}

/// Default history file location.
pub fn get_default_history_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(crate::constants::APP_NAME)
        .join("history.jsonl")
}
