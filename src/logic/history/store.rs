//! History Storage Port
//!
//! The detection session talks to an injected `HistoryStore`; it never
//! knows which storage technology sits behind the trait. The shipped
//! implementation is an append-only JSONL file; `NullHistoryStore` disables
//! persistence entirely.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::record::DetectionRecord;

/// Append-only storage boundary for detection history.
pub trait HistoryStore: Send {
    /// Append one record.
    fn append(&self, record: &DetectionRecord) -> io::Result<()>;

    /// All records, newest first.
    fn list_all(&self) -> io::Result<Vec<DetectionRecord>>;

    /// Drop every stored record.
    fn clear(&self) -> io::Result<()>;
}

// ============================================================================
// JSONL STORE
// ============================================================================

/// Append-only JSONL history file.
pub struct JsonlHistoryStore {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlHistoryStore {
    /// Open (or create) the history file at `path`.
    pub fn new(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        log::info!("Opened detection history: {:?}", path);

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonlHistoryStore {
    fn append(&self, record: &DetectionRecord) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(record.to_jsonl().as_bytes())?;
        writer.write_all(b"\n")?;
        // Flush for durability
        writer.flush()
    }

    fn list_all(&self) -> io::Result<Vec<DetectionRecord>> {
        // Hold the lock so a concurrent append can't tear a line mid-read
        let mut writer = self.writer.lock();
        writer.flush()?;

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            // Malformed lines are skipped, never fatal
            match serde_json::from_str::<DetectionRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => log::warn!("Skipping malformed history line: {}", e),
            }
        }

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    fn clear(&self) -> io::Result<()> {
        let mut writer = self.writer.lock();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        *writer = BufWriter::new(file);
        log::info!("Detection history cleared: {:?}", self.path);
        Ok(())
    }
}

// ============================================================================
// NULL STORE
// ============================================================================

/// Discards everything; used when persistence is disabled.
pub struct NullHistoryStore;

impl HistoryStore for NullHistoryStore {
    fn append(&self, _record: &DetectionRecord) -> io::Result<()> {
        Ok(())
    }

    fn list_all(&self) -> io::Result<Vec<DetectionRecord>> {
        Ok(Vec::new())
    }

    fn clear(&self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
