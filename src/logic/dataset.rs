//! Dataset Module - Packet Capture Import/Export
//!
//! Serializes packet sequences to a JSON array-of-records text format and
//! reads them back losslessly. A malformed payload degrades to an empty
//! sequence at this boundary; parse problems never reach detection logic.

use std::fs;
use std::io;
use std::path::Path;

use crate::logic::traffic::Packet;

/// Export a packet sequence to pretty-printed JSON text.
pub fn export_packets(packets: &[Packet]) -> String {
    serde_json::to_string_pretty(packets).unwrap_or_else(|_| "[]".to_string())
}

/// Parse a packet sequence from JSON text.
///
/// Malformed input yields an empty sequence with a logged warning.
pub fn import_packets(data: &str) -> Vec<Packet> {
    match serde_json::from_str::<Vec<Packet>>(data) {
        Ok(packets) => packets,
        Err(e) => {
            log::warn!("Packet import failed, returning empty sequence: {}", e);
            Vec::new()
        }
    }
}

/// Export a packet sequence to a file.
pub fn export_to_file(path: &Path, packets: &[Packet]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, export_packets(packets))?;
    log::info!("Exported {} packets to {:?}", packets.len(), path);
    Ok(())
}

/// Import a packet sequence from a file.
///
/// I/O errors propagate; an unreadable payload inside a readable file
/// degrades to an empty sequence like `import_packets`.
pub fn import_from_file(path: &Path) -> io::Result<Vec<Packet>> {
    let data = fs::read_to_string(path)?;
    let packets = import_packets(&data);
    log::info!("Imported {} packets from {:?}", packets.len(), path);
    Ok(packets)
}
