use std::fs;
use std::path::{Path, PathBuf};

use super::types::EntropyBaseline;
use super::validate::{validate_baseline, BaselineError};

/// Get default baseline path
pub fn get_default_baseline_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(crate::constants::APP_NAME)
        .join("baseline_v1.json")
}

/// Save baseline to disk
pub fn save_baseline(baseline: &EntropyBaseline, path: &Path) -> Result<(), BaselineError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_vec_pretty(baseline)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load baseline from disk with layout validation
pub fn load_baseline(path: &Path) -> Result<EntropyBaseline, BaselineError> {
    if !path.exists() {
        return Err(BaselineError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Baseline file not found",
        )));
    }

    let data = fs::read(path)?;
    let baseline: EntropyBaseline = serde_json::from_slice(&data)?;

    validate_baseline(&baseline)?;

    Ok(baseline)
}
