//! Recorder configuration files
//!
//! The configuration is a small JSON document, e.g.
//! `{"clock": "monotonic", "eventCapacity": 16}`.

use super::error::AppResult;
use crate::recorder::RecorderConfig;
use std::fs;
use std::path::Path;

/// Read a config file. A missing file yields the default configuration.
pub fn load_config(path: &Path) -> AppResult<RecorderConfig> {
    if !path.exists() {
        tracing::debug!("No config at {:?}, using defaults", path);
        return Ok(RecorderConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: RecorderConfig = serde_json::from_str(&content)?;

    tracing::debug!("Loaded config from {:?}: {:?}", path, config);
    Ok(config)
}

/// Write a config file, creating parent directories as needed
pub fn save_config(config: &RecorderConfig, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
