// src/config/io.rs
//! Reading and rendering `survey-analytics.toml`.

use super::types::Config;
use crate::error::{AnalyticsError, Result};
use std::fs;
use std::path::Path;

/// Parses TOML text into a config. Missing tables and keys take their defaults.
///
/// # Errors
/// Returns `AnalyticsError::Config` if the text is not valid for the schema.
pub fn parse_toml(content: &str, origin: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|e| AnalyticsError::Config {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })
}

/// Reads and parses a config file.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| AnalyticsError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_toml(&content, path)
}

/// Renders a config back to TOML.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_toml_string(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).map_err(|e| AnalyticsError::Config {
        path: Path::new("<memory>").to_path_buf(),
        message: e.to_string(),
    })
}
