// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{AnalysisOptions, Config, JobConfig};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// File picked up from the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "survey-analytics.toml";

/// Per-run overrides, applied on top of the file config.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input_key: Option<String>,
    pub input_bucket: Option<String>,
    pub output_bucket: Option<String>,
    pub output_prefix: Option<String>,
    pub store_root: Option<PathBuf>,
    pub top_occupations: Option<usize>,
    pub skip_malformed_timestamps: bool,
    pub parallel: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the file layer: an explicit path must exist, the default
    /// `survey-analytics.toml` in `dir` is optional.
    ///
    /// # Errors
    /// Returns error if a config file exists but cannot be read or parsed.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return io::load_file(path);
        }
        let local = dir.join(CONFIG_FILE);
        if local.is_file() {
            tracing::debug!(path = %local.display(), "loading local config");
            return io::load_file(&local);
        }
        Ok(Self::new())
    }

    /// Applies CLI overrides. Flags only ever switch a boolean on.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(v) = overrides.input_key {
            self.job.input_key = v;
        }
        if let Some(v) = overrides.input_bucket {
            self.job.input_bucket = Some(v);
        }
        if let Some(v) = overrides.output_bucket {
            self.job.output_bucket = v;
        }
        if let Some(v) = overrides.output_prefix {
            self.job.output_prefix = v;
        }
        if let Some(v) = overrides.store_root {
            self.job.store_root = v;
        }
        if let Some(v) = overrides.top_occupations {
            self.analysis.top_occupations = v;
        }
        self.analysis.skip_malformed_timestamps |= overrides.skip_malformed_timestamps;
        self.analysis.parallel |= overrides.parallel;
    }

    /// Renders the resolved config as TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        io::to_toml_string(self)
    }
}
