use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the job reads its input and writes its snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    #[serde(default = "default_input_key")]
    pub input_key: String,
    #[serde(default = "default_output_bucket")]
    pub output_bucket: String,
    /// Falls back to `output_bucket` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_bucket: Option<String>,
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
    /// Local directory that holds one subdirectory per bucket.
    #[serde(default = "default_store_root")]
    pub store_root: PathBuf,
}

impl JobConfig {
    #[must_use]
    pub fn input_bucket(&self) -> &str {
        self.input_bucket.as_deref().unwrap_or(&self.output_bucket)
    }
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            input_key: default_input_key(),
            output_bucket: default_output_bucket(),
            input_bucket: None,
            output_prefix: default_output_prefix(),
            store_root: default_store_root(),
        }
    }
}

fn default_input_key() -> String { "glue-input/surveys/surveys_latest.csv".to_string() }
fn default_output_bucket() -> String { "binjib-dabang".to_string() }
fn default_output_prefix() -> String { "glue-output/analytics".to_string() }
fn default_store_root() -> PathBuf { PathBuf::from(".") }

/// Knobs for loading and analyzing the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    #[serde(default = "default_top_occupations")]
    pub top_occupations: usize,
    /// Skip unparseable `created_at` values with a warning instead of failing the job.
    #[serde(default)]
    pub skip_malformed_timestamps: bool,
    /// Run the four analyzers on the rayon pool.
    #[serde(default)]
    pub parallel: bool,
    /// Cell strings read as missing values.
    #[serde(default = "default_null_tokens")]
    pub null_tokens: Vec<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_occupations: default_top_occupations(),
            skip_malformed_timestamps: false,
            parallel: false,
            null_tokens: default_null_tokens(),
        }
    }
}

const fn default_top_occupations() -> usize { 10 }

// Same set pandas treats as NA when reading CSV.
fn default_null_tokens() -> Vec<String> {
    [
        "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
        "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

/// Fully resolved job configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub job: JobConfig,
    #[serde(default)]
    pub analysis: AnalysisOptions,
}
