// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Object not found: s3://{bucket}/{key}")]
    ObjectNotFound { bucket: String, key: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Empty input: no columns to parse")]
    EmptyInput,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed row {row}: expected at most {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid timestamp in row {row}: {value:?}")]
    InvalidTimestamp { row: usize, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl AnalyticsError {
    /// True for failures that happen while acquiring or decoding the input.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::ObjectNotFound { .. }
                | Self::EmptyInput
                | Self::Csv(_)
                | Self::MalformedRow { .. }
                | Self::InvalidTimestamp { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;

// Allow `?` on std::io::Error by converting to AnalyticsError::Io with unknown path.
impl From<std::io::Error> for AnalyticsError {
    fn from(source: std::io::Error) -> Self {
        AnalyticsError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
