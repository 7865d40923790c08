// src/exit.rs
//! Standardized process exit codes for `survey-analytics`.
//!
//! Provides a stable contract for the scheduler that invokes the job.

use crate::error::AnalyticsError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum JobExit {
    /// Report computed and persisted.
    Success = 0,
    /// Generic error (persistence, serialization, unexpected I/O).
    Error = 1,
    /// Input could not be acquired or decoded (missing object, bad CSV, bad timestamp).
    InvalidInput = 2,
    /// Job parameters could not be resolved.
    ConfigError = 3,
}

impl JobExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run by looking for a library error in the chain.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.chain().find_map(|e| e.downcast_ref::<AnalyticsError>()) {
            Some(AnalyticsError::Config { .. }) => Self::ConfigError,
            Some(e) if e.is_input_error() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for JobExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
