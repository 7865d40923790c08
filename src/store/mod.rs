// src/store/mod.rs
//! Object storage seam for the job's input and output.
//!
//! Objects are addressed by bucket and key. The job receives a store by
//! reference, so tests can substitute [`MemoryStore`].

pub mod fs;
pub mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use crate::error::Result;

pub const JSON_CONTENT_TYPE: &str = "application/json";

pub trait ObjectStore {
    /// Short name used in logs.
    fn backend_tag(&self) -> &'static str;

    /// Reads a whole object.
    ///
    /// # Errors
    /// Returns `AnalyticsError::ObjectNotFound` if the object does not exist.
    fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;

    /// Writes a whole object, replacing any previous version.
    ///
    /// # Errors
    /// Returns error if the write is rejected.
    fn put(&self, bucket: &str, key: &str, body: &[u8], content_type: &str) -> Result<()>;
}

/// `s3://bucket/key` form used in log lines.
#[must_use]
pub fn object_url(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}
