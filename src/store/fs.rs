// src/store/fs.rs
//! Local filesystem backend: `bucket/key` lives at `root/bucket/key`.

use super::ObjectStore;
use crate::error::{AnalyticsError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps an object to its file, refusing keys that escape the bucket.
    fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf> {
        let rel = Path::new(bucket).join(key);
        if rel.components().any(|c| !matches!(c, Component::Normal(_))) {
            return Err(AnalyticsError::Io {
                source: std::io::Error::new(ErrorKind::InvalidInput, "object key escapes bucket"),
                path: rel,
            });
        }
        Ok(self.root.join(rel))
    }
}

impl ObjectStore for FsStore {
    fn backend_tag(&self) -> &'static str {
        "fs"
    }

    fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let path = self.object_path(bucket, key)?;
        fs::read(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                AnalyticsError::ObjectNotFound {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                }
            } else {
                AnalyticsError::Io { source, path }
            }
        })
    }

    fn put(&self, bucket: &str, key: &str, body: &[u8], content_type: &str) -> Result<()> {
        let path = self.object_path(bucket, key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| AnalyticsError::Io {
                source,
                path: parent.to_path_buf(),
            })?;
        }
        fs::write(&path, body).map_err(|source| AnalyticsError::Io {
            source,
            path: path.clone(),
        })?;
        tracing::debug!(path = %path.display(), content_type, bytes = body.len(), "wrote object");
        Ok(())
    }
}
