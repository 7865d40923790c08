// src/store/memory.rs
//! In-memory store for tests.

use super::ObjectStore;
use crate::error::{AnalyticsError, Result};
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<BTreeMap<(String, String), StoredObject>>,
    /// Keys whose `put` is rejected, to exercise partial-write failures.
    reject: Mutex<Vec<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an object.
    pub fn insert(&self, bucket: &str, key: &str, body: impl Into<Vec<u8>>) {
        let object = StoredObject {
            body: body.into(),
            content_type: "application/octet-stream".to_string(),
        };
        self.lock().insert((bucket.to_string(), key.to_string()), object);
    }

    /// Makes every later `put` to `key` fail.
    pub fn reject_puts_to(&self, key: &str) {
        self.reject
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(key.to_string());
    }

    #[must_use]
    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.lock().get(&(bucket.to_string(), key.to_string())).cloned()
    }

    /// Keys present in a bucket, sorted.
    #[must_use]
    pub fn keys(&self, bucket: &str) -> Vec<String> {
        self.lock()
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<(String, String), StoredObject>> {
        self.objects
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ObjectStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        self.object(bucket, key)
            .map(|o| o.body)
            .ok_or_else(|| AnalyticsError::ObjectNotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }

    fn put(&self, bucket: &str, key: &str, body: &[u8], content_type: &str) -> Result<()> {
        let rejected = self
            .reject
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .any(|k| k == key);
        if rejected {
            return Err(AnalyticsError::Io {
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "write rejected"),
                path: format!("{bucket}/{key}").into(),
            });
        }
        let object = StoredObject {
            body: body.to_vec(),
            content_type: content_type.to_string(),
        };
        self.lock().insert((bucket.to_string(), key.to_string()), object);
        Ok(())
    }
}
