// src/job.rs
//! Load → analyze → persist pipeline.

use crate::analytics::{self, AnalyticsReport};
use crate::config::Config;
use crate::dataset::{self, Dataset};
use crate::error::Result;
use crate::store::{object_url, ObjectStore, JSON_CONTENT_TYPE};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tracing::info;

pub const LATEST_FILE: &str = "latest.json";

/// Where a run's snapshots were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedKeys {
    pub timestamped: String,
    pub latest: String,
    pub sha256: String,
}

#[derive(Debug, Clone)]
pub struct JobSummary {
    pub report: AnalyticsReport,
    pub json: String,
    /// `None` for dry runs.
    pub persisted: Option<PersistedKeys>,
}

impl JobSummary {
    #[must_use]
    pub fn records(&self) -> usize {
        self.report.total_surveys
    }

    #[must_use]
    pub fn insights(&self) -> usize {
        self.report.insights.len()
    }
}

/// Output keys for a run started at `at`. An empty prefix writes at the bucket root.
#[must_use]
pub fn output_keys(prefix: &str, at: DateTime<Utc>) -> (String, String) {
    let prefix = prefix.trim_matches('/');
    let stamp = at.format("%Y-%m-%d_%H%M%S");
    let key = |name: &str| {
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}/{name}")
        }
    };
    (
        key(&format!("survey_analytics_{stamp}.json")),
        key(LATEST_FILE),
    )
}

/// Lowercase hex SHA-256 of a payload.
#[must_use]
pub fn sha256_hex(body: &[u8]) -> String {
    format!("{:x}", Sha256::digest(body))
}

pub struct SurveyJob<'a, S: ObjectStore + ?Sized> {
    config: &'a Config,
    store: &'a S,
}

impl<'a, S: ObjectStore + ?Sized> SurveyJob<'a, S> {
    #[must_use]
    pub fn new(config: &'a Config, store: &'a S) -> Self {
        Self { config, store }
    }

    /// Fetches and decodes the input object.
    ///
    /// # Errors
    /// Returns error if the object is missing or is not valid CSV.
    pub fn load(&self) -> Result<Dataset> {
        let bucket = self.config.job.input_bucket();
        let key = &self.config.job.input_key;
        let bytes = self.store.get(bucket, key)?;
        let dataset = dataset::parse_csv(&bytes, &self.config.analysis.null_tokens)?;
        info!(
            records = dataset.len(),
            source = %object_url(bucket, key),
            backend = self.store.backend_tag(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Loads and analyzes without writing anything.
    ///
    /// # Errors
    /// Returns error if loading or analysis fails.
    pub fn compute(&self, now: DateTime<Utc>) -> Result<JobSummary> {
        let dataset = self.load()?;
        let report = analytics::analyze(&dataset, &self.config.analysis, now)?;
        let json = report.to_json()?;
        Ok(JobSummary {
            report,
            json,
            persisted: None,
        })
    }

    /// Full run: load, analyze, then write the timestamped and latest snapshots.
    ///
    /// The writes are not transactional; if the second fails the first stays.
    ///
    /// # Errors
    /// Returns error if any stage fails.
    pub fn execute(&self, now: DateTime<Utc>) -> Result<JobSummary> {
        let mut summary = self.compute(now)?;
        summary.persisted = Some(self.persist(&summary.json, now)?);
        Ok(summary)
    }

    fn persist(&self, json: &str, now: DateTime<Utc>) -> Result<PersistedKeys> {
        let bucket = &self.config.job.output_bucket;
        let (timestamped, latest) = output_keys(&self.config.job.output_prefix, now);
        let body = json.as_bytes();
        let sha256 = sha256_hex(body);

        self.store.put(bucket, &timestamped, body, JSON_CONTENT_TYPE)?;
        info!(target_url = %object_url(bucket, &timestamped), %sha256, "saved analytics");
        self.store.put(bucket, &latest, body, JSON_CONTENT_TYPE)?;
        info!(target_url = %object_url(bucket, &latest), %sha256, "updated latest analytics");

        Ok(PersistedKeys {
            timestamped,
            latest,
            sha256,
        })
    }
}
