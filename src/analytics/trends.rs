// src/analytics/trends.rs
//! Daily submission counts keyed by the calendar date of `created_at`.

use crate::dataset::fields::CREATED_AT;
use crate::dataset::Dataset;
use crate::error::{AnalyticsError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Naive layouts tried after RFC 3339.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts, tried last.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Offset layouts not covered by RFC 3339 (space separator, `+09`/`+0900`).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// Empty (`{}`) when the dataset has no `created_at` column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReport {
    /// `YYYY-MM-DD` → submissions that day, in date order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_submissions: Option<BTreeMap<String, usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_surveys: Option<usize>,
}

impl TrendReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.daily_submissions.is_none() && self.total_surveys.is_none()
    }
}

/// Parses a submission timestamp down to its calendar date.
///
/// Offset-bearing values keep the date in their own offset.
#[must_use]
pub fn parse_submission_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
            return Some(dt.date_naive());
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Buckets records by submission date.
///
/// Null timestamps are not counted. An unparseable timestamp fails the run
/// unless `skip_malformed` is set, in which case it is logged and left out.
///
/// # Errors
/// Returns `AnalyticsError::InvalidTimestamp` for the first unparseable value.
pub fn analyze_trends(dataset: &Dataset, skip_malformed: bool) -> Result<TrendReport> {
    let Some(column) = dataset.column(CREATED_AT) else {
        return Ok(TrendReport::default());
    };

    let mut daily = BTreeMap::new();
    for (idx, value) in column.values().enumerate() {
        let Some(value) = value else { continue };
        match parse_submission_date(value) {
            Some(date) => *daily.entry(date.format("%Y-%m-%d").to_string()).or_insert(0) += 1,
            None if skip_malformed => {
                warn!(row = idx + 1, value, "skipping unparseable created_at");
            }
            None => {
                return Err(AnalyticsError::InvalidTimestamp {
                    row: idx + 1,
                    value: value.to_string(),
                })
            }
        }
    }

    Ok(TrendReport {
        daily_submissions: Some(daily),
        total_surveys: Some(dataset.len()),
    })
}
