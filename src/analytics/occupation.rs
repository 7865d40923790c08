// src/analytics/occupation.rs
//! Most frequent free-text occupations.

use super::counts::value_counts;
use crate::dataset::fields::OCCUPATION;
use crate::dataset::Dataset;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupationCount {
    pub occupation: String,
    pub count: usize,
}

/// Empty (`{}`) when the column is missing or holds no values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupationReport {
    /// Count descending, ties in first-seen order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_occupations: Option<Vec<OccupationCount>>,
    /// Records with an occupation, before truncation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_with_occupation: Option<usize>,
}

impl OccupationReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top_occupations.is_none()
    }
}

/// Counts occupations by exact string and keeps the `limit` most frequent.
#[must_use]
pub fn analyze_occupations(dataset: &Dataset, limit: usize) -> OccupationReport {
    let Some(column) = dataset.column(OCCUPATION) else {
        return OccupationReport::default();
    };

    let counts = value_counts(column.non_null());
    if counts.is_empty() {
        return OccupationReport::default();
    }

    let total = counts.values().sum::<usize>();
    let top = counts
        .into_iter()
        .take(limit)
        .map(|(occupation, count)| OccupationCount { occupation, count })
        .collect();

    OccupationReport {
        top_occupations: Some(top),
        total_with_occupation: Some(total),
    }
}
