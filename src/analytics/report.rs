// src/analytics/report.rs
//! The assembled analytics snapshot and its JSON form.

use super::correlation::CorrelationReport;
use super::distribution::DistributionReport;
use super::occupation::OccupationReport;
use super::trends::TrendReport;
use crate::error::Result;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Outputs of the four analyzers, before insights are derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analyses {
    pub distribution: DistributionReport,
    pub trends: TrendReport,
    pub occupations: OccupationReport,
    pub correlations: CorrelationReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    #[serde(serialize_with = "serialize_micros")]
    pub generated_at: DateTime<Utc>,
    pub total_surveys: usize,
    pub preference_distribution: DistributionReport,
    pub trends: TrendReport,
    pub occupation_distribution: OccupationReport,
    pub correlations: CorrelationReport,
    pub insights: Vec<String>,
}

impl AnalyticsReport {
    /// Copies the analyzer outputs into a new report.
    ///
    /// `generated_at` is truncated to microseconds, the precision of its JSON form.
    #[must_use]
    pub fn assemble(
        generated_at: DateTime<Utc>,
        total_surveys: usize,
        analyses: &Analyses,
        insights: &[String],
    ) -> Self {
        Self {
            generated_at: generated_at.trunc_subsecs(6),
            total_surveys,
            preference_distribution: analyses.distribution.clone(),
            trends: analyses.trends.clone(),
            occupation_distribution: analyses.occupations.clone(),
            correlations: analyses.correlations.clone(),
            insights: insights.to_vec(),
        }
    }

    /// Pretty JSON with two-space indentation. Non-ASCII is written as-is.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    /// Returns error if the text is not a valid report.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

fn serialize_micros<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Micros, true))
}
