// src/analytics/distribution.rs
//! Per-field value counts over the categorical survey answers.

use super::counts::{value_counts, ValueCounts};
use crate::dataset::fields::CATEGORY_FIELDS;
use crate::dataset::Dataset;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name → value counts. Fields appear in [`CATEGORY_FIELDS`] order;
/// fields missing from the dataset are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistributionReport(IndexMap<String, ValueCounts>);

impl DistributionReport {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&ValueCounts> {
        self.0.get(field)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Counts the non-null values of every categorical field the dataset carries.
#[must_use]
pub fn analyze_distribution(dataset: &Dataset) -> DistributionReport {
    let mut report = IndexMap::new();
    for &field in CATEGORY_FIELDS {
        if let Some(column) = dataset.column(field) {
            report.insert(field.to_string(), value_counts(column.non_null()));
        }
    }
    DistributionReport(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds(columns: &[&str], rows: &[&[Option<&str>]]) -> Dataset {
        Dataset::from_rows(columns, rows)
    }

    #[test]
    fn counts_living_style() {
        let d = ds(
            &["living_style"],
            &[&[Some("studio")], &[Some("studio")], &[Some("shared")]],
        );
        let report = analyze_distribution(&d);
        let living = report.get("living_style").unwrap();
        assert_eq!(living.get("studio"), Some(&2));
        assert_eq!(living.get("shared"), Some(&1));
        assert_eq!(living.len(), 2);
    }

    #[test]
    fn sums_match_non_null_counts() {
        let d = ds(
            &["pace", "budget"],
            &[
                &[Some("slow"), None],
                &[None, Some("low")],
                &[Some("fast"), Some("low")],
                &[Some("slow"), None],
            ],
        );
        let report = analyze_distribution(&d);
        assert_eq!(report.get("pace").unwrap().values().sum::<usize>(), 3);
        assert_eq!(report.get("budget").unwrap().values().sum::<usize>(), 2);
    }

    #[test]
    fn unknown_and_missing_fields_are_omitted() {
        let d = ds(&["id", "work_style"], &[&[Some("1"), Some("remote")]]);
        let report = analyze_distribution(&d);
        let fields: Vec<_> = report.fields().collect();
        assert_eq!(fields, vec!["work_style"]);
    }

    #[test]
    fn fields_follow_category_order() {
        let d = ds(&["purchase_type", "living_style"], &[&[Some("sale"), Some("studio")]]);
        let fields: Vec<_> = analyze_distribution(&d).fields().map(str::to_string).collect();
        assert_eq!(fields, vec!["living_style", "purchase_type"]);
    }

    #[test]
    fn no_recognized_fields_is_empty() {
        let d = ds(&["id"], &[&[Some("1")]]);
        assert!(analyze_distribution(&d).is_empty());
    }
}
