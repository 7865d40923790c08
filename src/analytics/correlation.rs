// src/analytics/correlation.rs
//! Contingency tables over fixed pairs of categorical fields.

use crate::dataset::fields::CORRELATION_PAIRS;
use crate::dataset::Dataset;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Row value → column value → joint count. Dense over observed values.
pub type ContingencyTable = BTreeMap<String, BTreeMap<String, usize>>;

/// Pair key (`living_work`, ...) → table. Pairs with a missing column are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationReport(IndexMap<String, ContingencyTable>);

impl CorrelationReport {
    #[must_use]
    pub fn table(&self, pair: &str) -> Option<&ContingencyTable> {
        self.0.get(pair)
    }

    /// Joint count for one cell. Unobserved combinations count as zero.
    #[must_use]
    pub fn count(&self, pair: &str, row: &str, col: &str) -> usize {
        self.table(pair)
            .and_then(|t| t.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }

    pub fn pairs(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Cross-tabulates one pair of columns. `None` if either is missing.
#[must_use]
pub fn crosstab(dataset: &Dataset, row_field: &str, col_field: &str) -> Option<ContingencyTable> {
    let mut cols = BTreeSet::new();
    let mut table = ContingencyTable::new();

    for (row, col) in dataset.pairs(row_field, col_field)? {
        cols.insert(col);
        *table
            .entry(row.to_string())
            .or_default()
            .entry(col.to_string())
            .or_insert(0) += 1;
    }

    for cells in table.values_mut() {
        for &col in &cols {
            cells.entry(col.to_string()).or_insert(0);
        }
    }
    Some(table)
}

#[must_use]
pub fn analyze_correlations(dataset: &Dataset) -> CorrelationReport {
    let mut report = IndexMap::new();
    for &(key, row_field, col_field) in CORRELATION_PAIRS {
        if let Some(table) = crosstab(dataset, row_field, col_field) {
            report.insert(key.to_string(), table);
        }
    }
    CorrelationReport(report)
}
