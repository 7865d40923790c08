// src/dataset/csv_reader.rs
//! Decodes a CSV export into a [`Dataset`].

use super::{Dataset, Record};
use crate::error::{AnalyticsError, Result};
use std::collections::HashSet;

const BOM: char = '\u{feff}';

/// Parses CSV bytes. The first row is the header.
///
/// Cells that are empty or match one of `null_tokens` become nulls. Short rows
/// are padded with nulls; rows wider than the header are rejected. A header-only
/// file yields an empty dataset; input without a header row is rejected.
///
/// # Errors
/// Returns error on invalid CSV, invalid UTF-8, a missing header row, or a row
/// wider than the header.
pub fn parse_csv(bytes: &[u8], null_tokens: &[String]) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let name = if i == 0 { h.trim_start_matches(BOM) } else { h };
            name.to_string()
        })
        .collect();
    if columns.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let nulls: HashSet<&str> = null_tokens.iter().map(String::as_str).collect();
    let mut records = Vec::new();

    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() > columns.len() {
            return Err(AnalyticsError::MalformedRow {
                row: idx + 1,
                expected: columns.len(),
                found: row.len(),
            });
        }
        let record: Record = row
            .iter()
            .map(|cell| {
                if cell.is_empty() || nulls.contains(cell) {
                    None
                } else {
                    Some(cell.to_string())
                }
            })
            .collect();
        records.push(record);
    }

    tracing::debug!(
        columns = columns.len(),
        records = records.len(),
        "decoded CSV"
    );
    Ok(Dataset::new(columns, records))
}
