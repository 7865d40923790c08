// src/dataset/mod.rs
//! In-memory survey dataset.
//!
//! Rows are kept as nullable string cells addressed by column name. Every
//! analyzer borrows the dataset read-only.

pub mod csv_reader;
pub mod fields;

pub use csv_reader::parse_csv;

/// One survey response: a row of nullable cells aligned with the columns.
pub type Record = Vec<Option<String>>;

/// An ordered, immutable set of records with named columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Builds a dataset, padding short records with nulls and dropping
    /// cells beyond the last column.
    #[must_use]
    pub fn new(columns: Vec<String>, mut records: Vec<Record>) -> Self {
        let width = columns.len();
        for record in &mut records {
            record.resize(width, None);
        }
        Self { columns, records }
    }

    /// Convenience constructor from borrowed cells.
    #[must_use]
    pub fn from_rows(columns: &[&str], rows: &[&[Option<&str>]]) -> Self {
        Self::new(
            columns.iter().map(|c| (*c).to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.map(str::to_string)).collect())
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns a view over a column, or `None` if the dataset lacks it.
    /// Duplicate headers resolve to the first occurrence.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Column<'_>> {
        self.position(name).map(|index| Column {
            records: &self.records,
            index,
        })
    }

    /// Yields `(a, b)` for every record where both columns are non-null.
    /// `None` if either column is missing.
    #[must_use]
    pub fn pairs<'a>(
        &'a self,
        a: &str,
        b: &str,
    ) -> Option<impl Iterator<Item = (&'a str, &'a str)> + 'a> {
        let left = self.position(a)?;
        let right = self.position(b)?;
        Some(self.records.iter().filter_map(move |record| {
            Some((record[left].as_deref()?, record[right].as_deref()?))
        }))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Borrowed view of one column.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    records: &'a [Record],
    index: usize,
}

impl<'a> Column<'a> {
    /// All cells in record order, nulls included.
    pub fn values(self) -> impl Iterator<Item = Option<&'a str>> + 'a {
        let index = self.index;
        self.records.iter().map(move |r| r[index].as_deref())
    }

    /// Non-null cells in record order.
    pub fn non_null(self) -> impl Iterator<Item = &'a str> + 'a {
        self.values().flatten()
    }
}
