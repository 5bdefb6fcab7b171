//! In-memory reference tables grouped by join key.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::warn;

use super::column::{Column, ColumnIndex};
use super::error::DatasetError;

/// A delimited reference table, loaded once and grouped by a key column.
///
/// Keys are upper-cased so lookups are case-insensitive. Rows sharing a key
/// keep their file order.
#[derive(Debug, Default)]
pub struct Table {
    columns: ColumnIndex,
    rows: HashMap<String, Vec<StringRecord>>,
    row_count: usize,
    skipped: usize,
}

impl Table {
    /// Load a table from a file, grouping rows by `key_column`.
    pub fn load(path: &Path, key_column: &str) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(file, key_column).map_err(|source| DatasetError::Unreadable {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a table from any reader.
    ///
    /// Only a broken header row is an error. Rows that fail to decode, or
    /// that are too short to carry a key, are skipped and counted. If the
    /// key column itself is missing the table loads with no rows.
    pub fn from_reader<R: Read>(reader: R, key_column: &str) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnIndex::from_headers(reader.headers()?);
        let key = columns.column(key_column);

        let mut table = Table {
            columns,
            ..Table::default()
        };

        if key == Column::Absent {
            warn!(key_column, "key column missing from header, table is empty");
            return Ok(table);
        }

        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!(error = %e, "skipping malformed row");
                    table.skipped += 1;
                    continue;
                }
            };

            let Some(ident) = key.text(&record) else {
                table.skipped += 1;
                continue;
            };

            table
                .rows
                .entry(ident.to_ascii_uppercase())
                .or_default()
                .push(record);
            table.row_count += 1;
        }

        Ok(table)
    }

    /// Rows whose key matches `key` case-insensitively, in file order.
    pub fn rows_for(&self, key: &str) -> &[StringRecord] {
        self.rows
            .get(&key.to_ascii_uppercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Look up a column by header name.
    pub fn column(&self, name: &str) -> Column {
        self.columns.column(name)
    }

    pub fn columns(&self) -> &ColumnIndex {
        &self.columns
    }

    /// Number of rows indexed.
    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Number of rows dropped while loading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
