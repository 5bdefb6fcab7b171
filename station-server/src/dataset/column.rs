//! Header-name → position lookup for delimited tables.

use std::collections::HashMap;

use csv::StringRecord;

/// Position of a named column in a table.
///
/// Reference tables are allowed to lack optional columns, so every lookup
/// yields either the column's position or an explicit `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Present(usize),
    Absent,
}

impl Column {
    pub fn is_present(self) -> bool {
        matches!(self, Column::Present(_))
    }

    /// Raw text of this column in `record`.
    ///
    /// `None` if the column is absent from the table or the record is too
    /// short to contain it.
    pub fn text(self, record: &StringRecord) -> Option<&str> {
        match self {
            Column::Present(pos) => record.get(pos),
            Column::Absent => None,
        }
    }

    /// Text of this column, treating blank fields as missing.
    pub fn value(self, record: &StringRecord) -> Option<&str> {
        self.text(record).filter(|s| !s.trim().is_empty())
    }

    /// Numeric value of this column, if present and numeric.
    pub fn number(self, record: &StringRecord) -> Option<f64> {
        self.text(record).and_then(parse_number)
    }
}

/// Parse a dataset field as a finite number.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are rejected so
/// that only values a reference table would actually carry get through.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Mapping from header name to column position.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Build the index from a header row.
    ///
    /// Names are trimmed and a leading byte-order mark is dropped. When a
    /// name repeats, the first position wins.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = HashMap::with_capacity(headers.len());

        for (pos, name) in headers.iter().enumerate() {
            let name = name.trim_start_matches('\u{feff}').trim();
            positions.entry(name.to_string()).or_insert(pos);
        }

        Self { positions }
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Column {
        self.positions
            .get(name)
            .map_or(Column::Absent, |&pos| Column::Present(pos))
    }

    /// Number of distinct column names.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
