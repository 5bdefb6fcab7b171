//! Typed field readers shared by the resolvers.

use csv::StringRecord;

use crate::dataset::{Column, parse_number};

use super::MalformedRow;

/// A numeric field that must be present.
pub(super) fn required_number(
    column: Column,
    name: &'static str,
    record: &StringRecord,
) -> Result<f64, MalformedRow> {
    column.number(record).ok_or_else(|| MalformedRow {
        column: name,
        value: column.text(record).unwrap_or_default().to_string(),
    })
}

/// A whole-number field that may be blank but must be numeric when given.
///
/// Fractional values are truncated toward zero.
pub(super) fn optional_integer(
    column: Column,
    name: &'static str,
    record: &StringRecord,
) -> Result<Option<i64>, MalformedRow> {
    match column.value(record) {
        None => Ok(None),
        Some(raw) => parse_number(raw)
            .map(|v| Some(v.trunc() as i64))
            .ok_or_else(|| MalformedRow {
                column: name,
                value: raw.to_string(),
            }),
    }
}
