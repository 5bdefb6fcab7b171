//! Resolution error types.

use crate::dataset::DatasetError;

/// Errors that end a station resolution request.
///
/// Exactly one of these is returned in place of a station; the display
/// text is what callers see in the error payload.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No identifier was supplied
    #[error("No ICAO provided")]
    ParamMissing,

    /// The airport or runway table could not be opened
    #[error("Database files missing on server")]
    DatasetUnavailable(#[from] DatasetError),

    /// No airport carries this identifier
    #[error("Station not found")]
    NotFound,
}

/// A data row whose numeric fields could not be read.
///
/// Rows like this are skipped, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed row: {column} = {value:?} is not numeric")]
pub struct MalformedRow {
    pub column: &'static str,
    pub value: String,
}
