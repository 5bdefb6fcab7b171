//! Dataset error types.

use std::path::PathBuf;

/// Errors raised while opening or parsing a reference table.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be opened or stat'ed
    #[error("dataset {path:?} unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row could not be read
    #[error("dataset {path:?} unreadable: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The background load task failed
    #[error("loading dataset {path:?} failed: {message}")]
    Load { path: PathBuf, message: String },
}

impl DatasetError {
    /// Whether the file simply does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            DatasetError::Unavailable { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
