//! Cached, file-backed reference tables.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tokio::sync::RwLock;
use tracing::info;

use super::error::DatasetError;
use super::table::Table;

/// A parsed table together with the file mtime it was parsed at.
struct Snapshot {
    modified: Option<SystemTime>,
    table: Arc<Table>,
}

/// A reference table backed by a file on disk.
///
/// The file is parsed on first access and the result shared as an
/// immutable `Arc<Table>`. Each access stats the file and re-parses only if
/// its modification time changed; readers that already hold a snapshot keep
/// using it.
pub struct TableSource {
    path: PathBuf,
    key_column: &'static str,
    cached: RwLock<Option<Snapshot>>,
}

impl TableSource {
    /// Create a source for the file at `path`, grouped by `key_column`.
    pub fn new(path: impl Into<PathBuf>, key_column: &'static str) -> Self {
        Self {
            path: path.into(),
            key_column,
            cached: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current table, loading or reloading it if the file changed.
    pub async fn table(&self) -> Result<Arc<Table>, DatasetError> {
        let metadata =
            tokio::fs::metadata(&self.path)
                .await
                .map_err(|source| DatasetError::Unavailable {
                    path: self.path.clone(),
                    source,
                })?;
        let modified = metadata.modified().ok();

        {
            let guard = self.cached.read().await;
            if let Some(snapshot) = guard.as_ref()
                && snapshot.modified == modified
            {
                return Ok(snapshot.table.clone());
            }
        }

        let mut guard = self.cached.write().await;

        // Another request may have reloaded while we waited for the lock
        if let Some(snapshot) = guard.as_ref()
            && snapshot.modified == modified
        {
            return Ok(snapshot.table.clone());
        }

        let path = self.path.clone();
        let key_column = self.key_column;
        let table = tokio::task::spawn_blocking(move || Table::load(&path, key_column))
            .await
            .map_err(|e| DatasetError::Load {
                path: self.path.clone(),
                message: e.to_string(),
            })??;

        info!(
            path = %self.path.display(),
            rows = table.len(),
            skipped = table.skipped(),
            "Loaded dataset"
        );

        let table = Arc::new(table);
        *guard = Some(Snapshot {
            modified,
            table: table.clone(),
        });

        Ok(table)
    }
}
