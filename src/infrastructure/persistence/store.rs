//! Lazily opened, process-wide SQLite handle.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use tokio::sync::OnceCell;

use crate::error::AppError;

/// Shared handle to the yield database.
///
/// The pool is opened on first use and memoized; concurrent first callers
/// share a single open attempt. A missing database file leaves the cell empty
/// and yields [`AppError::StoreUnavailable`], so a file created later is
/// picked up by the next request. Once open, the pool is never reopened.
pub struct YieldStore {
    path: PathBuf,
    max_connections: u32,
    pool: OnceCell<SqlitePool>,
}

impl YieldStore {
    /// Creates a store that opens `path` on first use. Does no I/O.
    pub fn lazy(path: impl Into<PathBuf>, max_connections: u32) -> Self {
        Self {
            path: path.into(),
            max_connections,
            pool: OnceCell::new(),
        }
    }

    /// Wraps an already open pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self {
            path: PathBuf::new(),
            max_connections: 0,
            pool: OnceCell::new_with(Some(pool)),
        }
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the open pool, opening it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the file does not exist or
    /// cannot be opened.
    pub async fn pool(&self) -> Result<&SqlitePool, AppError> {
        self.pool.get_or_try_init(|| self.open()).await
    }

    /// Whether the pool has been opened.
    pub fn is_open(&self) -> bool {
        self.pool.initialized()
    }

    async fn open(&self) -> Result<SqlitePool, AppError> {
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            tracing::warn!(path = %self.path.display(), "Database file not found");
            return Err(AppError::StoreUnavailable);
        }

        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(false)
            .read_only(false);

        match SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(options)
            .await
        {
            Ok(pool) => {
                tracing::info!(path = %self.path.display(), "Opened database");
                Ok(pool)
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), "Error opening database: {e}");
                Err(AppError::StoreUnavailable)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let path = std::env::temp_dir().join("yield-reports-missing-store.db");
        let _ = std::fs::remove_file(&path);

        let store = YieldStore::lazy(&path, 1);

        assert!(matches!(store.pool().await, Err(AppError::StoreUnavailable)));
        assert!(!store.is_open());
        // A second attempt retries rather than caching the failure.
        assert!(matches!(store.pool().await, Err(AppError::StoreUnavailable)));
    }

    #[tokio::test]
    async fn test_existing_file_opens_once() {
        let path = std::env::temp_dir().join(format!(
            "yield-reports-store-{}.db",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        std::fs::File::create(&path).unwrap();

        let store = YieldStore::lazy(&path, 1);
        let first = store.pool().await.unwrap() as *const SqlitePool;
        let second = store.pool().await.unwrap() as *const SqlitePool;

        assert!(store.is_open());
        assert_eq!(first, second);

        store.pool().await.unwrap().close().await;
        let _ = std::fs::remove_file(&path);
    }
}
