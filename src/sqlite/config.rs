use deadpool_sqlite::{Config as DeadpoolSqliteConfig, Runtime};

use crate::error::DataAccessError;
use crate::pool::ConnectionPool;

/// Options for configuring a `SQLite` pool.
#[derive(Debug, Clone)]
pub struct SqliteOptions {
    pub db_path: String,
    pub max_size: Option<usize>,
}

impl SqliteOptions {
    #[must_use]
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            max_size: None,
        }
    }
}

/// Fluent builder for `SQLite` options.
#[derive(Debug, Clone)]
pub struct SqliteOptionsBuilder {
    opts: SqliteOptions,
}

impl SqliteOptionsBuilder {
    #[must_use]
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            opts: SqliteOptions::new(db_path),
        }
    }

    /// Cap the number of pooled connections.
    #[must_use]
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.opts.max_size = Some(max_size);
        self
    }

    #[must_use]
    pub fn finish(self) -> SqliteOptions {
        self.opts
    }

    /// Build a [`ConnectionPool`] for `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `DataAccessError` if pool creation or the initial smoke
    /// test fails.
    pub async fn build(self) -> Result<ConnectionPool, DataAccessError> {
        ConnectionPool::new_sqlite(self.finish()).await
    }
}

impl ConnectionPool {
    #[must_use]
    pub fn sqlite_builder(db_path: impl Into<String>) -> SqliteOptionsBuilder {
        SqliteOptionsBuilder::new(db_path)
    }

    /// Asynchronous initializer for a `SQLite` [`ConnectionPool`].
    ///
    /// Leases one connection up front to switch the database to WAL, so
    /// a bad path fails here rather than on first use.
    ///
    /// # Errors
    ///
    /// Returns `DataAccessError::Connection` if pool creation fails, or
    /// the driver/pool error if the smoke test fails.
    pub async fn new_sqlite(opts: SqliteOptions) -> Result<Self, DataAccessError> {
        let mut cfg = DeadpoolSqliteConfig::new(opts.db_path);
        if let Some(max_size) = opts.max_size {
            cfg.pool = Some(deadpool::managed::PoolConfig::new(max_size));
        }

        let pool = cfg.create_pool(Runtime::Tokio1).map_err(|e| {
            DataAccessError::Connection(format!("failed to create SQLite pool: {e}"))
        })?;

        {
            let conn = pool.get().await.map_err(DataAccessError::SqlitePool)?;
            conn.interact(|conn| {
                conn.execute_batch("PRAGMA journal_mode = WAL;")
                    .map_err(DataAccessError::Sqlite)
            })
            .await??;
        }

        Ok(ConnectionPool::Sqlite(pool))
    }
}
