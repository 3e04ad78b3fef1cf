pub mod connection;

pub use connection::{PooledConnection, StatementExecutor};

use crate::error::DataAccessError;

/// Connection pool for one of the supported database engines.
///
/// Built through the backend config modules
/// (`ConnectionPool::sqlite_builder`, `ConnectionPool::new_postgres`).
#[derive(Debug, Clone)]
pub enum ConnectionPool {
    /// SQLite connection pool
    #[cfg(feature = "sqlite")]
    Sqlite(deadpool_sqlite::Pool),
    /// PostgreSQL connection pool
    #[cfg(feature = "postgres")]
    Postgres(deadpool_postgres::Pool),
}

impl ConnectionPool {
    /// Lease a connection from the pool. The lease is returned to the
    /// pool when the `PooledConnection` drops.
    ///
    /// # Errors
    ///
    /// Returns the pool's error when no connection can be produced.
    pub async fn get_connection(&self) -> Result<PooledConnection, DataAccessError> {
        match self {
            #[cfg(feature = "sqlite")]
            ConnectionPool::Sqlite(pool) => {
                let conn = pool.get().await.map_err(DataAccessError::SqlitePool)?;
                Ok(PooledConnection::Sqlite(conn))
            }
            #[cfg(feature = "postgres")]
            ConnectionPool::Postgres(pool) => {
                let conn = pool.get().await.map_err(DataAccessError::PostgresPool)?;
                Ok(PooledConnection::Postgres(conn))
            }
        }
    }

    /// Current pool counters. Tests use this to account for leases:
    /// after any template call completes, `available` equals `size`
    /// again.
    #[must_use]
    pub fn status(&self) -> deadpool::Status {
        match self {
            #[cfg(feature = "sqlite")]
            ConnectionPool::Sqlite(pool) => pool.status(),
            #[cfg(feature = "postgres")]
            ConnectionPool::Postgres(pool) => pool.status(),
        }
    }
}
