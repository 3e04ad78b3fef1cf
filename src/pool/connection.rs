use async_trait::async_trait;

use crate::error::DataAccessError;
use crate::results::RowSet;
use crate::types::SqlValue;

#[cfg(feature = "postgres")]
use crate::postgres;
#[cfg(feature = "sqlite")]
use crate::sqlite;

/// One connection leased from a [`super::ConnectionPool`].
///
/// Dropping the value relinquishes the lease; the underlying connection
/// goes back to its pool rather than closing.
#[derive(Debug)]
pub enum PooledConnection {
    /// SQLite connection
    #[cfg(feature = "sqlite")]
    Sqlite(deadpool_sqlite::Object),
    /// PostgreSQL client connection
    #[cfg(feature = "postgres")]
    Postgres(deadpool_postgres::Object),
}

/// Statement execution over one connection, dispatching to the backend
/// modules. Statements run in the connection's current transaction
/// context: autocommit on a fresh pooled connection, or whatever
/// transaction a caller has opened on it.
#[async_trait]
pub trait StatementExecutor {
    /// Run a multi-statement SQL script (DDL, seed data). No parameters.
    async fn execute_batch(&mut self, sql: &str) -> Result<(), DataAccessError>;

    /// Run a single read statement and collect its rows in cursor order.
    async fn execute_select(
        &mut self,
        sql: &str,
        args: &[SqlValue],
    ) -> Result<RowSet, DataAccessError>;

    /// Run a single mutation (INSERT/UPDATE/DELETE) and report the
    /// number of rows affected.
    async fn execute_dml(&mut self, sql: &str, args: &[SqlValue])
    -> Result<usize, DataAccessError>;
}

#[async_trait]
impl StatementExecutor for PooledConnection {
    async fn execute_batch(&mut self, sql: &str) -> Result<(), DataAccessError> {
        match self {
            #[cfg(feature = "sqlite")]
            PooledConnection::Sqlite(conn) => sqlite::execute_batch(conn, sql).await,
            #[cfg(feature = "postgres")]
            PooledConnection::Postgres(client) => postgres::execute_batch(client, sql).await,
        }
    }

    async fn execute_select(
        &mut self,
        sql: &str,
        args: &[SqlValue],
    ) -> Result<RowSet, DataAccessError> {
        match self {
            #[cfg(feature = "sqlite")]
            PooledConnection::Sqlite(conn) => sqlite::execute_select(conn, sql, args).await,
            #[cfg(feature = "postgres")]
            PooledConnection::Postgres(client) => {
                postgres::execute_select(client, sql, args).await
            }
        }
    }

    async fn execute_dml(
        &mut self,
        sql: &str,
        args: &[SqlValue],
    ) -> Result<usize, DataAccessError> {
        match self {
            #[cfg(feature = "sqlite")]
            PooledConnection::Sqlite(conn) => sqlite::execute_dml(conn, sql, args).await,
            #[cfg(feature = "postgres")]
            PooledConnection::Postgres(client) => postgres::execute_dml(client, sql, args).await,
        }
    }
}
