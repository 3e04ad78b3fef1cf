use thiserror::Error;

#[cfg(feature = "sqlite")]
use deadpool_sqlite::rusqlite;

/// The only error type that crosses the template boundary.
///
/// Driver and pool failures are wrapped transparently so the original
/// cause stays reachable; everything the engine detects itself carries
/// a plain message.
#[derive(Debug, Error)]
pub enum DataAccessError {
    #[cfg(feature = "postgres")]
    #[error(transparent)]
    Postgres(#[from] tokio_postgres::Error),

    #[cfg(feature = "sqlite")]
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[cfg(feature = "postgres")]
    #[error(transparent)]
    PostgresPool(#[from] deadpool::managed::PoolError<tokio_postgres::Error>),

    #[cfg(feature = "sqlite")]
    #[error(transparent)]
    SqlitePool(#[from] deadpool::managed::PoolError<rusqlite::Error>),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("parameter binding error: {0}")]
    Parameter(String),

    #[error("statement execution error: {0}")]
    Execution(String),

    #[error("row mapping error: {0}")]
    Mapping(String),

    /// `query_for_object` found no matching row.
    #[error("query returned no rows")]
    NoResult,

    /// A caller asserted an exact row count and observed a different one.
    #[error("expected {expected} row(s), got {actual}")]
    UnexpectedRowCount { expected: usize, actual: usize },
}

#[cfg(feature = "sqlite")]
impl From<deadpool_sqlite::InteractError> for DataAccessError {
    fn from(err: deadpool_sqlite::InteractError) -> Self {
        DataAccessError::Connection(format!("SQLite interact error: {err}"))
    }
}
