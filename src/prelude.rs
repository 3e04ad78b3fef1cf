//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types to make it
//! easier to get started with the library.

pub use crate::error::DataAccessError;
pub use crate::mapper::RowMapper;
pub use crate::pool::{ConnectionPool, PooledConnection, StatementExecutor};
pub use crate::provider::{ConnectionLease, ConnectionProvider, SharedConnection};
pub use crate::results::{RowSet, SqlRow};
pub use crate::statement::StatementRequest;
pub use crate::template::SqlTemplate;
pub use crate::types::SqlValue;

#[cfg(feature = "sqlite")]
pub use crate::sqlite::{SqliteOptions, SqliteOptionsBuilder};

#[cfg(feature = "postgres")]
pub use crate::postgres::PgConfig;
