//! Minimal async SQL execution template over rusqlite and
//! tokio-postgres.
//!
//! [`SqlTemplate`] owns the full lifecycle of one statement execution:
//! it acquires a connection through a [`ConnectionProvider`], prepares
//! a parameterized statement, binds arguments positionally, executes,
//! and (for reads) maps every returned row through a caller-supplied
//! [`RowMapper`] — releasing every acquired resource on success and
//! failure alike. Data-access code built on top never touches a
//! connection, statement, or cursor, and the only error type it sees
//! is [`DataAccessError`].
//!
//! ```no_run
//! use sql_template::prelude::*;
//!
//! fn account(row: &SqlRow) -> Result<String, DataAccessError> {
//!     Ok(row.try_get("account")?.as_text().unwrap_or_default().to_string())
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), DataAccessError> {
//! let pool = ConnectionPool::sqlite_builder("app.db").build().await?;
//! let template = SqlTemplate::with_pool(pool);
//!
//! template
//!     .batch("CREATE TABLE IF NOT EXISTS users (id INTEGER PRIMARY KEY, account TEXT NOT NULL)")
//!     .await?;
//! template
//!     .update(
//!         "INSERT INTO users (account) VALUES (?1)",
//!         &[SqlValue::Text("alice".to_string())],
//!     )
//!     .await?;
//! let names = template.query("SELECT account FROM users", &account, &[]).await?;
//! assert_eq!(names, vec!["alice".to_string()]);
//! # Ok(())
//! # }
//! ```

mod error;
mod mapper;
mod pool;
mod provider;
mod results;
mod statement;
mod template;
mod types;

#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub mod prelude;

pub use error::DataAccessError;
pub use mapper::RowMapper;
pub use pool::{ConnectionPool, PooledConnection, StatementExecutor};
pub use provider::{ConnectionLease, ConnectionProvider, SharedConnection};
pub use results::{RowSet, SqlRow};
pub use statement::StatementRequest;
pub use template::SqlTemplate;
pub use types::SqlValue;
