// PostgreSQL backend
//
// - config: pool options and setup
// - params: ToSql for SqlValue with explicit per-type conversions
// - query: typed result extraction into a RowSet
// - executor: statement execution on a pooled client

pub mod config;
mod executor;
mod params;
mod query;

pub use deadpool_postgres::Config as PgConfig;

pub(crate) use executor::{execute_batch, execute_dml, execute_select};
