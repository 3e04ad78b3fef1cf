// SQLite backend
//
// - config: pool options and setup
// - params: SqlValue -> rusqlite value conversion
// - query: result extraction into a RowSet
// - executor: statement execution on a pooled connection

pub mod config;
mod executor;
mod params;
mod query;

pub use config::{SqliteOptions, SqliteOptionsBuilder};

pub(crate) use executor::{execute_batch, execute_dml, execute_select};
