use deadpool_sqlite::Object as SqliteObject;
use deadpool_sqlite::rusqlite::ToSql;

use super::params::to_sqlite_values;
use super::query::build_row_set;
use crate::error::DataAccessError;
use crate::results::RowSet;
use crate::types::SqlValue;

// All execution runs inside the pool's interact closure on a blocking
// thread; statement and cursor are dropped before the closure returns,
// on success and failure alike.

pub(crate) async fn execute_batch(
    conn: &SqliteObject,
    sql: &str,
) -> Result<(), DataAccessError> {
    let sql = sql.to_owned();
    conn.interact(move |conn| conn.execute_batch(&sql).map_err(DataAccessError::Sqlite))
        .await?
}

pub(crate) async fn execute_select(
    conn: &SqliteObject,
    sql: &str,
    args: &[SqlValue],
) -> Result<RowSet, DataAccessError> {
    let sql = sql.to_owned();
    let params = to_sqlite_values(args);
    conn.interact(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        build_row_set(&mut stmt, &params)
    })
    .await?
}

pub(crate) async fn execute_dml(
    conn: &SqliteObject,
    sql: &str,
    args: &[SqlValue],
) -> Result<usize, DataAccessError> {
    let sql = sql.to_owned();
    let params = to_sqlite_values(args);
    conn.interact(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let param_refs: Vec<&dyn ToSql> = params.iter().map(|v| v as &dyn ToSql).collect();
        stmt.execute(&param_refs[..]).map_err(DataAccessError::Sqlite)
    })
    .await?
}
