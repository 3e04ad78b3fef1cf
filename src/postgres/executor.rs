use deadpool_postgres::Object as PgObject;

use super::params::Params;
use super::query::build_row_set;
use crate::error::DataAccessError;
use crate::results::RowSet;
use crate::types::SqlValue;

// Statements execute directly on the leased client, so they join
// whatever transaction context the connection carries: autocommit for
// a pooled lease, the owner's open transaction for a bound one.

pub(crate) async fn execute_batch(client: &PgObject, sql: &str) -> Result<(), DataAccessError> {
    client.batch_execute(sql).await.map_err(DataAccessError::Postgres)
}

pub(crate) async fn execute_select(
    client: &PgObject,
    sql: &str,
    args: &[SqlValue],
) -> Result<RowSet, DataAccessError> {
    let params = Params::convert(args);
    let stmt = client.prepare(sql).await?;
    let rows = client.query(&stmt, params.as_refs()).await?;
    build_row_set(&stmt, rows)
}

pub(crate) async fn execute_dml(
    client: &PgObject,
    sql: &str,
    args: &[SqlValue],
) -> Result<usize, DataAccessError> {
    let params = Params::convert(args);
    let stmt = client.prepare(sql).await?;
    let affected = client.execute(&stmt, params.as_refs()).await?;
    usize::try_from(affected)
        .map_err(|e| DataAccessError::Execution(format!("affected row count out of range: {e}")))
}
