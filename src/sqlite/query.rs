use std::sync::Arc;

use deadpool_sqlite::rusqlite::types::Value;
use deadpool_sqlite::rusqlite::{Row, Statement, ToSql};

use crate::error::DataAccessError;
use crate::results::RowSet;
use crate::types::SqlValue;

fn extract_value(row: &Row, idx: usize) -> Result<SqlValue, DataAccessError> {
    let value: Value = row.get(idx).map_err(DataAccessError::Sqlite)?;
    Ok(match value {
        Value::Null => SqlValue::Null,
        Value::Integer(i) => SqlValue::Int(i),
        Value::Real(f) => SqlValue::Float(f),
        Value::Text(s) => SqlValue::Text(s),
        Value::Blob(b) => SqlValue::Blob(b),
    })
}

/// Bind, execute, and drain the cursor of a prepared read statement.
///
/// Column names must be captured before the cursor opens; the statement
/// is mutably borrowed for its whole lifetime after that.
///
/// # Errors
///
/// Returns `DataAccessError` if binding, stepping the cursor, or value
/// extraction fails.
pub(crate) fn build_row_set(
    stmt: &mut Statement,
    params: &[Value],
) -> Result<RowSet, DataAccessError> {
    let param_refs: Vec<&dyn ToSql> = params.iter().map(|v| v as &dyn ToSql).collect();
    let column_names: Vec<String> = stmt
        .column_names()
        .iter()
        .map(std::string::ToString::to_string)
        .collect();
    let column_count = column_names.len();

    let mut row_set = RowSet::with_columns(Arc::new(column_names), 0);

    let mut rows = stmt.query(&param_refs[..])?;
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(column_count);
        for idx in 0..column_count {
            values.push(extract_value(row, idx)?);
        }
        row_set.push_values(values);
    }

    Ok(row_set)
}
