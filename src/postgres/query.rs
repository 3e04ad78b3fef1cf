use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value as JsonValue;
use tokio_postgres::types::Type;
use tokio_postgres::{Row, Statement};

use crate::error::DataAccessError;
use crate::results::RowSet;
use crate::types::SqlValue;

/// Extract one cell by the column's declared Postgres type.
fn extract_value(row: &Row, idx: usize) -> Result<SqlValue, DataAccessError> {
    let ty = row.columns()[idx].type_();

    if *ty == Type::INT2 {
        let value: Option<i16> = row.try_get(idx)?;
        Ok(value.map_or(SqlValue::Null, |v| SqlValue::Int(i64::from(v))))
    } else if *ty == Type::INT4 {
        let value: Option<i32> = row.try_get(idx)?;
        Ok(value.map_or(SqlValue::Null, |v| SqlValue::Int(i64::from(v))))
    } else if *ty == Type::INT8 {
        let value: Option<i64> = row.try_get(idx)?;
        Ok(value.map_or(SqlValue::Null, SqlValue::Int))
    } else if *ty == Type::FLOAT4 {
        let value: Option<f32> = row.try_get(idx)?;
        Ok(value.map_or(SqlValue::Null, |v| SqlValue::Float(f64::from(v))))
    } else if *ty == Type::FLOAT8 {
        let value: Option<f64> = row.try_get(idx)?;
        Ok(value.map_or(SqlValue::Null, SqlValue::Float))
    } else if *ty == Type::BOOL {
        let value: Option<bool> = row.try_get(idx)?;
        Ok(value.map_or(SqlValue::Null, SqlValue::Bool))
    } else if *ty == Type::TIMESTAMP {
        let value: Option<NaiveDateTime> = row.try_get(idx)?;
        Ok(value.map_or(SqlValue::Null, SqlValue::Timestamp))
    } else if *ty == Type::TIMESTAMPTZ {
        let value: Option<DateTime<Utc>> = row.try_get(idx)?;
        Ok(value.map_or(SqlValue::Null, |v| SqlValue::Timestamp(v.naive_utc())))
    } else if *ty == Type::JSON || *ty == Type::JSONB {
        let value: Option<JsonValue> = row.try_get(idx)?;
        Ok(value.map_or(SqlValue::Null, SqlValue::Json))
    } else if *ty == Type::BYTEA {
        let value: Option<Vec<u8>> = row.try_get(idx)?;
        Ok(value.map_or(SqlValue::Null, SqlValue::Blob))
    } else {
        // Text family, and the fallback for anything else the driver
        // can render as text.
        let value: Option<String> = row.try_get(idx)?;
        Ok(value.map_or(SqlValue::Null, SqlValue::Text))
    }
}

/// Collect executed rows into a [`RowSet`], in cursor order.
///
/// # Errors
///
/// Returns `DataAccessError` if any cell refuses extraction under its
/// declared type.
pub(crate) fn build_row_set(
    stmt: &Statement,
    rows: Vec<Row>,
) -> Result<RowSet, DataAccessError> {
    let column_names: Vec<String> = stmt
        .columns()
        .iter()
        .map(|col| col.name().to_string())
        .collect();
    let column_count = column_names.len();

    let mut row_set = RowSet::with_columns(Arc::new(column_names), rows.len());

    for row in &rows {
        let mut values = Vec::with_capacity(column_count);
        for idx in 0..column_count {
            values.push(extract_value(row, idx)?);
        }
        row_set.push_values(values);
    }

    Ok(row_set)
}
