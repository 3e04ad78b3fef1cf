use deadpool_sqlite::rusqlite::types::Value;

use crate::types::SqlValue;

/// Convert one bind argument to a rusqlite value.
///
/// SQLite has no boolean or timestamp storage class: booleans bind as
/// integers, timestamps and JSON as text.
pub(crate) fn to_sqlite_value(value: &SqlValue) -> Value {
    match value {
        SqlValue::Int(i) => Value::Integer(*i),
        SqlValue::Float(f) => Value::Real(*f),
        SqlValue::Text(s) => Value::Text(s.clone()),
        SqlValue::Bool(b) => Value::Integer(i64::from(*b)),
        SqlValue::Timestamp(dt) => Value::Text(dt.format("%F %T%.f").to_string()),
        SqlValue::Null => Value::Null,
        SqlValue::Json(json) => Value::Text(json.to_string()),
        SqlValue::Blob(bytes) => Value::Blob(bytes.clone()),
    }
}

pub(crate) fn to_sqlite_values(args: &[SqlValue]) -> Vec<Value> {
    args.iter().map(to_sqlite_value).collect()
}
