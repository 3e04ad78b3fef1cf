use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;

/// A single SQL value, used both for bind arguments and result cells.
///
/// This is the unified representation across the supported database
/// engines; the driver modules own the conversion rules in each
/// direction.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Timestamp value
    Timestamp(NaiveDateTime),
    /// NULL value
    Null,
    /// JSON value
    Json(JsonValue),
    /// Binary data
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Check if this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&i64> {
        if let SqlValue::Int(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let SqlValue::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    /// Boolean view of this value. SQLite has no boolean storage class,
    /// so integers 0 and 1 coerce.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SqlValue::Bool(value) => Some(*value),
            SqlValue::Int(0) => Some(false),
            SqlValue::Int(1) => Some(true),
            _ => None,
        }
    }

    /// Timestamp view of this value. SQLite returns timestamps as text,
    /// so the common `YYYY-MM-DD HH:MM:SS[.fff]` renderings coerce.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            SqlValue::Timestamp(value) => Some(*value),
            SqlValue::Text(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
                .ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let SqlValue::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_json(&self) -> Option<&JsonValue> {
        if let SqlValue::Json(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        if let SqlValue::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_coerces_from_sqlite_integers() {
        assert_eq!(SqlValue::Int(1).as_bool(), Some(true));
        assert_eq!(SqlValue::Int(0).as_bool(), Some(false));
        assert_eq!(SqlValue::Int(2).as_bool(), None);
        assert_eq!(SqlValue::Bool(true).as_bool(), Some(true));
    }

    #[test]
    fn timestamp_coerces_from_text() {
        let ts = SqlValue::Text("2024-01-01 08:00:01".to_string());
        assert_eq!(
            ts.as_timestamp(),
            NaiveDateTime::parse_from_str("2024-01-01 08:00:01", "%Y-%m-%d %H:%M:%S").ok()
        );
        let with_frac = SqlValue::Text("2024-01-01 08:00:01.250".to_string());
        assert!(with_frac.as_timestamp().is_some());
        assert_eq!(SqlValue::Null.as_timestamp(), None);
    }

    #[test]
    fn accessors_reject_other_variants() {
        assert!(SqlValue::Text("x".into()).as_int().is_none());
        assert!(SqlValue::Int(3).as_text().is_none());
        assert!(SqlValue::Null.is_null());
    }
}
