use std::error::Error;

use chrono::{DateTime, Utc};
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};
use tokio_util::bytes;

use crate::types::SqlValue;

/// Container for Postgres parameters with lifetime tracking.
pub(crate) struct Params<'a> {
    references: Vec<&'a (dyn ToSql + Sync)>,
}

impl<'a> Params<'a> {
    pub(crate) fn convert(args: &'a [SqlValue]) -> Params<'a> {
        Params {
            references: args.iter().map(|a| a as &(dyn ToSql + Sync)).collect(),
        }
    }

    pub(crate) fn as_refs(&self) -> &[&'a (dyn ToSql + Sync)] {
        &self.references
    }
}

impl ToSql for SqlValue {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut bytes::BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            // Narrow to the declared column width; out-of-range values
            // fail binding instead of writing a truncated wire value.
            SqlValue::Int(i) => {
                if *ty == Type::INT2 {
                    i16::try_from(*i)?.to_sql(ty, out)
                } else if *ty == Type::INT4 {
                    i32::try_from(*i)?.to_sql(ty, out)
                } else {
                    i.to_sql(ty, out)
                }
            }
            SqlValue::Float(f) => {
                if *ty == Type::FLOAT4 {
                    #[allow(clippy::cast_possible_truncation)]
                    (*f as f32).to_sql(ty, out)
                } else {
                    f.to_sql(ty, out)
                }
            }
            SqlValue::Text(s) => s.to_sql(ty, out),
            SqlValue::Bool(b) => b.to_sql(ty, out),
            SqlValue::Timestamp(dt) => {
                if *ty == Type::TIMESTAMPTZ {
                    DateTime::<Utc>::from_naive_utc_and_offset(*dt, Utc).to_sql(ty, out)
                } else {
                    dt.to_sql(ty, out)
                }
            }
            SqlValue::Null => Ok(IsNull::Yes),
            SqlValue::Json(json) => json.to_sql(ty, out),
            SqlValue::Blob(bytes) => bytes.to_sql(ty, out),
        }
    }

    fn accepts(ty: &Type) -> bool {
        *ty == Type::INT2
            || *ty == Type::INT4
            || *ty == Type::INT8
            || *ty == Type::FLOAT4
            || *ty == Type::FLOAT8
            || *ty == Type::TEXT
            || *ty == Type::VARCHAR
            || *ty == Type::CHAR
            || *ty == Type::NAME
            || *ty == Type::BOOL
            || *ty == Type::TIMESTAMP
            || *ty == Type::TIMESTAMPTZ
            || *ty == Type::DATE
            || *ty == Type::JSON
            || *ty == Type::JSONB
            || *ty == Type::BYTEA
    }

    to_sql_checked!();
}
