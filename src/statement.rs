use crate::types::SqlValue;

/// A SQL statement and its positional bind arguments as one unit.
///
/// The engine binds arguments in order to the driver's 1-based
/// placeholders and never validates the count against the SQL text; a
/// mismatch surfaces as a driver failure at execution time.
#[derive(Debug, Clone)]
pub struct StatementRequest {
    /// The SQL text
    pub sql: String,
    /// The arguments to bind, in placeholder order
    pub args: Vec<SqlValue>,
}

impl StatementRequest {
    pub fn new(sql: impl Into<String>, args: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }

    pub fn without_args(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }
}
