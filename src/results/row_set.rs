use std::sync::Arc;

use super::row::SqlRow;
use crate::types::SqlValue;

/// The ordered rows a read statement produced, in cursor order.
///
/// A zero-length set is a valid result.
#[derive(Debug, Clone)]
pub struct RowSet {
    column_names: Arc<Vec<String>>,
    rows: Vec<SqlRow>,
}

impl RowSet {
    pub(crate) fn with_columns(column_names: Arc<Vec<String>>, capacity: usize) -> Self {
        Self {
            column_names,
            rows: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push_values(&mut self, values: Vec<SqlValue>) {
        self.rows
            .push(SqlRow::new(Arc::clone(&self.column_names), values));
    }

    /// The column names shared by every row in this set.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    #[must_use]
    pub fn rows(&self) -> &[SqlRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<SqlRow> {
        self.rows
    }
}

impl Default for RowSet {
    fn default() -> Self {
        Self::with_columns(Arc::new(Vec::new()), 0)
    }
}
