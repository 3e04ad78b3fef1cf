use std::sync::Arc;

use crate::error::DataAccessError;
use crate::types::SqlValue;

/// A single row from a query result.
///
/// Values are positional, in the statement's column order; the column
/// name header is shared across all rows of one result set.
#[derive(Debug, Clone)]
pub struct SqlRow {
    column_names: Arc<Vec<String>>,
    values: Vec<SqlValue>,
}

impl SqlRow {
    pub(crate) fn new(column_names: Arc<Vec<String>>, values: Vec<SqlValue>) -> Self {
        Self {
            column_names,
            values,
        }
    }

    /// The column names for this row, in positional order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Get the index of a column by name.
    #[must_use]
    pub fn column_index(&self, column_name: &str) -> Option<usize> {
        self.column_names.iter().position(|col| col == column_name)
    }

    /// Get a value by column name, or `None` if the column is absent.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&SqlValue> {
        self.column_index(column_name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get a value by position.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&SqlValue> {
        self.values.get(index)
    }

    /// Get a value by column name, failing with the uniform error when
    /// the column is absent. Row mappers lean on this so a renamed
    /// column fails the whole call instead of mapping garbage.
    ///
    /// # Errors
    ///
    /// Returns `DataAccessError::Mapping` if the column is not part of
    /// this result set.
    pub fn try_get(&self, column_name: &str) -> Result<&SqlValue, DataAccessError> {
        self.get(column_name).ok_or_else(|| {
            DataAccessError::Mapping(format!("no column named '{column_name}' in result set"))
        })
    }
}
