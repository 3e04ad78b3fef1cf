use crate::error::DataAccessError;
use crate::results::SqlRow;

/// Caller-supplied strategy converting one raw row into one typed value.
///
/// A mapper is selected per call and may be invoked zero or many times
/// per execution, once for each row in cursor order. Implementations
/// must be stateless (no captured mutable state) so one mapper value is
/// safely reusable across concurrent calls. A mapper failure aborts the
/// whole call; the caller sees it as the same uniform error a driver
/// failure produces.
pub trait RowMapper {
    type Output;

    /// Produce one value from the row the cursor is positioned at.
    ///
    /// # Errors
    ///
    /// Returns `DataAccessError` when the row cannot be converted, e.g.
    /// a missing column or an unexpected value type.
    fn map_row(&self, row: &SqlRow) -> Result<Self::Output, DataAccessError>;
}

/// Plain functions and capture-free closures are mappers.
impl<T, F> RowMapper for F
where
    F: Fn(&SqlRow) -> Result<T, DataAccessError>,
{
    type Output = T;

    fn map_row(&self, row: &SqlRow) -> Result<T, DataAccessError> {
        self(row)
    }
}
