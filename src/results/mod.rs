// Query results: one positional row, and the ordered set of rows a
// statement produced. Column names are captured once per statement and
// shared by every row in the set.

mod row;
mod row_set;

pub use row::SqlRow;
pub use row_set::RowSet;
