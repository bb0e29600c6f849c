//! Collaborators supplied by the embedding application

use super::cell::CellRef;
use super::pool::ReusePool;

/// Supplies the row count and a cell for each row
pub trait DataSource {
    /// Number of rows; negative values are treated as zero
    fn number_of_rows(&mut self) -> i32;

    /// Cell for `row`, usually obtained from `pool.dequeue(..)`.
    ///
    /// Returning `None` leaves the row blank.
    fn cell_for_row(&mut self, pool: &mut ReusePool, row: i32) -> Option<CellRef>;
}

/// Observes row interaction and sizing
pub trait Delegate {
    fn did_select_row(&mut self, row: i32);

    /// Height of `row` in pixels; 0 means the table's default
    fn row_height(&self, _row: i32) -> i32 {
        0
    }
}
