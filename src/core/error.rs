use super::types::Cell;

/// Errors raised by the grid, the move generator and everything built on them.
///
/// None of these are recovered internally: the grid is left untouched and the
/// error is handed straight back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions {rows}x{columns} outside supported range {min}..={max}")]
    InvalidDimensions {
        rows: usize,
        columns: usize,
        min: usize,
        max: usize,
    },

    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("{0:?} is not a player marker")]
    InvalidSide(Cell),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {column} is outside 0..{columns}")]
    ColumnOutOfRange { column: usize, columns: usize },
}
