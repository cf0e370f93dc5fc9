pub mod terminal;

pub use terminal::classify;

use crate::core::{Grid, GridError, Move, Side};

/// Length of a winning line.
pub const WINDOW: usize = 4;

/// Line directions as (row step, column step): vertical, horizontal and both diagonals.
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// 落下位置
///
/// Scans the column from the bottom row upward and returns the first empty
/// row, or `None` when the column is full.
pub fn landing_row(grid: &Grid, column: usize) -> Result<Option<usize>, GridError> {
    if column >= grid.columns() {
        return Err(GridError::ColumnOutOfRange {
            column,
            columns: grid.columns(),
        });
    }

    for row in (0..grid.rows()).rev() {
        if grid.get(row, column)?.is_empty() {
            return Ok(Some(row));
        }
    }
    Ok(None)
}

/// 合法手生成
///
/// One move per non-full column, in ascending column order. Full columns are
/// left out entirely.
pub fn legal_moves(grid: &Grid) -> Result<Vec<Move>, GridError> {
    let mut moves = Vec::with_capacity(grid.columns());
    for column in 0..grid.columns() {
        if let Some(row) = landing_row(grid, column)? {
            moves.push(Move::new(row, column));
        }
    }
    Ok(moves)
}

/// Drops a piece for `side` into `column` and returns where it landed.
///
/// The grid is left untouched on error.
pub fn drop_piece(grid: &mut Grid, column: usize, side: Side) -> Result<Move, GridError> {
    let row = landing_row(grid, column)?.ok_or(GridError::ColumnFull(column))?;
    grid.set(row, column, side.cell())?;
    Ok(Move::new(row, column))
}

/// Cells of the 4-window in direction `dir` that holds `(row, column)` at
/// position `anchor` (0 = first cell), or `None` if it leaves the grid.
pub(crate) fn window(
    grid: &Grid,
    row: usize,
    column: usize,
    dir: (i32, i32),
    anchor: usize,
) -> Option<[(usize, usize); WINDOW]> {
    let start_row = row as i32 - dir.0 * anchor as i32;
    let start_col = column as i32 - dir.1 * anchor as i32;

    let mut cells = [(0, 0); WINDOW];
    for (i, cell) in cells.iter_mut().enumerate() {
        *cell = offset_pos(grid, start_row, start_col, dir, i as i32)?;
    }
    Some(cells)
}

fn offset_pos(
    grid: &Grid,
    row: i32,
    column: i32,
    dir: (i32, i32),
    k: i32,
) -> Option<(usize, usize)> {
    let r = row + dir.0 * k;
    let c = column + dir.1 * k;
    if r >= 0 && c >= 0 && grid.contains(r as usize, c as usize) {
        Some((r as usize, c as usize))
    } else {
        None
    }
}
