//! # Evaluation Module
//!
//! Static evaluation used when the search runs out of depth. The score is
//! from the computer's point of view (positive = computer advantage).
//!
//! ## Scoring Strategy
//! Each side starts from a ceiling equal to the number of distinct 4-windows
//! the grid can hold. For every piece on the grid, each window covering it
//! that holds no enemy piece is still a live line for the piece's owner, and
//! is taken off the *opponent's* ceiling. The result is
//! `computer_score - human_score`.
//!
//! A window shared by several friendly pieces is counted once per piece, so
//! connected groups weigh more than scattered ones.

use crate::core::{Grid, GridError, Side};
use crate::logic::{window, DIRECTIONS, WINDOW};

/// Number of distinct 4-windows on a `rows` x `columns` grid.
///
/// 6x7: 21 vertical + 24 horizontal + 12 + 12 diagonal = 69.
pub fn window_ceiling(rows: usize, columns: usize) -> i32 {
    let span = WINDOW - 1;
    let vertical = columns * rows.saturating_sub(span);
    let horizontal = rows * columns.saturating_sub(span);
    let diagonal = 2 * rows.saturating_sub(span) * columns.saturating_sub(span);
    (vertical + horizontal + diagonal) as i32
}

/// Upper bound on `|evaluate(grid)|`: every cell can take at most four
/// windows in each of the four directions off the ceiling.
pub(crate) fn score_bound(rows: usize, columns: usize) -> i32 {
    (rows * columns * WINDOW * DIRECTIONS.len()) as i32
}

/// Windows covering `(row, column)` that contain no piece of `owner`'s opponent.
pub fn live_windows(grid: &Grid, row: usize, column: usize, owner: Side) -> Result<i32, GridError> {
    let enemy = owner.opponent().cell();
    let mut live = 0;

    for dir in DIRECTIONS {
        for anchor in 0..WINDOW {
            let Some(cells) = window(grid, row, column, dir, anchor) else {
                continue;
            };
            let mut contested = false;
            for (r, c) in cells {
                if grid.get(r, c)? == enemy {
                    contested = true;
                    break;
                }
            }
            if !contested {
                live += 1;
            }
        }
    }

    Ok(live)
}

/// Evaluates the grid from the computer's perspective.
pub fn evaluate(grid: &Grid) -> Result<i32, GridError> {
    let ceiling = window_ceiling(grid.rows(), grid.columns());
    let mut computer_score = ceiling;
    let mut human_score = ceiling;

    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let Some(owner) = grid.get(row, column)?.side() else {
                continue;
            };
            let live = live_windows(grid, row, column, owner)?;
            match owner {
                Side::Computer => human_score -= live,
                Side::Human => computer_score -= live,
            }
        }
    }

    let score = computer_score - human_score;
    debug_assert!(score.abs() <= score_bound(grid.rows(), grid.columns()));
    Ok(score)
}
