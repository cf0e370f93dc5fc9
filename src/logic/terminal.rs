//! Win / draw detection after a placement.
//!
//! Only lines through the most recent piece can have changed, so only the
//! 4-windows covering that cell are tested. The vertical line is checked
//! downward only: pieces stack from the bottom, so nothing can sit above the
//! piece that was just dropped.

use super::{window, WINDOW};
use crate::core::{GameStatus, Grid, GridError};

/// (direction, anchor positions of the last piece inside the window)
const WIN_LINES: [((i32, i32), std::ops::Range<usize>); 4] = [
    ((1, 0), 0..1),
    ((0, 1), 0..WINDOW),
    ((1, 1), 0..WINDOW),
    ((1, -1), 0..WINDOW),
];

/// Classifies the grid right after a piece was placed at `(row, column)`.
///
/// The piece stored there is the subject. An empty cell never wins, so a
/// wrong coordinate shows up as a missed win rather than a false one.
pub fn classify(grid: &Grid, row: usize, column: usize) -> Result<GameStatus, GridError> {
    let subject = grid.get(row, column)?;

    if !subject.is_empty() {
        for (dir, anchors) in WIN_LINES {
            for anchor in anchors {
                let Some(cells) = window(grid, row, column, dir, anchor) else {
                    continue;
                };
                let mut complete = true;
                for (r, c) in cells {
                    if grid.get(r, c)? != subject {
                        complete = false;
                        break;
                    }
                }
                if complete {
                    return Ok(GameStatus::Win);
                }
            }
        }
    }

    if grid.is_full() {
        Ok(GameStatus::Draw)
    } else {
        Ok(GameStatus::Ongoing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid_from_strings;

    #[test]
    fn test_vertical_win_below_last_piece() {
        let grid = grid_from_strings(&[
            ".......",
            ".......",
            "X......",
            "X......",
            "X......",
            "X......",
        ])
        .unwrap();
        assert_eq!(classify(&grid, 2, 0).unwrap(), GameStatus::Win);
        // three below the second-highest piece is not enough
        assert_eq!(classify(&grid, 3, 0).unwrap(), GameStatus::Ongoing);
    }

    #[test]
    fn test_horizontal_win_with_last_piece_in_middle() {
        let grid = grid_from_strings(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "..OOOO.",
        ])
        .unwrap();
        for column in 2..6 {
            assert_eq!(classify(&grid, 5, column).unwrap(), GameStatus::Win);
        }
    }

    #[test]
    fn test_diagonal_wins() {
        let rising = grid_from_strings(&[
            ".......",
            ".......",
            "...X...",
            "..XO...",
            ".XOO...",
            "XOOO...",
        ])
        .unwrap();
        assert_eq!(classify(&rising, 2, 3).unwrap(), GameStatus::Win);
        assert_eq!(classify(&rising, 4, 1).unwrap(), GameStatus::Win);

        let falling = grid_from_strings(&[
            ".......",
            ".......",
            "...O...",
            "...XO..",
            "...XXO.",
            "...XXXO",
        ])
        .unwrap();
        assert_eq!(classify(&falling, 2, 3).unwrap(), GameStatus::Win);
        assert_eq!(classify(&falling, 5, 6).unwrap(), GameStatus::Win);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let grid = grid_from_strings(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XXXOXXX",
        ])
        .unwrap();
        for column in 0..7 {
            assert_eq!(classify(&grid, 5, column).unwrap(), GameStatus::Ongoing);
        }
    }

    #[test]
    fn test_draw_on_full_grid_without_line() {
        let grid = grid_from_strings(&["XXOO", "OOXX", "XXOO", "OOXX"]).unwrap();
        assert_eq!(classify(&grid, 0, 3).unwrap(), GameStatus::Draw);
    }

    #[test]
    fn test_win_takes_precedence_over_full_grid() {
        let grid = grid_from_strings(&["XXXX", "OOXO", "XXOO", "OOXX"]).unwrap();
        assert_eq!(classify(&grid, 0, 3).unwrap(), GameStatus::Win);
    }

    #[test]
    fn test_empty_subject_never_wins() {
        let grid = grid_from_strings(&["....", "....", "....", "...."]).unwrap();
        assert_eq!(classify(&grid, 3, 0).unwrap(), GameStatus::Ongoing);
        assert!(classify(&grid, 4, 0).is_err());
    }
}
