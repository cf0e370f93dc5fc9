use crate::core::{Cell, Grid};
use anyhow::bail;

/// 文字列配列から盤面を初期化する
///
/// Each string is one row, top row first, using the symbols of
/// [`Cell::symbol`]: `.` empty, `X` computer, `O` human. Whitespace is
/// ignored. Gravity is not enforced, so fixtures must be stacked correctly.
pub fn grid_from_strings(setup: &[&str]) -> anyhow::Result<Grid> {
    let rows: Vec<Vec<char>> = setup
        .iter()
        .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect())
        .collect();

    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut grid = Grid::new(height, width)?;

    for (y, row) in rows.iter().enumerate() {
        if row.len() != width {
            bail!("row {} has {} cells, expected {}", y, row.len(), width);
        }
        for (x, &ch) in row.iter().enumerate() {
            let cell = match parse_cell(ch) {
                Some(cell) => cell,
                None => bail!("unknown cell symbol {:?} at ({}, {})", ch, y, x),
            };
            if !cell.is_empty() {
                grid.set(y, x, cell)?;
            }
        }
    }

    Ok(grid)
}

fn parse_cell(ch: char) -> Option<Cell> {
    match ch {
        '.' => Some(Cell::Empty),
        'X' | 'x' => Some(Cell::Computer),
        'O' | 'o' => Some(Cell::Human),
        _ => None,
    }
}
