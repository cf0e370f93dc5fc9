use super::error::GridError;
use super::types::Cell;
use std::fmt;

/// Smallest accepted number of rows or columns.
pub const MIN_DIMENSION: usize = 4;
/// Largest accepted number of rows or columns.
pub const MAX_DIMENSION: usize = 30;

pub const STANDARD_ROWS: usize = 6;
pub const STANDARD_COLUMNS: usize = 7;

/// 盤面
///
/// Row 0 is the top of the grid and `rows - 1` the bottom, where dropped
/// pieces land first. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Row-major cell storage
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&rows) || !range.contains(&columns) {
            return Err(GridError::InvalidDimensions {
                rows,
                columns,
                min: MIN_DIMENSION,
                max: MAX_DIMENSION,
            });
        }

        Ok(Grid {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        })
    }

    /// The classic 6x7 grid.
    pub fn standard() -> Self {
        Grid {
            rows: STANDARD_ROWS,
            columns: STANDARD_COLUMNS,
            cells: vec![Cell::Empty; STANDARD_ROWS * STANDARD_COLUMNS],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, GridError> {
        if !self.contains(row, column) {
            return Err(GridError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + column)
    }

    /// Puts a player marker at `(row, column)`.
    ///
    /// Gravity is not checked here; callers go through the move generator.
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) -> Result<(), GridError> {
        if cell.is_empty() {
            return Err(GridError::InvalidSide(cell));
        }
        let idx = self.index(row, column)?;
        self.cells[idx] = cell;
        Ok(())
    }

    pub fn clear(&mut self, row: usize, column: usize) -> Result<(), GridError> {
        let idx = self.index(row, column)?;
        self.cells[idx] = Cell::Empty;
        Ok(())
    }

    pub fn get(&self, row: usize, column: usize) -> Result<Cell, GridError> {
        let idx = self.index(row, column)?;
        Ok(self.cells[idx])
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells.
    #[cfg(test)]
    pub(crate) fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.columns) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range_dimensions() {
        assert!(Grid::new(4, 30).is_ok());
        assert!(matches!(
            Grid::new(3, 7),
            Err(GridError::InvalidDimensions { rows: 3, .. })
        ));
        assert!(matches!(
            Grid::new(6, 31),
            Err(GridError::InvalidDimensions { columns: 31, .. })
        ));
    }

    #[test]
    fn test_set_get_clear() {
        let mut grid = Grid::standard();
        assert_eq!(grid.get(5, 0).unwrap(), Cell::Empty);

        grid.set(5, 0, Cell::Computer).unwrap();
        assert_eq!(grid.get(5, 0).unwrap(), Cell::Computer);

        grid.clear(5, 0).unwrap();
        assert_eq!(grid.get(5, 0).unwrap(), Cell::Empty);
        assert_eq!(grid, Grid::standard());
    }

    #[test]
    fn test_set_rejects_empty_marker() {
        let mut grid = Grid::standard();
        assert_eq!(
            grid.set(0, 0, Cell::Empty),
            Err(GridError::InvalidSide(Cell::Empty))
        );
        assert_eq!(grid, Grid::standard());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::standard();
        assert!(matches!(
            grid.get(6, 0),
            Err(GridError::OutOfBounds { row: 6, column: 0, .. })
        ));
        assert!(grid.set(0, 7, Cell::Human).is_err());
        assert!(grid.clear(10, 10).is_err());
    }

    #[test]
    fn test_is_full() {
        let mut grid = Grid::new(4, 4).unwrap();
        for row in 0..4 {
            for column in 0..4 {
                assert!(!grid.is_full());
                grid.set(row, column, Cell::Human).unwrap();
            }
        }
        assert!(grid.is_full());
        assert_eq!(grid.piece_count(), 16);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(3, 0, Cell::Computer).unwrap();
        grid.set(3, 1, Cell::Human).unwrap();
        assert_eq!(grid.to_string(), "....\n....\n....\nXO..\n");
    }
}
