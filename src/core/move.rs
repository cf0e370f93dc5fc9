use serde::Serialize;
use std::fmt;

/// Landing cell of a drop.
///
/// Only the move generator builds these; the row always comes from gravity,
/// so callers can read the coordinates but never set them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    row: usize,
    column: usize,
}

impl Move {
    pub(crate) fn new(row: usize, column: usize) -> Self {
        Move { row, column }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
