//! Strategy traits for the search engine
//!
//! The engine only talks to the game through these three capabilities, so a
//! different grid game can reuse it by supplying its own. Plain functions and
//! closures with the right signature implement them directly.

use crate::core::{GameStatus, Grid, GridError, Move};

/// Static evaluation of a position with no forced result.
pub trait Evaluator {
    /// Score from the maximizing (computer) side's perspective.
    ///
    /// Returns:
    ///   - Positive score: computer advantage
    ///   - Negative score: human advantage
    ///   - Zero: Equal position
    fn evaluate(&self, grid: &Grid) -> Result<i32, GridError>;
}

/// Decides whether the placement at `(row, column)` ended the game.
pub trait TerminalDetector {
    fn classify(&self, grid: &Grid, row: usize, column: usize) -> Result<GameStatus, GridError>;
}

/// Produces the playable moves of a position in a deterministic order.
pub trait MoveGenerator {
    fn legal_moves(&self, grid: &Grid) -> Result<Vec<Move>, GridError>;
}

impl<F> Evaluator for F
where
    F: Fn(&Grid) -> Result<i32, GridError>,
{
    fn evaluate(&self, grid: &Grid) -> Result<i32, GridError> {
        self(grid)
    }
}

impl<F> TerminalDetector for F
where
    F: Fn(&Grid, usize, usize) -> Result<GameStatus, GridError>,
{
    fn classify(&self, grid: &Grid, row: usize, column: usize) -> Result<GameStatus, GridError> {
        self(grid, row, column)
    }
}

impl<F> MoveGenerator for F
where
    F: Fn(&Grid) -> Result<Vec<Move>, GridError>,
{
    fn legal_moves(&self, grid: &Grid) -> Result<Vec<Move>, GridError> {
        self(grid)
    }
}
