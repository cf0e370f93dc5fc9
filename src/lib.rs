//! Connect-four engine: gravity-fed grid, win/draw detection, a static
//! evaluator and a depth-limited minimax search with optional alpha-beta
//! pruning.

pub mod core;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;


pub use crate::core::{Cell, GameStatus, Grid, GridError, Move, Side};
pub use crate::game::{Game, PlayError};
pub use crate::player::ai::{AIConfig, ConnectFourEngine, SearchEngine, SearchResult};
