pub mod error;
pub mod grid;
pub mod r#move;
pub mod setup;
pub mod types;

pub use error::GridError;
pub use grid::{Grid, MAX_DIMENSION, MIN_DIMENSION};
pub use r#move::Move;
pub use setup::grid_from_strings;
pub use types::{Cell, GameStatus, Side};
