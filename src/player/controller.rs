use crate::core::{Grid, GridError, Move, Side};

/// プレイヤー操作のtrait
///
/// The grid is lent mutably so a searching player can place and undo pieces;
/// it must be returned unchanged.
pub trait PlayerController {
    fn choose_move(&self, grid: &mut Grid, side: Side) -> Result<Option<Move>, GridError>;
    fn name(&self) -> &str;
}
