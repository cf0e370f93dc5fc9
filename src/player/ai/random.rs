use crate::core::{Grid, GridError, Move, Side};
use crate::logic::legal_moves;
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

/// Plays a uniformly random legal move.
pub struct RandomAI {
    pub name: String,
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn with_seed(name: &str, seed: u64) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, grid: &mut Grid, _side: Side) -> Result<Option<Move>, GridError> {
        let moves = legal_moves(grid)?;
        Ok(moves.choose(&mut *self.rng.borrow_mut()).copied())
    }
}
