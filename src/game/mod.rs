//! Game session driven by an outer loop (terminal, GUI, self-play).

use crate::core::{GameStatus, Grid, GridError, Move, Side};
use crate::logic::{classify, drop_piece};
use crate::player::ai::{Evaluator, MoveGenerator, SearchEngine, TerminalDetector};
use crate::player::PlayerController;
use log::{debug, info};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("the game is already over")]
    GameOver,

    #[error("it is not the {0}'s turn")]
    NotYourTurn(Side),
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub winner: Option<Side>,
    pub moves: usize,
    pub resigned: bool,
}

pub struct Game {
    grid: Grid,
    to_move: Side,
    status: GameStatus,
    history: Vec<Move>,
    resigned: Option<Side>,
}

impl Game {
    pub fn new(grid: Grid, first: Side) -> Self {
        Game {
            grid,
            to_move: first,
            status: GameStatus::Ongoing,
            history: Vec::new(),
            resigned: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over() || self.resigned.is_some()
    }

    /// Winner of a finished game; the side that made the last move on a win.
    pub fn winner(&self) -> Option<Side> {
        if let Some(side) = self.resigned {
            return Some(side.opponent());
        }
        match self.status {
            GameStatus::Win => Some(self.to_move.opponent()),
            _ => None,
        }
    }

    pub fn apply_human_move(&mut self, column: usize) -> Result<Move, PlayError> {
        self.apply_move(Side::Human, column)
    }

    /// Drops a piece for `side`, classifies the result and passes the turn.
    pub fn apply_move(&mut self, side: Side, column: usize) -> Result<Move, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        if side != self.to_move {
            return Err(PlayError::NotYourTurn(side));
        }

        let mv = drop_piece(&mut self.grid, column, side)?;
        self.status = classify(&self.grid, mv.row(), mv.column())?;
        self.history.push(mv);
        self.to_move = side.opponent();
        debug!("{} played {} -> {:?}", side, mv, self.status);
        Ok(mv)
    }

    /// Lets the engine pick the computer's move and applies it.
    ///
    /// Returns `None` when the engine finds no legal move.
    pub fn apply_computer_move<E, T, G>(
        &mut self,
        engine: &SearchEngine<E, T, G>,
        max_depth: usize,
    ) -> Result<Option<Move>, PlayError>
    where
        E: Evaluator,
        T: TerminalDetector,
        G: MoveGenerator,
    {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        if self.to_move != Side::Computer {
            return Err(PlayError::NotYourTurn(Side::Computer));
        }

        let result = engine.think(&mut self.grid, max_depth)?;
        match result.best_move {
            Some(mv) => self.apply_move(Side::Computer, mv.column()).map(Some),
            None => Ok(None),
        }
    }

    /// Alternates the two controllers until the game ends.
    ///
    /// A controller that returns no move resigns.
    pub fn play(
        &mut self,
        human: &dyn PlayerController,
        computer: &dyn PlayerController,
    ) -> Result<GameRecord, PlayError> {
        while !self.is_over() {
            let side = self.to_move;
            let controller = match side {
                Side::Human => human,
                Side::Computer => computer,
            };

            match controller.choose_move(&mut self.grid, side)? {
                Some(mv) => {
                    self.apply_move(side, mv.column())?;
                }
                None => {
                    info!("{} ({}) resigned", controller.name(), side);
                    self.resigned = Some(side);
                }
            }
        }

        debug!("final position:\n{}", self.grid);
        Ok(GameRecord {
            winner: self.winner(),
            moves: self.history.len(),
            resigned: self.resigned.is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;
    use crate::player::ai::ConnectFourEngine;
    use crate::player::{EnginePlayer, RandomAI};

    struct Resigner;

    impl PlayerController for Resigner {
        fn choose_move(&self, _grid: &mut Grid, _side: Side) -> Result<Option<Move>, GridError> {
            Ok(None)
        }

        fn name(&self) -> &str {
            "quitter"
        }
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(Grid::standard(), Side::Human);
        game.apply_human_move(3).unwrap();
        assert_eq!(game.to_move(), Side::Computer);
        assert_eq!(
            game.apply_human_move(3),
            Err(PlayError::NotYourTurn(Side::Human))
        );

        let mv = game.apply_move(Side::Computer, 3).unwrap();
        assert_eq!((mv.row(), mv.column()), (4, 3));
        assert_eq!(game.grid().get(4, 3).unwrap(), Cell::Computer);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new(Grid::standard(), Side::Human);
        for column in 0..3 {
            game.apply_human_move(column).unwrap();
            game.apply_move(Side::Computer, column).unwrap();
        }
        game.apply_human_move(3).unwrap();

        assert_eq!(game.status(), GameStatus::Win);
        assert_eq!(game.winner(), Some(Side::Human));
        assert_eq!(
            game.apply_move(Side::Computer, 4),
            Err(PlayError::GameOver)
        );
    }

    #[test]
    fn test_invalid_column_keeps_turn() {
        let mut game = Game::new(Grid::standard(), Side::Human);
        assert_eq!(
            game.apply_human_move(9),
            Err(PlayError::Grid(GridError::ColumnOutOfRange {
                column: 9,
                columns: 7
            }))
        );
        assert_eq!(game.to_move(), Side::Human);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_computer_move_blocks_threat() {
        let mut game = Game::new(Grid::standard(), Side::Human);
        let engine = ConnectFourEngine::connect_four(true);

        game.apply_human_move(0).unwrap();
        game.apply_move(Side::Computer, 0).unwrap();
        game.apply_human_move(1).unwrap();
        game.apply_move(Side::Computer, 1).unwrap();
        game.apply_human_move(2).unwrap();

        let mv = game.apply_computer_move(&engine, 2).unwrap().unwrap();
        assert_eq!((mv.row(), mv.column()), (5, 3));
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn test_play_engine_beats_random() {
        let mut game = Game::new(Grid::standard(), Side::Human);
        let human = RandomAI::with_seed("random", 3);
        let computer = EnginePlayer::new("engine", 4, true, false);

        let record = game.play(&human, &computer).unwrap();
        assert!(game.is_over());
        assert_eq!(record.moves, game.history().len());
        assert_eq!(record.winner, Some(Side::Computer));
    }

    #[test]
    fn test_resignation() {
        let mut game = Game::new(Grid::standard(), Side::Computer);
        let human = RandomAI::with_seed("random", 1);

        let record = game.play(&human, &Resigner).unwrap();
        assert!(record.resigned);
        assert_eq!(record.winner, Some(Side::Human));
        assert_eq!(record.moves, 0);
    }
}
