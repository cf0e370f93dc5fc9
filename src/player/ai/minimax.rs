use super::eval;
use super::evaluator::{Evaluator, MoveGenerator, TerminalDetector};
use crate::core::{GameStatus, Grid, GridError, Move, Side};
use crate::logic;
use crate::player::PlayerController;

use log::{debug, trace};
use rayon::prelude::*;
use std::ops::{Deref, DerefMut};

/// Value of a win found one ply below the root. Deeper wins score less.
pub const WIN_SCORE: i32 = 1_000_000;
/// Search window bound; strictly outside every reachable value.
const INFINITY: i32 = WIN_SCORE + 1;

pub type EvalFn = fn(&Grid) -> Result<i32, GridError>;
pub type ClassifyFn = fn(&Grid, usize, usize) -> Result<GameStatus, GridError>;
pub type MovesFn = fn(&Grid) -> Result<Vec<Move>, GridError>;

/// The engine wired to the connect-four rules.
pub type ConnectFourEngine = SearchEngine<EvalFn, ClassifyFn, MovesFn>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the grid has no legal move left.
    pub best_move: Option<Move>,
    pub value: i32,
    pub nodes: u64,
}

/// Depth-limited minimax with optional alpha-beta pruning.
///
/// The grid passed to [`SearchEngine::think`] is mutated in place during the
/// search (place, recurse, undo) and handed back unchanged.
pub struct SearchEngine<E, T, G> {
    evaluator: E,
    terminal: T,
    generator: G,
    pruning: bool,
}

struct SearchContext {
    maximizer: Side,
    max_depth: usize,
    /// +1 when the computer maximizes, -1 when the human does
    sign: i32,
    nodes: u64,
}

impl SearchContext {
    fn new(maximizer: Side, max_depth: usize) -> Self {
        Self {
            maximizer,
            max_depth,
            sign: if maximizer == Side::Computer { 1 } else { -1 },
            nodes: 0,
        }
    }
}

/// A piece placed for the duration of one branch. Dropping it clears the cell.
struct Placement<'g> {
    grid: &'g mut Grid,
    mv: Move,
}

impl<'g> Placement<'g> {
    fn new(grid: &'g mut Grid, mv: Move, side: Side) -> Result<Self, GridError> {
        grid.set(mv.row(), mv.column(), side.cell())?;
        Ok(Self { grid, mv })
    }
}

impl Deref for Placement<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        &*self.grid
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Grid {
        &mut *self.grid
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        // in bounds: set() already accepted these coordinates
        let _ = self.grid.clear(self.mv.row(), self.mv.column());
    }
}

impl ConnectFourEngine {
    pub fn connect_four(pruning: bool) -> Self {
        SearchEngine::new(
            eval::evaluate as EvalFn,
            logic::classify as ClassifyFn,
            logic::legal_moves as MovesFn,
            pruning,
        )
    }
}

impl<E, T, G> SearchEngine<E, T, G>
where
    E: Evaluator,
    T: TerminalDetector,
    G: MoveGenerator,
{
    pub fn new(evaluator: E, terminal: T, generator: G, pruning: bool) -> Self {
        Self {
            evaluator,
            terminal,
            generator,
            pruning,
        }
    }

    /// Picks the computer's move.
    pub fn think(&self, grid: &mut Grid, max_depth: usize) -> Result<SearchResult, GridError> {
        self.think_as(grid, max_depth, Side::Computer)
    }

    /// Picks a move for `side`, which becomes the maximizer of the search.
    ///
    /// Every root move is searched with a full window so its value is exact;
    /// among equal values the move generated last wins. A `max_depth` of 0 is
    /// treated as 1.
    pub fn think_as(
        &self,
        grid: &mut Grid,
        max_depth: usize,
        side: Side,
    ) -> Result<SearchResult, GridError> {
        let max_depth = max_depth.max(1);
        let mut ctx = SearchContext::new(side, max_depth);
        let moves = self.generator.legal_moves(grid)?;

        let mut scored = Vec::with_capacity(moves.len());
        for (i, mv) in moves.into_iter().enumerate() {
            let value = self.search_root_move(grid, &mut ctx, mv)?;
            debug!("{}'th move is {}, minimax value: {}", i + 1, mv, value);
            scored.push((mv, value));
        }

        Ok(select_best(scored, ctx.nodes))
    }

    /// Same result as [`SearchEngine::think_as`], with the root moves spread
    /// over the rayon pool. Each worker searches its own copy of the grid.
    pub fn think_parallel(
        &self,
        grid: &Grid,
        max_depth: usize,
        side: Side,
    ) -> Result<SearchResult, GridError>
    where
        E: Sync,
        T: Sync,
        G: Sync,
    {
        let max_depth = max_depth.max(1);
        let moves = self.generator.legal_moves(grid)?;

        let results = moves
            .par_iter()
            .map(|&mv| -> Result<(Move, i32, u64), GridError> {
                let mut local = grid.clone();
                let mut ctx = SearchContext::new(side, max_depth);
                let value = self.search_root_move(&mut local, &mut ctx, mv)?;
                Ok((mv, value, ctx.nodes))
            })
            .collect::<Result<Vec<_>, GridError>>()?;

        let nodes = results.iter().map(|&(_, _, n)| n).sum();
        for (i, (mv, value, _)) in results.iter().enumerate() {
            debug!("{}'th move is {}, minimax value: {}", i + 1, mv, value);
        }
        let scored = results.into_iter().map(|(mv, value, _)| (mv, value)).collect();
        Ok(select_best(scored, nodes))
    }

    fn search_root_move(
        &self,
        grid: &mut Grid,
        ctx: &mut SearchContext,
        mv: Move,
    ) -> Result<i32, GridError> {
        let mut placed = Placement::new(grid, mv, ctx.maximizer)?;
        let depth = ctx.max_depth - 1;
        self.minimax(&mut placed, ctx, depth, -INFINITY, INFINITY, false, mv)
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        grid: &mut Grid,
        ctx: &mut SearchContext,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        is_maximizing: bool,
        last: Move,
    ) -> Result<i32, GridError> {
        ctx.nodes += 1;

        match self.terminal.classify(grid, last.row(), last.column())? {
            GameStatus::Win => {
                // the side that just moved made the line
                let ply = (ctx.max_depth - depth) as i32;
                let value = if is_maximizing {
                    -(WIN_SCORE - ply)
                } else {
                    WIN_SCORE - ply
                };
                trace!("win at {} (ply {}): {}", last, ply, value);
                return Ok(value);
            }
            GameStatus::Draw => return Ok(0),
            GameStatus::Ongoing => {}
        }

        if depth == 0 {
            return Ok(ctx.sign * self.evaluator.evaluate(grid)?);
        }

        let moves = self.generator.legal_moves(grid)?;
        if moves.is_empty() {
            return Ok(ctx.sign * self.evaluator.evaluate(grid)?);
        }

        if is_maximizing {
            let mut value = -INFINITY;
            for mv in moves {
                let score = {
                    let mut placed = Placement::new(grid, mv, ctx.maximizer)?;
                    self.minimax(&mut placed, ctx, depth - 1, alpha, beta, false, mv)?
                };
                value = value.max(score);
                alpha = alpha.max(value);
                if self.pruning && beta <= alpha {
                    break;
                }
            }
            Ok(value)
        } else {
            let mut value = INFINITY;
            for mv in moves {
                let score = {
                    let mut placed = Placement::new(grid, mv, ctx.maximizer.opponent())?;
                    self.minimax(&mut placed, ctx, depth - 1, alpha, beta, true, mv)?
                };
                value = value.min(score);
                beta = beta.min(value);
                if self.pruning && beta <= alpha {
                    break;
                }
            }
            Ok(value)
        }
    }
}

/// `>=` keeps the last of several equally good moves.
fn select_best(scored: Vec<(Move, i32)>, nodes: u64) -> SearchResult {
    let mut best_move = None;
    let mut best_value = -INFINITY;
    for (mv, value) in scored {
        if value >= best_value {
            best_value = value;
            best_move = Some(mv);
        }
    }

    SearchResult {
        best_move,
        value: if best_move.is_some() { best_value } else { 0 },
        nodes,
    }
}

/// Search engine seated at the table.
pub struct EnginePlayer {
    name: String,
    engine: ConnectFourEngine,
    depth: usize,
    parallel: bool,
}

impl EnginePlayer {
    pub fn new(name: &str, depth: usize, pruning: bool, parallel: bool) -> Self {
        Self {
            name: name.to_string(),
            engine: ConnectFourEngine::connect_four(pruning),
            depth,
            parallel,
        }
    }
}

impl PlayerController for EnginePlayer {
    fn choose_move(&self, grid: &mut Grid, side: Side) -> Result<Option<Move>, GridError> {
        let result = if self.parallel {
            self.engine.think_parallel(grid, self.depth, side)?
        } else {
            self.engine.think_as(grid, self.depth, side)?
        };
        debug!(
            "{} ({}) chose {:?}: value {}, {} nodes",
            self.name, side, result.best_move, result.value, result.nodes
        );
        Ok(result.best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
