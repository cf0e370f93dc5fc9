use crate::core::{Grid, Side};
use crate::game::Game;
use crate::player::{EnginePlayer, PlayerController, RandomAI};
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Who fills a seat in a self-play match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contestant {
    Engine {
        depth: usize,
        pruning: bool,
        parallel: bool,
    },
    Random,
}

impl Contestant {
    fn controller(self, name: &str, seed: u64) -> Box<dyn PlayerController> {
        match self {
            Contestant::Engine {
                depth,
                pruning,
                parallel,
            } => Box::new(EnginePlayer::new(name, depth, pruning, parallel)),
            Contestant::Random => Box::new(RandomAI::with_seed(name, seed)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub rows: usize,
    pub columns: usize,
    pub human: Contestant,
    pub computer: Contestant,
    pub first: Side,
    /// Base seed for random contestants; game `i` uses `seed + i`
    pub seed: u64,
    /// Run whole games on the rayon pool
    pub parallel_games: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Side>,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub human_wins: usize,
    pub computer_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub human: String,
    pub computer: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Side::Human) => self.human_wins += 1,
            Some(Side::Computer) => self.computer_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }
}

pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let mut stats = SelfPlayStats::new();
    stats.human = format!("{:?}", config.human);
    stats.computer = format!("{:?}", config.computer);

    let results: Vec<GameResult> = if config.parallel_games {
        (0..config.num_games)
            .into_par_iter()
            .map(|idx| play_one(config, idx))
            .collect::<anyhow::Result<_>>()?
    } else {
        (0..config.num_games)
            .map(|idx| play_one(config, idx))
            .collect::<anyhow::Result<_>>()?
    };

    for (idx, result) in results.into_iter().enumerate() {
        info!(
            "Game {}/{}: {} ({} moves, {} ms)",
            idx + 1,
            config.num_games,
            match result.winner {
                Some(Side::Human) => "human seat wins",
                Some(Side::Computer) => "computer seat wins",
                None => "draw",
            },
            result.moves,
            result.time_ms
        );
        stats.add_result(result);
    }

    info!(
        "human {} / computer {} / draws {}, avg {:.1} moves, {:.1} ms",
        stats.human_wins, stats.computer_wins, stats.draws, stats.avg_moves, stats.avg_time_ms
    );
    Ok(stats)
}

fn play_one(config: &SelfPlayConfig, idx: usize) -> anyhow::Result<GameResult> {
    let start_time = Instant::now();
    let seed = config.seed.wrapping_add(idx as u64);

    // distinct streams so two random seats don't mirror each other
    let human = config.human.controller("human-seat", seed);
    let computer = config.computer.controller("computer-seat", seed ^ 0x9e37_79b9_7f4a_7c15);

    let grid = Grid::new(config.rows, config.columns)?;
    let mut game = Game::new(grid, config.first);
    let record = game.play(human.as_ref(), computer.as_ref())?;

    Ok(GameResult {
        winner: record.winner,
        moves: record.moves,
        time_ms: start_time.elapsed().as_millis(),
    })
}
