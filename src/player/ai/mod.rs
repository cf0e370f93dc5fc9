pub mod config;
pub mod eval;
pub mod evaluator;
pub mod minimax;
pub mod random;

pub use config::AIConfig;
pub use evaluator::{Evaluator, MoveGenerator, TerminalDetector};
pub use minimax::{ConnectFourEngine, EnginePlayer, SearchEngine, SearchResult, WIN_SCORE};
pub use random::RandomAI;
