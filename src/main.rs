use connect_four_ai::player::ai::AIConfig;
use connect_four_ai::selfplay::{run_selfplay, Contestant, SelfPlayConfig};
use connect_four_ai::Side;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let config = AIConfig::get()?;
    info!(
        "=== Connect Four self-play ({}x{}, depth {}, pruning {}) ===",
        config.board.rows, config.board.columns, config.search.max_depth, config.search.pruning
    );

    let engine = Contestant::Engine {
        depth: config.search.max_depth,
        pruning: config.search.pruning,
        parallel: config.search.parallel,
    };

    let matches = [
        ("engine vs random", Contestant::Random, engine),
        ("engine vs engine", engine, engine),
    ];

    for (label, human, computer) in matches {
        info!("--- {} ---", label);
        run_selfplay(&SelfPlayConfig {
            num_games: config.selfplay.num_games,
            rows: config.board.rows,
            columns: config.board.columns,
            human,
            computer,
            first: Side::Human,
            seed: config.selfplay.seed,
            parallel_games: false,
        })?;
    }

    Ok(())
}
