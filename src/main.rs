//! Terminal entry point.
//!
//! Plays the game on stdin/stdout. An optional first argument seeds the
//! session for a reproducible run.

use std::io;

use log::info;
use treasure_grid::game::demo::run_game_loop;
use treasure_grid::game::systems::TerminalPresenter;
use treasure_grid::{GameConfig, GameError, GameSession};

fn main() -> Result<(), GameError> {
    // Initialize logger from environment variable.
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .map(|arg| {
            arg.parse::<u64>()
                .map_err(|e| GameError::InvalidConfig(format!("seed {arg:?} is not a u64: {e}")))
        })
        .transpose()?;
    let mut session = match seed {
        Some(seed) => {
            info!("[Main] Using seed {}", seed);
            GameSession::seeded(GameConfig::default(), seed)?
        }
        None => GameSession::new(GameConfig::default())?,
    };

    println!("Move with w/a/s/d or the arrow keys, then press Enter. q quits.");
    let mut presenter = TerminalPresenter::new(io::stdout());
    run_game_loop(&mut session, io::stdin().lock(), &mut presenter)
}
