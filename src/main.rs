use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use gridsnake::config::Config;
use gridsnake::game::{Session, SnakeGame};
use gridsnake::score::{FileStore, MemoryStore, ScoreStore, Scoreboard};
use gridsnake::state::GameState;
use gridsnake::term::TermManager;

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let grid = config.grid()?;
    let store: Box<dyn ScoreStore> = if config.no_persist {
        Box::new(MemoryStore::default())
    } else {
        Box::new(FileStore::new(&config.score_file))
    };
    let session = Session::new(
        GameState::new(grid, config.seed),
        Scoreboard::load(store),
        config.ticker(),
    );

    let mut game = SnakeGame::new(TermManager::new()?, session);
    game.run()?;

    info!("bye");
    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = File::create(path).with_context(|| format!("creating log file {:?}", path))?;
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}
