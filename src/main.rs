//! Square Game - interactive text driver
//!
//! Reads commands from stdin and prints boards to stdout. Logs go to stderr,
//! filtered by `RUST_LOG`.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use square_game::{GameConfig, GameState, Repl};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?.with_overrides(cli.selector, cli.seed, cli.format);
    info!(selector = %config.selector(), seed = config.seed(), format = %config.format(), "Starting square game");

    let game = GameState::with_selector(config.build_selector());
    let mut repl = Repl::new(game, io::stdin().lock(), io::stdout().lock(), *config.format());
    repl.run()?;

    Ok(())
}
