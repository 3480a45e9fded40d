//! Command-line interface for square_game.

use clap::Parser;
use square_game::{OutputFormat, SelectorKind};
use std::path::PathBuf;

/// Square Game - place four pieces on the corners of a square to win
#[derive(Parser, Debug)]
#[command(name = "square_game")]
#[command(about = "Two-player square-forming board game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./square_game.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Move policy for automated players: first-free or random
    #[arg(long)]
    pub selector: Option<SelectorKind>,

    /// Seed for the random selector
    #[arg(long)]
    pub seed: Option<u64>,

    /// Board output: text or json
    #[arg(long)]
    pub format: Option<OutputFormat>,
}
