//! Square game library - a two-player placement game engine
//!
//! Players take turns placing pieces of their color on an N×N board. The
//! first to have four pieces on the corners of a square, at any angle,
//! wins; a full board without one is a draw.
//!
//! # Architecture
//!
//! - **Engine**: [`GameState`] validates and applies moves, and plays
//!   automated players' turns as soon as they come up
//! - **Rules**: [`rules::has_square`] is the win condition, a pure function
//!   over a point set
//! - **Driver**: [`Command`] parsing, [`render`] and the [`Repl`] loop
//!   put a line-based text interface on top of the engine
//!
//! # Example
//!
//! ```
//! use square_game::{Color, GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! game.start(5, Player::human(Color::White), Player::automated(Color::Black))?;
//!
//! let report = game.apply_human_move(1, 1)?;
//! assert_eq!(report.placements.len(), 2);
//! assert_eq!(report.status, GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod command;
mod config;
mod games;
pub mod render;
mod repl;

// Crate-level exports - Game engine
pub use games::square::{
    Board, BoardView, Cell, Color, Coord, FirstFree, GameState, GameStatus, MoveError, MoveSelector,
    Placement, Player, PlayerKind, SeededRandom, SelectorKind, SetupError, TurnReport, rules,
};

// Crate-level exports - Text driver
pub use command::{Command, CommandError};
pub use render::OutputFormat;
pub use repl::{Repl, ReplError};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
