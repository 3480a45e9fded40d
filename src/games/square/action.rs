//! Placements, turn reports and the engine's error types.
//!
//! Every placement the engine makes, human or automated, is recorded as a
//! [`Placement`] so a driver can announce it after the call returns.

use super::types::{Color, Coord, GameStatus, PlayerKind};
use serde::{Deserialize, Serialize};

/// A single piece placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Color of the placed piece.
    pub color: Color,
    /// Kind of player that placed it.
    pub kind: PlayerKind,
    /// Where it was placed (zero-based).
    pub coord: Coord,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.color, self.coord)
    }
}

/// Everything one driver call did to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Placements in the order they were made.
    pub placements: Vec<Placement>,
    /// Status after the last placement.
    pub status: GameStatus,
}

impl TurnReport {
    pub(super) fn new(status: GameStatus) -> Self {
        Self {
            placements: Vec::new(),
            status,
        }
    }

    /// Placements made by automated players during this call.
    pub fn automated(&self) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(|p| p.kind == PlayerKind::Automated)
    }
}

/// Error starting a new game. A failed start leaves the previous game intact.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SetupError {
    /// The board must be larger than 2×2.
    #[display("Board size must be greater than 2 (got {})", size)]
    InvalidBoardSize {
        /// Requested side length.
        size: usize,
    },

    /// Both players asked for the same color.
    #[display("Players must have different colors (both {})", color)]
    DuplicateColor {
        /// The shared color.
        color: Color,
    },

    /// A player spec did not read as `TYPE C`.
    #[display("Invalid player '{}': expected 'user|comp W|B'", spec)]
    InvalidPlayerSpec {
        /// The text that failed to parse.
        spec: String,
    },
}

/// Error validating a move. No state changes when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// No game has been started.
    #[display("Game not started")]
    GameNotStarted,

    /// The game already has a winner or is drawn.
    #[display("Game already finished")]
    GameFinished,

    /// A human move was attempted while an automated player is to move.
    #[display("Not user's turn ({} to move)", color)]
    NotYourTurn {
        /// Color of the player to move.
        color: Color,
    },

    /// An automated move was requested while a human is to move.
    #[display("Not computer's turn ({} to move)", color)]
    NotAutomatedTurn {
        /// Color of the player to move.
        color: Color,
    },

    /// The one-based coordinates fall outside the board.
    #[display("Invalid move: ({}, {}) is outside the {}x{} board", x, y, size, size)]
    OutOfBounds {
        /// Requested column (one-based).
        x: usize,
        /// Requested row (one-based).
        y: usize,
        /// Board side length.
        size: usize,
    },

    /// The target cell already holds a piece.
    #[display("Invalid move: {} is already occupied", coord)]
    CellOccupied {
        /// The occupied cell (zero-based).
        coord: Coord,
    },
}
