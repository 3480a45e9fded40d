//! Serializable read-only snapshot of the engine.

use super::game::Session;
use super::types::{Cell, GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Everything a driver needs to display the game, detached from the engine.
///
/// Before the first game `size` is 0, `rows` is empty and the optional
/// fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Side length of the board.
    pub size: usize,
    /// Cells, top row first.
    pub rows: Vec<Vec<Cell>>,
    /// Number of empty cells.
    pub free_cells: usize,
    /// A game has been started.
    pub started: bool,
    /// The game has a winner or is drawn.
    pub finished: bool,
    /// Status of the game, if started.
    pub status: Option<GameStatus>,
    /// Player to move, if started.
    pub current_player: Option<Player>,
}

impl BoardView {
    pub(super) fn from_session(session: Option<&Session>) -> Self {
        match session {
            None => Self {
                size: 0,
                rows: Vec::new(),
                free_cells: 0,
                started: false,
                finished: false,
                status: None,
                current_player: None,
            },
            Some(session) => Self {
                size: session.board.size(),
                rows: session.board.rows().map(<[Cell]>::to_vec).collect(),
                free_cells: session.free.len(),
                started: true,
                finished: session.status.is_finished(),
                status: Some(session.status),
                current_player: Some(session.current_player()),
            },
        }
    }

    /// Number of cells holding any piece.
    pub fn occupied_cells(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// The player to move while the game is still in progress.
    pub fn to_move(&self) -> Option<Player> {
        if self.finished { None } else { self.current_player }
    }
}
