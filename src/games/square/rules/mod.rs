//! Game rules for the square game.
//!
//! Pure functions over the board. Kept apart from the state machine so the
//! win condition can be tested on arbitrary point sets.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Point, forms_square, has_square};

use super::{Board, Color, Coord, GameStatus};
use std::collections::BTreeSet;
use tracing::instrument;

/// Status after `mover` has placed a piece.
///
/// A square wins even when it fills the last free cell.
#[instrument(skip(board, free))]
pub fn evaluate(board: &Board, free: &BTreeSet<Coord>, mover: Color) -> GameStatus {
    if forms_square(board, mover) {
        GameStatus::Won(mover)
    } else if is_full(free) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
