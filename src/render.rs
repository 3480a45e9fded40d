//! Text and JSON presentation of engine state.

use crate::games::square::{BoardView, GameStatus, Placement};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Command reference printed by `HELP`.
pub const HELP: &str = "\
=== COMMANDS ===
GAME N, U1, U2 - Start new game
  N - board size (integer > 2)
  U1, U2 - players in format 'TYPE C'
  TYPE: 'user' or 'comp'
  C: 'W' (white) or 'B' (black)
Examples:
  GAME 5, user W, comp B
  GAME 6, comp W, user B
MOVE X, Y - Make a move at coordinates X, Y
BOARD - Show current board
EXIT - Exit program
HELP - Show this help
";

/// How board snapshots are written.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Box-drawn grid for people.
    #[default]
    Text,
    /// One JSON object per snapshot, for scripts.
    Json,
}

/// Renders a snapshot in the requested format.
pub fn view(view: &BoardView, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(board(view)),
        OutputFormat::Json => serde_json::to_string(view).map(|json| json + "\n"),
    }
}

/// Renders the board as a numbered, box-drawn grid with a legend and the
/// player to move.
pub fn board(view: &BoardView) -> String {
    if !view.started {
        return "Game not started\n".to_string();
    }

    let n = view.size;
    let width = n.to_string().len();
    let margin = " ".repeat(width);
    let rule = "─".repeat(n * (width + 1) + 1);

    let mut out = String::new();
    let _ = writeln!(out, "\n=== BOARD {n}x{n} ===");

    let columns: String = (1..=n).map(|i| format!(" {i:>width$}")).collect();
    let _ = writeln!(out, "{margin} {columns}");
    let _ = writeln!(out, "{margin} ┌{rule}┐");

    for (i, row) in view.rows.iter().enumerate() {
        let cells: String = row
            .iter()
            .map(|cell| format!(" {:<width$}", cell.glyph()))
            .collect();
        let _ = writeln!(out, "{:>width$} │{cells} │{:>width$}", i + 1, i + 1);
    }

    let _ = writeln!(out, "{margin} └{rule}┘");
    let _ = writeln!(out, "{margin} {columns}");
    let _ = writeln!(out, "Legend: ○ = White (W), ● = Black (B), . = Empty");

    if let Some(player) = view.to_move() {
        let _ = writeln!(out, "Current turn: {player}");
    }
    out.push('\n');
    out
}

/// Announces a single placement with one-based coordinates.
pub fn placement(placement: &Placement) -> String {
    format!("Move made: {placement}")
}

/// Announces a finished game; `None` while it is still in progress.
pub fn outcome(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(color) => Some(format!("Game finished. {color} wins!")),
        GameStatus::Draw => Some("Game finished. Draw".to_string()),
    }
}
