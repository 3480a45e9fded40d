//! Core domain types for the square game.

use super::action::SetupError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use tracing::instrument;

/// Piece color. Each player owns exactly one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Color {
    /// White pieces.
    #[strum(to_string = "W", serialize = "white")]
    White,
    /// Black pieces.
    #[strum(to_string = "B", serialize = "black")]
    Black,
}

impl Color {
    /// Board glyph used when rendering a piece of this color.
    pub fn glyph(self) -> char {
        match self {
            Color::White => '○',
            Color::Black => '●',
        }
    }
}

/// Who chooses a player's moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves arrive from the driver.
    #[strum(to_string = "user", serialize = "human")]
    Human,
    /// Moves are chosen by the engine's selector.
    #[strum(to_string = "comp", serialize = "automated")]
    Automated,
}

/// A seat at the table: how it moves and what it places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Human or automated.
    pub kind: PlayerKind,
    /// Color of the pieces this player places.
    pub color: Color,
}

impl Player {
    /// Creates a player.
    pub fn new(kind: PlayerKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Shorthand for a human player.
    pub fn human(color: Color) -> Self {
        Self::new(PlayerKind::Human, color)
    }

    /// Shorthand for an automated player.
    pub fn automated(color: Color) -> Self {
        Self::new(PlayerKind::Automated, color)
    }

    /// Returns true if the engine moves for this player.
    pub fn is_automated(&self) -> bool {
        self.kind == PlayerKind::Automated
    }
}

impl FromStr for Player {
    type Err = SetupError;

    /// Parses `"TYPE C"`, e.g. `"user W"` or `"comp black"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SetupError::InvalidPlayerSpec {
            spec: s.trim().to_string(),
        };

        let mut parts = s.split_whitespace();
        let (Some(kind), Some(color), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let kind = PlayerKind::from_str(kind).map_err(|_| invalid())?;
        let color = Color::from_str(color).map_err(|_| invalid())?;
        Ok(Self { kind, color })
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.color, self.kind)
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No piece.
    Empty,
    /// Holds a piece of the given color.
    Occupied(Color),
}

impl Cell {
    /// Board glyph for this cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(color) => color.glyph(),
        }
    }
}

/// Zero-based board coordinate. `x` is the column, `y` the row.
///
/// Ordered row-major, so the smallest coordinate is the top-left cell
/// and iteration over a sorted set walks the board in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column, `0..size`.
    pub x: usize,
    /// Row, `0..size`.
    pub y: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Converts a one-based pair to a coordinate on a board of `size`.
    ///
    /// Returns `None` when either component falls outside `1..=size`.
    pub fn from_one_based(x: usize, y: usize, size: usize) -> Option<Self> {
        let in_range = |v: usize| (1..=size).contains(&v);
        (in_range(x) && in_range(y)).then(|| Self::new(x - 1, y - 1))
    }

    /// The one-based `(x, y)` pair shown to players.
    pub fn one_based(self) -> (usize, usize) {
        (self.x + 1, self.y + 1)
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (x, y) = self.one_based();
        write!(f, "({}, {})", x, y)
    }
}

/// Square N×N board, cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of `size`×`size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `coord`, or `None` off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Sets the cell at `coord`. Off-board coordinates are ignored.
    pub(super) fn set(&mut self, coord: Coord, cell: Cell) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = cell;
        }
    }

    /// Checks if the cell at `coord` is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Every coordinate holding a piece of `color`, in row-major order.
    pub fn coords_of(&self, color: Color) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == Cell::Occupied(color))
            .map(|(i, _)| Coord::new(i % self.size, i / self.size))
    }

    /// Number of pieces of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.coords_of(color).count()
    }

    /// Every coordinate holding no piece, in row-major order.
    pub fn empty_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(i, _)| Coord::new(i % self.size, i / self.size))
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.x < self.size && coord.y < self.size).then_some(coord.y * self.size + coord.x)
    }
}

/// Current status of a started game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// The color formed a square.
    Won(Color),
    /// The board filled without a square.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has a winner or is drawn.
    pub fn is_finished(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Won(color) => Some(color),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(color) => write!(f, "{} wins", color),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
