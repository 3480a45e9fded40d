//! The square game: place pieces until one color forms a square.

mod action;
mod game;
mod invariants;
pub mod rules;
mod selector;
mod types;
mod view;

pub use action::{MoveError, Placement, SetupError, TurnReport};
pub use game::GameState;
pub use selector::{FirstFree, MoveSelector, SeededRandom, SelectorKind};
pub use types::{Board, Cell, Color, Coord, GameStatus, Player, PlayerKind};
pub use view::BoardView;
