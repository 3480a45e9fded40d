//! Game state and turn sequencing.
//!
//! [`GameState`] is the engine a driver talks to. It validates every request
//! before touching anything, so a rejected call leaves the game exactly as
//! it was. Accepted moves run the whole turn chain before returning: any
//! automated players who come up next move immediately.

use super::action::{MoveError, Placement, SetupError, TurnReport};
use super::invariants::assert_invariants;
use super::rules;
use super::selector::{FirstFree, MoveSelector};
use super::types::{Board, Cell, Coord, GameStatus, Player};
use super::view::BoardView;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// Per-game state. Replaced wholesale when a new game starts.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub(crate) board: Board,
    pub(crate) free: BTreeSet<Coord>,
    pub(crate) players: [Player; 2],
    pub(crate) current: usize,
    pub(crate) status: GameStatus,
}

impl Session {
    pub(crate) fn new(size: usize, players: [Player; 2]) -> Self {
        let board = Board::new(size);
        let free = board.empty_coords().collect();
        Self {
            board,
            free,
            players,
            current: 0,
            status: GameStatus::InProgress,
        }
    }

    pub(crate) fn current_player(&self) -> Player {
        self.players[self.current]
    }

    /// Places the current player's piece at `coord`, then settles the
    /// status and passes the turn if the game goes on.
    ///
    /// `coord` must be free; callers validate first.
    pub(crate) fn place(&mut self, coord: Coord) -> Placement {
        let player = self.current_player();
        self.board.set(coord, Cell::Occupied(player.color));
        self.free.remove(&coord);
        debug!(color = %player.color, %coord, free = self.free.len(), "Piece placed");

        self.status = rules::evaluate(&self.board, &self.free, player.color);
        match self.status {
            GameStatus::Won(color) => info!(%color, "Game finished with a square"),
            GameStatus::Draw => info!("Game finished in a draw"),
            GameStatus::InProgress => self.current = (self.current + 1) % 2,
        }

        if cfg!(debug_assertions) {
            assert_invariants(self);
        }

        Placement {
            color: player.color,
            kind: player.kind,
            coord,
        }
    }

    fn target(&self, x: usize, y: usize) -> Result<Coord, MoveError> {
        let size = self.board.size();
        let coord = Coord::from_one_based(x, y, size).ok_or(MoveError::OutOfBounds { x, y, size })?;
        if !self.board.is_empty(coord) {
            return Err(MoveError::CellOccupied { coord });
        }
        Ok(coord)
    }
}

/// The game engine: board, players, turn order and the automated policy.
#[derive(Debug)]
pub struct GameState {
    session: Option<Session>,
    selector: Box<dyn MoveSelector>,
}

impl GameState {
    /// Creates an unstarted engine whose automated players take the first
    /// free cell.
    #[instrument]
    pub fn new() -> Self {
        Self::with_selector(Box::new(FirstFree))
    }

    /// Creates an unstarted engine using `selector` for automated moves.
    #[instrument(skip(selector), fields(selector = selector.name()))]
    pub fn with_selector(selector: Box<dyn MoveSelector>) -> Self {
        Self {
            session: None,
            selector,
        }
    }

    /// Starts a new game on a `size`×`size` board, replacing any game in
    /// progress. `first` moves first.
    ///
    /// When `first` is automated there is no human move to trigger its
    /// opening turn, so it is played here before returning.
    ///
    /// # Errors
    ///
    /// `InvalidBoardSize` if `size <= 2`, `DuplicateColor` if both players
    /// share a color. The previous game is untouched on error.
    #[instrument(skip(self))]
    pub fn start(&mut self, size: usize, first: Player, second: Player) -> Result<TurnReport, SetupError> {
        if size <= 2 {
            warn!(size, "Rejected board size");
            return Err(SetupError::InvalidBoardSize { size });
        }
        if first.color == second.color {
            warn!(color = %first.color, "Rejected duplicate colors");
            return Err(SetupError::DuplicateColor { color: first.color });
        }

        let mut session = Session::new(size, [first, second]);
        let mut report = TurnReport::new(session.status);
        info!(size, "New game started");

        if first.is_automated() {
            play_automated(&mut session, self.selector.as_mut(), &mut report);
        }

        self.session = Some(session);
        Ok(report)
    }

    /// Places the current human player's piece at one-based `(x, y)`.
    ///
    /// # Errors
    ///
    /// In order of precedence: `GameNotStarted`, `GameFinished`,
    /// `NotYourTurn`, `OutOfBounds`, `CellOccupied`. Nothing changes on error.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, x: usize, y: usize) -> Result<TurnReport, MoveError> {
        let session = self.active_session()?;
        let player = session.current_player();
        if player.is_automated() {
            warn!(color = %player.color, "Human move on automated turn");
            return Err(MoveError::NotYourTurn { color: player.color });
        }
        let coord = session.target(x, y).inspect_err(|e| warn!(%e, "Move rejected"))?;

        let mut report = TurnReport::new(session.status);
        self.apply(coord, &mut report);
        Ok(report)
    }

    /// Plays one move for the current automated player, then any automated
    /// turns that follow it.
    ///
    /// Returns an empty report without effect if no free cell remains.
    ///
    /// # Errors
    ///
    /// `GameNotStarted`, `GameFinished`, or `NotAutomatedTurn` when a human
    /// is to move.
    #[instrument(skip(self))]
    pub fn automated_move(&mut self) -> Result<TurnReport, MoveError> {
        let selector = self.selector.as_mut();
        let session = match self.session.as_mut() {
            None => return Err(MoveError::GameNotStarted),
            Some(s) if s.status.is_finished() => return Err(MoveError::GameFinished),
            Some(s) => s,
        };
        let player = session.current_player();
        if !player.is_automated() {
            return Err(MoveError::NotAutomatedTurn { color: player.color });
        }

        let mut report = TurnReport::new(session.status);
        play_automated(session, selector, &mut report);
        Ok(report)
    }

    /// Checks whether one-based `(x, y)` is on the board and empty in a
    /// game that still accepts moves. Never changes state.
    #[instrument(skip(self))]
    pub fn is_legal_move(&self, x: usize, y: usize) -> bool {
        self.active_session()
            .and_then(|session| session.target(x, y))
            .is_ok()
    }

    /// Read-only snapshot for display.
    pub fn view(&self) -> BoardView {
        BoardView::from_session(self.session.as_ref())
    }

    /// True once a game has been started.
    pub fn is_started(&self) -> bool {
        self.session.is_some()
    }

    /// True once the current game has a winner or is drawn.
    pub fn is_finished(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.status.is_finished())
    }

    /// Status of the current game, if one was started.
    pub fn status(&self) -> Option<GameStatus> {
        self.session.as_ref().map(|s| s.status)
    }

    /// The player to move, if a game was started.
    pub fn current_player(&self) -> Option<Player> {
        self.session.as_ref().map(Session::current_player)
    }

    /// The players in turn order, if a game was started.
    pub fn players(&self) -> Option<[Player; 2]> {
        self.session.as_ref().map(|s| s.players)
    }

    /// The board of the current game.
    pub fn board(&self) -> Option<&Board> {
        self.session.as_ref().map(|s| &s.board)
    }

    /// Free cells of the current game, in row-major order.
    pub fn free_cells(&self) -> Option<&BTreeSet<Coord>> {
        self.session.as_ref().map(|s| &s.free)
    }

    fn active_session(&self) -> Result<&Session, MoveError> {
        match &self.session {
            None => Err(MoveError::GameNotStarted),
            Some(s) if s.status.is_finished() => Err(MoveError::GameFinished),
            Some(s) => Ok(s),
        }
    }

    fn apply(&mut self, coord: Coord, report: &mut TurnReport) {
        if let Some(session) = self.session.as_mut() {
            apply_turn(session, self.selector.as_mut(), coord, report);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Places `coord` for the player to move, then keeps playing automated
/// turns until a human is to move or the game ends.
fn apply_turn(session: &mut Session, selector: &mut dyn MoveSelector, coord: Coord, report: &mut TurnReport) {
    report.placements.push(session.place(coord));

    while !session.status.is_finished() && session.current_player().is_automated() {
        let Some(next) = choose(session, selector) else {
            break;
        };
        report.placements.push(session.place(next));
    }

    report.status = session.status;
}

fn play_automated(session: &mut Session, selector: &mut dyn MoveSelector, report: &mut TurnReport) {
    match choose(session, selector) {
        Some(coord) => apply_turn(session, selector, coord, report),
        None => debug!("No free cell for automated move"),
    }
}

/// Asks the selector for a cell, falling back to the first free cell if it
/// answers with one that is taken.
fn choose(session: &Session, selector: &mut dyn MoveSelector) -> Option<Coord> {
    let picked = selector.select(&session.board, &session.free);
    match picked {
        Some(coord) if session.free.contains(&coord) => Some(coord),
        Some(coord) => {
            warn!(selector = selector.name(), %coord, "Selector chose an occupied cell");
            session.free.first().copied()
        }
        None => session.free.first().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::square::{Color, PlayerKind};

    #[derive(Debug)]
    struct Stubborn(Coord);

    impl MoveSelector for Stubborn {
        fn select(&mut self, _board: &Board, _free: &BTreeSet<Coord>) -> Option<Coord> {
            Some(self.0)
        }

        fn name(&self) -> &str {
            "stubborn"
        }
    }

    #[test]
    fn test_two_automated_players_play_to_the_end() {
        let mut game = GameState::new();
        let report = game
            .start(3, Player::automated(Color::White), Player::automated(Color::Black))
            .unwrap();

        assert!(report.status.is_finished());
        assert!(game.is_finished());
        assert_eq!(report.placements.len(), 9 - game.free_cells().unwrap().len());
        assert!(report.placements.iter().all(|p| p.kind == PlayerKind::Automated));
    }

    #[test]
    fn test_selector_on_occupied_cell_falls_back() {
        let mut game = GameState::with_selector(Box::new(Stubborn(Coord::new(0, 0))));
        game.start(4, Player::human(Color::White), Player::automated(Color::Black))
            .unwrap();

        let report = game.apply_human_move(1, 1).unwrap();
        assert_eq!(report.placements.len(), 2);
        assert_eq!(report.placements[1].coord, Coord::new(1, 0));
    }

    #[test]
    fn test_automated_move_requires_automated_turn() {
        let mut game = GameState::new();
        assert_eq!(game.automated_move(), Err(MoveError::GameNotStarted));

        game.start(3, Player::human(Color::Black), Player::automated(Color::White))
            .unwrap();
        assert_eq!(
            game.automated_move(),
            Err(MoveError::NotAutomatedTurn { color: Color::Black })
        );
    }

    #[test]
    fn test_human_move_on_automated_turn_is_rejected() {
        let mut game = GameState {
            session: Some(Session::new(
                3,
                [Player::automated(Color::White), Player::human(Color::Black)],
            )),
            selector: Box::new(FirstFree),
        };
        let before = game.view();

        assert_eq!(
            game.apply_human_move(1, 1),
            Err(MoveError::NotYourTurn { color: Color::White })
        );
        assert_eq!(game.view(), before);

        let report = game.automated_move().unwrap();
        assert_eq!(report.placements.len(), 1);
        assert_eq!(game.current_player(), Some(Player::human(Color::Black)));
    }

    #[test]
    fn test_automated_move_on_full_board_is_noop() {
        let mut session = Session::new(3, [Player::automated(Color::White), Player::human(Color::Black)]);
        session.free.clear();
        let mut report = TurnReport::new(session.status);

        play_automated(&mut session, &mut FirstFree, &mut report);
        assert!(report.placements.is_empty());
        assert_eq!(session.current, 0);
    }
}
