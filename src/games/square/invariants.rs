//! First-class invariants over a running game.
//!
//! Checked after every placement in debug builds. Each invariant is a unit
//! type so sets of them compose as tuples.

use super::game::Session;
use super::Color;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// The free-cell set is exactly the set of empty cells.
pub struct FreeCellsMatchBoard;

impl Invariant<Session> for FreeCellsMatchBoard {
    fn holds(session: &Session) -> bool {
        session.board.empty_coords().eq(session.free.iter().copied())
    }

    fn description() -> &'static str {
        "Free cells are exactly the empty cells of the board"
    }
}

/// Pieces of both colors plus free cells account for every cell.
pub struct CellsConserved;

impl Invariant<Session> for CellsConserved {
    fn holds(session: &Session) -> bool {
        let size = session.board.size();
        let occupied = session.board.count(Color::White) + session.board.count(Color::Black);
        occupied + session.free.len() == size * size
    }

    fn description() -> &'static str {
        "Occupied cells plus free cells equal the board area"
    }
}

/// Players alternate, so piece counts never differ by more than one.
pub struct TurnBalance;

impl Invariant<Session> for TurnBalance {
    fn holds(session: &Session) -> bool {
        let white = session.board.count(Color::White);
        let black = session.board.count(Color::Black);
        white.abs_diff(black) <= 1
    }

    fn description() -> &'static str {
        "Piece counts of the two colors differ by at most one"
    }
}

/// Every invariant of a running game.
pub type SessionInvariants = (FreeCellsMatchBoard, CellsConserved, TurnBalance);

/// Logs and debug-asserts every violated session invariant.
pub(crate) fn assert_invariants(session: &Session) {
    if let Err(violations) = SessionInvariants::check_all(session) {
        for violation in &violations {
            warn!(invariant = %violation.description, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Session invariants violated: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::square::{Cell, Coord, Player};

    fn session(size: usize) -> Session {
        Session::new(size, [Player::human(Color::White), Player::human(Color::Black)])
    }

    #[test]
    fn test_fresh_session_holds() {
        assert!(SessionInvariants::check_all(&session(4)).is_ok());
    }

    #[test]
    fn test_holds_after_placements() {
        let mut s = session(4);
        s.place(Coord::new(0, 0));
        s.place(Coord::new(3, 3));
        s.place(Coord::new(1, 2));
        assert!(SessionInvariants::check_all(&s).is_ok());
    }

    #[test]
    fn test_detects_stale_free_cell() {
        let mut s = session(3);
        s.board.set(Coord::new(1, 1), Cell::Occupied(Color::White));
        let violations = SessionInvariants::check_all(&s).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert!(descriptions.contains(&FreeCellsMatchBoard::description()));
        assert!(descriptions.contains(&CellsConserved::description()));
        assert!(!descriptions.contains(&TurnBalance::description()));
    }

    #[test]
    fn test_detects_unbalanced_turns() {
        let mut s = session(3);
        for x in 0..2 {
            let coord = Coord::new(x, 0);
            s.board.set(coord, Cell::Occupied(Color::Black));
            s.free.remove(&coord);
        }
        type Balance = (CellsConserved, TurnBalance);
        let violations = Balance::check_all(&s).unwrap_err();
        assert_eq!(violations, vec![InvariantViolation::new(TurnBalance::description())]);
    }
}
