//! Square detection.
//!
//! Four points are the vertices of a square, in any orientation, when the
//! six pairwise squared distances sorted ascending read `s, s, s, s, d, d`
//! with `s > 0`. All arithmetic is integer; no square roots are taken.

use super::super::{Board, Color, Coord};
use tracing::instrument;

/// A point in the plane with signed integer coordinates.
///
/// Board coordinates convert into points; tests use points directly so
/// shapes can be translated or rotated past the board's edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal component.
    pub x: i64,
    /// Vertical component.
    pub y: i64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    fn distance_sq(self, other: Point) -> i64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Self {
        Self::new(coord.x as i64, coord.y as i64)
    }
}

/// Checks whether any four of `points` form a square.
///
/// Brute force over every 4-combination, so the cost is `O(C(k, 4))` in the
/// number of points. Fine for the handful of pieces a board holds; callers
/// must not expect it to scale.
#[instrument(skip(points), fields(count = points.len()))]
pub fn has_square(points: &[Point]) -> bool {
    let k = points.len();
    if k < 4 {
        return false;
    }

    for i in 0..k {
        for j in i + 1..k {
            for l in j + 1..k {
                for m in l + 1..k {
                    if is_square([points[i], points[j], points[l], points[m]]) {
                        return true;
                    }
                }
            }
        }
    }

    false
}

/// Checks whether `color` has four pieces on the board forming a square.
#[instrument(skip(board))]
pub fn forms_square(board: &Board, color: Color) -> bool {
    let points: Vec<Point> = board.coords_of(color).map(Point::from).collect();
    has_square(&points)
}

fn is_square(quad: [Point; 4]) -> bool {
    let mut distances = [0i64; 6];
    let mut n = 0;
    for a in 0..4 {
        for b in a + 1..4 {
            distances[n] = quad[a].distance_sq(quad[b]);
            n += 1;
        }
    }
    distances.sort_unstable();

    let [side, s1, s2, s3, diagonal, d1] = distances;
    side > 0 && side == s1 && side == s2 && side == s3 && diagonal == d1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::square::Cell;

    fn points(raw: &[(i64, i64)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_unit_square() {
        assert!(has_square(&points(&[(0, 0), (0, 1), (1, 1), (1, 0)])));
    }

    #[test]
    fn test_rotated_square() {
        assert!(has_square(&points(&[(0, 0), (1, 1), (2, 0), (1, -1)])));
    }

    #[test]
    fn test_tilted_square() {
        assert!(has_square(&points(&[(0, 0), (2, 1), (1, 3), (-1, 2)])));
    }

    #[test]
    fn test_rhombus_rejected() {
        assert!(!has_square(&points(&[(0, 0), (1, 2), (2, 1), (3, 3)])));
        assert!(!has_square(&points(&[(0, 0), (2, 1), (4, 0), (2, -1)])));
    }

    #[test]
    fn test_kite_rejected() {
        assert!(!has_square(&points(&[(0, 1), (1, 0), (0, -1), (-2, 0)])));
    }

    #[test]
    fn test_rectangle_rejected() {
        assert!(!has_square(&points(&[(0, 0), (2, 0), (2, 1), (0, 1)])));
    }

    #[test]
    fn test_repeated_point_rejected() {
        assert!(!has_square(&points(&[(0, 0), (0, 0), (0, 0), (0, 0)])));
    }

    #[test]
    fn test_fewer_than_four_points() {
        assert!(!has_square(&[]));
        assert!(!has_square(&points(&[(0, 0), (0, 1), (1, 1)])));
    }

    #[test]
    fn test_square_hidden_among_other_points() {
        assert!(has_square(&points(&[
            (4, 4),
            (0, 2),
            (3, 1),
            (1, 0),
            (5, 5),
            (2, 3),
            (5, 1),
        ])));
    }

    #[test]
    fn test_forms_square_on_board() {
        let mut board = Board::new(4);
        for (x, y) in [(1, 0), (3, 1), (2, 3)] {
            board.set(Coord::new(x, y), Cell::Occupied(Color::Black));
        }
        assert!(!forms_square(&board, Color::Black));

        board.set(Coord::new(0, 2), Cell::Occupied(Color::Black));
        assert!(forms_square(&board, Color::Black));
        assert!(!forms_square(&board, Color::White));
    }
}
