//! Draw detection.

use super::super::Coord;
use std::collections::BTreeSet;
use tracing::instrument;

/// Checks if no free cell remains.
///
/// Called only after the win check, so a full board here is a draw.
#[instrument(skip(free), fields(free = free.len()))]
pub fn is_full(free: &BTreeSet<Coord>) -> bool {
    free.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_full() {
        assert!(is_full(&BTreeSet::new()));
    }

    #[test]
    fn test_remaining_cell_not_full() {
        let free = BTreeSet::from([Coord::new(2, 2)]);
        assert!(!is_full(&free));
    }
}
