//! Move selection for automated players.
//!
//! The engine owns one selector and consults it whenever an automated
//! player is to move. Selection never fails while a free cell remains.

use super::{Board, Coord};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Policy an automated player uses to pick its next cell.
pub trait MoveSelector: std::fmt::Debug + Send {
    /// Picks one of `free`. Returns `None` only when `free` is empty.
    fn select(&mut self, board: &Board, free: &BTreeSet<Coord>) -> Option<Coord>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Picks the lowest free coordinate in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFree;

impl MoveSelector for FirstFree {
    #[instrument(skip_all)]
    fn select(&mut self, _board: &Board, free: &BTreeSet<Coord>) -> Option<Coord> {
        let choice = free.first().copied();
        debug!(?choice, "First free cell");
        choice
    }

    fn name(&self) -> &str {
        "first-free"
    }
}

/// Picks uniformly among free cells from a seeded ChaCha8 stream.
///
/// The same seed replays the same choices for the same sequence of boards.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SeededRandom {
    /// Creates a selector seeded with `seed`.
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this selector was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MoveSelector for SeededRandom {
    #[instrument(skip_all, fields(seed = self.seed))]
    fn select(&mut self, _board: &Board, free: &BTreeSet<Coord>) -> Option<Coord> {
        if free.is_empty() {
            return None;
        }
        let index = self.inner.gen_range(0..free.len());
        let choice = free.iter().nth(index).copied();
        debug!(index, ?choice, "Random free cell");
        choice
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Which selector to build, as named in configuration and on the command line.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SelectorKind {
    /// [`FirstFree`].
    #[default]
    FirstFree,
    /// [`SeededRandom`].
    Random,
}

impl SelectorKind {
    /// Builds the selector. `seed` is ignored by deterministic policies.
    #[instrument]
    pub fn build(self, seed: u64) -> Box<dyn MoveSelector> {
        match self {
            SelectorKind::FirstFree => Box::new(FirstFree),
            SelectorKind::Random => Box::new(SeededRandom::new(seed)),
        }
    }
}
