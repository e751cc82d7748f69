//! Randomized tower height assignment.
//!
//! The lowest level (level 0) of a skip list contains every node, and each
//! level above it holds a probabilistic subset of the level below. Upon
//! insertion a node is assigned a tower height drawn from a geometric
//! distribution: the chance of reaching level `n` is `p` times the chance of
//! reaching level `n - 1`.
//!
//! The draw is capped at one level above the tallest tower currently in the
//! structure, rather than at a fixed total. A single insertion can therefore
//! raise the structure by at most one level, and the height distribution
//! depends on the order of insertions; the rebalancing pass exists to shed
//! that history when it becomes skewed.
//!
//! This is the only source of randomness in the crate, and it sits behind
//! the [`LevelGenerator`] trait so tests can substitute a deterministic
//! sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// /////////////////////////////////////////////////////////////////////////////////////////////////
// Level Generator
// /////////////////////////////////////////////////////////////////////////////////////////////////

/// Source of tower heights for newly inserted nodes.
pub trait LevelGenerator {
    /// Produce the tower height for a new node, given the tallest tower
    /// currently in the structure.
    ///
    /// The result must lie in `[1, current_max + 1]`.
    fn random(&mut self, current_max: usize) -> usize;
}

/// A level generator producing geometrically distributed heights.
///
/// Starting from a height of one, each independent trial succeeds with
/// probability `p` and adds a level; the draw stops on the first failed
/// trial or upon reaching `current_max + 1`.
pub struct GeometricalLevelGenerator {
    p: f64,
    rng: SmallRng,
}

impl GeometricalLevelGenerator {
    /// Create a new generator with success probability `p`, seeded from
    /// system entropy.
    ///
    /// # Panics
    ///
    /// `p` must be in `(0, 1)` and will panic otherwise.
    pub fn new(p: f64) -> Self {
        Self::from_rng(p, SmallRng::from_entropy())
    }

    /// Create a deterministic generator from a seed, for reproducible
    /// structures.
    ///
    /// # Panics
    ///
    /// `p` must be in `(0, 1)` and will panic otherwise.
    pub fn with_seed(p: f64, seed: u64) -> Self {
        Self::from_rng(p, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(p: f64, rng: SmallRng) -> Self {
        if p <= 0.0 || p >= 1.0 {
            panic!("p must be in (0, 1).");
        }
        GeometricalLevelGenerator { p, rng }
    }
}

impl Default for GeometricalLevelGenerator {
    fn default() -> Self {
        GeometricalLevelGenerator::new(0.5)
    }
}

impl LevelGenerator for GeometricalLevelGenerator {
    fn random(&mut self, current_max: usize) -> usize {
        let mut height = 1;
        while height <= current_max && self.rng.gen_bool(self.p) {
            height += 1;
        }
        height
    }
}
