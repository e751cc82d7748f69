//! An ordered set backed by a skip list: elements can be efficiently
//! inserted, removed and looked up, all in expected `O(log(n))`, without any
//! tree-rebalancing logic.
//!
//! Conceptually, the backing skip list resembles something like:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! where level 0 links every element in ascending order and each level above
//! holds a randomized subset used as an express lane: a search starts at the
//! highest level and drops down as it overshoots, skipping most of the
//! elements on the way. The random tower heights come from a seedable,
//! injectable [`LevelGenerator`], and a maintenance pass
//! ([`SkipListSet::rebalance`]) rebuilds the towers when their height has
//! grown out of proportion with the number of elements.
//!
//! Nodes live in a flat arena and reference each other by integer index, so
//! the structure contains no unsafe pointer juggling and removal invalidates
//! slots explicitly.
//!
//! Elements are ordered by their `partial_cmp` and must be pairwise
//! comparable; an operation that attempts to compare an incomparable pair
//! (such as `f64::NAN` against anything) reports
//! [`OperationError::InvalidElementError`] and leaves the set unchanged.
//!
//! # Examples
//!
//! ```
//! use skipset::SkipListSet;
//!
//! let mut set = SkipListSet::new();
//! set.insert(5).unwrap();
//! set.insert(1).unwrap();
//! set.insert(9).unwrap();
//! assert_eq!(set.insert(1), Ok(false)); // already present
//!
//! assert_eq!(set.to_vec(), vec![1, 5, 9]);
//! assert_eq!(set.first(), Ok(&1));
//! assert_eq!(set.last(), Ok(&9));
//! ```

mod arena;
pub mod error;
pub mod level_generator;
pub mod skiplistset;
mod skipnode;

pub use crate::error::OperationError;
pub use crate::level_generator::{GeometricalLevelGenerator, LevelGenerator};
pub use crate::skiplistset::{IntoIter, Iter, SkipListSet};
