use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;

use crate::arena::{NodeArena, NodeId};
use crate::error::OperationError;
use crate::level_generator::{GeometricalLevelGenerator, LevelGenerator};
use crate::skipnode::SkipNode;

// /////////////////////////////////////////////////////////////////////////////////////////////////
// SkipListSet
// /////////////////////////////////////////////////////////////////////////////////////////////////

/// Rebuild when the tower height exceeds the log of the length in this base.
const REBALANCE_LOG_BASE: f64 = 4.0;

/// An ordered set backed by a skip list.
///
/// Elements are kept sorted at all times and there are no duplicates;
/// inserting a value that is already present is a no-op reporting `false`.
/// Insertion, removal and membership all run in expected `O(log n)`.
///
/// Ordering uses the elements' `partial_cmp`. Every element must be
/// comparable with every other; an operation that runs into an incomparable
/// pair (such as `f64::NAN`) fails with
/// [`OperationError::InvalidElementError`] before changing anything. The
/// ordering relation must also be consistent and transitive; an ill-behaved
/// one leaves the iteration order unspecified, though the structure itself
/// stays safe.
///
/// The heights of the internal towers come from a [`LevelGenerator`], by
/// default a geometric draw with `p = 1/2` capped one level above the
/// tallest tower currently in use. The generator is injectable
/// ([`SkipListSet::with_generator`]) and seedable ([`SkipListSet::with_seed`])
/// so a structure can be made fully deterministic.
pub struct SkipListSet<T, G = GeometricalLevelGenerator> {
    arena: NodeArena<T>,
    head: NodeId,
    max_level: usize,
    len: usize,
    level_generator: G,
}

struct SearchPath {
    // The last node strictly before the target, one per level.
    update: Vec<NodeId>,
    // The level-0 successor of update[0]: the only place the target can be.
    next: Option<NodeId>,
}

#[inline]
fn order<T: PartialOrd>(a: &T, b: &T) -> Result<Ordering, OperationError> {
    a.partial_cmp(b).ok_or(OperationError::InvalidElementError)
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<T: PartialOrd> SkipListSet<T> {
    /// Create a new empty set with the default geometric level generator
    /// (`p = 1/2`) seeded from system entropy.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let mut set: SkipListSet<i64> = SkipListSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_generator(GeometricalLevelGenerator::default())
    }

    /// Create a new empty set whose level draws are reproducible from the
    /// given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let mut set = SkipListSet::with_seed(42);
    /// set.insert(3).unwrap();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    /// ```
    #[inline]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(GeometricalLevelGenerator::with_seed(0.5, seed))
    }
}

impl<T: PartialOrd, G: LevelGenerator> SkipListSet<T, G> {
    /// Create a new empty set using the provided level generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::{GeometricalLevelGenerator, SkipListSet};
    ///
    /// let lg = GeometricalLevelGenerator::with_seed(0.5, 7);
    /// let mut set: SkipListSet<i64, _> = SkipListSet::with_generator(lg);
    /// set.insert(1).unwrap();
    /// ```
    pub fn with_generator(level_generator: G) -> Self {
        let mut arena = NodeArena::new();
        let head = arena.alloc(SkipNode::head());
        SkipListSet {
            arena,
            head,
            max_level: 1,
            len: 0,
            level_generator,
        }
    }

    /// Insert a value. Returns `Ok(true)` if it was not yet present and
    /// `Ok(false)` if it was; a duplicate insert changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let mut set = SkipListSet::new();
    /// assert_eq!(set.insert(5), Ok(true));
    /// assert_eq!(set.insert(5), Ok(false));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<bool, OperationError> {
        let SearchPath { mut update, next } = self.search_path(&value)?;
        if let Some(next) = next {
            if order(self.value_of(next), &value)? == Ordering::Equal {
                return Ok(false);
            }
        }

        let height = self.level_generator.random(self.max_level).max(1);
        // A node taller than anything seen so far adds levels to the head,
        // and the head is the recorded predecessor on each fresh level.
        while self.max_level < height {
            self.arena.get_mut(self.head).links.push(None);
            update.push(self.head);
            self.max_level += 1;
        }

        let node = self.arena.alloc(SkipNode::new(value, height));
        for (lvl, &pred) in update.iter().take(height).enumerate() {
            let succ = self.arena[pred].links[lvl];
            self.arena.get_mut(node).links[lvl] = succ;
            self.arena.get_mut(pred).links[lvl] = Some(node);
        }

        self.len += 1;
        debug_assert_eq!(self.arena.len(), self.len + 1);
        Ok(true)
    }

    /// Remove a value. Returns `Ok(true)` if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let mut set = SkipListSet::new();
    /// set.insert(10).unwrap();
    /// assert_eq!(set.remove(&10), Ok(true));
    /// assert_eq!(set.remove(&10), Ok(false));
    /// assert!(set.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<bool, OperationError> {
        let SearchPath { update, next } = self.search_path(value)?;
        let target = match next {
            Some(next) => {
                if order(self.value_of(next), value)? != Ordering::Equal {
                    return Ok(false);
                }
                next
            }
            None => return Ok(false),
        };

        // The target occupies every level below its height, and the search
        // guarantees the recorded predecessor at each of those levels links
        // straight to it; unlink at all of them, not just until the first
        // apparent mismatch.
        let height = self.arena[target].height();
        for (lvl, &pred) in update.iter().take(height).enumerate() {
            debug_assert_eq!(self.arena[pred].links[lvl], Some(target));
            let succ = self.arena[target].links[lvl];
            self.arena.get_mut(pred).links[lvl] = succ;
        }

        self.arena.release(target);
        self.len -= 1;
        self.shrink_levels();
        Ok(true)
    }

    /// Insert every value of an iterator. Returns whether the set changed;
    /// on change, the structure is rebalanced if it has grown skewed.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let mut set = SkipListSet::new();
    /// assert_eq!(set.insert_all(vec![4, 2, 8]), Ok(true));
    /// assert_eq!(set.insert_all(vec![4, 2, 8]), Ok(false));
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn insert_all<I>(&mut self, values: I) -> Result<bool, OperationError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut modified = false;
        for value in values {
            if self.insert(value)? {
                modified = true;
            }
        }
        if modified {
            self.rebalance()?;
        }
        Ok(modified)
    }

    /// Remove every listed value. Returns whether the set changed; on
    /// change, the structure is rebalanced if it has grown skewed.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let mut set = SkipListSet::new();
    /// set.insert_all(vec![1, 2, 3]).unwrap();
    /// assert_eq!(set.remove_all(&[2, 9]), Ok(true));
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    /// ```
    pub fn remove_all(&mut self, values: &[T]) -> Result<bool, OperationError> {
        let mut modified = false;
        for value in values {
            if self.remove(value)? {
                modified = true;
            }
        }
        if modified {
            self.rebalance()?;
        }
        Ok(modified)
    }

    /// Rebuild the structure from scratch when the towers have grown
    /// disproportionately tall for the number of elements, discarding the
    /// accumulated height history. The observable contents are unchanged:
    /// same elements, same order.
    ///
    /// Never required for correctness; it bounds the expected search cost
    /// after heavy churn.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let mut set = SkipListSet::with_seed(3);
    /// set.insert_all(0..100).unwrap();
    /// let before = set.to_vec();
    /// set.rebalance().unwrap();
    /// assert_eq!(set.to_vec(), before);
    /// ```
    pub fn rebalance(&mut self) -> Result<(), OperationError> {
        if (self.max_level as f64) > (self.len as f64).ln() / REBALANCE_LOG_BASE.ln() {
            self.rebuild()?;
        }
        Ok(())
    }

    /// Tears the list down to its values and reinserts them in order with
    /// freshly drawn tower heights.
    fn rebuild(&mut self) -> Result<(), OperationError> {
        let mut values = Vec::with_capacity(self.len);
        let mut next = self.arena[self.head].links[0];
        while let Some(id) = next {
            next = self.arena[id].links[0];
            let value = self
                .arena
                .release(id)
                .into_inner()
                .expect("Encountered a value-less node.");
            values.push(value);
        }
        self.clear();
        for value in values {
            self.insert(value)?;
        }
        Ok(())
    }
}

impl<T: PartialOrd, G> SkipListSet<T, G> {
    /// Returns `true` if the value is contained in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let set: SkipListSet<i64> = (0..10).collect();
    /// assert_eq!(set.contains(&4), Ok(true));
    /// assert_eq!(set.contains(&15), Ok(false));
    /// ```
    pub fn contains(&self, value: &T) -> Result<bool, OperationError> {
        match self.search_path(value)?.next {
            Some(next) => Ok(order(self.value_of(next), value)? == Ordering::Equal),
            None => Ok(false),
        }
    }

    /// Returns `true` if every listed value is contained in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let set: SkipListSet<i64> = (0..10).collect();
    /// assert_eq!(set.contains_all(&[2, 4, 6]), Ok(true));
    /// assert_eq!(set.contains_all(&[2, 40]), Ok(false));
    /// ```
    pub fn contains_all(&self, values: &[T]) -> Result<bool, OperationError> {
        for value in values {
            if !self.contains(value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Walks the towers from the highest level down to level 0, recording at
    /// each level the last node whose value is strictly less than the
    /// target. Shared by membership, insertion and removal; only what the
    /// caller does with the result differs.
    fn search_path(&self, value: &T) -> Result<SearchPath, OperationError> {
        let mut update = vec![self.head; self.max_level];
        let mut node = self.head;

        let mut lvl = self.max_level;
        while lvl > 0 {
            lvl -= 1;

            while let Some(next) = self.arena[node].links[lvl] {
                if order(self.value_of(next), value)? == Ordering::Less {
                    node = next;
                } else {
                    break;
                }
            }
            update[lvl] = node;
        }

        let next = self.arena[node].links[0];
        Ok(SearchPath { update, next })
    }
}

impl<T, G> SkipListSet<T, G> {
    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let set: SkipListSet<i64> = (0..10).collect();
    /// assert_eq!(set.len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let mut set = SkipListSet::new();
    /// assert!(set.is_empty());
    /// set.insert(1).unwrap();
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let mut set: SkipListSet<i64> = (0..10).collect();
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = self.arena.alloc(SkipNode::head());
        self.max_level = 1;
        self.len = 0;
    }

    /// Returns the smallest element, or an error if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::{OperationError, SkipListSet};
    ///
    /// let mut set = SkipListSet::new();
    /// assert_eq!(set.first(), Err(OperationError::EmptyError));
    /// set.insert(2).unwrap();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.first(), Ok(&1));
    /// ```
    #[inline]
    pub fn first(&self) -> Result<&T, OperationError> {
        match self.arena[self.head].links[0] {
            Some(next) => Ok(self.value_of(next)),
            None => Err(OperationError::EmptyError),
        }
    }

    /// Returns the largest element, or an error if the set is empty.
    ///
    /// Walks the towers from the top level down, advancing while a forward
    /// link exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::{OperationError, SkipListSet};
    ///
    /// let mut set = SkipListSet::new();
    /// assert_eq!(set.last(), Err(OperationError::EmptyError));
    /// set.insert(2).unwrap();
    /// set.insert(5).unwrap();
    /// assert_eq!(set.last(), Ok(&5));
    /// ```
    pub fn last(&self) -> Result<&T, OperationError> {
        let mut node = self.head;

        let mut lvl = self.max_level;
        while lvl > 0 {
            lvl -= 1;
            while let Some(next) = self.arena[node].links[lvl] {
                node = next;
            }
        }

        if self.arena[node].is_head() {
            Err(OperationError::EmptyError)
        } else {
            Ok(self.value_of(node))
        }
    }

    /// Creates an iterator over the elements in ascending order.
    ///
    /// The iterator is lazy and one-shot: it walks the lowest level of the
    /// structure as it stood when the iterator was created. The borrow
    /// checker rules out mutation for as long as it is alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let set: SkipListSet<i64> = vec![3, 1, 2].into_iter().collect();
    /// let values: Vec<&i64> = set.iter().collect();
    /// assert_eq!(values, vec![&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            next: self.arena[self.head].links[0],
            size: self.len,
        }
    }

    /// Copies the elements into a `Vec`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let set: SkipListSet<i64> = vec![5, 1, 9, 3].into_iter().collect();
    /// assert_eq!(set.to_vec(), vec![1, 3, 5, 9]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// A view of the elements strictly below a bound. Not supported; fails
    /// unconditionally.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::{OperationError, SkipListSet};
    ///
    /// let set: SkipListSet<i64> = (0..10).collect();
    /// assert_eq!(
    ///     set.head_set(&5).err(),
    ///     Some(OperationError::NotSupportedError("head_set"))
    /// );
    /// ```
    pub fn head_set(&self, _to: &T) -> Result<Self, OperationError> {
        Err(OperationError::NotSupportedError("head_set"))
    }

    /// A view of the elements within a half-open bound range. Not
    /// supported; fails unconditionally.
    pub fn sub_set(&self, _from: &T, _to: &T) -> Result<Self, OperationError> {
        Err(OperationError::NotSupportedError("sub_set"))
    }

    /// A view of the elements at or above a bound. Not supported; fails
    /// unconditionally.
    pub fn tail_set(&self, _from: &T) -> Result<Self, OperationError> {
        Err(OperationError::NotSupportedError("tail_set"))
    }

    /// Retain only the elements also present in `values`. Not supported;
    /// fails unconditionally.
    pub fn retain_all(&mut self, _values: &[T]) -> Result<bool, OperationError> {
        Err(OperationError::NotSupportedError("retain_all"))
    }

    #[inline]
    fn value_of(&self, id: NodeId) -> &T {
        self.arena[id]
            .value
            .as_ref()
            .expect("Encountered a value-less node.")
    }

    /// Drops empty levels from the top of the head tower, keeping it exactly
    /// as tall as the tallest live node (one level when empty).
    fn shrink_levels(&mut self) {
        while self.max_level > 1 && self.arena[self.head].links[self.max_level - 1].is_none() {
            self.arena.get_mut(self.head).links.pop();
            self.max_level -= 1;
        }
    }
}

impl<T: Hash, G> SkipListSet<T, G> {
    /// A hash of the set computed as the wrapping sum of the elements'
    /// hashes. The sum makes it independent of iteration order, so two sets
    /// that are equal hash alike however they were built.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipListSet;
    ///
    /// let a: SkipListSet<i64> = vec![1, 2, 3].into_iter().collect();
    /// let b: SkipListSet<i64> = vec![3, 1, 2].into_iter().collect();
    /// assert_eq!(a.hash_code(), b.hash_code());
    /// ```
    pub fn hash_code(&self) -> u64 {
        self.iter()
            .map(|value| {
                let mut hasher = DefaultHasher::new();
                value.hash(&mut hasher);
                hasher.finish()
            })
            .fold(0u64, u64::wrapping_add)
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<T: PartialOrd> Default for SkipListSet<T> {
    fn default() -> Self {
        SkipListSet::new()
    }
}

/// Two sets are equal when they have the same length and pairwise equal
/// elements in ascending order, which for ordering-consistent elements is
/// the same as mutual containment. An element that is not equal to itself
/// (such as `f64::NAN`) makes the sets unequal rather than raising an
/// error.
impl<A, GA, B, GB> PartialEq<SkipListSet<B, GB>> for SkipListSet<A, GA>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &SkipListSet<B, GB>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, G> Eq for SkipListSet<T, G> {}

impl<T: Hash, G> Hash for SkipListSet<T, G> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T: PartialOrd, G: LevelGenerator> Extend<T> for SkipListSet<T, G> {
    /// # Panics
    ///
    /// Panics if an element cannot be ordered against the existing ones;
    /// `Extend` has no way to report the error. Use
    /// [`SkipListSet::insert_all`] to handle it instead.
    #[inline]
    fn extend<I: iter::IntoIterator<Item = T>>(&mut self, iterable: I) {
        for element in iterable {
            self.insert(element).expect("Element cannot be ordered.");
        }
    }
}

impl<T: PartialOrd> iter::FromIterator<T> for SkipListSet<T> {
    /// # Panics
    ///
    /// Panics if an element cannot be ordered; see [`Extend`].
    #[inline]
    fn from_iter<I>(iter: I) -> SkipListSet<T>
    where
        I: iter::IntoIterator<Item = T>,
    {
        let mut set = SkipListSet::new();
        set.extend(iter);
        set
    }
}

impl<T, G> iter::IntoIterator for SkipListSet<T, G> {
    type Item = T;
    type IntoIter = IntoIter<T, G>;

    fn into_iter(self) -> IntoIter<T, G> {
        IntoIter { set: self }
    }
}

impl<'a, T, G> iter::IntoIterator for &'a SkipListSet<T, G> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug, G> fmt::Debug for SkipListSet<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", entry)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Display, G> fmt::Display for SkipListSet<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry)?;
        }
        write!(f, "]")
    }
}

// ///////////////////////////////////////////////
// Extra structs
// ///////////////////////////////////////////////

/// Borrowing iterator over the elements in ascending order.
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    next: Option<NodeId>,
    size: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.next?;
        let node = &self.arena[id];
        self.next = node.links[0];
        self.size = self.size.saturating_sub(1);
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size, Some(self.size))
    }
}

/// Owning iterator; pops elements off the front of the list.
pub struct IntoIter<T, G = GeometricalLevelGenerator> {
    set: SkipListSet<T, G>,
}

impl<T, G> Iterator for IntoIter<T, G> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let head = self.set.head;
        let id = self.set.arena[head].links[0]?;
        let node = self.set.arena.release(id);
        // The front node is first at every level it occupies, so the head
        // links straight to it there.
        for (lvl, &link) in node.links.iter().enumerate() {
            self.set.arena.get_mut(head).links[lvl] = link;
        }
        self.set.len -= 1;
        node.into_inner()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.len, Some(self.set.len))
    }
}

// /////////////////////////////////////////////////////////////////////////////////////////////////
// Tests
// /////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
impl<T: PartialOrd, G> SkipListSet<T, G> {
    /// Checks the integrity of the structure.
    fn check(&self) {
        let head = &self.arena[self.head];
        assert!(head.is_head());
        assert!(self.max_level >= 1);
        assert_eq!(head.height(), self.max_level);

        // Level 0 holds every element, strictly ascending.
        let mut ids = Vec::new();
        let mut prev: Option<&T> = None;
        let mut next = head.links[0];
        while let Some(id) = next {
            let node = &self.arena[id];
            let value = node.value.as_ref().expect("value-less node in level 0");
            if let Some(prev) = prev {
                assert_eq!(prev.partial_cmp(value), Some(Ordering::Less));
            }
            assert!(node.height() <= self.max_level);
            prev = Some(value);
            ids.push(id);
            next = node.links[0];
        }
        assert_eq!(ids.len(), self.len);
        assert_eq!(self.arena.len(), self.len + 1);

        // The maximum level is the tallest live tower, or 1 when empty.
        let tallest = ids
            .iter()
            .map(|&id| self.arena[id].height())
            .max()
            .unwrap_or(1);
        assert_eq!(self.max_level, tallest);

        // Every level above 0 is an ordered subsequence of the level below.
        for lvl in 1..self.max_level {
            let mut below = Vec::new();
            let mut next = head.links[lvl - 1];
            while let Some(id) = next {
                below.push(id);
                next = self.arena[id].links[lvl - 1];
            }

            let mut below = below.into_iter();
            let mut next = head.links[lvl];
            while let Some(id) = next {
                assert!(self.arena[id].height() > lvl);
                assert!(
                    below.any(|other| other == id),
                    "node not present in the level below"
                );
                next = self.arena[id].links[lvl];
            }
        }
    }
}
