use crate::types::OutcomeVec;
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Append-only ordered buffer.
///
/// Wraps [`OutcomeVec`] so both sides of a [`Partition`](crate::Partition)
/// share the same push/append logic. Items keep the order they were pushed
/// in, and [`append`](Accumulator::append) keeps that order across buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Accumulator<T> {
    items: OutcomeVec<T>,
}

impl<T> Accumulator<T> {
    /// Creates a new empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: OutcomeVec::new(),
        }
    }

    /// Adds a single item at the end.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Moves every item of `other` to the end of `self`, leaving `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::types::Accumulator;
    ///
    /// let mut left: Accumulator<i32> = [1, 2].into_iter().collect();
    /// let mut right: Accumulator<i32> = [3].into_iter().collect();
    /// left.append(&mut right);
    ///
    /// assert_eq!(left.as_slice(), &[1, 2, 3]);
    /// assert!(right.is_empty());
    /// ```
    #[inline]
    pub fn append(&mut self, other: &mut Self) {
        self.items.extend(other.items.drain(..));
    }

    /// Appends every item of `iter` in iteration order.
    #[inline]
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    /// Returns `true` if nothing has been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of buffered items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Borrows the items in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Iterates over the items in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the accumulator and returns the underlying `OutcomeVec`.
    #[inline]
    pub fn into_inner(self) -> OutcomeVec<T> {
        self.items
    }
}

impl<T> Default for Accumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash> Hash for Accumulator<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T> From<OutcomeVec<T>> for Accumulator<T> {
    fn from(items: OutcomeVec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Accumulator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Accumulator<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Accumulator<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
