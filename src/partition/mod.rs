//! Single-pass separation of outcomes into values and errors.
//!
//! A [`Partition`] consumes a sequence of [`Outcome`]s once and keeps two
//! ordered buffers: accepted values and rejected errors. Empty outcomes are
//! dropped from both. Partials built over contiguous chunks of a sequence can
//! be merged with [`Partition::combine`], which concatenates both buffers in
//! order, so chunked or parallel reductions give the same result as a single
//! sequential pass.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, Partition};
//!
//! let outcomes = vec![
//!     Outcome::accept(1),
//!     Outcome::reject("err1"),
//!     Outcome::empty(),
//!     Outcome::accept(2),
//!     Outcome::reject("err2"),
//! ];
//!
//! let split: Partition<i32, &str> = outcomes.into_iter().collect();
//! let (values, errors) = split.into_vecs();
//!
//! assert_eq!(values, vec![1, 2]);
//! assert_eq!(errors, vec!["err1", "err2"]);
//! ```
pub mod iter;

pub use self::iter::OutcomeIterExt;

use crate::outcome::Outcome;
use crate::types::alloc_type::Vec;
use crate::types::Accumulator;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Values and errors split out of a sequence of outcomes.
///
/// Each buffer preserves the relative order of the outcomes it came from.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Partition<V, E> {
    values: Accumulator<V>,
    errors: Accumulator<E>,
}

impl<V, E> Partition<V, E> {
    /// Creates an empty partition, the identity of [`combine`](Self::combine).
    #[inline]
    pub fn new() -> Self {
        Self {
            values: Accumulator::new(),
            errors: Accumulator::new(),
        }
    }

    /// Routes one outcome to the matching buffer.
    ///
    /// Accepted values go to `values`, rejected errors to `errors`, and empty
    /// outcomes are dropped.
    #[inline]
    pub fn push(&mut self, outcome: Outcome<V, E>) {
        match outcome {
            Outcome::Accepted(value) => self.values.push(value),
            Outcome::Empty => {},
            Outcome::Rejected(error) => self.errors.push(error),
        }
    }

    /// Appends an accepted value directly.
    #[inline]
    pub fn push_value(&mut self, value: V) {
        self.values.push(value);
    }

    /// Appends a rejected error directly.
    #[inline]
    pub fn push_error(&mut self, error: E) {
        self.errors.push(error);
    }

    /// Moves everything from `other` after the current contents.
    ///
    /// `other` must have been built from outcomes that come after the ones in
    /// `self` for the combined order to match a sequential pass.
    #[inline]
    pub fn append(&mut self, other: &mut Self) {
        self.values.append(&mut other.values);
        self.errors.append(&mut other.errors);
    }

    /// Merges two partials built from contiguous chunks, left before right.
    ///
    /// The operation is associative with [`Partition::new`] as identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Partition};
    ///
    /// let input = vec![
    ///     Outcome::accept(1),
    ///     Outcome::reject('a'),
    ///     Outcome::accept(2),
    ///     Outcome::reject('b'),
    /// ];
    ///
    /// let (left, right) = input.split_at(2);
    /// let merged = left
    ///     .iter()
    ///     .copied()
    ///     .collect::<Partition<i32, char>>()
    ///     .combine(right.iter().copied().collect());
    ///
    /// assert_eq!(merged, input.into_iter().collect::<Partition<_, _>>());
    /// ```
    #[inline]
    pub fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    /// Borrows the accepted values in input order.
    #[inline]
    pub fn values(&self) -> core::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Borrows the rejected errors in input order.
    #[inline]
    pub fn errors(&self) -> core::slice::Iter<'_, E> {
        self.errors.iter()
    }

    /// Number of accepted values.
    #[inline]
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Number of rejected errors.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Total number of values and errors, i.e. the non-empty inputs seen.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len() + self.errors.len()
    }

    /// Returns `true` if neither buffer holds anything.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.errors.is_empty()
    }

    /// Returns `true` if at least one rejected outcome was seen.
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Consumes the partition, yielding the values.
    #[inline]
    pub fn into_values(self) -> smallvec::IntoIter<[V; 4]> {
        self.values.into_iter()
    }

    /// Consumes the partition, yielding the errors.
    #[inline]
    pub fn into_errors(self) -> smallvec::IntoIter<[E; 4]> {
        self.errors.into_iter()
    }

    /// Splits into two independently consumable iterators.
    #[inline]
    pub fn into_parts(self) -> (smallvec::IntoIter<[V; 4]>, smallvec::IntoIter<[E; 4]>) {
        (self.values.into_iter(), self.errors.into_iter())
    }

    /// Consumes the partition into `(values, errors)` vectors.
    #[inline]
    pub fn into_vecs(self) -> (Vec<V>, Vec<E>) {
        (
            self.values.into_inner().into_vec(),
            self.errors.into_inner().into_vec(),
        )
    }
}

impl<V, E> Default for Partition<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Extend<Outcome<V, E>> for Partition<V, E> {
    fn extend<I: IntoIterator<Item = Outcome<V, E>>>(&mut self, iter: I) {
        for outcome in iter {
            self.push(outcome);
        }
    }
}

/// Collects outcomes in a single pass.
impl<V, E> FromIterator<Outcome<V, E>> for Partition<V, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
        let mut partition = Self::new();
        partition.extend(iter);
        partition
    }
}
