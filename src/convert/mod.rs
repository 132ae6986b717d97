//! Conversions between [`Outcome`], `Result` and `Option`.
//!
//! These free functions mirror the `From` impls and inherent methods for use
//! as plain function pointers, e.g. in `Iterator::map`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::{option_to_outcome, outcome_to_result};
//! use outcome_rail::Outcome;
//!
//! let outcomes: Vec<Outcome<i32, &str>> = vec![Some(1), None].into_iter().map(option_to_outcome).collect();
//! assert_eq!(outcomes, vec![Outcome::Accepted(1), Outcome::Empty]);
//!
//! let results: Vec<_> = outcomes.into_iter().map(outcome_to_result).collect();
//! assert_eq!(results, vec![Ok(Some(1)), Ok(None)]);
//! ```
use crate::outcome::Outcome;
use crate::partition::Partition;
use crate::types::alloc_type::Vec;

/// `Ok` becomes `Accepted`, `Err` becomes `Rejected`.
#[inline]
pub fn result_to_outcome<V, E>(result: Result<V, E>) -> Outcome<V, E> {
    Outcome::from(result)
}

/// `Some` becomes `Accepted`, `None` becomes `Empty`.
#[inline]
pub fn option_to_outcome<V, E>(value: Option<V>) -> Outcome<V, E> {
    Outcome::from_option(value)
}

/// See [`Outcome::into_result`].
#[inline]
pub fn outcome_to_result<V, E>(outcome: Outcome<V, E>) -> Result<Option<V>, E> {
    outcome.into_result()
}

/// Keeps the accepted value; empty and rejected outcomes become `None`.
#[inline]
pub fn outcome_to_option<V, E>(outcome: Outcome<V, E>) -> Option<V> {
    outcome.ok()
}

/// Collapses the result of a classifying capture back into one outcome.
///
/// A re-raised unchecked error is folded back in as `Rejected`, for callers
/// that want every failure captured after all.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::flatten_raised;
/// use outcome_rail::{Outcome, OutcomeError};
///
/// let raised: Result<Outcome<u8, OutcomeError>, OutcomeError> = Err(OutcomeError::MissingValue);
/// assert_eq!(flatten_raised(raised), Outcome::Rejected(OutcomeError::MissingValue));
/// ```
#[inline]
pub fn flatten_raised<V, E>(raised: Result<Outcome<V, E>, E>) -> Outcome<V, E> {
    match raised {
        Ok(outcome) => outcome,
        Err(error) => Outcome::Rejected(error),
    }
}

/// Turns a partition back into a single `Result`: all values, or all errors.
///
/// # Errors
///
/// Returns every collected error, in order, if at least one was seen.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::partition_to_result;
/// use outcome_rail::{Outcome, Partition};
///
/// let clean: Partition<i32, &str> = vec![Outcome::accept(1), Outcome::empty()].into_iter().collect();
/// assert_eq!(partition_to_result(clean), Ok(vec![1]));
///
/// let dirty: Partition<i32, &str> = vec![Outcome::accept(1), Outcome::reject("e")].into_iter().collect();
/// assert_eq!(partition_to_result(dirty), Err(vec!["e"]));
/// ```
pub fn partition_to_result<V, E>(partition: Partition<V, E>) -> Result<Vec<V>, Vec<E>> {
    let (values, errors) = partition.into_vecs();
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}
