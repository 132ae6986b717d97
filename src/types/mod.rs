//! Supporting types: the violation errors and the ordered buffer behind
//! [`Partition`](crate::Partition).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, OutcomeError};
//!
//! let rejected = Outcome::<i32, &str>::reject("disk full");
//! let err = rejected.get().unwrap_err();
//!
//! assert!(matches!(err, OutcomeError::InvalidState { .. }));
//! assert_eq!(err.to_string(), "cannot call `get` on a rejected outcome");
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod alloc_type;
pub mod outcome_error;

pub use accumulator::Accumulator;
pub use outcome_error::*;

use crate::outcome::Outcome;

/// SmallVec-backed collection used for partition buffers.
///
/// Uses inline storage for up to 4 elements to avoid heap allocations when
/// only a handful of outcomes are partitioned.
pub type OutcomeVec<T> = SmallVec<[T; 4]>;

/// Outcome whose failure is a type-erased error.
///
/// Any `core::error::Error + Send + Sync` converts into it through
/// [`Outcome::err_into`].
pub type DynOutcome<V> = Outcome<V, alloc_type::BoxError>;
