//! Extension trait for turning `Result` and `Option` into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//! use outcome_rail::Outcome;
//!
//! let from_result: Outcome<u8, &str> = Err("bad").into_outcome();
//! assert!(from_result.is_rejected());
//!
//! let from_option: Outcome<u8, &str> = None.into_outcome();
//! assert!(from_option.is_empty());
//! ```

use crate::outcome::Outcome;

/// Conversion into an [`Outcome`].
///
/// `Ok`/`Some` become `Accepted`, `Err` becomes `Rejected` and `None`
/// becomes `Empty`.
pub trait IntoOutcome<V, E> {
    /// Converts `self` into the matching outcome variant.
    fn into_outcome(self) -> Outcome<V, E>;
}

impl<V, E> IntoOutcome<V, E> for Result<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        Outcome::from(self)
    }
}

impl<V, E> IntoOutcome<V, E> for Option<V> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        Outcome::from_option(self)
    }
}

impl<V, E> IntoOutcome<V, E> for Outcome<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        self
    }
}
