//! Checked/unchecked classification of failures.
//!
//! Panics are always unchecked in Rust and are never caught by this crate.
//! [`FailureClass`] extends the same distinction to error values: an error
//! that signals a programming mistake rather than an expected failure can
//! report itself as unchecked, and the classifying capture helpers
//! ([`Outcome::try_capture`], [`wrap_classified`](crate::traits::wrap_classified))
//! re-raise it instead of storing it in an outcome.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::FailureClass;
//!
//! #[derive(Debug)]
//! enum FetchError {
//!     NotFound,
//!     BadRequest,
//! }
//!
//! impl FailureClass for FetchError {
//!     fn is_unchecked(&self) -> bool {
//!         matches!(self, FetchError::BadRequest)
//!     }
//! }
//!
//! assert!(FetchError::NotFound.is_checked());
//! assert!(FetchError::BadRequest.is_unchecked());
//! ```

use crate::outcome::Outcome;
use crate::types::{CastError, OutcomeError};

/// Classification of errors as checked (expected) or unchecked (caller bug).
///
/// Checked failures are part of an operation's contract, such as a missing
/// file or a malformed input, and belong in [`Outcome::Rejected`]. Unchecked
/// failures, such as invalid arguments or state violations, indicate a
/// defect and should propagate.
pub trait FailureClass {
    /// Returns `true` if this error indicates a programming error.
    fn is_unchecked(&self) -> bool;

    /// Returns `true` if this error is an expected, capturable failure.
    ///
    /// Default implementation returns `!self.is_unchecked()`.
    #[inline]
    fn is_checked(&self) -> bool {
        !self.is_unchecked()
    }
}

/// Every violation raised by this crate is a caller bug.
impl FailureClass for OutcomeError {
    #[inline]
    fn is_unchecked(&self) -> bool {
        true
    }
}

impl<V, E> FailureClass for CastError<V, E> {
    #[inline]
    fn is_unchecked(&self) -> bool {
        true
    }
}

impl FailureClass for core::num::ParseIntError {
    #[inline]
    fn is_unchecked(&self) -> bool {
        false
    }
}

impl FailureClass for core::num::ParseFloatError {
    #[inline]
    fn is_unchecked(&self) -> bool {
        false
    }
}

impl FailureClass for core::str::Utf8Error {
    #[inline]
    fn is_unchecked(&self) -> bool {
        false
    }
}

/// `InvalidInput` means the caller passed a bad argument; every other I/O
/// failure is expected.
#[cfg(feature = "std")]
impl FailureClass for std::io::Error {
    fn is_unchecked(&self) -> bool {
        self.kind() == std::io::ErrorKind::InvalidInput
    }
}

/// Extension methods for classifying the error of a `Result`.
pub trait FailureClassExt<T, E: FailureClass> {
    /// Captures a checked error into an outcome, raising an unchecked one.
    ///
    /// # Errors
    ///
    /// Returns the error unchanged when it is unchecked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::FailureClassExt;
    /// use outcome_rail::{Outcome, OutcomeError};
    ///
    /// let checked: Result<u8, _> = "x".parse::<u8>();
    /// assert!(checked.capture_checked().unwrap().is_rejected());
    ///
    /// let unchecked: Result<u8, OutcomeError> = Err(OutcomeError::MissingValue);
    /// assert_eq!(unchecked.capture_checked(), Err(OutcomeError::MissingValue));
    /// ```
    fn capture_checked(self) -> Result<Outcome<T, E>, E>;
}

impl<T, E: FailureClass> FailureClassExt<T, E> for Result<T, E> {
    #[inline]
    fn capture_checked(self) -> Result<Outcome<T, E>, E> {
        Outcome::try_capture(|| self)
    }
}
