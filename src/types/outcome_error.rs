use core::fmt::{Debug, Display, Formatter};

use crate::outcome::Outcome;

/// Caller-side violations raised by outcome operations.
///
/// These are never captured into an [`Outcome`]; they report that an
/// operation was used on the wrong variant or with an argument it refuses.
/// The one exception is [`Outcome::safe_cast`], which stores
/// [`TypeMismatch`](OutcomeError::TypeMismatch) as its rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeError {
    /// An accessor was called on a variant that cannot satisfy it.
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
    /// A constructor received an argument it does not accept.
    InvalidArgument { reason: &'static str },
    /// A runtime type check failed.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// A value was required but absent.
    MissingValue,
}

impl OutcomeError {
    #[inline]
    pub(crate) const fn invalid_state(operation: &'static str, state: &'static str) -> Self {
        Self::InvalidState { operation, state }
    }
}

impl Display for OutcomeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidState { operation, state } => {
                write!(f, "cannot call `{operation}` on a {state} outcome")
            },
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::TypeMismatch { expected, found } => {
                write!(f, "cannot cast `{found}` to `{expected}`")
            },
            Self::MissingValue => f.write_str("required value is missing"),
        }
    }
}

impl core::error::Error for OutcomeError {}

/// Failed [`Outcome::checked_cast`], carrying the untouched original outcome.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeError};
///
/// let err = Outcome::<i64, ()>::accept(5).checked_cast::<i32>().unwrap_err();
/// assert_eq!(err.expected(), "i32");
/// assert!(matches!(err.mismatch(), OutcomeError::TypeMismatch { .. }));
/// assert_eq!(err.into_outcome(), Outcome::Accepted(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastError<V, E> {
    outcome: Outcome<V, E>,
    expected: &'static str,
    found: &'static str,
}

impl<V, E> CastError<V, E> {
    #[inline]
    pub(crate) fn new(outcome: Outcome<V, E>, expected: &'static str, found: &'static str) -> Self {
        Self {
            outcome,
            expected,
            found,
        }
    }

    /// Type name the cast asked for.
    #[inline]
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// Type name of the value that was actually held.
    #[inline]
    pub fn found(&self) -> &'static str {
        self.found
    }

    /// Borrows the outcome the cast was attempted on.
    #[inline]
    pub fn outcome(&self) -> &Outcome<V, E> {
        &self.outcome
    }

    /// Gives back the outcome the cast was attempted on.
    #[inline]
    pub fn into_outcome(self) -> Outcome<V, E> {
        self.outcome
    }

    /// The mismatch as an [`OutcomeError::TypeMismatch`], without the outcome.
    #[inline]
    pub fn mismatch(&self) -> OutcomeError {
        OutcomeError::TypeMismatch {
            expected: self.expected,
            found: self.found,
        }
    }
}

impl<V, E> Display for CastError<V, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.mismatch(), f)
    }
}

impl<V: Debug, E: Debug> core::error::Error for CastError<V, E> {}

impl<V, E> From<CastError<V, E>> for OutcomeError {
    #[inline]
    fn from(error: CastError<V, E>) -> Self {
        error.mismatch()
    }
}
