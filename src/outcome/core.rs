use core::any::{type_name, Any, TypeId};
use core::fmt::Debug;

use crate::traits::FailureClass;
use crate::types::alloc_type::Box;
use crate::types::{CastError, OutcomeError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tri-state result that keeps "succeeded with nothing" apart from "failed".
///
/// `Outcome<V, E>` is either a present value, an intentional absence, or a
/// captured failure. Unlike `Result<Option<V>, E>` the three states are flat,
/// so an outcome can be inspected, transformed and partitioned without
/// nesting.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `V` and `E` do
/// (requires the `serde` feature).
///
/// # Type Parameters
///
/// * `V` - The value type
/// * `E` - The error type
///
/// # Variants
///
/// * `Accepted(V)` - The operation succeeded with a value
/// * `Empty` - The operation succeeded without producing a value
/// * `Rejected(E)` - The operation failed
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let accepted = Outcome::<i32, &str>::accept(42);
/// assert!(accepted.is_present());
///
/// let empty = Outcome::<i32, &str>::from_option(None);
/// assert!(empty.is_empty());
/// assert!(empty.is_accepted());
///
/// let rejected = Outcome::<i32, &str>::reject("boom");
/// assert!(rejected.is_rejected());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash, Default)]
pub enum Outcome<V, E> {
    Accepted(V),
    #[default]
    Empty,
    Rejected(E),
}

impl<V, E> Outcome<V, E> {
    /// Creates an accepted outcome holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, ()>::accept("config.toml");
    /// assert_eq!(outcome.get(), Ok(Some(&"config.toml")));
    /// ```
    #[inline]
    pub fn accept(value: V) -> Self {
        Self::Accepted(value)
    }

    /// Creates an outcome from a possibly absent value.
    ///
    /// `None` becomes [`Outcome::Empty`], never a rejection.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, ()>::from_option(Some(1)).is_present());
    /// assert!(Outcome::<i32, ()>::from_option(None).is_empty());
    /// ```
    #[inline]
    pub fn from_option(value: Option<V>) -> Self {
        match value {
            Some(value) => Self::Accepted(value),
            None => Self::Empty,
        }
    }

    /// Returns the empty outcome.
    ///
    /// All empty outcomes compare equal and carry no allocation.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Creates a rejected outcome holding `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::reject("not found");
    /// assert_eq!(outcome.error(), Ok(&"not found"));
    /// ```
    #[inline]
    pub fn reject(error: E) -> Self {
        Self::Rejected(error)
    }

    /// Creates a rejected outcome from an error that may be absent.
    ///
    /// A rejection must always carry its error, so `None` is refused with
    /// [`OutcomeError::InvalidArgument`] instead of producing an outcome.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidArgument`] when `error` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeError};
    ///
    /// let rejected = Outcome::<i32, &str>::try_reject(Some("boom"));
    /// assert_eq!(rejected, Ok(Outcome::Rejected("boom")));
    ///
    /// let refused = Outcome::<i32, &str>::try_reject(None);
    /// assert!(matches!(refused, Err(OutcomeError::InvalidArgument { .. })));
    /// ```
    #[inline]
    pub fn try_reject(error: Option<E>) -> Result<Self, OutcomeError> {
        error.map(Self::Rejected).ok_or(OutcomeError::InvalidArgument {
            reason: "a rejected outcome requires an error",
        })
    }

    /// Classifies a value-or-error into the matching variant.
    ///
    /// `Err` becomes `Rejected`, `Ok(None)` becomes `Empty` and `Ok(Some(v))`
    /// becomes `Accepted(v)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::from_result(Err("bad")).is_rejected());
    /// assert!(Outcome::<i32, &str>::from_result(Ok(None)).is_empty());
    /// assert!(Outcome::<i32, &str>::from_result(Ok(Some(3))).is_present());
    /// ```
    #[inline]
    pub fn from_result(result: Result<Option<V>, E>) -> Self {
        match result {
            Ok(value) => Self::from_option(value),
            Err(error) => Self::Rejected(error),
        }
    }

    /// Runs a fallible capability and captures its result.
    ///
    /// A returned error becomes `Rejected`. Panics are not caught: they are
    /// programming errors and keep unwinding past the outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let parsed: Outcome<u16, std::num::ParseIntError> = Outcome::capture(|| "8080".parse());
    /// assert_eq!(parsed, Outcome::Accepted(8080));
    ///
    /// let failed: Outcome<u16, std::num::ParseIntError> = Outcome::capture(|| "port".parse());
    /// assert!(failed.is_rejected());
    /// ```
    #[inline]
    pub fn capture<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<V, E>,
    {
        match f() {
            Ok(value) => Self::Accepted(value),
            Err(error) => Self::Rejected(error),
        }
    }

    /// Like [`capture`](Self::capture), for capabilities that may return no value.
    #[inline]
    pub fn capture_option<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<Option<V>, E>,
    {
        Self::from_result(f())
    }

    /// Runs a fallible capability, capturing checked failures only.
    ///
    /// Errors that report themselves as unchecked through
    /// [`FailureClass::is_unchecked`] are handed back in the outer `Err` so the
    /// caller can propagate them with `?`. Every other error is captured as
    /// `Rejected`.
    ///
    /// # Errors
    ///
    /// Returns the capability's error unchanged when it is unchecked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{FailureClass, Outcome};
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum LoadError {
    ///     Missing,
    ///     Corrupted,
    /// }
    ///
    /// impl FailureClass for LoadError {
    ///     fn is_unchecked(&self) -> bool {
    ///         matches!(self, LoadError::Corrupted)
    ///     }
    /// }
    ///
    /// let captured = Outcome::<(), LoadError>::try_capture(|| Err(LoadError::Missing));
    /// assert_eq!(captured, Ok(Outcome::Rejected(LoadError::Missing)));
    ///
    /// let raised = Outcome::<(), LoadError>::try_capture(|| Err(LoadError::Corrupted));
    /// assert_eq!(raised, Err(LoadError::Corrupted));
    /// ```
    pub fn try_capture<F>(f: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<V, E>,
        E: FailureClass,
    {
        match f() {
            Ok(value) => Ok(Self::Accepted(value)),
            Err(error) if error.is_unchecked() => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error_type = type_name::<E>(), "re-raising unchecked failure");
                Err(error)
            },
            Err(error) => Ok(Self::Rejected(error)),
        }
    }

    /// Returns `true` unless the outcome is rejected.
    ///
    /// Both `Accepted` and `Empty` count as accepted: the operation did not
    /// fail.
    #[must_use]
    #[inline]
    pub fn is_accepted(&self) -> bool {
        !self.is_rejected()
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Returns `true` if the outcome succeeded without a value.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if the outcome holds an error.
    #[must_use]
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Name of the current variant, in lower case.
    #[must_use]
    #[inline]
    pub fn state(&self) -> &'static str {
        match self {
            Self::Accepted(_) => "accepted",
            Self::Empty => "empty",
            Self::Rejected(_) => "rejected",
        }
    }

    /// Type name of the held value, or `None` when no value is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<u8, ()>::accept(1).value_type_name(), Some("u8"));
    /// assert_eq!(Outcome::<u8, ()>::empty().value_type_name(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn value_type_name(&self) -> Option<&'static str> {
        match self {
            Self::Accepted(_) => Some(type_name::<V>()),
            _ => None,
        }
    }

    /// Borrows the value: `Some` when accepted, `None` when empty.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidState`] when the outcome is rejected,
    /// since a failure has no value to read.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeError};
    ///
    /// assert_eq!(Outcome::<i32, &str>::accept(7).get(), Ok(Some(&7)));
    /// assert_eq!(Outcome::<i32, &str>::empty().get(), Ok(None));
    /// assert!(matches!(
    ///     Outcome::<i32, &str>::reject("e").get(),
    ///     Err(OutcomeError::InvalidState { .. })
    /// ));
    /// ```
    #[inline]
    pub fn get(&self) -> Result<Option<&V>, OutcomeError> {
        match self {
            Self::Accepted(value) => Ok(Some(value)),
            Self::Empty => Ok(None),
            Self::Rejected(_) => Err(OutcomeError::invalid_state("get", self.state())),
        }
    }

    /// Borrows the error of a rejected outcome.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidState`] for accepted and empty outcomes.
    #[inline]
    pub fn error(&self) -> Result<&E, OutcomeError> {
        match self {
            Self::Rejected(error) => Ok(error),
            _ => Err(OutcomeError::invalid_state("error", self.state())),
        }
    }

    /// Owned counterpart of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidState`] when the outcome is rejected.
    #[inline]
    pub fn into_value(self) -> Result<Option<V>, OutcomeError> {
        match self {
            Self::Accepted(value) => Ok(Some(value)),
            Self::Empty => Ok(None),
            Self::Rejected(_) => Err(OutcomeError::invalid_state("into_value", "rejected")),
        }
    }

    /// Owned counterpart of [`error`](Self::error).
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidState`] for accepted and empty outcomes.
    #[inline]
    pub fn into_error(self) -> Result<E, OutcomeError> {
        match self {
            Self::Rejected(error) => Ok(error),
            other => Err(OutcomeError::invalid_state("into_error", other.state())),
        }
    }

    /// Returns the value, or `fallback` when the outcome is empty or rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::accept(5).unwrap_or(99), 5);
    /// assert_eq!(Outcome::<i32, &str>::empty().unwrap_or(99), 99);
    /// assert_eq!(Outcome::<i32, &str>::reject("e").unwrap_or(99), 99);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, fallback: V) -> V {
        match self {
            Self::Accepted(value) => value,
            _ => fallback,
        }
    }

    /// Returns the value, or computes one when the outcome is empty or rejected.
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Accepted(value) => value,
            _ => f(),
        }
    }

    /// Returns the value, or `V::default()` when empty or rejected.
    #[must_use]
    #[inline]
    pub fn unwrap_or_default(self) -> V
    where
        V: Default,
    {
        self.unwrap_or_else(V::default)
    }

    /// Converts into a `Result`, propagating the raw error.
    ///
    /// An empty outcome is a success without a value and becomes `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns the contained error when the outcome is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn port(raw: &str) -> Result<Option<u16>, std::num::ParseIntError> {
    ///     Outcome::capture(|| raw.parse::<u16>()).into_result()
    /// }
    ///
    /// assert_eq!(port("443"), Ok(Some(443)));
    /// assert!(port("https").is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<Option<V>, E> {
        match self {
            Self::Accepted(value) => Ok(Some(value)),
            Self::Empty => Ok(None),
            Self::Rejected(error) => Err(error),
        }
    }

    /// Returns the value, panicking with `msg` and the error when rejected.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is rejected.
    #[track_caller]
    #[inline]
    pub fn expect_accepted(self, msg: &str) -> Option<V>
    where
        E: Debug,
    {
        match self {
            Self::Accepted(value) => Some(value),
            Self::Empty => None,
            Self::Rejected(error) => panic!("{msg}: {error:?}"),
        }
    }

    /// Returns the value, panicking with the error when rejected.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is rejected.
    #[track_caller]
    #[inline]
    pub fn unwrap_accepted(self) -> Option<V>
    where
        E: Debug,
    {
        self.expect_accepted("called `Outcome::unwrap_accepted()` on a `Rejected` value")
    }

    /// Passes accepted and empty outcomes through and raises the error of a
    /// rejected one.
    ///
    /// # Errors
    ///
    /// Returns the contained error when the outcome is rejected.
    #[inline]
    pub fn raise_if_rejected(self) -> Result<Self, E> {
        match self {
            Self::Rejected(error) => Err(error),
            other => Ok(other),
        }
    }

    /// # Panics
    ///
    /// Panics with the error if the outcome is rejected.
    #[track_caller]
    #[inline]
    pub fn panic_if_rejected(&self)
    where
        E: Debug,
    {
        if let Self::Rejected(error) = self {
            panic!("rejected outcome: {error:?}");
        }
    }

    /// Converts to `Option<V>`, discarding the error.
    ///
    /// Empty and rejected outcomes both become `None`.
    #[inline]
    pub fn ok(self) -> Option<V> {
        match self {
            Self::Accepted(value) => Some(value),
            _ => None,
        }
    }

    /// Converts to `Option<E>`, discarding the value.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Rejected(error) => Some(error),
            _ => None,
        }
    }

    /// Converts `&Outcome<V, E>` to `Outcome<&V, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Accepted(value) => Outcome::Accepted(value),
            Self::Empty => Outcome::Empty,
            Self::Rejected(error) => Outcome::Rejected(error),
        }
    }

    /// Converts `&mut Outcome<V, E>` to `Outcome<&mut V, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut V, &mut E> {
        match self {
            Self::Accepted(value) => Outcome::Accepted(value),
            Self::Empty => Outcome::Empty,
            Self::Rejected(error) => Outcome::Rejected(error),
        }
    }

    /// Maps the accepted value using `f`.
    ///
    /// Rejected outcomes keep their error and empty outcomes stay empty; `f`
    /// is only called when a value is present.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the value from type `V` to type `V2`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::accept(21).map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::Accepted(42));
    ///
    /// let empty = Outcome::<i32, &str>::empty().map(|x| x * 2);
    /// assert_eq!(empty, Outcome::Empty);
    /// ```
    #[inline]
    pub fn map<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> V2,
    {
        match self {
            Self::Accepted(value) => Outcome::Accepted(f(value)),
            Self::Empty => Outcome::Empty,
            Self::Rejected(error) => Outcome::Rejected(error),
        }
    }

    /// Maps the accepted value with a fallible function, capturing its failure.
    ///
    /// The error type of the result is the common type `E` that both the
    /// existing error and the mapper's error `E2` convert into. A failure
    /// raised by `f` becomes `Rejected(e.into())`; an existing rejection is
    /// passed through without calling `f`.
    ///
    /// # Arguments
    ///
    /// * `f` - A function from `V` to `Result<V2, E2>`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let parsed: Outcome<i64, std::num::ParseIntError> =
    ///     Outcome::accept("12").try_map(|s: &str| s.parse::<i64>());
    /// assert_eq!(parsed, Outcome::Accepted(12));
    ///
    /// let failed: Outcome<i64, std::num::ParseIntError> =
    ///     Outcome::accept("twelve").try_map(|s: &str| s.parse::<i64>());
    /// assert!(failed.is_rejected());
    /// ```
    #[inline]
    pub fn try_map<V2, E2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Result<V2, E2>,
        E2: Into<E>,
    {
        match self {
            Self::Accepted(value) => match f(value) {
                Ok(mapped) => Outcome::Accepted(mapped),
                Err(error) => Outcome::Rejected(error.into()),
            },
            Self::Empty => Outcome::Empty,
            Self::Rejected(error) => Outcome::Rejected(error),
        }
    }

    /// Like [`try_map`](Self::try_map), for mappers that may produce no value.
    #[inline]
    pub fn try_map_option<V2, E2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Result<Option<V2>, E2>,
        E2: Into<E>,
    {
        match self {
            Self::Accepted(value) => match f(value) {
                Ok(mapped) => Outcome::from_option(mapped),
                Err(error) => Outcome::Rejected(error.into()),
            },
            Self::Empty => Outcome::Empty,
            Self::Rejected(error) => Outcome::Rejected(error),
        }
    }

    /// Chains a computation that produces its own outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn lookup(id: u32) -> Outcome<&'static str, &'static str> {
    ///     match id {
    ///         1 => Outcome::accept("admin"),
    ///         2 => Outcome::empty(),
    ///         _ => Outcome::reject("unknown id"),
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::accept(1).and_then(lookup), Outcome::Accepted("admin"));
    /// assert!(Outcome::accept(2).and_then(lookup).is_empty());
    /// assert!(Outcome::accept(9).and_then(lookup).is_rejected());
    /// ```
    #[inline]
    pub fn and_then<V2, F>(self, f: F) -> Outcome<V2, E>
    where
        F: FnOnce(V) -> Outcome<V2, E>,
    {
        match self {
            Self::Accepted(value) => f(value),
            Self::Empty => Outcome::Empty,
            Self::Rejected(error) => Outcome::Rejected(error),
        }
    }

    /// Replaces a rejection with the outcome produced by `f`.
    ///
    /// Accepted and empty outcomes are returned unchanged.
    #[inline]
    pub fn recover<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> Outcome<V, E2>,
    {
        match self {
            Self::Accepted(value) => Outcome::Accepted(value),
            Self::Empty => Outcome::Empty,
            Self::Rejected(error) => f(error),
        }
    }

    /// Maps the error of a rejected outcome.
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Accepted(value) => Outcome::Accepted(value),
            Self::Empty => Outcome::Empty,
            Self::Rejected(error) => Outcome::Rejected(f(error)),
        }
    }

    /// Widens the error type through `Into`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{DynOutcome, Outcome};
    ///
    /// let narrow: Outcome<u8, std::num::ParseIntError> = Outcome::capture(|| "x".parse());
    /// let erased: DynOutcome<u8> = narrow.err_into();
    /// assert!(erased.error().unwrap().to_string().contains("invalid digit"));
    /// ```
    #[inline]
    pub fn err_into<E2>(self) -> Outcome<V, E2>
    where
        E: Into<E2>,
    {
        self.map_err(Into::into)
    }

    /// Reinterprets the value type through `Into`, without a runtime check.
    ///
    /// The conversion is chosen by the caller and cannot fail, so empty and
    /// rejected outcomes pass through unchanged.
    #[inline]
    pub fn cast_into<T>(self) -> Outcome<T, E>
    where
        V: Into<T>,
    {
        self.map(Into::into)
    }

    /// Runs `f` with the value when accepted, or with `None` when empty.
    ///
    /// Rejected outcomes skip `f`. Returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// Outcome::<i32, &str>::accept(1).if_accepted(|v| seen.push(v.copied()));
    /// Outcome::<i32, &str>::empty().if_accepted(|v| seen.push(v.copied()));
    /// Outcome::<i32, &str>::reject("e").if_accepted(|v| seen.push(v.copied()));
    /// assert_eq!(seen, vec![Some(1), None]);
    /// ```
    #[inline]
    pub fn if_accepted<F>(self, f: F) -> Self
    where
        F: FnOnce(Option<&V>),
    {
        match &self {
            Self::Accepted(value) => f(Some(value)),
            Self::Empty => f(None),
            Self::Rejected(_) => {},
        }
        self
    }

    /// Runs `f` with the error when rejected. Returns `self` for chaining.
    #[inline]
    pub fn if_rejected<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Rejected(error) = &self {
            f(error);
        }
        self
    }

    /// Feeds the value (or `None` when empty) to `on_accept`, or the error to
    /// `on_reject`.
    #[inline]
    pub fn then<F, G>(self, on_accept: F, on_reject: G) -> Self
    where
        F: FnOnce(Option<&V>),
        G: FnOnce(&E),
    {
        match &self {
            Self::Accepted(value) => on_accept(Some(value)),
            Self::Empty => on_accept(None),
            Self::Rejected(error) => on_reject(error),
        }
        self
    }

    /// Feeds the value to `f`, substituting `fallback` for a rejection.
    ///
    /// An empty outcome still calls `f` with `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut total = 0;
    /// Outcome::<i32, &str>::reject("timeout").accept_or_else(|v| total += v.copied().unwrap_or(0), 10);
    /// assert_eq!(total, 10);
    /// ```
    #[inline]
    pub fn accept_or_else<F>(self, f: F, fallback: V) -> Self
    where
        F: FnOnce(Option<&V>),
    {
        match &self {
            Self::Accepted(value) => f(Some(value)),
            Self::Empty => f(None),
            Self::Rejected(_) => f(Some(&fallback)),
        }
        self
    }

    /// Feeds the value (or `None`) to `f`, or raises the error.
    ///
    /// # Errors
    ///
    /// Returns the contained error without calling `f` when rejected.
    #[inline]
    pub fn accept_or_else_throw<F>(self, f: F) -> Result<Self, E>
    where
        F: FnOnce(Option<&V>),
    {
        match self {
            Self::Rejected(error) => Err(error),
            accepted => Ok(accepted.if_accepted(f)),
        }
    }

    /// Feeds the value (or `None`) to `f`, or panics with the error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is rejected.
    #[track_caller]
    #[inline]
    pub fn accept_or_else_throw_runtime<F>(self, f: F) -> Self
    where
        F: FnOnce(Option<&V>),
        E: Debug,
    {
        self.panic_if_rejected();
        self.if_accepted(f)
    }

    /// Feeds the value (or `None`) to `f`, or logs the error.
    ///
    /// With the `tracing` feature the error is emitted as a `tracing::error!`
    /// event; otherwise it is written to standard error.
    #[cfg(any(feature = "std", feature = "tracing"))]
    #[inline]
    pub fn accept_or_log<F>(self, f: F) -> Self
    where
        F: FnOnce(Option<&V>),
        E: core::fmt::Display,
    {
        match &self {
            Self::Accepted(value) => f(Some(value)),
            Self::Empty => f(None),
            Self::Rejected(error) => log_rejection(error),
        }
        self
    }
}

impl<V, E> Outcome<Outcome<V, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<V, E> {
        self.and_then(|inner| inner)
    }
}

impl<V: Any, E> Outcome<V, E> {
    /// Checks at runtime that the value is a `T` and retypes the outcome.
    ///
    /// Empty and rejected outcomes always succeed. A mismatch is not captured
    /// into the outcome: it is returned as a [`CastError`] that hands back the
    /// original outcome untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CastError`] when the value is not a `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let same = Outcome::<u32, ()>::accept(7).checked_cast::<u32>();
    /// assert_eq!(same.unwrap(), Outcome::Accepted(7));
    ///
    /// let err = Outcome::<u32, ()>::accept(7).checked_cast::<String>().unwrap_err();
    /// assert_eq!(err.found(), "u32");
    /// assert_eq!(err.into_outcome(), Outcome::Accepted(7));
    /// ```
    pub fn checked_cast<T: Any>(self) -> Result<Outcome<T, E>, CastError<V, E>> {
        match self {
            Self::Accepted(value) if TypeId::of::<V>() == TypeId::of::<T>() => {
                let mut slot = Some(value);
                match (&mut slot as &mut dyn Any)
                    .downcast_mut::<Option<T>>()
                    .and_then(Option::take)
                {
                    Some(cast) => Ok(Outcome::Accepted(cast)),
                    None => unreachable!("`TypeId` of the source and target types match"),
                }
            },
            Self::Accepted(value) => Err(CastError::new(
                Self::Accepted(value),
                type_name::<T>(),
                type_name::<V>(),
            )),
            Self::Empty => Ok(Outcome::Empty),
            Self::Rejected(error) => Ok(Outcome::Rejected(error)),
        }
    }
}

impl<T: Any> Outcome<T, OutcomeError> {
    /// Casts `value` to `T`, capturing a mismatch as a rejection.
    ///
    /// Unlike [`checked_cast`](Self::checked_cast), the failure stays inside
    /// the outcome as [`OutcomeError::TypeMismatch`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeError};
    ///
    /// let hit = Outcome::<String, OutcomeError>::safe_cast(String::from("id"));
    /// assert_eq!(hit, Outcome::Accepted(String::from("id")));
    ///
    /// let miss = Outcome::<String, OutcomeError>::safe_cast(42_u8);
    /// assert!(matches!(miss, Outcome::Rejected(OutcomeError::TypeMismatch { .. })));
    /// ```
    pub fn safe_cast<V: Any>(value: V) -> Self {
        match Outcome::<V, OutcomeError>::accept(value).checked_cast::<T>() {
            Ok(outcome) => outcome,
            Err(cast) => Self::Rejected(cast.mismatch()),
        }
    }
}

impl<V> Outcome<V, OutcomeError> {
    /// Accepts a present value and rejects an absent one.
    ///
    /// Where [`from_option`](Outcome::from_option) treats `None` as a valid
    /// empty result, this treats it as [`OutcomeError::MissingValue`].
    #[inline]
    pub fn require_some(value: Option<V>) -> Self {
        match value {
            Some(value) => Self::Accepted(value),
            None => Self::Rejected(OutcomeError::MissingValue),
        }
    }
}

impl<E> Outcome<Box<dyn Any>, E> {
    /// Downcasts a dynamically typed value to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CastError`] holding the original boxed value when it is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<Outcome<T, E>, CastError<Box<dyn Any>, E>> {
        match self {
            Self::Accepted(value) => match value.downcast::<T>() {
                Ok(cast) => Ok(Outcome::Accepted(*cast)),
                Err(value) => Err(CastError::new(
                    Self::Accepted(value),
                    type_name::<T>(),
                    "dyn Any",
                )),
            },
            Self::Empty => Ok(Outcome::Empty),
            Self::Rejected(error) => Ok(Outcome::Rejected(error)),
        }
    }
}

impl<E> Outcome<Box<dyn Any + Send>, E> {
    /// Downcasts a dynamically typed, sendable value to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CastError`] holding the original boxed value when it is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<Outcome<T, E>, CastError<Box<dyn Any + Send>, E>> {
        match self {
            Self::Accepted(value) => match value.downcast::<T>() {
                Ok(cast) => Ok(Outcome::Accepted(*cast)),
                Err(value) => Err(CastError::new(
                    Self::Accepted(value),
                    type_name::<T>(),
                    "dyn Any + Send",
                )),
            },
            Self::Empty => Ok(Outcome::Empty),
            Self::Rejected(error) => Ok(Outcome::Rejected(error)),
        }
    }
}

#[cfg(feature = "tracing")]
fn log_rejection<E: core::fmt::Display>(error: &E) {
    tracing::error!(error = %error, "outcome rejected");
}

#[cfg(all(feature = "std", not(feature = "tracing")))]
fn log_rejection<E: core::fmt::Display>(error: &E) {
    std::eprintln!("outcome rejected: {error}");
}
