//! Adapters that turn fallible closures into outcome-producing closures.
//!
//! The wrapped capability is any closure returning `Result<T, E>`. The
//! adapters run it and hand back an [`Outcome`] instead, so the result can be
//! threaded through `Iterator::map` chains and partitioned later.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{mapper, wrap};
//! use outcome_rail::OutcomeIterExt;
//!
//! let doubled = ["10", "x", "300"]
//!     .into_iter()
//!     .map(wrap(|s: &str| s.parse::<u8>()))
//!     .map(mapper(|n: u8| u16::from(n) * 2))
//!     .partition_outcomes();
//!
//! assert_eq!(doubled.values().copied().collect::<Vec<_>>(), vec![20]);
//! assert_eq!(doubled.errors().count(), 2);
//! ```

use crate::outcome::Outcome;
use crate::traits::FailureClass;

/// Adapts `Fn(In) -> Result<Out, E>` into `Fn(In) -> Outcome<Out, E>`.
#[inline]
pub fn wrap<In, Out, E, F>(f: F) -> impl Fn(In) -> Outcome<Out, E>
where
    F: Fn(In) -> Result<Out, E>,
{
    move |input| Outcome::capture(|| f(input))
}

/// Adapts a capability that may return no value; `Ok(None)` becomes `Empty`.
#[inline]
pub fn wrap_option<In, Out, E, F>(f: F) -> impl Fn(In) -> Outcome<Out, E>
where
    F: Fn(In) -> Result<Option<Out>, E>,
{
    move |input| Outcome::capture_option(|| f(input))
}

/// Adapts a zero-argument capability into a supplier of outcomes.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::wrap_supplier;
///
/// let mut attempts = 0;
/// let mut next = wrap_supplier(|| {
///     attempts += 1;
///     if attempts < 2 { Err("busy") } else { Ok(attempts) }
/// });
///
/// assert!(next().is_rejected());
/// assert_eq!(next().ok(), Some(2));
/// ```
#[inline]
pub fn wrap_supplier<Out, E, F>(mut f: F) -> impl FnMut() -> Outcome<Out, E>
where
    F: FnMut() -> Result<Out, E>,
{
    move || Outcome::capture(&mut f)
}

/// Adapts a capability, re-raising unchecked failures.
///
/// The returned closure yields `Err(e)` for errors whose
/// [`FailureClass::is_unchecked`] is `true` and captures everything else.
#[inline]
pub fn wrap_classified<In, Out, E, F>(f: F) -> impl Fn(In) -> Result<Outcome<Out, E>, E>
where
    F: Fn(In) -> Result<Out, E>,
    E: FailureClass,
{
    move |input| Outcome::try_capture(|| f(input))
}

/// Lifts `f` into a closure over outcomes, for use with `Iterator::map`.
///
/// Equivalent to `|outcome| outcome.map(&mut f)`.
#[inline]
pub fn mapper<V, V2, E, F>(mut f: F) -> impl FnMut(Outcome<V, E>) -> Outcome<V2, E>
where
    F: FnMut(V) -> V2,
{
    move |outcome| outcome.map(&mut f)
}

/// Lifts a fallible `f` into a closure over outcomes, capturing its failures.
///
/// Equivalent to `|outcome| outcome.try_map(&mut f)`.
#[inline]
pub fn try_mapper<V, V2, E, E2, F>(mut f: F) -> impl FnMut(Outcome<V, E>) -> Outcome<V2, E>
where
    F: FnMut(V) -> Result<V2, E2>,
    E2: Into<E>,
{
    move |outcome| outcome.try_map(&mut f)
}
