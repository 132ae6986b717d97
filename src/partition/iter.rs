use crate::outcome::Outcome;
use crate::partition::Partition;

/// Sequence helpers for iterators of outcomes.
///
/// Blanket-implemented for every `Iterator<Item = Outcome<V, E>>`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeIterExt};
///
/// let outcomes = || {
///     vec![
///         Outcome::<i32, &str>::accept(1),
///         Outcome::empty(),
///         Outcome::reject("late"),
///     ]
///     .into_iter()
/// };
///
/// assert_eq!(outcomes().values().collect::<Vec<_>>(), vec![1]);
/// assert_eq!(outcomes().errors().collect::<Vec<_>>(), vec!["late"]);
/// assert_eq!(outcomes().options().collect::<Vec<_>>(), vec![Some(1), None, None]);
/// ```
pub trait OutcomeIterExt<V, E>: Iterator<Item = Outcome<V, E>> + Sized {
    /// Consumes the iterator once, splitting it into values and errors.
    #[inline]
    fn partition_outcomes(self) -> Partition<V, E> {
        self.collect()
    }

    /// Keeps only accepted values.
    #[inline]
    fn values(self) -> impl Iterator<Item = V> {
        self.filter_map(Outcome::ok)
    }

    /// Keeps only rejected errors.
    #[inline]
    fn errors(self) -> impl Iterator<Item = E> {
        self.filter_map(Outcome::err)
    }

    /// Maps every outcome to `Option<V>`; empty and rejected both become `None`.
    #[inline]
    fn options(self) -> impl Iterator<Item = Option<V>> {
        self.map(Outcome::ok)
    }

    /// Applies [`Outcome::map`] to each element.
    #[inline]
    fn map_outcomes<V2, F>(self, mut f: F) -> impl Iterator<Item = Outcome<V2, E>>
    where
        F: FnMut(V) -> V2,
    {
        self.map(move |outcome| outcome.map(&mut f))
    }

    /// Applies [`Outcome::try_map`] to each element.
    #[inline]
    fn try_map_outcomes<V2, E2, F>(self, mut f: F) -> impl Iterator<Item = Outcome<V2, E>>
    where
        F: FnMut(V) -> Result<V2, E2>,
        E2: Into<E>,
    {
        self.map(move |outcome| outcome.try_map(&mut f))
    }
}

impl<I, V, E> OutcomeIterExt<V, E> for I where I: Iterator<Item = Outcome<V, E>> {}
