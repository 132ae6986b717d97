use core::fmt::{Display, Formatter};

use crate::outcome::core::Outcome;

/// Renders `accepted: <value>`, `empty` or `rejected: <error>`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// assert_eq!(Outcome::<i32, &str>::accept(1).to_string(), "accepted: 1");
/// assert_eq!(Outcome::<i32, &str>::empty().to_string(), "empty");
/// assert_eq!(Outcome::<i32, &str>::reject("io").to_string(), "rejected: io");
/// ```
impl<V: Display, E: Display> Display for Outcome<V, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Accepted(value) => write!(f, "accepted: {value}"),
            Outcome::Empty => f.write_str("empty"),
            Outcome::Rejected(error) => write!(f, "rejected: {error}"),
        }
    }
}

impl<V, E> From<Option<V>> for Outcome<V, E> {
    #[inline]
    fn from(value: Option<V>) -> Self {
        Self::from_option(value)
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Accepted(value),
            Err(error) => Self::Rejected(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<Option<V>, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}
