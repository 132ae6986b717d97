//! Shorthand macros for building outcomes.
//!
//! - [`macro@crate::capture`] - Runs an expression or block that produces a
//!   `Result` and captures it as an [`Outcome`](crate::Outcome). `?` works
//!   inside the block.
//! - [`macro@crate::accept`] - Builds an accepted outcome from a value, or an
//!   empty one from `None` with the `opt` form.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{accept, capture, Outcome};
//!
//! let port: Outcome<u16, std::num::ParseIntError> = capture!({
//!     let raw = "8080";
//!     raw.parse::<u16>()
//! });
//! assert_eq!(port, Outcome::Accepted(8080));
//!
//! let host: Outcome<&str, ()> = accept!(opt None);
//! assert!(host.is_empty());
//! ```

/// Captures a `Result`-producing expression or block as an [`Outcome`](crate::Outcome).
///
/// Expands to [`Outcome::capture`](crate::Outcome::capture) over a closure,
/// so `?` inside the block converts into the outcome's error type.
///
/// # Syntax
///
/// - `capture!(expr)` - Captures a single `Result`-producing expression
/// - `capture!({ ... })` - Captures a block that produces a `Result`
///
/// # Examples
///
/// ```rust
/// use outcome_rail::{capture, Outcome};
///
/// #[derive(Debug, PartialEq)]
/// struct ConfigError;
///
/// impl From<std::num::ParseIntError> for ConfigError {
///     fn from(_: std::num::ParseIntError) -> Self {
///         ConfigError
///     }
/// }
///
/// let workers: Outcome<u8, ConfigError> = capture!({
///     let count: u8 = "four".parse()?;
///     Ok(count * 2)
/// });
/// assert_eq!(workers, Outcome::Rejected(ConfigError));
/// ```
#[macro_export]
macro_rules! capture {
    ($expr:expr $(,)?) => {
        $crate::Outcome::capture(|| $expr)
    };
}

/// Builds an accepted outcome, or converts an `Option` with `accept!(opt ...)`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{accept, Outcome};
///
/// let present: Outcome<i32, ()> = accept!(3);
/// assert_eq!(present, Outcome::Accepted(3));
///
/// let maybe: Outcome<i32, ()> = accept!(opt Some(4));
/// assert_eq!(maybe, Outcome::Accepted(4));
/// ```
#[macro_export]
macro_rules! accept {
    (opt $expr:expr $(,)?) => {
        $crate::Outcome::from_option($expr)
    };
    ($expr:expr $(,)?) => {
        $crate::Outcome::accept($expr)
    };
}
