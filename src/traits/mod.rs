//! Traits and adapters around [`Outcome`](crate::Outcome).
//!
//! - [`FailureClass`]: Checked/unchecked classification used by the re-raising capture helpers
//! - [`FailureClassExt`]: Classifying capture for plain `Result`s
//! - [`IntoOutcome`]: Conversion from `Result` and `Option`
//! - [`wrap`], [`wrap_option`], [`wrap_supplier`], [`wrap_classified`]: Capability adapters
//! - [`mapper`], [`try_mapper`]: Closures over outcomes for `Iterator::map` chains
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{FailureClass, IntoOutcome};
//! use outcome_rail::{Outcome, OutcomeError};
//!
//! let outcome: Outcome<i32, &str> = Some(42).into_outcome();
//! assert_eq!(outcome, Outcome::Accepted(42));
//!
//! assert!(OutcomeError::MissingValue.is_unchecked());
//! ```

pub mod capture;
pub mod failure_class;
pub mod into_outcome;

pub use capture::{mapper, try_mapper, wrap, wrap_classified, wrap_option, wrap_supplier};
pub use failure_class::{FailureClass, FailureClassExt};
pub use into_outcome::IntoOutcome;
