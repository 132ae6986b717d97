//! Tri-state outcomes: a value, an intentional absence, or a captured failure.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Accepted, Empty, Rejected
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn find_user(id: u32) -> Outcome<&'static str, &'static str> {
//!     match id {
//!         0 => Outcome::reject("database unavailable"),
//!         1 => Outcome::accept("ada"),
//!         _ => Outcome::empty(),
//!     }
//! }
//!
//! assert_eq!(find_user(1).map(str::len), Outcome::Accepted(3));
//! assert!(find_user(7).is_empty());
//! assert!(find_user(0).is_rejected());
//! ```
//!
//! ## Capturing Failures
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let outcome: Outcome<u32, std::num::ParseIntError> = Outcome::accept("17")
//!     .try_map(|raw: &str| raw.parse::<u32>())
//!     .map(|n| n + 1);
//!
//! assert_eq!(outcome.unwrap_or(0), 18);
//! ```
//!
//! ## Partitioning
//!
//! ```
//! use outcome_rail::{capture, OutcomeIterExt};
//!
//! let split = ["1", "two", "3"]
//!     .into_iter()
//!     .map(|raw| capture!(raw.parse::<i32>()))
//!     .partition_outcomes();
//!
//! assert_eq!(split.values().copied().collect::<Vec<_>>(), vec![1, 3]);
//! assert_eq!(split.error_count(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, Result and Option
pub mod convert;
/// Shorthand macros for building outcomes
pub mod macros;
/// The tri-state Outcome type
pub mod outcome;
/// Single-pass value/error partitioning
pub mod partition;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Failure classification and capture adapters
pub mod traits;
/// Violation errors and supporting collections
pub mod types;

pub use outcome::Outcome;
pub use partition::{OutcomeIterExt, Partition};
pub use traits::{FailureClass, FailureClassExt, IntoOutcome};
pub use types::{alloc_type::BoxError, CastError, DynOutcome, OutcomeError};
