//! The tri-state [`Outcome`] type.
//!
//! An [`Outcome`] is `Accepted` with a value, `Empty` when an operation
//! succeeded without producing anything, or `Rejected` with the error that
//! made it fail. Keeping the empty case separate from the failure case is the
//! point of the type: "no such user" and "the database is down" are handled
//! differently.
//!
//! # Key Components
//!
//! - [`Outcome`] - Core type with construction, access, transformation and dispatch
//! - Iterator adapters over the accepted value
//! - `Display` and `From` conversions to and from `Option` / `Result`
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let lengths: Vec<Outcome<usize, &str>> = vec![
//!     Outcome::accept("abc").map(str::len),
//!     Outcome::<&str, &str>::empty().map(str::len),
//!     Outcome::<&str, &str>::reject("unreadable").map(str::len),
//! ];
//!
//! assert_eq!(lengths[0], Outcome::Accepted(3));
//! assert!(lengths[1].is_empty());
//! assert!(lengths[2].is_rejected());
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;
