//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`capture!`], [`accept!`]
//! - **Types**: [`Outcome`], [`Partition`], [`OutcomeError`], [`DynOutcome`]
//! - **Traits**: [`OutcomeIterExt`], [`IntoOutcome`], [`FailureClass`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn read_ports(raw: &[&str]) -> Partition<u16, std::num::ParseIntError> {
//!     raw.iter()
//!         .map(|s| capture!(s.parse::<u16>()))
//!         .partition_outcomes()
//! }
//!
//! let ports = read_ports(&["80", "http", "443"]);
//! assert_eq!(ports.value_count(), 2);
//! assert_eq!(ports.error_count(), 1);
//! ```

// Macros
pub use crate::{accept, capture};

// Core types
pub use crate::outcome::Outcome;
pub use crate::partition::Partition;
pub use crate::types::{DynOutcome, OutcomeError};

// Traits
pub use crate::partition::OutcomeIterExt;
pub use crate::traits::{FailureClass, IntoOutcome};
