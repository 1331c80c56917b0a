//! # pt-table
//!
//! Construction of [`PrecisTable`](pt_core::PrecisTable)s.
//!
//! The structured builders in [`summary`] are the primary input path:
//! they take the fitting routine's native output (posterior draws, or
//! means and standard deviations from a Gaussian approximation) and
//! never touch printed text. The whitespace-delimited parser in
//! [`parse`] exists only as a compatibility shim for legacy printed
//! summaries.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Legacy printed-summary parser (compatibility shim).
pub mod parse;
/// Slice accessors with missing-value semantics.
pub mod seq;
/// Structured summary builders (primary input path).
pub mod summary;

pub use parse::parse_precis;
pub use seq::{first, nth, rest};
pub use summary::{precis_from_draws, precis_from_gaussian};
