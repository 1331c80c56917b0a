//! # pt-core
//!
//! Core types for partab: the parameter-estimate table and the shared
//! error type. Everything downstream (table builders, plot artifacts,
//! the renderer) speaks in these types.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ColumnLabels, PrecisRow, PrecisTable, PARAM_COLUMN};

/// Crate version, stamped into plot artifacts.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
