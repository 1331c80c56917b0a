//! # pt-viz
//!
//! Visualization data artifacts for partab.
//!
//! This crate is intentionally dependency-light and focuses on emitting
//! plot-friendly JSON structures (flat entry arrays instead of nested
//! objects). Rendering lives in `pt-viz-render`.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Coefficient plot artifact (dot + interval per parameter).
pub mod coefplot;

pub use coefplot::{CoefEntry, CoefPlotArtifact, CoefPlotMeta, coefplot_artifact};
