//! Core abstractions for the brine property engine.
//!
//! This crate holds the pieces every other brine crate builds on:
//!
//! - [`model`]: the deterministic [`Model`] trait and [`Snapshot`] captures.
//! - [`values`]: [`Values`], a scalar-or-array container that preserves the
//!   shape of caller input through every calculation.
//! - [`validity`]: validity ranges and the non-fatal range checker.
//! - [`table`]: linearly interpolated tables of tabulated data.

pub mod model;
pub mod table;
pub mod validity;
pub mod values;

pub use model::{FnModel, Model, Snapshot};
pub use table::{Extrapolate, Table, TableError};
pub use validity::{Parameter, RangeError, RangeWarning, ValidityRange, check};
pub use values::{ShapeError, Values};
