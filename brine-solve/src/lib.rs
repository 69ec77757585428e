//! Root finding and monotonic inversion for the brine property engine.
//!
//! - [`equation`] evaluates a [`Model`](brine_core::Model) against an
//!   [`EquationProblem`](equation::EquationProblem) and hosts the bisection
//!   solver.
//! - [`inverse`] builds on bisection to invert monotonic scalar relations
//!   over a bounded domain, failing distinctly when a target is out of reach.

pub mod equation;
pub mod inverse;

pub use inverse::{InverseError, Inversion, Inverter};
