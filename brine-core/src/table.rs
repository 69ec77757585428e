//! Linearly interpolated tables of one variable.

use ndarray::Array1;
use ninterp::{
    error::{InterpolateError, ValidateError},
    prelude::{Interp1DOwned, Interpolator},
    strategy::enums::Strategy1DEnum,
};
use thiserror::Error;

use crate::Model;

#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Validation(#[from] ValidateError),
    #[error(transparent)]
    Interpolation(#[from] InterpolateError),
}

/// What a [`Table`] does with a point beyond its grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Continue the end segment linearly.
    Enable,
    /// Use the value at the nearest end of the grid.
    Clamp,
    #[default]
    Error,
}

impl From<Extrapolate> for ninterp::interpolator::Extrapolate<f64> {
    fn from(value: Extrapolate) -> Self {
        match value {
            Extrapolate::Enable => ninterp::interpolator::Extrapolate::Enable,
            Extrapolate::Clamp => ninterp::interpolator::Extrapolate::Clamp,
            Extrapolate::Error => ninterp::interpolator::Extrapolate::Error,
        }
    }
}

/// Tabulated `f(x)` with linear interpolation between grid points.
pub struct Table(Interp1DOwned<f64, Strategy1DEnum>);

impl Table {
    /// Builds a table from grid points `x` (strictly increasing) and values `f_x`.
    ///
    /// # Errors
    ///
    /// Fails if the lengths differ or `x` is not sorted.
    pub fn new(x: &[f64], f_x: &[f64], extrapolate: Extrapolate) -> Result<Self, TableError> {
        Ok(Self(Interp1DOwned::new(
            Array1::from(x.to_vec()),
            Array1::from(f_x.to_vec()),
            ninterp::strategy::Linear.into(),
            extrapolate.into(),
        )?))
    }
}

impl Model for Table {
    type Input = f64;
    type Output = f64;
    type Error = TableError;

    fn call(&self, input: &f64) -> Result<f64, TableError> {
        self.0.interpolate(&[*input]).map_err(Into::into)
    }
}
