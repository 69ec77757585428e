//! Shape-preserving numeric values.
//!
//! Callers hand the engine either a single number or a sequence of numbers,
//! and expect the same shape back. [`Values`] carries that distinction
//! through every conversion, correlation, and inversion so that a scalar
//! input always yields a scalar output and an array input of length `N`
//! always yields an array of length `N` in the same order.

use ndarray::Array1;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scalar or a one-dimensional array of `f64` values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Values {
    Scalar(f64),
    Array(Array1<f64>),
}

/// Two array-shaped values could not be combined elementwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot broadcast arrays of length {left} and {right}")]
pub struct ShapeError {
    pub left: usize,
    pub right: usize,
}

impl Values {
    /// Number of elements (1 for a scalar).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Values::Scalar(_) => 1,
            Values::Array(array) => array.len(),
        }
    }

    /// Returns `true` for an empty array.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Values::Scalar(_))
    }

    /// Returns the value if this is a scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Values::Scalar(value) => Some(*value),
            Values::Array(_) => None,
        }
    }

    /// Returns the underlying array if this is array-shaped.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array1<f64>> {
        match self {
            Values::Scalar(_) => None,
            Values::Array(array) => Some(array),
        }
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> Iter<'_> {
        match self {
            Values::Scalar(value) => Iter::Scalar(Some(*value)),
            Values::Array(array) => Iter::Array(array.iter()),
        }
    }

    /// Collects the elements into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Smallest element, ignoring NaN.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.iter().filter(|v| !v.is_nan()).reduce(f64::min)
    }

    /// Largest element, ignoring NaN.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.iter().filter(|v| !v.is_nan()).reduce(f64::max)
    }

    /// Applies `f` to every element, keeping the shape.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> Values {
        match self {
            Values::Scalar(value) => Values::Scalar(f(*value)),
            Values::Array(array) => Values::Array(array.mapv(f)),
        }
    }

    /// Applies a fallible `f` to every element, keeping the shape.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<E>(&self, mut f: impl FnMut(f64) -> Result<f64, E>) -> Result<Values, E> {
        match self {
            Values::Scalar(value) => f(*value).map(Values::Scalar),
            Values::Array(array) => array
                .iter()
                .map(|&value| f(value))
                .collect::<Result<Vec<_>, E>>()
                .map(|out| Values::Array(Array1::from(out))),
        }
    }

    /// Combines two values elementwise with scalar broadcasting.
    ///
    /// A scalar pairs with every element of an array; two arrays must have
    /// the same length.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if both sides are arrays of different lengths.
    pub fn zip_with(
        &self,
        other: &Values,
        mut f: impl FnMut(f64, f64) -> f64,
    ) -> Result<Values, ShapeError> {
        self.try_zip_with(other, |a, b| Ok::<_, ShapeError>(f(a, b)))
    }

    /// Fallible version of [`Values::zip_with`].
    ///
    /// # Errors
    ///
    /// Returns a shape error (converted into `E`) for incompatible arrays, or
    /// the first error produced by `f`.
    pub fn try_zip_with<E>(
        &self,
        other: &Values,
        mut f: impl FnMut(f64, f64) -> Result<f64, E>,
    ) -> Result<Values, E>
    where
        E: From<ShapeError>,
    {
        match (self, other) {
            (Values::Scalar(a), Values::Scalar(b)) => f(*a, *b).map(Values::Scalar),
            (Values::Scalar(a), Values::Array(bs)) => {
                Values::Array(bs.clone()).try_map(|b| f(*a, b))
            }
            (Values::Array(a_s), Values::Scalar(b)) => {
                Values::Array(a_s.clone()).try_map(|a| f(a, *b))
            }
            (Values::Array(a_s), Values::Array(bs)) => {
                if a_s.len() != bs.len() {
                    return Err(ShapeError {
                        left: a_s.len(),
                        right: bs.len(),
                    }
                    .into());
                }
                a_s.iter()
                    .zip(bs.iter())
                    .map(|(&a, &b)| f(a, b))
                    .collect::<Result<Vec<_>, E>>()
                    .map(|out| Values::Array(Array1::from(out)))
            }
        }
    }

    /// Returns the shape two values broadcast to, or an error.
    ///
    /// `None` means both are scalars; `Some(n)` means an array of length `n`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if both sides are arrays of different lengths.
    pub fn broadcast_len(&self, other: &Values) -> Result<Option<usize>, ShapeError> {
        match (self, other) {
            (Values::Scalar(_), Values::Scalar(_)) => Ok(None),
            (Values::Scalar(_), Values::Array(array)) | (Values::Array(array), Values::Scalar(_)) => {
                Ok(Some(array.len()))
            }
            (Values::Array(a), Values::Array(b)) if a.len() == b.len() => Ok(Some(a.len())),
            (Values::Array(a), Values::Array(b)) => Err(ShapeError {
                left: a.len(),
                right: b.len(),
            }),
        }
    }
}

/// Iterator over the elements of [`Values`].
pub enum Iter<'a> {
    Scalar(Option<f64>),
    Array(ndarray::iter::Iter<'a, f64, ndarray::Ix1>),
}

impl Iterator for Iter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match self {
            Iter::Scalar(value) => value.take(),
            Iter::Array(iter) => iter.next().copied(),
        }
    }
}

impl From<f64> for Values {
    fn from(value: f64) -> Self {
        Values::Scalar(value)
    }
}

impl From<i32> for Values {
    fn from(value: i32) -> Self {
        Values::Scalar(f64::from(value))
    }
}

impl From<Vec<f64>> for Values {
    fn from(values: Vec<f64>) -> Self {
        Values::Array(Array1::from(values))
    }
}

impl From<&[f64]> for Values {
    fn from(values: &[f64]) -> Self {
        Values::Array(Array1::from(values.to_vec()))
    }
}

impl<const N: usize> From<[f64; N]> for Values {
    fn from(values: [f64; N]) -> Self {
        Values::Array(Array1::from(values.to_vec()))
    }
}

impl From<Array1<f64>> for Values {
    fn from(values: Array1<f64>) -> Self {
        Values::Array(values)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn integer_input_stays_scalar() {
        let values = Values::from(25);
        assert_eq!(values, Values::Scalar(25.0));
        assert!(values.map(|t| t + 273.15).is_scalar());
    }

    #[test]
    fn map_preserves_length_and_order() {
        let values = Values::from([0.0, 10.0, 20.0]);
        let kelvin = values.map(|t| t + 273.15);
        assert_eq!(kelvin.len(), 3);
        assert_eq!(kelvin.to_vec(), vec![273.15, 283.15, 293.15]);
    }

    #[test]
    fn scalar_broadcasts_against_array() {
        let temperature = Values::from(25.0);
        let molality = Values::from(vec![1.0, 2.0, 4.0]);

        let sum = temperature.zip_with(&molality, |t, m| t + m).unwrap();
        assert_eq!(sum.to_vec(), vec![26.0, 27.0, 29.0]);

        let flipped = molality.zip_with(&temperature, |m, t| m * t).unwrap();
        assert_eq!(flipped.to_vec(), vec![25.0, 50.0, 100.0]);
    }

    #[test]
    fn mismatched_arrays_are_rejected() {
        let a = Values::from([1.0, 2.0]);
        let b = Values::from([1.0, 2.0, 3.0]);
        let err = a.zip_with(&b, |x, y| x + y).unwrap_err();
        assert_eq!(err, ShapeError { left: 2, right: 3 });
        assert!(a.broadcast_len(&b).is_err());
    }

    #[test]
    fn broadcast_len_reports_shape() {
        let scalar = Values::from(1.0);
        let array = Values::from([1.0, 2.0]);
        assert_eq!(scalar.broadcast_len(&scalar), Ok(None));
        assert_eq!(scalar.broadcast_len(&array), Ok(Some(2)));
        assert_eq!(array.broadcast_len(&array), Ok(Some(2)));
    }

    #[test]
    fn try_map_stops_at_first_error() {
        let values = Values::from([1.0, -1.0, 2.0]);
        let result: Result<Values, &str> = values.try_map(|v| {
            if v < 0.0 { Err("negative") } else { Ok(v.sqrt()) }
        });
        assert_eq!(result, Err("negative"));
    }

    #[test]
    fn extremes_ignore_nan() {
        let values = Values::from([0.3, f64::NAN, 0.1, 0.2]);
        assert_relative_eq!(values.min().unwrap(), 0.1);
        assert_relative_eq!(values.max().unwrap(), 0.3);
        assert_eq!(Values::from(Vec::<f64>::new()).max(), None);
    }
}
