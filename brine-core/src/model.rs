use std::marker::PhantomData;

/// A deterministic mapping from a typed input to a typed output.
///
/// Property correlations, forward relations handed to the inverter, and the
/// density lookups behind molarity conversion are all expressed as models,
/// so the numerical machinery in `brine-solve` never needs to know which
/// physical quantity it is driving.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

/// A [`Model`] backed by a closure.
///
/// Useful when the forward relation only exists for the duration of a call,
/// such as "water activity of NaCl at 30 °C as a function of molality".
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
///
/// use brine_core::{FnModel, Model};
///
/// let square = FnModel::new(|x: &f64| Ok::<_, Infallible>(x * x));
/// assert_eq!(square.call(&3.0).unwrap(), 9.0);
/// ```
pub struct FnModel<F, I, O, E> {
    f: F,
    _marker: PhantomData<fn(&I) -> Result<O, E>>,
}

impl<F, I, O, E> FnModel<F, I, O, E>
where
    F: Fn(&I) -> Result<O, E>,
{
    /// Wraps a closure as a model.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<F, I, O, E> Model for FnModel<F, I, O, E>
where
    F: Fn(&I) -> Result<O, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn call(&self, input: &I) -> Result<O, E> {
        (self.f)(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("negative input")]
    struct NegativeInput;

    #[test]
    fn closure_model_forwards_calls() {
        let model = FnModel::new(|x: &f64| Ok::<_, Infallible>(2.0 * x + 1.0));
        assert!((model.call(&2.0).unwrap() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn closure_model_propagates_errors() {
        let sqrt = FnModel::new(|x: &f64| {
            if *x < 0.0 {
                Err(NegativeInput)
            } else {
                Ok(x.sqrt())
            }
        });
        assert!(sqrt.call(&-1.0).is_err());
        assert!(sqrt.call(&4.0).is_ok());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn snapshot_keeps_pair() {
        let snapshot = Snapshot::new(298.15, 3169.8);
        assert_eq!(snapshot.input, 298.15);
        assert_eq!(snapshot.output, 3169.8);
    }
}
