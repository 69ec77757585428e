/// A system of `N` equations to be driven to zero.
///
/// The problem maps solver variables `x` to a model input and turns the
/// model's output into residuals. Keeping this separate from the [`Model`]
/// lets one forward relation serve many targets: a vapor pressure model is
/// shared by every dew point query, only the target pressure changes.
///
/// [`Model`]: brine_core::Model
pub trait EquationProblem<const N: usize> {
    type Input;
    type Output;
    type InputError: std::error::Error + Send + Sync + 'static;
    type ResidualError: std::error::Error + Send + Sync + 'static;

    /// Builds the model input from the solver variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` does not describe a valid input.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::InputError>;

    /// Computes residuals from a model input and its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the residuals cannot be computed.
    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::ResidualError>;
}
