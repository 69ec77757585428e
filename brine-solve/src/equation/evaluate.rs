use thiserror::Error;

use brine_core::{Model, Snapshot};

use super::EquationProblem;

/// One trial point of an equation problem: the solver variables, the
/// residuals they produced, and the model call in between.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],
    pub residuals: [f64; N],
    pub snapshot: Snapshot<I, O>,
}

impl<I, O, const N: usize> Evaluation<I, O, N> {
    /// Largest residual magnitude.
    #[must_use]
    pub fn max_residual(&self) -> f64 {
        self.residuals.iter().fold(0.0, |max, r| max.max(r.abs()))
    }

    /// Returns `true` if no residual is NaN or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.residuals.iter().all(|r| r.is_finite())
    }
}

/// Which stage of an evaluation failed.
#[derive(Debug, Error)]
pub enum EvalError<IE, ME, RE> {
    /// The solver variables do not describe a model input.
    #[error("failed to compute input")]
    Input(#[source] IE),
    /// The forward relation failed at this input.
    #[error("model call failed")]
    Model(#[source] ME),
    #[error("failed to compute residuals")]
    Residual(#[source] RE),
}

pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<
        <P as EquationProblem<N>>::InputError,
        <M as Model>::Error,
        <P as EquationProblem<N>>::ResidualError,
    >,
>;

/// Evaluates `problem` at `x` through `model`.
///
/// # Errors
///
/// Returns the stage that failed, wrapping its error.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Input)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let residuals = problem
        .residuals(&input, &output)
        .map_err(EvalError::Residual)?;

    Ok(Evaluation {
        x,
        residuals,
        snapshot: Snapshot::new(input, output),
    })
}
