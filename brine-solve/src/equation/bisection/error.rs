use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::BracketError;

type Boxed = Box<dyn StdError + Send + Sync>;

/// Why a bisection run stopped without a solution.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Bracket(#[from] BracketError),

    /// The residual keeps its sign at both endpoints.
    #[error("residual keeps its sign over [{left}, {right}] ({left_residual:e}, {right_residual:e})")]
    NoBracket {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    #[error("bisection settings rejected: {reason}")]
    InvalidConfig { reason: &'static str },

    /// The problem could not map `x` to a model input.
    #[error("could not build the model input")]
    Input(#[source] Boxed),

    /// The forward model itself failed.
    #[error("forward model failed")]
    Model(#[source] Boxed),

    #[error("could not compute the residual")]
    Residual(#[source] Boxed),

    #[error("residual at x = {x} is {residual}")]
    NonFiniteResidual { x: f64, residual: f64 },
}

impl Error {
    /// Whether the run failed inside the caller's problem or model rather
    /// than in the search itself.
    #[must_use]
    pub fn is_evaluation_failure(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Model(_) | Self::Residual(_))
    }
}

impl<IE, ME, RE> From<EvalError<IE, ME, RE>> for Error
where
    IE: StdError + Send + Sync + 'static,
    ME: StdError + Send + Sync + 'static,
    RE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<IE, ME, RE>) -> Self {
        match err {
            EvalError::Input(source) => Self::Input(source.into()),
            EvalError::Model(source) => Self::Model(source.into()),
            EvalError::Residual(source) => Self::Residual(source.into()),
        }
    }
}
