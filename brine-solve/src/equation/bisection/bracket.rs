use thiserror::Error;

/// Reasons a pair of endpoints cannot form a search bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// An endpoint is NaN or infinite.
    #[error("endpoint is not finite: {value}")]
    NonFinite { value: f64 },
    /// Both endpoints are equal.
    #[error("bracket has zero width at {value}")]
    ZeroWidth { value: f64 },
}

/// The sign of a residual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Residual is positive or zero.
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Finite, ordered endpoints (`left < right`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
}

impl Bounds {
    /// Validates endpoints and orders them.
    ///
    /// # Errors
    ///
    /// Returns a [`BracketError`] if an endpoint is non-finite or both are equal.
    pub fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;

        for value in [a, b] {
            if !value.is_finite() {
                return Err(BracketError::NonFinite { value });
            }
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth { value: a });
        }

        Ok(if a < b {
            Self { left: a, right: b }
        } else {
            Self { left: b, right: a }
        })
    }
}

/// A shrinking interval known to contain a sign change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from bounds whose endpoint residuals differ in sign.
    ///
    /// Returns `None` if both residuals have the same sign.
    #[must_use]
    pub fn new(bounds: Bounds, left_residual: f64, right_residual: f64) -> Option<Self> {
        let left_sign = Sign::of(left_residual);
        if left_sign == Sign::of(right_residual) {
            return None;
        }
        Some(Self {
            left: bounds.left,
            right: bounds.right,
            left_sign,
        })
    }

    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns `true` once the width satisfies the x tolerances.
    #[must_use]
    pub fn is_x_converged(&self, x_abs_tol: f64, x_rel_tol: f64) -> bool {
        self.width() <= x_abs_tol + x_rel_tol * self.midpoint().abs()
    }

    /// Replaces the endpoint whose residual shares the sign of `residual`.
    pub fn shrink(&mut self, x: f64, residual: f64) {
        if Sign::of(residual) == self.left_sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}
