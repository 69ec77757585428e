/// Convergence settings for the bisection solver.
///
/// The solver stops as soon as either the bracket width satisfies
/// `width <= x_abs_tol + x_rel_tol * |mid|` or the midpoint residual
/// satisfies `|residual| <= residual_tol`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub max_iters: usize,
    pub x_abs_tol: f64,
    pub x_rel_tol: f64,
    pub residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 200,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
            residual_tol: 1e-12,
        }
    }
}

impl Config {
    /// Validates that all tolerances are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns a static reason naming the first offending field.
    pub fn validate(&self) -> Result<(), &'static str> {
        let checks = [
            (self.x_abs_tol, "x_abs_tol must be finite and non-negative"),
            (self.x_rel_tol, "x_rel_tol must be finite and non-negative"),
            (
                self.residual_tol,
                "residual_tol must be finite and non-negative",
            ),
        ];
        for (value, reason) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(reason);
            }
        }
        Ok(())
    }

    /// Returns the config with a different iteration cap.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_negative_and_nan_tolerances() {
        let negative = Config {
            x_rel_tol: -1e-9,
            ..Config::default()
        };
        assert_eq!(
            negative.validate(),
            Err("x_rel_tol must be finite and non-negative")
        );

        let nan = Config {
            residual_tol: f64::NAN,
            ..Config::default()
        };
        assert!(nan.validate().is_err());
    }
}
