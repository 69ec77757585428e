//! Inversion of monotonic scalar relations over a bounded domain.
//!
//! Every inverse question the property engine answers has the same shape:
//! find `z` in `[lo, hi]` such that `f(z) = target`, where `f` is a forward
//! correlation known to be monotonic over its declared validity domain.
//! Dew points invert vapor pressure over temperature, concentrations are
//! recovered from water activity, weight fractions from molarity, and
//! saturation molality from a solubility product.
//!
//! [`Inverter`] first checks that the target is reachable at all by
//! evaluating `f` at both ends of the domain. Unreachable targets fail with
//! [`InverseError::OutOfDomain`] before any search starts, so callers can
//! tell "out of physical range" apart from a solver failure.

use std::convert::Infallible;
use std::error::Error as StdError;

use brine_core::{Model, Values};
use thiserror::Error;
use tracing::debug;

use crate::equation::{
    EquationProblem, Traced,
    bisection::{self, Status},
};

/// Errors returned by [`Inverter`].
#[derive(Debug, Error)]
pub enum InverseError {
    /// The target cannot be reached by the forward relation over the domain.
    #[error(
        "target {target} is outside the achievable range [{}, {}] over domain [{}, {}]",
        achievable[0], achievable[1], domain[0], domain[1]
    )]
    OutOfDomain {
        target: f64,
        domain: [f64; 2],
        achievable: [f64; 2],
    },

    /// The forward relation failed while probing the domain endpoints.
    #[error("forward relation failed")]
    Forward(#[source] Box<dyn StdError + Send + Sync>),

    /// The bisection search failed.
    #[error(transparent)]
    Solver(#[from] bisection::Error),

    /// The search stopped before meeting its tolerances.
    #[error("inversion for target {target} stopped after {iters} iterations at x = {x} ({status:?})")]
    NotConverged {
        target: f64,
        x: f64,
        iters: usize,
        status: Status,
    },
}

/// The result of inverting a relation for one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inversion {
    /// Domain point whose forward value matches the target.
    pub x: f64,
    /// Forward value at `x`.
    pub value: f64,
    pub status: Status,
    pub iters: usize,
}

/// Inverts monotonic `f64 -> f64` models by bracketed bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inverter {
    /// Solver settings used for every search.
    pub config: bisection::Config,
    /// Relative slack allowed when deciding whether a target is reachable.
    ///
    /// A target slightly past an endpoint value (within
    /// `domain_tolerance * max(|target|, 1)`) resolves to that endpoint.
    pub domain_tolerance: f64,
}

impl Default for Inverter {
    fn default() -> Self {
        Self {
            config: bisection::Config::default(),
            domain_tolerance: 1e-9,
        }
    }
}

impl Inverter {
    #[must_use]
    pub fn new(config: bisection::Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_domain_tolerance(self, domain_tolerance: f64) -> Self {
        Self {
            domain_tolerance,
            ..self
        }
    }

    /// Solves `model(x) = target` for `x` within `domain`.
    ///
    /// The domain endpoints may be given in either order. A degenerate
    /// domain (`lo == hi`) succeeds only if its single forward value matches
    /// the target.
    ///
    /// # Errors
    ///
    /// - [`InverseError::OutOfDomain`] if `target` is non-finite or lies
    ///   outside the range of `model` over `domain`.
    /// - [`InverseError::Forward`] if `model` fails at an endpoint.
    /// - [`InverseError::Solver`] if the bisection search fails.
    /// - [`InverseError::NotConverged`] if the iteration cap is reached.
    pub fn invert<M>(
        &self,
        model: &M,
        target: f64,
        domain: [f64; 2],
    ) -> Result<Inversion, InverseError>
    where
        M: Model<Input = f64, Output = f64>,
    {
        let [lo, hi] = if domain[0] <= domain[1] {
            domain
        } else {
            [domain[1], domain[0]]
        };

        let f_lo = model.call(&lo).map_err(|e| InverseError::Forward(Box::new(e)))?;
        let f_hi = if hi > lo {
            model.call(&hi).map_err(|e| InverseError::Forward(Box::new(e)))?
        } else {
            f_lo
        };

        let achievable = [f_lo.min(f_hi), f_lo.max(f_hi)];
        let tolerance = self.domain_tolerance * target.abs().max(1.0);
        let out_of_domain = || InverseError::OutOfDomain {
            target,
            domain: [lo, hi],
            achievable,
        };

        if !target.is_finite()
            || target < achievable[0] - tolerance
            || target > achievable[1] + tolerance
        {
            return Err(out_of_domain());
        }

        for (x, value) in [(lo, f_lo), (hi, f_hi)] {
            if (value - target).abs() <= tolerance {
                debug!(target, x, "inverse target reached at domain endpoint");
                return Ok(Inversion {
                    x,
                    value,
                    status: Status::Converged,
                    iters: 0,
                });
            }
        }

        let solution = bisection::solve(
            model,
            &TargetProblem { target },
            [lo, hi],
            &self.config,
            Traced::new("inverse"),
        )?;

        debug!(
            target,
            x = solution.x,
            iters = solution.iters,
            status = ?solution.status,
            "inverted forward relation"
        );

        if solution.status != Status::Converged {
            return Err(InverseError::NotConverged {
                target,
                x: solution.x,
                iters: solution.iters,
                status: solution.status,
            });
        }

        Ok(Inversion {
            x: solution.x,
            value: solution.snapshot.output,
            status: solution.status,
            iters: solution.iters,
        })
    }

    /// Inverts every target independently, preserving shape and order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered, in element order.
    pub fn invert_all<M>(
        &self,
        model: &M,
        targets: &Values,
        domain: [f64; 2],
    ) -> Result<Values, InverseError>
    where
        M: Model<Input = f64, Output = f64>,
    {
        targets.try_map(|target| self.invert(model, target, domain).map(|inv| inv.x))
    }
}

/// Residual `f(x) - target` for a scalar relation.
struct TargetProblem {
    target: f64,
}

impl EquationProblem<1> for TargetProblem {
    type Input = f64;
    type Output = f64;
    type InputError = Infallible;
    type ResidualError = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Infallible> {
        Ok([output - self.target])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use brine_core::FnModel;
    use proptest::prelude::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("input below zero")]
    struct BelowZero;

    fn activity_like() -> impl Model<Input = f64, Output = f64, Error = Infallible> {
        // Decreasing from 1 at x = 0 to 0.5 at x = 1.
        FnModel::new(|x: &f64| Ok::<_, Infallible>(1.0 / (1.0 + x)))
    }

    #[test]
    fn inverts_decreasing_relation() {
        let inversion = Inverter::default()
            .invert(&activity_like(), 0.8, [0.0, 1.0])
            .expect("0.8 is reachable");

        assert_eq!(inversion.status, Status::Converged);
        assert_relative_eq!(inversion.x, 0.25, epsilon = 1e-10);
        assert_relative_eq!(inversion.value, 0.8, epsilon = 1e-10);
    }

    #[test]
    fn unreachable_target_names_achievable_range() {
        let err = Inverter::default()
            .invert(&activity_like(), 0.39, [0.0, 1.0])
            .unwrap_err();

        match err {
            InverseError::OutOfDomain {
                target,
                domain,
                achievable,
            } => {
                assert_relative_eq!(target, 0.39);
                assert_eq!(domain, [0.0, 1.0]);
                assert_relative_eq!(achievable[0], 0.5);
                assert_relative_eq!(achievable[1], 1.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nan_target_is_out_of_domain() {
        let result = Inverter::default().invert(&activity_like(), f64::NAN, [0.0, 1.0]);
        assert!(matches!(result, Err(InverseError::OutOfDomain { .. })));
    }

    #[test]
    fn endpoint_targets_skip_the_search() {
        let inversion = Inverter::default()
            .invert(&activity_like(), 0.5, [1.0, 0.0])
            .expect("endpoint value");
        assert_eq!(inversion.iters, 0);
        assert_relative_eq!(inversion.x, 1.0);
    }

    #[test]
    fn degenerate_domain_matches_only_its_value() {
        let inverter = Inverter::default();
        assert!(inverter.invert(&activity_like(), 1.0, [0.0, 0.0]).is_ok());
        assert!(matches!(
            inverter.invert(&activity_like(), 0.9, [0.0, 0.0]),
            Err(InverseError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn forward_errors_propagate() {
        let model = FnModel::new(|x: &f64| if *x < 0.0 { Err(BelowZero) } else { Ok(*x) });
        let result = Inverter::default().invert(&model, 0.5, [-1.0, 1.0]);
        assert!(matches!(result, Err(InverseError::Forward(_))));
    }

    #[test]
    fn invert_all_preserves_shape_and_order() {
        let inverter = Inverter::default();
        let model = activity_like();

        let targets = Values::from([0.8, 0.5, 1.0 / 1.5]);
        let xs = inverter
            .invert_all(&model, &targets, [0.0, 1.0])
            .expect("all reachable");
        let xs = xs.to_vec();
        assert_eq!(xs.len(), 3);
        assert_relative_eq!(xs[0], 0.25, epsilon = 1e-10);
        assert_relative_eq!(xs[1], 1.0, epsilon = 1e-10);
        assert_relative_eq!(xs[2], 0.5, epsilon = 1e-10);

        let scalar = inverter
            .invert_all(&model, &Values::from(0.8), [0.0, 1.0])
            .expect("reachable");
        assert!(scalar.is_scalar());
    }

    #[test]
    fn iteration_cap_is_an_error() {
        let inverter = Inverter::new(bisection::Config::default().with_max_iters(3));
        let err = inverter
            .invert(&activity_like(), 0.7, [0.0, 1.0])
            .unwrap_err();

        let InverseError::NotConverged {
            target,
            x,
            iters,
            status,
        } = err
        else {
            panic!("expected a non-converged search, got {err}");
        };
        assert_relative_eq!(target, 0.7);
        assert_eq!(iters, 3);
        assert_eq!(status, Status::MaxIters);
        assert!((0.0..=1.0).contains(&x));
    }

    #[test]
    fn invert_all_fails_on_any_unconverged_element() {
        let inverter = Inverter::new(bisection::Config::default().with_max_iters(3));
        let result = inverter.invert_all(&activity_like(), &Values::from([1.0, 0.7]), [0.0, 1.0]);
        assert!(matches!(result, Err(InverseError::NotConverged { .. })));
    }

    proptest! {
        #[test]
        fn inversion_recovers_forward_input(x in -2.0_f64..2.0) {
            let cubic = FnModel::new(|z: &f64| Ok::<_, Infallible>(z * z * z + z));
            let target = x * x * x + x;
            let inversion = Inverter::default().invert(&cubic, target, [-2.0, 2.0]).unwrap();
            prop_assert!((inversion.x - x).abs() < 1e-9);
        }
    }
}
