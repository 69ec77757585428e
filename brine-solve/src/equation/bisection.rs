//! Bisection root finding for single-variable equation problems.
//!
//! Bisection is slow but unconditionally robust once a sign change is
//! bracketed, which is exactly the situation when inverting a monotonic
//! property correlation over its declared validity domain.

mod bracket;
mod config;
mod error;
mod solution;

pub use bracket::{Bounds, Bracket, BracketError, Sign};
pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use brine_core::Model;

use crate::equation::{EquationProblem, Evaluation, Observer, evaluate};

/// Control actions an observer may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the best evaluation so far.
    StopEarly,
}

/// Emitted after each midpoint evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter, starting at 1.
    pub iter: usize,
    /// Bracket the midpoint was taken from.
    pub bracket: [f64; 2],
    /// Midpoint that was evaluated.
    pub x: f64,
    /// Residual at the midpoint.
    pub residual: f64,
}

/// Finds a root of the equation using the bisection method.
///
/// Both endpoints are evaluated first; if either already satisfies
/// `residual_tol` it is returned immediately. Otherwise the endpoint
/// residuals must differ in sign. Each iteration halves the bracket and
/// reports an [`Event`] to the observer.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, the endpoints do
/// not bracket a sign change, a residual is non-finite, or the model or
/// problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let bounds = Bounds::new(bracket)?;

    let left = evaluate_finite(model, problem, bounds.left)?;
    let left_residual = left.residuals[0];
    if left_residual.abs() <= config.residual_tol {
        return Ok(Solution::from_eval(left, Status::Converged, 0));
    }

    let right = evaluate_finite(model, problem, bounds.right)?;
    let right_residual = right.residuals[0];
    if right_residual.abs() <= config.residual_tol {
        return Ok(Solution::from_eval(right, Status::Converged, 0));
    }

    let Some(mut bracket) = Bracket::new(bounds, left_residual, right_residual) else {
        return Err(Error::NoBracket {
            left: bounds.left,
            right: bounds.right,
            left_residual,
            right_residual,
        });
    };

    let mut best = if left_residual.abs() <= right_residual.abs() {
        left
    } else {
        right
    };

    for iter in 1..=config.max_iters {
        let x = bracket.midpoint();
        let mid = evaluate_finite(model, problem, x)?;
        let residual = mid.residuals[0];
        let is_better = mid.max_residual() < best.max_residual();

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            x,
            residual,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            let reported = if is_better { mid } else { best };
            return Ok(Solution::from_eval(
                reported,
                Status::StoppedByObserver,
                iter,
            ));
        }

        if residual.abs() <= config.residual_tol {
            return Ok(Solution::from_eval(mid, Status::Converged, iter));
        }

        bracket.shrink(x, residual);

        if bracket.is_x_converged(config.x_abs_tol, config.x_rel_tol) {
            return Ok(Solution::from_eval(mid, Status::Converged, iter));
        }

        if is_better {
            best = mid;
        }
    }

    Ok(Solution::from_eval(best, Status::MaxIters, config.max_iters))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

fn evaluate_finite<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, [x])?;
    if eval.is_finite() {
        Ok(eval)
    } else {
        Err(Error::NonFiniteResidual {
            x,
            residual: eval.residuals[0],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    /// Exponential growth, shaped like a vapor pressure curve.
    struct Exponential;
    impl Model for Exponential {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok((input / 10.0).exp())
        }
    }

    /// Monotonically decreasing on [0, 1], shaped like a water activity curve.
    struct Decreasing;
    impl Model for Decreasing {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(1.0 - input * input)
        }
    }

    /// Drives the model output to a target value.
    struct Target(f64);
    impl EquationProblem<1> for Target {
        type Input = f64;
        type Output = f64;
        type InputError = Infallible;
        type ResidualError = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
            Ok(x[0])
        }

        fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Infallible> {
            Ok([output - self.0])
        }
    }

    #[test]
    fn inverts_increasing_relation() {
        let target = 20.0_f64;
        let solution =
            solve_unobserved(&Exponential, &Target(target), [0.0, 50.0], &Config::default())
                .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 10.0 * target.ln(), epsilon = 1e-9);
        assert_relative_eq!(solution.snapshot.output, target, epsilon = 1e-9);
    }

    #[test]
    fn inverts_decreasing_relation() {
        let solution = solve_unobserved(&Decreasing, &Target(0.75), [0.0, 1.0], &Config::default())
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn endpoint_root_returns_without_iterating() {
        let solution = solve_unobserved(&Decreasing, &Target(0.0), [0.0, 1.0], &Config::default())
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 1.0);
    }

    #[test]
    fn reversed_bracket_is_normalized() {
        let solution = solve_unobserved(&Decreasing, &Target(0.19), [1.0, 0.0], &Config::default())
            .expect("should solve");
        assert_relative_eq!(solution.x, 0.9, epsilon = 1e-10);
    }

    #[test]
    fn observer_sees_each_iteration_and_can_stop() {
        let mut seen = Vec::new();
        let observer = |event: &Event| {
            seen.push(event.iter);
            (event.iter >= 4).then_some(Action::StopEarly)
        };

        let solution = solve(
            &Exponential,
            &Target(20.0),
            [0.0, 50.0],
            &Config::default(),
            observer,
        )
        .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 4);
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn errors_without_sign_change() {
        let result = solve_unobserved(&Decreasing, &Target(2.0), [0.0, 1.0], &Config::default());
        assert!(matches!(result, Err(Error::NoBracket { .. })));
    }

    #[test]
    fn errors_on_invalid_bracket() {
        let result = solve_unobserved(&Decreasing, &Target(0.5), [0.3, 0.3], &Config::default());
        assert!(matches!(
            result,
            Err(Error::Bracket(BracketError::ZeroWidth { .. }))
        ));

        let result = solve_unobserved(
            &Decreasing,
            &Target(0.5),
            [0.0, f64::INFINITY],
            &Config::default(),
        );
        assert!(matches!(
            result,
            Err(Error::Bracket(BracketError::NonFinite { .. }))
        ));
    }

    #[test]
    fn errors_on_invalid_config() {
        let config = Config {
            x_abs_tol: -1.0,
            ..Config::default()
        };
        let result = solve_unobserved(&Decreasing, &Target(0.5), [0.0, 1.0], &config);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn zero_iterations_report_best_endpoint() {
        let config = Config::default().with_max_iters(0);
        let solution = solve_unobserved(&Decreasing, &Target(0.9), [0.0, 1.0], &config)
            .expect("should return best endpoint");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 0);
        // |1.0 - 0.9| at x = 0 beats |0.0 - 0.9| at x = 1.
        assert_relative_eq!(solution.x, 0.0);
    }
}
