use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use ramsey_core::{Model, OptimizationProblem};

use super::{
    Action, Config, Error, Event, Status, maximize, maximize_unobserved, minimize,
    minimize_unobserved,
};

/// A model wrapping a plain scalar function.
struct Curve<F>(F);

impl<F: Fn(f64) -> f64> Model for Curve<F> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok((self.0)(*x))
    }
}

/// Searches over the model input directly and scores its output.
struct Direct;

impl OptimizationProblem<1> for Direct {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

fn cubic() -> Curve<impl Fn(f64) -> f64> {
    Curve(|x: f64| x.powi(3) - 4.0 * x)
}

fn quadratic() -> Curve<impl Fn(f64) -> f64> {
    Curve(|x: f64| (x - 5.0).powi(2))
}

#[test]
fn finds_local_minimum_of_cubic() {
    let solution = minimize_unobserved(&cubic(), &Direct, [0.0, 2.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 2.0 / 3.0_f64.sqrt(), epsilon = 1e-5);
    assert_relative_eq!(solution.snapshot.input, solution.x);
    assert_relative_eq!(solution.snapshot.output, solution.objective);
}

#[test]
fn finds_local_maximum_of_cubic() {
    let solution = maximize_unobserved(&cubic(), &Direct, [-2.0, 0.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, -2.0 / 3.0_f64.sqrt(), epsilon = 1e-5);
    // Maximized objectives are reported with their own sign.
    assert!(solution.objective > 0.0);
}

#[test]
fn log_objective_is_only_evaluated_inside_the_bracket() {
    let mut lowest = f64::INFINITY;
    let observer = |event: &Event<'_, _, _>| -> Option<Action> {
        lowest = lowest.min(event.x());
        None
    };

    let solution = maximize(
        &Curve(|x: f64| x.ln() - x),
        &Direct,
        [0.0, 3.0],
        &Config::default(),
        observer,
    )
    .expect("should converge");

    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-5);
    assert!(solution.objective.is_finite());
    assert!(lowest > 0.0);
}

#[test]
fn quadratic_needs_few_evaluations() {
    let solution = minimize_unobserved(&quadratic(), &Direct, [0.0, 20.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 5.0, epsilon = 1e-5);
    assert!(solution.iters < 15, "took {} evaluations", solution.iters);
}

#[test]
fn bracket_order_does_not_matter() {
    let solution = minimize_unobserved(&quadratic(), &Direct, [20.0, 0.0], &Config::default())
        .expect("should converge");

    assert_relative_eq!(solution.x, 5.0, epsilon = 1e-5);
}

#[test]
fn stop_early_ends_after_the_current_trial() {
    let mut seen = 0;
    let observer = |_: &Event<'_, _, _>| {
        seen += 1;
        (seen == 3).then_some(Action::StopEarly)
    };

    let solution = minimize(&cubic(), &Direct, [0.0, 2.0], &Config::default(), observer)
        .expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
}

#[test]
fn evaluation_limit_is_reported() {
    let config = Config::new(2, 1e-12, 1e-12).unwrap();

    let solution =
        minimize_unobserved(&cubic(), &Direct, [0.0, 2.0], &config).expect("should complete");

    assert_eq!(solution.status, Status::MaxIters);
    assert!(!solution.is_converged());
    assert_eq!(solution.iters, 2);
}

#[test]
fn discarding_every_trial_keeps_the_start() {
    // The start sits one golden section into [0, 10] and is never observed.
    let solution = minimize(
        &Curve(|x: f64| x),
        &Direct,
        [0.0, 10.0],
        &Config::default(),
        |_: &Event<'_, _, _>| Some(Action::AssumeWorse),
    )
    .expect("should complete");

    assert_relative_eq!(solution.x, 3.819_660_112_501_051, epsilon = 1e-12);
}

#[derive(Debug, Error)]
#[error("undefined above {limit}")]
struct Undefined {
    limit: f64,
}

/// The identity on `(-∞, limit]`, failing above it.
struct Truncated {
    limit: f64,
}

impl Model for Truncated {
    type Input = f64;
    type Output = f64;
    type Error = Undefined;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x > self.limit {
            Err(Undefined { limit: self.limit })
        } else {
            Ok(*x)
        }
    }
}

#[test]
fn unhandled_model_failure_is_an_error() {
    // The start (~3.82) evaluates; the first golden step (~6.18) does not.
    let model = Truncated { limit: 5.0 };

    let result = minimize_unobserved(&model, &Direct, [0.0, 10.0], &Config::default());

    match result {
        Err(Error::Model(source)) => assert_eq!(source.to_string(), "undefined above 5"),
        other => panic!("expected a model error, got {:?}", other.map(|s| s.x)),
    }
}

#[test]
fn failing_start_is_an_error() {
    let model = Truncated { limit: -1.0 };

    let result = minimize_unobserved(&model, &Direct, [0.0, 10.0], &Config::default());

    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn assume_worse_steers_away_from_failures() {
    let model = Truncated { limit: 5.0 };
    let mut failures = 0;
    let observer = |event: &Event<'_, _, _>| match event {
        Event::ModelFailed { .. } => {
            failures += 1;
            Some(Action::AssumeWorse)
        }
        _ => None,
    };

    let solution = minimize(&model, &Direct, [0.0, 10.0], &Config::default(), observer)
        .expect("should recover");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.x < 1e-4, "x = {}", solution.x);
    assert!(failures >= 1);
}

#[test]
fn zero_width_bracket_is_rejected() {
    let result = minimize_unobserved(&Curve(|x: f64| x), &Direct, [1.0, 1.0], &Config::default());

    assert!(matches!(result, Err(Error::DegenerateBracket { at }) if at == 1.0));
}

#[test]
fn best_objective_never_regresses() {
    let mut previous = f64::INFINITY;
    let mut regressions = 0;
    let observer = |event: &Event<'_, _, _>| -> Option<Action> {
        let best = event.best().objective;
        if best > previous {
            regressions += 1;
        }
        if let Some(objective) = event.objective() {
            assert!(objective.is_finite());
        }
        previous = best;
        None
    };

    minimize(&quadratic(), &Direct, [0.0, 20.0], &Config::default(), observer)
        .expect("should converge");

    assert_eq!(regressions, 0);
}
