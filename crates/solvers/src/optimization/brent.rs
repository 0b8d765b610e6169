//! Bounded scalar optimization with Brent's method.
//!
//! The search keeps an interval known to contain the optimum and the three
//! best abscissas seen so far. Each step tries the vertex of the parabola
//! through those three points and falls back to a golden-section step into
//! the larger half of the interval whenever the parabola would leave the
//! interval or fails to shrink the step fast enough. Convergence is
//! superlinear on smooth unimodal objectives and never worse than
//! golden-section search.
//!
//! Trial points always stay at least one tolerance inside the interval, so
//! objectives that blow up at a bound (such as `ln(c)` at `c = 0`) are safe
//! to search as long as they are finite in the interior.
//!
//! The stopping rule matches the classic `fminbound` routine: the search ends
//! once the best point lies within `2·tol` of the interval midpoint after
//! accounting for half the width, where `tol = x_rel_tol·|x| + x_abs_tol/3`.
//!
//! # Observers
//!
//! The starting point, one golden section into the bracket, is evaluated
//! silently. Every later trial produces one [`Event`]. An observer may answer
//! with [`Action::StopEarly`] to end the search with the best point so far,
//! or [`Action::AssumeWorse`] to have the trial treated as worse than any
//! point seen. A failed evaluation aborts the search unless the observer
//! answers with one of these actions.

mod action;
mod config;
mod error;
mod event;
mod goal;
mod interval;
mod point;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use ramsey_core::{Model, Observer, OptimizationProblem};

use goal::Goal;
use search::search;

/// Minimizes the problem's objective over `bracket`.
///
/// The two bounds may be given in either order.
///
/// # Errors
///
/// Returns an error if the bracket is degenerate or not finite, if the
/// starting point fails to evaluate, or if a later evaluation fails and the
/// observer lets the failure stand.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, bracket, config, Goal::Minimize, observer)
}

/// Like [`minimize`], without an observer.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, bracket, config, ())
}

/// Maximizes the problem's objective over `bracket`.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, bracket, config, Goal::Maximize, observer)
}

/// Like [`maximize`], without an observer.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, bracket, config, ())
}
