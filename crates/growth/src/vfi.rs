//! Value function iteration on the capital grid.
//!
//! Starting from `V = 0`, each sweep builds a linear interpolant over the
//! previous values and, at every grid point, maximizes
//!
//! ```text
//! ln(c) + β·V̂(k^α - c)
//! ```
//!
//! over consumption with Brent's method. Sweeps repeat until the sup-norm
//! distance between successive snapshots falls below [`Config::tol`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every completed sweep, carrying the
//! new snapshot and its distance from the previous one. Observers can return
//! [`Action::StopEarly`] to halt. Convergence takes precedence: a sweep that
//! meets the tolerance reports [`Status::Converged`] regardless of the action.
//!
//! # Logging
//!
//! The solver logs through `tracing`: a debug record at start, an info record
//! every [`Config::log_every`] sweeps and on convergence, and a warning when
//! the iteration limit is reached.

mod action;
mod config;
mod error;
mod event;
mod solution;
mod sweep;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use ramsey_core::Observer;
use tracing::{debug, info, warn};

use crate::GrowthModel;

use sweep::{sup_distance, sweep};

/// Solves the model by value function iteration.
///
/// Reaching `max_iters` is not an error; the returned solution reports
/// [`Status::MaxIters`]. Use [`Solution::into_converged`] to treat it as one.
///
/// # Errors
///
/// Returns an error if a grid point has no feasible consumption, if the
/// consumption search fails, or if a maximized value is not finite.
/// No partial solution is returned in these cases.
pub fn solve<Obs>(
    model: &GrowthModel,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    debug!(
        grid_size = model.grid_size(),
        alpha = model.alpha(),
        beta = model.beta(),
        tol = config.tol(),
        max_iters = config.max_iters(),
        bounds = ?config.bounds(),
        "starting value function iteration"
    );

    let mut values = vec![0.0; model.grid_size()];
    let mut policy = vec![0.0; model.grid_size()];
    let mut distance = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let (next_values, next_policy) = sweep(model, config, &values)?;
        distance = sup_distance(&next_values, &values);
        values = next_values;
        policy = next_policy;

        if config.should_log(iter) {
            info!(iter, distance, "value function iteration progress");
        }

        let event = Event {
            iter,
            distance,
            values: &values,
            policy: &policy,
        };
        let action = observer.observe(&event);

        let status = if distance < config.tol() {
            info!(iter, distance, "value function iteration converged");
            Status::Converged
        } else if let Some(Action::StopEarly) = action {
            Status::StoppedByObserver
        } else {
            continue;
        };

        return Ok(Solution {
            status,
            values,
            policy,
            iters: iter,
            distance,
        });
    }

    warn!(
        iters = config.max_iters(),
        distance,
        tol = config.tol(),
        "value function iteration hit the iteration limit"
    );

    Ok(Solution {
        status: Status::MaxIters,
        values,
        policy,
        iters: config.max_iters(),
        distance,
    })
}

/// Solves the model without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(model: &GrowthModel, config: &Config) -> Result<Solution, Error> {
    solve(model, config, ())
}
