use ramsey_solvers::optimization::brent;
use thiserror::Error;

use crate::interpolation::InterpError;

/// Errors that can occur during value function iteration.
#[derive(Debug, Error)]
pub enum Error {
    /// The consumption interval at a grid point has no interior.
    ///
    /// Under [`ConsumptionBounds::OnGrid`](crate::bellman::ConsumptionBounds::OnGrid)
    /// this happens whenever `y ≤ max(ε, k_min) + ε`; relaxed bounds only need
    /// `y > 2ε`.
    #[error(
        "no feasible consumption at grid index {index} (k = {capital}, y = {output}); \
         on-grid bounds need y > max(epsilon, k_min) + epsilon, \
         relaxed bounds only need y > 2 * epsilon"
    )]
    InfeasibleState {
        index: usize,
        capital: f64,
        output: f64,
    },

    /// The value interpolant could not be built.
    #[error(transparent)]
    Interpolation(#[from] InterpError),

    /// The consumption search failed at a grid point.
    #[error("consumption search failed at grid index {index}")]
    Optimizer {
        index: usize,
        #[source]
        source: brent::Error,
    },

    /// The maximized value at a grid point is not finite.
    #[error("non-finite value at grid index {index} (k = {capital})")]
    NonFinite { index: usize, capital: f64 },

    /// Iteration reached its limit before the distance fell below `tol`.
    #[error("no convergence after {iters} iterations (distance = {distance})")]
    NonConvergence { iters: usize, distance: f64 },
}
