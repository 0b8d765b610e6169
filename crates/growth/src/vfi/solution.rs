use crate::GrowthModel;

use super::Error;

/// Indicates why iteration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The sup-norm distance fell below the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of value function iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Value at each grid point from the last sweep.
    pub values: Vec<f64>,

    /// Optimal consumption at each grid point from the last sweep.
    pub policy: Vec<f64>,

    /// Number of completed sweeps.
    pub iters: usize,

    /// Sup-norm distance reached by the last sweep.
    pub distance: f64,
}

impl Solution {
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the solution if it converged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonConvergence`] for any status other than
    /// [`Status::Converged`].
    pub fn into_converged(self) -> Result<Self, Error> {
        if self.is_converged() {
            Ok(self)
        } else {
            Err(Error::NonConvergence {
                iters: self.iters,
                distance: self.distance,
            })
        }
    }

    /// Returns next-period capital `k^α - c` implied by the policy.
    #[must_use]
    pub fn savings(&self, model: &GrowthModel) -> Vec<f64> {
        model
            .k_grid()
            .iter()
            .zip(&self.policy)
            .map(|(&k, &c)| model.production(k) - c)
            .collect()
    }
}
