use ramsey_solvers::optimization::brent;
use thiserror::Error;

use crate::bellman::ConsumptionBounds;

/// Configuration for value function iteration.
///
/// Iteration stops once the sup-norm distance between successive value
/// snapshots drops below `tol`, or after `max_iters` sweeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: f64,
    max_iters: usize,
    epsilon: f64,
    log_every: usize,
    bounds: ConsumptionBounds,
    optimizer: brent::Config,
}

/// Errors that can occur when validating a VFI config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tol must be finite and positive, got {0}")]
    Tol(f64),

    #[error("epsilon must be finite and positive, got {0}")]
    Epsilon(f64),
}

impl Default for Config {
    /// Returns `tol = 1e-6`, `max_iters = 500`, `epsilon = 1e-8`,
    /// `log_every = 50`, on-grid bounds, and the default Brent config.
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iters: 500,
            epsilon: 1e-8,
            log_every: 50,
            bounds: ConsumptionBounds::OnGrid,
            optimizer: brent::Config::default(),
        }
    }
}

impl Config {
    /// Creates a config with the given stopping rule and defaults elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tol`] if `tol` is not finite and positive.
    pub fn new(tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !(tol.is_finite() && tol > 0.0) {
            return Err(ConfigError::Tol(tol));
        }

        Ok(Self {
            tol,
            max_iters,
            ..Self::default()
        })
    }

    /// Sets the floor kept between consumption and zero, and between
    /// consumption and output.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Epsilon`] if `epsilon` is not finite and positive.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Self, ConfigError> {
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(ConfigError::Epsilon(epsilon));
        }
        Ok(Self { epsilon, ..self })
    }

    /// Sets how often progress is logged; `0` disables progress records.
    #[must_use]
    pub fn with_log_every(self, log_every: usize) -> Self {
        Self { log_every, ..self }
    }

    #[must_use]
    pub fn with_bounds(self, bounds: ConsumptionBounds) -> Self {
        Self { bounds, ..self }
    }

    /// Sets the config for the per-state consumption search.
    #[must_use]
    pub fn with_optimizer(self, optimizer: brent::Config) -> Self {
        Self { optimizer, ..self }
    }

    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[must_use]
    pub fn log_every(&self) -> usize {
        self.log_every
    }

    #[must_use]
    pub fn bounds(&self) -> ConsumptionBounds {
        self.bounds
    }

    #[must_use]
    pub fn optimizer(&self) -> &brent::Config {
        &self.optimizer
    }

    /// Returns true if a progress record is due after `iter` sweeps.
    pub(super) fn should_log(&self, iter: usize) -> bool {
        self.log_every > 0 && iter % self.log_every == 0
    }
}
