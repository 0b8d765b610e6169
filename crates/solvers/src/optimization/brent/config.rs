use thiserror::Error;

/// Stopping rule for a Brent search.
///
/// Around a best point `x` the search resolves the optimum to
/// `tol = x_rel_tol·|x| + x_abs_tol/3`; trial points never land closer
/// than `tol` to each other or to the bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
}

/// A tolerance passed to [`Config::new`] that is negative or not finite.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,
}

impl Default for Config {
    /// At most 500 evaluations, `x_abs_tol = 1e-5`, and `x_rel_tol = √ε`.
    fn default() -> Self {
        Self {
            max_iters: 500,
            x_abs_tol: 1e-5,
            x_rel_tol: f64::EPSILON.sqrt(),
        }
    }
}

impl Config {
    /// # Errors
    ///
    /// Returns the [`ConfigError`] naming the first bad tolerance.
    pub fn new(max_iters: usize, x_abs_tol: f64, x_rel_tol: f64) -> Result<Self, ConfigError> {
        let usable = |tol: f64| tol.is_finite() && tol >= 0.0;
        if !usable(x_abs_tol) {
            return Err(ConfigError::XAbs);
        }
        if !usable(x_rel_tol) {
            return Err(ConfigError::XRel);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
        })
    }

    /// Evaluations allowed after the starting point.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    pub(super) fn tolerance_at(&self, x: f64) -> f64 {
        self.x_rel_tol * x.abs() + self.x_abs_tol / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(10, -1.0, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, f64::NAN, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, 0.0, f64::INFINITY), Err(ConfigError::XRel));
        assert_eq!(Config::new(10, -1.0, -1.0), Err(ConfigError::XAbs));
    }

    #[test]
    fn default_passes_validation() {
        let config = Config::default();
        let checked = Config::new(config.max_iters(), config.x_abs_tol(), config.x_rel_tol());

        assert_eq!(checked, Ok(config));
    }

    #[test]
    fn tolerance_grows_with_magnitude() {
        let config = Config::new(10, 3e-5, 1e-3).unwrap();

        assert_relative_eq!(config.tolerance_at(0.0), 1e-5);
        assert_relative_eq!(config.tolerance_at(-2.0), 2e-3 + 1e-5);
    }
}
