use ndarray::Array1;
use thiserror::Error;

/// Parameters of the optimal growth model.
///
/// Build a [`GrowthModel`] from these with [`GrowthModel::new`], which
/// validates every field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Params {
    /// Capital share `α` in `f(k) = k^α`, in `(0, 1)`. Default `0.65`.
    pub alpha: f64,

    /// Discount factor `β`, in `(0, 1)`. Default `0.95`.
    pub beta: f64,

    /// Lowest capital grid point, positive. Default `0.01`.
    pub k_min: f64,

    /// Highest capital grid point, above `k_min`. Default `2.0`.
    pub k_max: f64,

    /// Number of grid points, at least 2. Default `150`.
    pub grid_size: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            alpha: 0.65,
            beta: 0.95,
            k_min: 0.01,
            k_max: 2.0,
            grid_size: 150,
        }
    }
}

/// Errors that can occur when validating model parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamError {
    #[error("alpha must lie in (0, 1), got {0}")]
    Alpha(f64),

    #[error("beta must lie in (0, 1), got {0}")]
    Beta(f64),

    #[error("k_min must be positive and finite, got {0}")]
    KMin(f64),

    #[error("k_max must be finite and exceed k_min = {k_min}, got {k_max}")]
    KMax { k_min: f64, k_max: f64 },

    #[error("grid_size must be at least 2, got {0}")]
    GridSize(usize),
}

/// The deterministic optimal growth model on an evenly spaced capital grid.
///
/// Immutable once built; solvers only read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthModel {
    params: Params,
    k_grid: Array1<f64>,
}

impl Default for GrowthModel {
    /// Returns the model built from [`Params::default`].
    fn default() -> Self {
        Self::from_valid(Params::default())
    }
}

impl GrowthModel {
    /// Creates a model from validated parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamError`] if `alpha` or `beta` lies outside `(0, 1)`,
    /// `k_min` is not positive, `k_max` does not exceed `k_min`, or
    /// `grid_size` is below 2. Non-finite values are rejected.
    pub fn new(params: Params) -> Result<Self, ParamError> {
        let Params {
            alpha,
            beta,
            k_min,
            k_max,
            grid_size,
        } = params;

        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ParamError::Alpha(alpha));
        }
        if !(beta > 0.0 && beta < 1.0) {
            return Err(ParamError::Beta(beta));
        }
        if !(k_min > 0.0 && k_min.is_finite()) {
            return Err(ParamError::KMin(k_min));
        }
        if !(k_max > k_min && k_max.is_finite()) {
            return Err(ParamError::KMax { k_min, k_max });
        }
        if grid_size < 2 {
            return Err(ParamError::GridSize(grid_size));
        }

        Ok(Self::from_valid(params))
    }

    fn from_valid(params: Params) -> Self {
        let mut k_grid = Array1::linspace(params.k_min, params.k_max, params.grid_size);
        // Pin the endpoints; linspace can drift by an ulp at the top.
        k_grid[0] = params.k_min;
        k_grid[params.grid_size - 1] = params.k_max;
        Self { params, k_grid }
    }

    /// Returns the parameters the model was built from.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.params.alpha
    }

    #[must_use]
    pub fn beta(&self) -> f64 {
        self.params.beta
    }

    #[must_use]
    pub fn k_min(&self) -> f64 {
        self.params.k_min
    }

    #[must_use]
    pub fn k_max(&self) -> f64 {
        self.params.k_max
    }

    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.params.grid_size
    }

    /// Returns the capital grid, strictly increasing from `k_min` to `k_max`.
    #[must_use]
    pub fn k_grid(&self) -> &Array1<f64> {
        &self.k_grid
    }

    /// Output produced from capital `k`: `f(k) = k^α`.
    #[must_use]
    pub fn production(&self, k: f64) -> f64 {
        k.powf(self.params.alpha)
    }
}
