use ndarray::Array1;
use ninterp::{
    prelude::{Interp1DOwned, Interpolator},
    strategy::Linear,
};
use ramsey_core::Model;

use super::{error::InterpError, extrapolate::Extrapolate};

/// Piecewise-linear interpolant through `(x, f(x))` samples.
pub struct LinearInterpolant {
    interp: Interp1DOwned<f64, Linear>,
}

impl LinearInterpolant {
    /// Builds an interpolant from strictly increasing `x` and matching `f_x`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::Validation`] if the arrays have different
    /// lengths, fewer than two points, or `x` is not sorted.
    pub fn new(
        x: Array1<f64>,
        f_x: Array1<f64>,
        extrapolate: Extrapolate,
    ) -> Result<Self, InterpError> {
        let interp = Interp1DOwned::new(x, f_x, Linear, extrapolate.into())?;
        Ok(Self { interp })
    }

    /// Evaluates the interpolant at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::Interpolation`] if `x` lies outside the grid and
    /// extrapolation is disabled.
    pub fn eval(&self, x: f64) -> Result<f64, InterpError> {
        self.interp.interpolate(&[x]).map_err(Into::into)
    }
}

impl Model for LinearInterpolant {
    type Input = f64;
    type Output = f64;
    type Error = InterpError;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        self.eval(*input)
    }
}
