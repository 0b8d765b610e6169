//! Piecewise-linear interpolation over the capital grid.
//!
//! Wraps `ninterp`'s one-dimensional linear interpolator. A fresh
//! [`LinearInterpolant`] is built from each value snapshot; it owns copies of
//! the grid and the values, so later changes to either do not affect it.

mod error;
mod extrapolate;
mod linear;

pub use error::InterpError;
pub use extrapolate::Extrapolate;
pub use linear::LinearInterpolant;
