use ninterp::error::{InterpolateError, ValidateError};
use thiserror::Error;

/// Errors from building or evaluating an interpolant.
#[derive(Error, Debug)]
pub enum InterpError {
    #[error(transparent)]
    Validation(#[from] ValidateError),

    #[error(transparent)]
    Interpolation(#[from] InterpolateError),
}
