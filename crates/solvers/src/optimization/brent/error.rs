use std::error::Error as StdError;

use crate::optimization::evaluate::EvalError;

/// Errors that can occur during Brent's search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("bracket bounds must be finite, got [{lower}, {upper}]")]
    NonFiniteBracket { lower: f64, upper: f64 },

    #[error("bracket has zero width at {at}")]
    DegenerateBracket { at: f64 },
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
