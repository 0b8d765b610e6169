use ramsey_core::{Model, OptimizationProblem};

use super::Point;

/// What happened at one trial point of a Brent search.
///
/// Every variant carries `best`, the best point known before the trial, so an
/// observer can judge the trial without tracking history itself.
pub enum Event<'a, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// The trial point was evaluated.
    Evaluated {
        point: Point,
        input: &'a M::Input,
        output: &'a M::Output,
        best: Point,
    },

    /// The model rejected the input built at `x`.
    ModelFailed {
        x: f64,
        best: Point,
        error: &'a M::Error,
    },

    /// The problem could not build an input at `x` or score the output.
    ProblemFailed {
        x: f64,
        best: Point,
        error: &'a P::Error,
    },
}

impl<M, P> Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Returns the trial abscissa.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    #[must_use]
    pub fn best(&self) -> Point {
        match self {
            Self::Evaluated { best, .. }
            | Self::ModelFailed { best, .. }
            | Self::ProblemFailed { best, .. } => *best,
        }
    }

    /// Returns the trial objective, or `None` if evaluation failed.
    #[must_use]
    pub fn objective(&self) -> Option<f64> {
        match self {
            Self::Evaluated { point, .. } => Some(point.objective),
            Self::ModelFailed { .. } | Self::ProblemFailed { .. } => None,
        }
    }
}
