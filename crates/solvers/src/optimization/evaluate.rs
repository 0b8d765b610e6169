use thiserror::Error;

use ramsey_core::{Model, OptimizationProblem, Snapshot};

/// A solver variable `x` together with everything computed from it.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],
    pub objective: f64,
    pub snapshot: Snapshot<I, O>,
}

/// Which side of an evaluation failed.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    #[error("model rejected the input")]
    Model(#[source] ME),

    /// Building the input from `x`, or scoring the output, failed.
    #[error("problem could not map x or score the output")]
    Problem(#[source] PE),
}

/// Runs `x` through the problem and model: build the input, call the model,
/// then score the pair.
///
/// # Errors
///
/// Returns the first failure, tagged by which side produced it.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> Result<Evaluation<M::Input, M::Output, N>, EvalError<M::Error, P::Error>>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let objective = problem
        .objective(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        objective,
        snapshot: Snapshot::new(input, output),
    })
}
