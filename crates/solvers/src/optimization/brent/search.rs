use ramsey_core::{Model, Observer, OptimizationProblem, Snapshot};

use crate::optimization::evaluate::{EvalError, evaluate};

use super::{
    Action, Config, Error, Event, Point, Solution, goal::Goal, interval::Interval,
    solution::Status, state::State,
};

/// Runs Brent's method toward `goal`.
///
/// The starting point is evaluated without an event. Any failure there is
/// returned as an error since no best point exists yet to fall back on.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    goal: Goal,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let interval = Interval::new(bracket)?;
    let start = evaluate(model, problem, [interval.golden_point()])?;
    let mut state = State::new(goal, interval, Point::from(&start), start.snapshot);

    let mut iters = 0;
    let status = loop {
        if state.is_converged(config) {
            break Status::Converged;
        }
        if iters == config.max_iters() {
            break Status::MaxIters;
        }
        iters += 1;

        let x = state.next_trial(config);
        match trial(model, problem, x, state.best(), &mut observer)? {
            Outcome::Keep(point, snapshot) => state.record(point, snapshot),
            Outcome::Discard => state.discard(x),
            Outcome::Halt => break Status::StoppedByObserver,
        }
    };

    Ok(state.into_solution(status, iters))
}

enum Outcome<I, O> {
    Keep(Point, Snapshot<I, O>),
    Discard,
    Halt,
}

impl<I, O> From<Action> for Outcome<I, O> {
    fn from(action: Action) -> Self {
        match action {
            Action::StopEarly => Self::Halt,
            Action::AssumeWorse => Self::Discard,
        }
    }
}

/// Evaluates `x`, reports it, and turns the observer's answer into an outcome.
///
/// A failed evaluation is only recoverable if the observer asks for it.
fn trial<M, P, Obs>(
    model: &M,
    problem: &P,
    x: f64,
    best: Point,
    observer: &mut Obs,
) -> Result<Outcome<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let err = match evaluate(model, problem, [x]) {
        Ok(eval) => {
            let point = Point::from(&eval);
            let action = observer.observe(&Event::Evaluated {
                point,
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
                best,
            });
            return Ok(action.map_or(Outcome::Keep(point, eval.snapshot), Outcome::from));
        }
        Err(err) => err,
    };

    let action = match &err {
        EvalError::Model(error) => observer.observe(&Event::ModelFailed { x, best, error }),
        EvalError::Problem(error) => observer.observe(&Event::ProblemFailed { x, best, error }),
    };
    action.map(Outcome::from).ok_or_else(|| err.into())
}
