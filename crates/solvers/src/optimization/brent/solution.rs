use ramsey_core::Snapshot;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The interval around the best point shrank below the tolerance.
    Converged,

    /// Used every allowed evaluation before shrinking far enough.
    MaxIters,

    /// An observer returned [`Action::StopEarly`](super::Action::StopEarly).
    StoppedByObserver,
}

/// Best point found by a Brent search, with the model call that produced it.
///
/// Points an observer asked to treat as worse never become the best point, so
/// `snapshot` always holds a real evaluation.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    pub status: Status,
    pub x: f64,

    /// Objective at `x`, with its original sign.
    pub objective: f64,

    pub snapshot: Snapshot<I, O>,

    /// Evaluations performed after the starting point.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
