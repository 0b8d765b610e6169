use ramsey_core::Snapshot;

use super::{
    Config, Point, Solution,
    goal::Goal,
    interval::{GOLDEN, Interval},
    solution::Status,
};

/// A visited abscissa and its score (lower is better).
#[derive(Debug, Clone, Copy)]
struct Probe {
    x: f64,
    score: f64,
}

/// Search state for Brent's method.
///
/// The three probes are the lowest, second lowest, and previous second
/// lowest scores seen. A discarded point scores `+∞`.
pub(super) struct State<I, O> {
    goal: Goal,
    interval: Interval,
    first: Probe,
    second: Probe,
    third: Probe,

    /// Most recent step taken from `first`.
    step: f64,

    /// Step taken before `step`; a parabolic step must be shorter than half of it.
    older_step: f64,

    best: Point,
    best_snapshot: Snapshot<I, O>,
}

impl<I, O> State<I, O> {
    pub(super) fn new(
        goal: Goal,
        interval: Interval,
        start: Point,
        snapshot: Snapshot<I, O>,
    ) -> Self {
        let probe = Probe {
            x: start.x,
            score: goal.score(start.objective),
        };
        Self {
            goal,
            interval,
            first: probe,
            second: probe,
            third: probe,
            step: 0.0,
            older_step: 0.0,
            best: start,
            best_snapshot: snapshot,
        }
    }

    pub(super) fn best(&self) -> Point {
        self.best
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        let tol = config.tolerance_at(self.first.x);
        (self.first.x - self.interval.mid()).abs() <= 2.0 * tol - 0.5 * self.interval.width()
    }

    /// Chooses the next abscissa to evaluate.
    pub(super) fn next_trial(&mut self, config: &Config) -> f64 {
        let x = self.first.x;
        let tol = config.tolerance_at(x);

        match self.parabolic_step(tol) {
            Some(step) => self.step = step,
            None => {
                self.older_step = if x >= self.interval.mid() {
                    self.interval.lower - x
                } else {
                    self.interval.upper - x
                };
                self.step = GOLDEN * self.older_step;
            }
        }

        x + sign_or_one(self.step) * self.step.abs().max(tol)
    }

    /// Returns the step to the vertex of the parabola through the three
    /// probes, if it is short enough and lands inside the interval.
    fn parabolic_step(&mut self, tol: f64) -> Option<f64> {
        if self.older_step.abs() <= tol {
            return None;
        }

        let (a, b, c) = (self.first, self.second, self.third);
        let r = (a.x - b.x) * (a.score - c.score);
        let q = (a.x - c.x) * (a.score - b.score);
        let mut p = (a.x - c.x) * q - (a.x - b.x) * r;
        let mut q = 2.0 * (q - r);
        if q > 0.0 {
            p = -p;
        }
        q = q.abs();

        let limit = self.older_step;
        self.older_step = self.step;

        let shrinking = p.abs() < (0.5 * q * limit).abs();
        let inside = p > q * (self.interval.lower - a.x) && p < q * (self.interval.upper - a.x);
        if !(shrinking && inside) {
            return None;
        }

        let trial = a.x + p / q;
        if trial - self.interval.lower < 2.0 * tol || self.interval.upper - trial < 2.0 * tol {
            Some(tol * sign_or_one(self.interval.mid() - a.x))
        } else {
            Some(p / q)
        }
    }

    /// Records a successful evaluation.
    pub(super) fn record(&mut self, point: Point, snapshot: Snapshot<I, O>) {
        let score = self.goal.score(point.objective);
        if score < self.goal.score(self.best.objective) {
            self.best = point;
            self.best_snapshot = snapshot;
        }
        self.shrink(Probe { x: point.x, score });
    }

    /// Records `x` as worse than every point seen so far.
    pub(super) fn discard(&mut self, x: f64) {
        self.shrink(Probe {
            x,
            score: f64::INFINITY,
        });
    }

    /// Narrows the interval around the lowest score and reorders the probes.
    #[allow(clippy::float_cmp)]
    fn shrink(&mut self, probe: Probe) {
        let x = self.first.x;

        if probe.score <= self.first.score {
            if probe.x >= x {
                self.interval.lower = x;
            } else {
                self.interval.upper = x;
            }
            self.third = self.second;
            self.second = self.first;
            self.first = probe;
            return;
        }

        if probe.x < x {
            self.interval.lower = probe.x;
        } else {
            self.interval.upper = probe.x;
        }

        if probe.score <= self.second.score || self.second.x == x {
            self.third = self.second;
            self.second = probe;
        } else if probe.score <= self.third.score
            || self.third.x == x
            || self.third.x == self.second.x
        {
            self.third = probe;
        }
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution<I, O> {
        Solution {
            status,
            x: self.best.x,
            objective: self.best.objective,
            snapshot: self.best_snapshot,
            iters,
        }
    }
}

fn sign_or_one(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}
