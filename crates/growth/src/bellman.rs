//! The per-state consumption choice inside one Bellman update.
//!
//! At capital `k` with output `y = k^α`, choosing consumption `c` leaves
//! `k' = y - c` for next period and is worth
//!
//! ```text
//! ln(c) + β·V̂(y - c)
//! ```
//!
//! where `V̂` interpolates the previous value snapshot. [`BellmanObjective`]
//! evaluates this for a fixed state and [`ChooseConsumption`] exposes it to
//! the scalar optimizers in `ramsey-solvers`.

use std::convert::Infallible;

use ramsey_core::{Model, OptimizationProblem};

use crate::{
    GrowthModel,
    interpolation::{Extrapolate, InterpError, LinearInterpolant},
};

/// How the consumption search interval is bounded at each grid point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumptionBounds {
    /// Keep next period's capital on the grid:
    /// `c ∈ [max(ε, y - k_max), min(y - ε, y - k_min)]`.
    ///
    /// The interpolant never extrapolates; querying it off the grid is an error.
    ///
    /// The interval is empty unless `y > max(ε, k_min) + ε`. Since `y = k^α`
    /// and output is lowest at `k_min`, a grid with `k_min^α ≤ k_min + ε`,
    /// which includes every grid with `k_min ≥ 1`, is infeasible at its first
    /// point. Use [`ConsumptionBounds::Relaxed`] for such grids.
    #[default]
    OnGrid,

    /// Only keep consumption and capital positive: `c ∈ [ε, y - ε]`.
    ///
    /// The interval is empty only when `y ≤ 2ε`.
    ///
    /// Next period's capital may fall below `k_min`, where the interpolant
    /// extends its first segment linearly.
    Relaxed,
}

impl ConsumptionBounds {
    /// Returns the consumption interval for output `y`, or `None` when it has
    /// no interior.
    #[must_use]
    pub fn interval(self, model: &GrowthModel, output: f64, epsilon: f64) -> Option<[f64; 2]> {
        let (lower, upper) = match self {
            Self::OnGrid => (
                epsilon.max(output - model.k_max()),
                (output - epsilon).min(output - model.k_min()),
            ),
            Self::Relaxed => (epsilon, output - epsilon),
        };
        (upper > lower).then_some([lower, upper])
    }

    /// Returns the extrapolation the value interpolant needs under these bounds.
    #[must_use]
    pub fn extrapolate(self) -> Extrapolate {
        match self {
            Self::OnGrid => Extrapolate::Error,
            Self::Relaxed => Extrapolate::Enable,
        }
    }
}

/// The outcome of one consumption choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub consumption: f64,

    /// Capital carried into next period, `y - c`.
    pub next_capital: f64,

    /// Continuation value `V̂(y - c)` from the interpolant.
    pub continuation: f64,

    /// Right-hand side of the Bellman equation, `ln(c) + β·V̂(y - c)`.
    pub value: f64,
}

/// Evaluates the Bellman right-hand side for one consumption level.
///
/// # Errors
///
/// Returns an error if the interpolant rejects `output - consumption`.
pub fn bellman_rhs(
    consumption: f64,
    output: f64,
    beta: f64,
    interpolant: &LinearInterpolant,
) -> Result<Choice, InterpError> {
    let next_capital = output - consumption;
    let continuation = interpolant.eval(next_capital)?;
    Ok(Choice {
        consumption,
        next_capital,
        continuation,
        value: consumption.ln() + beta * continuation,
    })
}

/// The Bellman right-hand side at a fixed state, as a [`Model`] of consumption.
pub struct BellmanObjective<'a> {
    output: f64,
    beta: f64,
    interpolant: &'a LinearInterpolant,
}

impl<'a> BellmanObjective<'a> {
    #[must_use]
    pub fn new(output: f64, beta: f64, interpolant: &'a LinearInterpolant) -> Self {
        Self {
            output,
            beta,
            interpolant,
        }
    }
}

impl Model for BellmanObjective<'_> {
    type Input = f64;
    type Output = Choice;
    type Error = InterpError;

    fn call(&self, consumption: &f64) -> Result<Choice, Self::Error> {
        bellman_rhs(*consumption, self.output, self.beta, self.interpolant)
    }
}

/// Optimization problem over consumption whose objective is [`Choice::value`].
pub struct ChooseConsumption;

impl OptimizationProblem<1> for ChooseConsumption {
    type Input = f64;
    type Output = Choice;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &Choice) -> Result<f64, Self::Error> {
        Ok(output.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::Array1;
    use ramsey_solvers::optimization::brent;

    use crate::{Params, analytical};

    const EPS: f64 = 1e-8;

    #[test]
    fn on_grid_interval_keeps_next_capital_on_grid() {
        let model = GrowthModel::default();

        for &k in model.k_grid() {
            let y = model.production(k);
            let [lo, hi] = ConsumptionBounds::OnGrid
                .interval(&model, y, EPS)
                .expect("default grid is feasible");

            assert!(hi > lo);
            assert!(y - hi >= model.k_min() - 1e-15);
            assert!(y - lo <= model.k_max() + 1e-15);
        }
    }

    #[test]
    fn relaxed_interval_only_floors_at_epsilon() {
        let model = GrowthModel::default();
        let y = model.production(0.01);

        let [lo, hi] = ConsumptionBounds::Relaxed.interval(&model, y, EPS).unwrap();

        assert_relative_eq!(lo, EPS);
        assert_relative_eq!(hi, y - EPS);
    }

    #[test]
    fn tiny_output_has_no_interior() {
        // k_min near zero with alpha near one leaves y ≈ k_min.
        let model = GrowthModel::new(Params {
            alpha: 0.99,
            k_min: 1e-9,
            ..Params::default()
        })
        .unwrap();
        let y = model.production(model.k_min());

        assert!(ConsumptionBounds::OnGrid.interval(&model, y, EPS).is_none());
        assert!(ConsumptionBounds::Relaxed.interval(&model, y, EPS).is_none());
    }

    #[test]
    fn output_below_k_min_is_infeasible_on_grid() {
        let model = GrowthModel::new(Params {
            k_min: 5.0,
            k_max: 6.0,
            ..Params::default()
        })
        .unwrap();
        let y = model.production(5.0);

        assert!(ConsumptionBounds::OnGrid.interval(&model, y, EPS).is_none());
        assert!(ConsumptionBounds::Relaxed.interval(&model, y, EPS).is_some());
    }

    #[test]
    fn on_grid_needs_output_above_k_min_plus_epsilon() {
        let model = GrowthModel::new(Params {
            k_min: 1.0,
            k_max: 100.0,
            ..Params::default()
        })
        .unwrap();

        // At k = 1 output equals capital, leaving nothing to consume.
        let y = model.production(model.k_min());
        assert!(ConsumptionBounds::OnGrid.interval(&model, y, EPS).is_none());
        assert!(ConsumptionBounds::Relaxed.interval(&model, y, EPS).is_some());

        // On the default grid the interval opens once y clears k_min + ε.
        let model = GrowthModel::default();
        let k_min = model.k_min();
        assert!(ConsumptionBounds::OnGrid.interval(&model, k_min + 0.5 * EPS, EPS).is_none());
        assert!(ConsumptionBounds::OnGrid.interval(&model, k_min + 1e-6, EPS).is_some());
    }

    #[test]
    fn bounds_select_extrapolation() {
        assert_eq!(ConsumptionBounds::OnGrid.extrapolate(), Extrapolate::Error);
        assert_eq!(ConsumptionBounds::Relaxed.extrapolate(), Extrapolate::Enable);
    }

    #[test]
    fn rhs_combines_utility_and_continuation() {
        let interp = LinearInterpolant::new(
            Array1::from(vec![0.0, 2.0]),
            Array1::from(vec![-2.0, 2.0]),
            Extrapolate::Error,
        )
        .unwrap();

        let choice = bellman_rhs(1.0, 1.5, 0.5, &interp).unwrap();

        assert_relative_eq!(choice.next_capital, 0.5);
        assert_relative_eq!(choice.continuation, -1.0);
        assert_relative_eq!(choice.value, 0.0 + 0.5 * -1.0);
    }

    #[test]
    fn maximizing_against_exact_values_recovers_exact_policy() {
        // One Bellman update starting from the closed form should reproduce
        // the closed-form policy, up to interpolation error.
        let model = GrowthModel::new(Params {
            grid_size: 400,
            ..Params::default()
        })
        .unwrap();
        let interp = LinearInterpolant::new(
            model.k_grid().clone(),
            analytical::closed_form_values(&model),
            Extrapolate::Error,
        )
        .unwrap();

        let k = 0.5;
        let y = model.production(k);
        let bracket = ConsumptionBounds::OnGrid.interval(&model, y, EPS).unwrap();
        let objective = BellmanObjective::new(y, model.beta(), &interp);

        let solution = brent::maximize_unobserved(
            &objective,
            &ChooseConsumption,
            bracket,
            &brent::Config::default(),
        )
        .unwrap();

        let exact_c = analytical::closed_form_consumption(&model, k).unwrap();
        let exact_v = analytical::closed_form_value(&model, k).unwrap();
        assert_relative_eq!(solution.x, exact_c, epsilon = 2e-3);
        assert_relative_eq!(solution.objective, exact_v, epsilon = 1e-3);
        assert_relative_eq!(solution.snapshot.output.consumption, solution.x);
    }
}
