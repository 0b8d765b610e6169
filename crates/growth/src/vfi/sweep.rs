use ndarray::Array1;
use ramsey_solvers::optimization::brent;

use crate::{
    GrowthModel,
    bellman::{BellmanObjective, ChooseConsumption},
    interpolation::LinearInterpolant,
};

use super::{Config, Error};

/// Applies one Bellman update to `values`, returning the next values and policy.
pub(super) fn sweep(
    model: &GrowthModel,
    config: &Config,
    values: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), Error> {
    let interpolant = LinearInterpolant::new(
        model.k_grid().clone(),
        Array1::from(values.to_vec()),
        config.bounds().extrapolate(),
    )?;

    #[cfg(feature = "parallel")]
    let states = update_each_parallel(model, config, &interpolant)?;

    #[cfg(not(feature = "parallel"))]
    let states = update_each(model, config, &interpolant)?;

    Ok(states.into_iter().unzip())
}

/// Updates every grid point in order against one interpolant.
#[cfg(any(test, not(feature = "parallel")))]
fn update_each(
    model: &GrowthModel,
    config: &Config,
    interpolant: &LinearInterpolant,
) -> Result<Vec<(f64, f64)>, Error> {
    let grid = model.k_grid();
    (0..grid.len())
        .map(|index| update_state(model, config, interpolant, index, grid[index]))
        .collect()
}

/// Updates every grid point across the rayon pool against one interpolant.
#[cfg(feature = "parallel")]
fn update_each_parallel(
    model: &GrowthModel,
    config: &Config,
    interpolant: &LinearInterpolant,
) -> Result<Vec<(f64, f64)>, Error> {
    use rayon::prelude::*;

    let grid = model.k_grid();
    (0..grid.len())
        .into_par_iter()
        .map(|index| update_state(model, config, interpolant, index, grid[index]))
        .collect()
}

/// Maximizes the Bellman right-hand side at one grid point.
///
/// Returns `(value, consumption)`.
fn update_state(
    model: &GrowthModel,
    config: &Config,
    interpolant: &LinearInterpolant,
    index: usize,
    capital: f64,
) -> Result<(f64, f64), Error> {
    let output = model.production(capital);
    let bracket = config
        .bounds()
        .interval(model, output, config.epsilon())
        .ok_or(Error::InfeasibleState {
            index,
            capital,
            output,
        })?;

    let objective = BellmanObjective::new(output, model.beta(), interpolant);
    let solution = brent::maximize_unobserved(
        &objective,
        &ChooseConsumption,
        bracket,
        config.optimizer(),
    )
    .map_err(|source| Error::Optimizer { index, source })?;

    if !solution.objective.is_finite() {
        return Err(Error::NonFinite { index, capital });
    }

    Ok((solution.objective, solution.x))
}

/// Sup-norm distance between two snapshots of equal length.
pub(super) fn sup_distance(next: &[f64], prev: &[f64]) -> f64 {
    next.iter()
        .zip(prev)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}
