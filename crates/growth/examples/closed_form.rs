//! Solves the default growth model and compares it with the closed form.
//!
//! Run with `RUST_LOG=ramsey_growth=info` to see iteration progress.

use ramsey_growth::{GrowthModel, Params, analytical, vfi};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let model = GrowthModel::new(Params::default())?;
    let solution = vfi::solve_unobserved(&model, &vfi::Config::default())?.into_converged()?;

    let mut max_error: f64 = 0.0;
    for (&k, &v) in model.k_grid().iter().zip(&solution.values) {
        max_error = max_error.max((v - analytical::closed_form_value(&model, k)?).abs());
    }

    println!(
        "converged in {} iterations (distance {:.2e})",
        solution.iters, solution.distance
    );
    println!("max |V - V*| on the grid: {max_error:.6}");

    for i in [0, model.grid_size() / 2, model.grid_size() - 1] {
        let k = model.k_grid()[i];
        println!(
            "k = {k:.4}  V = {:.6}  V* = {:.6}  c = {:.6}  c* = {:.6}",
            solution.values[i],
            analytical::closed_form_value(&model, k)?,
            solution.policy[i],
            analytical::closed_form_consumption(&model, k)?,
        );
    }

    Ok(())
}
