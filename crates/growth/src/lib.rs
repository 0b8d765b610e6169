//! Value function iteration for the deterministic optimal growth model.
//!
//! A single agent with log utility owns capital `k`, produces `f(k) = k^α`,
//! and splits output between consumption and next period's capital (capital
//! depreciates fully). The value function solves
//!
//! ```text
//! V(k) = max_c [ ln(c) + β·V(k^α - c) ]
//! ```
//!
//! # Modules
//!
//! - [`model`]: validated parameters and the capital grid
//! - [`analytical`]: closed-form solution used to validate the solver
//! - [`interpolation`]: piecewise-linear interpolant over the grid
//! - [`bellman`]: the per-state objective and consumption bounds
//! - [`vfi`]: the value function iteration solver
//!
//! # Example
//!
//! ```no_run
//! use ramsey_growth::{GrowthModel, Params, analytical, vfi};
//!
//! let model = GrowthModel::new(Params::default())?;
//! let solution = vfi::solve_unobserved(&model, &vfi::Config::default())?.into_converged()?;
//!
//! let exact = analytical::closed_form_value(&model, model.k_min())?;
//! assert!((solution.values[0] - exact).abs() < 0.05);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analytical;
pub mod bellman;
pub mod interpolation;
pub mod model;
pub mod vfi;

pub use model::{GrowthModel, ParamError, Params};
