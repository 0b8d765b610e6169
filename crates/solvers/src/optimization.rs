//! Optimization over solver variables.
//!
//! Every solver here works through [`evaluate`]: the [`OptimizationProblem`]
//! turns `x: [f64; N]` into a model input, the model runs, and the problem
//! scores the result.
//!
//! - [`brent`]: bounded scalar search mixing parabolic and golden-section steps
//!
//! [`OptimizationProblem`]: ramsey_core::OptimizationProblem

mod evaluate;

pub use evaluate::{EvalError, Evaluation, evaluate};

pub mod brent;
