//! Closed-form solution of the log-utility, Cobb-Douglas growth model.
//!
//! With full depreciation the value function is `V(k) = c1 + c2·ln(k)` with
//!
//! ```text
//! c1 = ln(1-αβ)/(1-β) + ln(αβ)·αβ / ((1-αβ)(1-β))
//! c2 = α / (1-αβ)
//! ```
//!
//! and the optimal policy saves the fixed fraction `αβ` of output.
//! These formulas only hold for the model encoded in
//! [`GrowthModel`]; they exist to validate [`vfi`](crate::vfi).

use ndarray::Array1;
use thiserror::Error;

use crate::GrowthModel;

/// Errors from evaluating the closed form outside its domain.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("capital must be positive, got {0}")]
    NonPositiveCapital(f64),
}

/// Returns the exact value `V(k)`.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveCapital`] if `k ≤ 0` or `k` is NaN.
pub fn closed_form_value(model: &GrowthModel, k: f64) -> Result<f64, DomainError> {
    check_capital(k)?;
    Ok(value_at(model.alpha(), model.beta(), k))
}

/// Returns the exact value at every point of the model's capital grid.
#[must_use]
pub fn closed_form_values(model: &GrowthModel) -> Array1<f64> {
    let (alpha, beta) = (model.alpha(), model.beta());
    model.k_grid().mapv(|k| value_at(alpha, beta, k))
}

/// Returns optimal consumption `(1-αβ)·k^α`.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveCapital`] if `k ≤ 0` or `k` is NaN.
pub fn closed_form_consumption(model: &GrowthModel, k: f64) -> Result<f64, DomainError> {
    check_capital(k)?;
    Ok((1.0 - model.alpha() * model.beta()) * model.production(k))
}

/// Returns optimal next-period capital `αβ·k^α`.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveCapital`] if `k ≤ 0` or `k` is NaN.
pub fn closed_form_savings(model: &GrowthModel, k: f64) -> Result<f64, DomainError> {
    check_capital(k)?;
    Ok(model.alpha() * model.beta() * model.production(k))
}

fn check_capital(k: f64) -> Result<(), DomainError> {
    if k > 0.0 {
        Ok(())
    } else {
        Err(DomainError::NonPositiveCapital(k))
    }
}

fn value_at(alpha: f64, beta: f64, k: f64) -> f64 {
    let ab = alpha * beta;
    let c1 = (1.0 - ab).ln() / (1.0 - beta) + (ab.ln() * ab) / ((1.0 - ab) * (1.0 - beta));
    let c2 = alpha / (1.0 - ab);
    c1 + c2 * k.ln()
}
