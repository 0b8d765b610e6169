//! Numerical solvers built on the `ramsey-core` problem traits.
//!
//! # Modules
//!
//! - [`optimization`]: minimizing or maximizing a scalar objective

pub mod optimization;
