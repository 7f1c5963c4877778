//! Ordinary least squares with an intercept.
//!
//! This module fits the linear model stored in every model-tree leaf and
//! used to score candidate splits.
//!
//! # Components
//!
//! - [`fit_ols`]: Build the design matrix and solve the normal equations
//! - [`LinearFit`]: Coefficients plus the design matrix and response used
//! - [`cholesky_solve`]: Normal-equation solver with a relative pivot check
//!
//! # Singularity
//!
//! Slopes are solved on mean-centred predictors, so the checks measure each
//! predictor's spread rather than its distance from zero. A Cholesky pivot
//! at or below `singular_tolerance` times its diagonal entry marks a
//! collinear predictor, and a predictor whose centred norm is within
//! `singular_tolerance` of its raw norm counts as constant. With
//! [`DEFAULT_SINGULAR_TOLERANCE`] this catches dependencies that an exact
//! `det == 0` test would let through as rounding noise.

mod ols;
mod solver;

pub use ols::{LinearFit, fit_ols};
pub use solver::cholesky_solve;

/// Default relative pivot threshold for the normal-equation solver.
pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-10;

/// Errors raised by the linear fitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FitError {
    #[error(
        "singular design matrix (column {column} of XᵗX is dependent); try increasing n_tolerance"
    )]
    Singular { column: usize },
    #[error("cannot fit a linear model to a block with no rows")]
    Empty,
}
