//! Leaf models and error scores for blocks of rows.
//!
//! The split search asks two questions of a block: what model would a leaf
//! fitted on it hold, and how badly does that model fit. [`LeafOracle`]
//! answers both; [`LinearOracle`] is the least-squares implementation used by
//! model trees.

use ndarray::ArrayView2;

use super::leaf::LeafModel;
use super::linear::{DEFAULT_SINGULAR_TOLERANCE, FitError, fit_ols};

/// Leaf model and error score for a block of rows (column 0 is the target).
///
/// Implementations must be pure: the same rows always give the same model
/// and error. The split selector may call them from several threads.
pub trait LeafOracle: Send + Sync {
    /// Model stored at a terminal node fitted on `rows`.
    fn leaf_model(&self, rows: ArrayView2<'_, f64>) -> Result<LeafModel, FitError>;

    /// Non-negative fit error of `rows`. Lower is better.
    fn block_error(&self, rows: ArrayView2<'_, f64>) -> Result<f64, FitError>;
}

/// Ordinary least squares leaves scored by residual variance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearOracle {
    singular_tolerance: f64,
}

impl LinearOracle {
    /// Create an oracle with the given relative pivot threshold.
    pub fn new(singular_tolerance: f64) -> Self {
        Self { singular_tolerance }
    }

    /// Relative pivot threshold passed to the solver.
    pub fn singular_tolerance(&self) -> f64 {
        self.singular_tolerance
    }
}

impl Default for LinearOracle {
    fn default() -> Self {
        Self::new(DEFAULT_SINGULAR_TOLERANCE)
    }
}

impl LeafOracle for LinearOracle {
    fn leaf_model(&self, rows: ArrayView2<'_, f64>) -> Result<LeafModel, FitError> {
        let fit = fit_ols(rows, self.singular_tolerance)?;
        Ok(LeafModel::new(fit.coefficients))
    }

    /// Variance of the residuals `ŷ - y`, not their sum of squares.
    fn block_error(&self, rows: ArrayView2<'_, f64>) -> Result<f64, FitError> {
        let fit = fit_ols(rows, self.singular_tolerance)?;
        Ok(fit.residual_variance())
    }
}
