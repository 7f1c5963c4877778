//! Design matrix construction and the least-squares fit.

use ndarray::{Array1, Array2, ArrayView2, s};

use super::{FitError, cholesky_solve};
use crate::data::{TARGET_COLUMN, axis};

/// A fitted linear model together with the data it was fitted on.
///
/// The design matrix and response are kept so callers can compute residuals
/// without refitting.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    /// `[intercept, w_1, ..., w_{k-1}]`.
    pub coefficients: Array1<f64>,
    /// `[1 | features]`, shape `[n_samples, k]`.
    pub design: Array2<f64>,
    /// Target column, length `n_samples`.
    pub response: Array1<f64>,
}

impl LinearFit {
    /// Fitted values `X w`.
    pub fn predictions(&self) -> Array1<f64> {
        self.design.dot(&self.coefficients)
    }

    /// Residuals `X w - y`.
    pub fn residuals(&self) -> Array1<f64> {
        self.predictions() - &self.response
    }

    /// Population variance of the residuals.
    ///
    /// This is the error score of a block: dividing by `n` keeps scores of
    /// differently sized blocks comparable.
    pub fn residual_variance(&self) -> f64 {
        let residuals = self.residuals();
        let n = residuals.len() as f64;
        let mean = residuals.sum() / n;
        residuals.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / n
    }
}

/// Fit `y = w_0 + Σ w_j x_j` by ordinary least squares.
///
/// Column 0 of `rows` is the response, the remaining columns are predictors.
/// The slopes solve the normal equations of the mean-centred predictors with
/// [`cholesky_solve`], and the intercept is recovered as `ȳ - Σ w_j x̄_j`.
/// Centring keeps the pivot check about the spread of each predictor, so a
/// large constant offset (timestamps, coordinates) does not look singular.
/// A predictor whose centred norm is at most `singular_tolerance` times its
/// raw norm is treated as constant.
///
/// # Errors
///
/// - [`FitError::Empty`] when `rows` has no rows
/// - [`FitError::Singular`] when `XᵗX` is not invertible, e.g. fewer distinct
///   rows than coefficients, or a constant or collinear predictor. The column
///   index refers to the design matrix `[1 | predictors]`.
///
/// # Example
///
/// ```
/// use modeltree::assert_approx_eq;
/// use modeltree::training::fit_ols;
/// use ndarray::array;
///
/// // y = 1 + 2x
/// let rows = array![[3.0, 1.0], [5.0, 2.0], [7.0, 3.0]];
/// let fit = fit_ols(rows.view(), 1e-10).unwrap();
///
/// assert_approx_eq!(fit.coefficients[0], 1.0, 1e-9);
/// assert_approx_eq!(fit.coefficients[1], 2.0, 1e-9);
/// ```
pub fn fit_ols(rows: ArrayView2<'_, f64>, singular_tolerance: f64) -> Result<LinearFit, FitError> {
    let (n_samples, n_columns) = rows.dim();
    if n_samples == 0 {
        return Err(FitError::Empty);
    }
    let n = n_samples as f64;

    let response = rows.column(TARGET_COLUMN).to_owned();
    let predictors = rows.slice(s![.., 1..]);

    let means = predictors.sum_axis(axis::ROWS) / n;
    let mut centred = &predictors - &means;
    for (mut column, raw) in centred.columns_mut().into_iter().zip(predictors.columns()) {
        let spread = column.dot(&column).sqrt();
        let magnitude = raw.dot(&raw).sqrt();
        // Spread at rounding level of the values: the column is constant
        if spread <= singular_tolerance * magnitude {
            column.fill(0.0);
        }
    }
    let response_mean = response.sum() / n;
    let centred_response = &response - response_mean;

    let xtx = centred.t().dot(&centred);
    let xty = centred.t().dot(&centred_response);
    let weights = cholesky_solve(xtx.view(), xty.view(), singular_tolerance).map_err(|err| {
        match err {
            // Shift past the intercept column
            FitError::Singular { column } => FitError::Singular { column: column + 1 },
            other => other,
        }
    })?;

    let mut coefficients = Array1::<f64>::zeros(n_columns);
    coefficients[0] = response_mean - weights.dot(&means);
    coefficients.slice_mut(s![1..]).assign(&weights);

    let mut design = Array2::<f64>::ones((n_samples, n_columns));
    design.slice_mut(s![.., 1..]).assign(&predictors);

    Ok(LinearFit {
        coefficients,
        design,
        response,
    })
}
