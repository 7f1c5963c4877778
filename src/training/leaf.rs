//! Linear model stored at a terminal node.

use ndarray::{Array1, ArrayView1, s};

use crate::data::SampleBlock;

/// Coefficients of a leaf's linear model.
///
/// Holds `[intercept, w_1, ..., w_{k-1}]`, one weight per feature column of
/// the block the leaf was fitted on. A prediction for feature values
/// `x_1..x_{k-1}` is `intercept + Σ w_j x_j`.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafModel {
    coefficients: Array1<f64>,
}

impl LeafModel {
    /// Wrap a coefficient vector (intercept first).
    ///
    /// # Panics
    ///
    /// Panics if `coefficients` is empty: every leaf has an intercept.
    pub fn new(coefficients: Array1<f64>) -> Self {
        assert!(!coefficients.is_empty(), "leaf model needs an intercept");
        Self { coefficients }
    }

    /// All coefficients, intercept first.
    #[inline]
    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.coefficients.view()
    }

    /// The constant term.
    #[inline]
    pub fn intercept(&self) -> f64 {
        self.coefficients[0]
    }

    /// Per-feature weights, without the intercept.
    #[inline]
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.coefficients.slice(s![1..])
    }

    /// Number of features the model expects.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Predict from one row of feature values (no target column).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `features.len() != n_features()`.
    #[inline]
    pub fn predict_row(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.n_features());
        self.weights()
            .iter()
            .zip(features)
            .fold(self.intercept(), |acc, (w, x)| acc + w * x)
    }

    /// Predict every row of a block, ignoring its target column.
    pub fn predict_block(&self, block: &SampleBlock) -> Array1<f64> {
        debug_assert_eq!(block.n_features(), self.n_features());
        block.slice(s![.., 1..]).dot(&self.weights()) + self.intercept()
    }

    /// Consume and return the coefficient vector.
    pub fn into_coefficients(self) -> Array1<f64> {
        self.coefficients
    }
}

/// # Panics
///
/// Panics if the vector is empty, see [`LeafModel::new`].
impl From<Array1<f64>> for LeafModel {
    fn from(coefficients: Array1<f64>) -> Self {
        Self::new(coefficients)
    }
}
