//! Leaf/error oracle integration tests.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ndarray::Array2;
use rstest::rstest;

use modeltree::testing::linear_block;
use modeltree::training::{LeafOracle, LinearOracle, fit_ols};
use modeltree::{FitError, LeafModel, SampleBlock, SplitParams, SplitSelector};

use crate::common::random_block;

#[rstest]
#[case(0.0, 2.0)]
#[case(3.0, -1.5)]
#[case(-100.0, 0.001)]
fn exact_line_recovered(#[case] intercept: f64, #[case] slope: f64) {
    let block = linear_block(25, intercept, slope);
    let oracle = LinearOracle::default();

    let leaf = oracle.leaf_model(block.view()).unwrap();
    assert_abs_diff_eq!(leaf.intercept(), intercept, epsilon = 1e-7);
    assert_abs_diff_eq!(leaf.weights()[0], slope, epsilon = 1e-9);

    let err = oracle.block_error(block.view()).unwrap();
    assert_abs_diff_eq!(err, 0.0, epsilon = 1e-12);
}

#[test]
fn leaf_predictions_match_fitted_values() {
    let block = random_block(40, 3, 0.2, 7);
    let fit = fit_ols(block.view(), 1e-10).unwrap();
    let leaf = LeafModel::new(fit.coefficients.clone());

    let fitted = fit.predictions();
    let predicted = leaf.predict_block(&block);
    for (a, b) in fitted.iter().zip(predicted.iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-10);
    }

    let row = block.row(0);
    let features: Vec<f64> = row.iter().skip(1).copied().collect();
    assert_relative_eq!(leaf.predict_row(&features), fitted[0], epsilon = 1e-10);
}

#[test]
fn noisy_fit_is_close_to_truth() {
    // y = 0.5 + 1·x1 + 2·x2 + noise
    let block = random_block(500, 2, 0.01, 1);
    let leaf = LinearOracle::default().leaf_model(block.view()).unwrap();
    let coefs = leaf.coefficients();
    assert_abs_diff_eq!(coefs[0], 0.5, epsilon = 0.01);
    assert_abs_diff_eq!(coefs[1], 1.0, epsilon = 0.01);
    assert_abs_diff_eq!(coefs[2], 2.0, epsilon = 0.01);
}

#[test]
fn block_error_is_residual_variance() {
    let block = random_block(30, 2, 0.5, 2);
    let fit = fit_ols(block.view(), 1e-10).unwrap();
    let residuals = fit.residuals();
    let mean = residuals.mean().unwrap();
    let variance = residuals.mapv(|r| (r - mean).powi(2)).mean().unwrap();

    let err = LinearOracle::default().block_error(block.view()).unwrap();
    assert_relative_eq!(err, variance, epsilon = 1e-12);
    assert!(err > 0.0);
}

#[test]
fn collinear_features_are_singular() {
    let mut data = Array2::zeros((6, 3));
    for i in 0..6 {
        let x = i as f64;
        data[[i, 0]] = x * x;
        data[[i, 1]] = x;
        data[[i, 2]] = 3.0 * x - 1.0;
    }
    let block = SampleBlock::new(data).unwrap();
    let err = LinearOracle::default().block_error(block.view()).unwrap_err();
    assert_eq!(err, FitError::Singular { column: 2 });
}

#[test]
fn nearly_collinear_caught_by_tolerance() {
    // Column 2 differs from column 1 by rounding-level noise
    let mut data = Array2::zeros((5, 3));
    for i in 0..5 {
        let x = i as f64 + 1.0;
        data[[i, 0]] = x;
        data[[i, 1]] = x;
        data[[i, 2]] = x * (1.0 + 1e-14 * i as f64);
    }
    let block = SampleBlock::new(data).unwrap();
    assert!(matches!(
        LinearOracle::default().leaf_model(block.view()),
        Err(FitError::Singular { .. })
    ));
}

fn offset_line(n: usize, offset: f64, step: f64, intercept: f64, slope: f64) -> SampleBlock {
    let rows: Vec<[f64; 2]> = (0..n)
        .map(|i| {
            let x = offset + step * i as f64;
            [intercept + slope * x, x]
        })
        .collect();
    SampleBlock::from_rows(&rows).unwrap()
}

#[rstest]
#[case(1.7e9, 3600.0, 3.0, 2.0)]
#[case(1e6, 1.0, 0.0, 2.0)]
#[case(-2.5e7, 0.25, 10.0, -1.0)]
fn exact_line_on_offset_feature_is_not_singular(
    #[case] offset: f64,
    #[case] step: f64,
    #[case] intercept: f64,
    #[case] slope: f64,
) {
    let block = offset_line(10, offset, step, intercept, slope);
    let oracle = LinearOracle::default();

    let leaf = oracle.leaf_model(block.view()).unwrap();
    assert_abs_diff_eq!(leaf.weights()[0], slope, epsilon = 1e-9);
    assert_abs_diff_eq!(leaf.intercept(), intercept, epsilon = 1e-4);

    let err = oracle.block_error(block.view()).unwrap();
    assert!(err < 1e-8, "error {err}");
}

#[test]
fn offset_exact_line_becomes_leaf() {
    let block = offset_line(10, 1.7e9, 3600.0, 3.0, 2.0);
    let decision = SplitSelector::new(SplitParams::default())
        .choose_best_split_seeded(&block, 0, 0)
        .unwrap();
    let leaf = decision.as_leaf().expect("exact line should be a leaf");
    assert_abs_diff_eq!(leaf.weights()[0], 2.0, epsilon = 1e-9);
}
