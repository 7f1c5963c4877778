//! Testing utilities for modeltree.
//!
//! Assertion helpers and synthetic blocks shared by unit and integration
//! tests.
//!
//! ```ignore
//! use modeltree::testing::{assert_slice_approx_eq, piecewise_block};
//! ```

use crate::data::SampleBlock;

// =============================================================================
// Constants
// =============================================================================

/// Default tolerance for coefficient comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

// =============================================================================
// Floating Point Assertions
// =============================================================================

/// Assert that two f64 values are approximately equal.
///
/// Uses absolute difference comparison with the given tolerance.
///
/// # Examples
///
/// ```
/// # use modeltree::assert_approx_eq;
/// assert_approx_eq!(1.0f64, 1.0001f64, 0.001);
/// ```
///
/// # Panics
///
/// Panics if the absolute difference exceeds tolerance.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        if diff > tol {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                left_val, right_val, diff, tol
            );
        }
    }};
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        if diff > tol {
            panic!(
                "assertion failed: `(left ≈ right)` - {}\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                format_args!($($arg)+), left_val, right_val, diff, tol
            );
        }
    }};
}

/// Assert that two slices of f64 values are approximately equal element-wise.
///
/// # Panics
///
/// Panics if lengths differ or any element differs by more than tolerance.
pub fn assert_slice_approx_eq(actual: &[f64], expected: &[f64], tolerance: f64, context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{context}: length mismatch - got {}, expected {}",
        actual.len(),
        expected.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= tolerance,
            "{context}[{i}]: {a} ≠ {e} (diff={diff}, tolerance={tolerance})"
        );
    }
}

// =============================================================================
// Synthetic Blocks
// =============================================================================

/// Block `[y, x]` for `x = 1..=n` with `y = intercept + slope * x`.
pub fn linear_block(n: usize, intercept: f64, slope: f64) -> SampleBlock {
    let rows: Vec<[f64; 2]> = (1..=n)
        .map(|i| {
            let x = i as f64;
            [intercept + slope * x, x]
        })
        .collect();
    SampleBlock::from_rows(&rows).expect("linear block has at least one row")
}

/// Two linear regimes over `x = 1..=10`: `y = x` up to 5, `y = 20 - 2x` after.
///
/// The regimes do not meet at `x = 5`, so splitting at 5 is the only
/// threshold that fits both sides exactly.
pub fn piecewise_block() -> SampleBlock {
    let rows: Vec<[f64; 2]> = (1..=10)
        .map(|i| {
            let x = i as f64;
            let y = if x <= 5.0 { x } else { 20.0 - 2.0 * x };
            [y, x]
        })
        .collect();
    SampleBlock::from_rows(&rows).expect("piecewise block has rows")
}
