//! Cholesky solver for the normal equations.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use super::FitError;

/// Solve `A x = b` for symmetric positive definite `A` via `A = L Lᵗ`.
///
/// Column `j` is declared dependent when its pivot
/// `A_jj - Σ_k L_jk²` is not greater than `tolerance * A_jj`. A zero
/// diagonal entry (all-zero column) and NaN pivots are always rejected.
///
/// # Errors
///
/// [`FitError::Singular`] with the first dependent column.
pub fn cholesky_solve(
    a: ArrayView2<'_, f64>,
    b: ArrayView1<'_, f64>,
    tolerance: f64,
) -> Result<Array1<f64>, FitError> {
    let n = a.nrows();
    debug_assert_eq!(a.ncols(), n, "normal matrix must be square");
    debug_assert_eq!(b.len(), n, "right-hand side length must match");

    let mut l = Array2::<f64>::zeros((n, n));

    for j in 0..n {
        let scale = a[[j, j]];
        let mut pivot = scale;
        for k in 0..j {
            pivot -= l[[j, k]] * l[[j, k]];
        }
        // Negated so NaN counts as dependent
        if !(pivot > tolerance * scale) || pivot <= 0.0 {
            return Err(FitError::Singular { column: j });
        }
        let diag = pivot.sqrt();
        l[[j, j]] = diag;

        for i in (j + 1)..n {
            let mut sum = a[[i, j]];
            for k in 0..j {
                sum -= l[[i, k]] * l[[j, k]];
            }
            l[[i, j]] = sum / diag;
        }
    }

    // Forward substitution: L z = b
    let mut z = Array1::<f64>::zeros(n);
    for i in 0..n {
        let mut sum = b[i];
        for k in 0..i {
            sum -= l[[i, k]] * z[k];
        }
        z[i] = sum / l[[i, i]];
    }

    // Backward substitution: Lᵗ x = z
    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let mut sum = z[i];
        for k in (i + 1)..n {
            sum -= l[[k, i]] * x[k];
        }
        x[i] = sum / l[[i, i]];
    }

    Ok(x)
}
