//! Tuning parameters for the split search.

use bon::Builder;

use crate::training::linear::DEFAULT_SINGULAR_TOLERANCE;
use crate::utils::Parallelism;

/// Stopping tolerances and solver settings for [`SplitSelector`](super::SplitSelector).
///
/// # Defaults
///
/// - `err_tolerance = 1.0`: a split must cut the error by at least 1
/// - `n_tolerance = 4`: each side of a split needs at least 4 rows
/// - `singular_tolerance = 1e-10`: see [`DEFAULT_SINGULAR_TOLERANCE`]
/// - `parallelism = Sequential`
///
/// ```
/// use modeltree::SplitParams;
///
/// let params = SplitParams::builder().err_tolerance(0.01).n_tolerance(10).build();
/// assert_eq!(params.n_tolerance, 10);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Builder)]
pub struct SplitParams {
    /// Minimum error reduction required to accept a split.
    #[builder(default = 1.0)]
    pub err_tolerance: f64,
    /// Minimum number of rows on either side of a split.
    #[builder(default = 4)]
    pub n_tolerance: usize,
    /// Relative Cholesky pivot threshold of the linear fitter.
    #[builder(default = DEFAULT_SINGULAR_TOLERANCE)]
    pub singular_tolerance: f64,
    /// Whether candidate features may be scored in parallel.
    #[builder(default)]
    pub parallelism: Parallelism,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SplitParams {
    /// Check that every tolerance is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.err_tolerance.is_finite() || self.err_tolerance < 0.0 {
            return Err(ConfigError::InvalidErrTolerance(self.err_tolerance));
        }
        if self.n_tolerance == 0 {
            return Err(ConfigError::InvalidNTolerance);
        }
        if !self.singular_tolerance.is_finite() || self.singular_tolerance < 0.0 {
            return Err(ConfigError::InvalidSingularTolerance(self.singular_tolerance));
        }
        Ok(())
    }
}

/// Invalid [`SplitParams`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("err_tolerance must be finite and non-negative, got {0}")]
    InvalidErrTolerance(f64),
    #[error("n_tolerance must be at least 1")]
    InvalidNTolerance,
    #[error("singular_tolerance must be finite and non-negative, got {0}")]
    InvalidSingularTolerance(f64),
}
