//! Greedy search for the best split of a block.

use ndarray::ArrayView2;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, trace};

use super::{SplitCandidate, SplitDecision, SplitError, SplitParams};
use crate::data::SampleBlock;
use crate::training::linear::FitError;
use crate::training::oracle::{LeafOracle, LinearOracle};
use crate::training::partition::{count_left, partition};
use crate::training::sampling::{remaining_features, sample_excluded_features};

// ============================================================================
// SplitSelector
// ============================================================================

/// Chooses between a leaf and the best split for one tree node.
///
/// Holds no state between calls: the decision is a function of the block,
/// the parameters and the random draw used for feature exclusion.
#[derive(Debug, Clone)]
pub struct SplitSelector<O = LinearOracle> {
    params: SplitParams,
    oracle: O,
}

impl SplitSelector<LinearOracle> {
    /// Selector with least-squares leaves.
    pub fn new(params: SplitParams) -> Self {
        let oracle = LinearOracle::new(params.singular_tolerance);
        Self { params, oracle }
    }
}

impl Default for SplitSelector<LinearOracle> {
    fn default() -> Self {
        Self::new(SplitParams::default())
    }
}

impl<O: LeafOracle> SplitSelector<O> {
    /// Selector with a custom leaf oracle.
    ///
    /// `params.singular_tolerance` is not forwarded; the oracle carries its
    /// own solver settings.
    pub fn with_oracle(params: SplitParams, oracle: O) -> Self {
        Self { params, oracle }
    }

    /// The search parameters.
    pub fn params(&self) -> &SplitParams {
        &self.params
    }

    /// The leaf oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Decide whether `block` becomes a leaf or is split.
    ///
    /// # Arguments
    ///
    /// * `block` - Rows reaching this node
    /// * `n_exclude` - Features to hide from this node (0 for single trees)
    /// * `rng` - Source for the exclusion draw; unused when `n_exclude == 0`
    ///
    /// # Errors
    ///
    /// - [`SplitError::Config`] for invalid parameters
    /// - [`SplitError::TooManyExcluded`] when `n_exclude` would leave no feature
    /// - [`SplitError::Fit`] when the block or any scored partition is
    ///   singular for the linear fit
    pub fn choose_best_split<R: Rng + ?Sized>(
        &self,
        block: &SampleBlock,
        n_exclude: usize,
        rng: &mut R,
    ) -> Result<SplitDecision, SplitError> {
        self.params.validate()?;

        let n_features = block.n_features();
        if n_exclude > 0 && n_exclude >= n_features {
            return Err(SplitError::TooManyExcluded {
                requested: n_exclude,
                available: n_features,
            });
        }

        let rows = block.view();
        let base_error = self.oracle.block_error(rows)?;

        let excluded = sample_excluded_features(n_features, n_exclude, rng);
        let features = remaining_features(n_features, &excluded);

        let Some(best) = self.find_best_candidate(rows, &features)? else {
            debug!(
                n_samples = block.n_samples(),
                n_tolerance = self.params.n_tolerance,
                "no valid split candidate, making leaf"
            );
            return self.leaf(rows);
        };

        if (base_error - best.error).abs() < self.params.err_tolerance {
            debug!(
                base_error,
                best_error = best.error,
                err_tolerance = self.params.err_tolerance,
                "error reduction below tolerance, making leaf"
            );
            return self.leaf(rows);
        }

        let n_left = count_left(rows, best.feature, best.threshold);
        let n_right = rows.nrows() - n_left;
        if n_left < self.params.n_tolerance || n_right < self.params.n_tolerance {
            debug!(n_left, n_right, "best split too small, making leaf");
            return self.leaf(rows);
        }

        debug!(
            feature = best.feature,
            threshold = best.threshold,
            base_error,
            best_error = best.error,
            ?excluded,
            "selected split"
        );
        Ok(SplitDecision::Split {
            feature: best.feature,
            threshold: best.threshold,
        })
    }

    /// [`choose_best_split`](Self::choose_best_split) with a seeded
    /// `Xoshiro256PlusPlus`, for reproducible exclusion draws.
    pub fn choose_best_split_seeded(
        &self,
        block: &SampleBlock,
        n_exclude: usize,
        seed: u64,
    ) -> Result<SplitDecision, SplitError> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        self.choose_best_split(block, n_exclude, &mut rng)
    }

    /// Lowest-error valid candidate over `features`, or `None` when no
    /// candidate leaves `n_tolerance` rows on both sides.
    ///
    /// Candidates are visited in ascending feature order, then row order;
    /// the first minimum wins. Per-feature searches may run in parallel and
    /// are reduced in feature order, so the result does not depend on
    /// [`Parallelism`](crate::Parallelism).
    pub fn find_best_candidate(
        &self,
        rows: ArrayView2<'_, f64>,
        features: &[usize],
    ) -> Result<Option<SplitCandidate>, FitError> {
        let per_feature = self
            .params
            .parallelism
            .maybe_par_map(features.to_vec(), |feature| {
                self.best_for_feature(rows, feature)
            });

        let mut best: Option<SplitCandidate> = None;
        for candidate in per_feature {
            if let Some(candidate) = candidate? {
                if candidate.improves_on(best.as_ref()) {
                    best = Some(candidate);
                }
            }
        }
        Ok(best)
    }

    /// Best threshold for a single feature. Repeated values are scored again.
    fn best_for_feature(
        &self,
        rows: ArrayView2<'_, f64>,
        feature: usize,
    ) -> Result<Option<SplitCandidate>, FitError> {
        let n_samples = rows.nrows();
        let min_rows = self.params.n_tolerance;
        let mut best: Option<SplitCandidate> = None;

        for &threshold in rows.column(feature) {
            let n_left = count_left(rows, feature, threshold);
            if n_left < min_rows || n_samples - n_left < min_rows {
                continue;
            }

            let parts = partition(rows, feature, threshold);
            let error =
                self.oracle.block_error(parts.left.view())? + self.oracle.block_error(parts.right.view())?;
            trace!(feature, threshold, error, "scored split candidate");

            let candidate = SplitCandidate {
                feature,
                threshold,
                error,
            };
            if candidate.improves_on(best.as_ref()) {
                best = Some(candidate);
            }
        }

        Ok(best)
    }

    fn leaf(&self, rows: ArrayView2<'_, f64>) -> Result<SplitDecision, SplitError> {
        Ok(SplitDecision::Leaf(self.oracle.leaf_model(rows)?))
    }
}

/// Decide leaf vs split for `block` with least-squares leaves.
///
/// Shorthand for `SplitSelector::new(params.clone()).choose_best_split(..)`.
pub fn choose_best_split<R: Rng + ?Sized>(
    block: &SampleBlock,
    n_exclude: usize,
    params: &SplitParams,
    rng: &mut R,
) -> Result<SplitDecision, SplitError> {
    SplitSelector::new(params.clone()).choose_best_split(block, n_exclude, rng)
}
