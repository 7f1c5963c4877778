//! Split selection for model-tree nodes.
//!
//! For each node we decide between a leaf and a split by:
//! 1. Scoring the whole block with one linear model (`base_error`)
//! 2. Enumerating every observed value of every candidate feature as a
//!    threshold, skipping candidates that leave fewer than `n_tolerance`
//!    rows on either side
//! 3. Scoring each candidate as `error(left) + error(right)` and keeping the
//!    first minimum in (feature, row) order
//! 4. Falling back to a leaf when the best split does not improve on
//!    `base_error` by at least `err_tolerance`, or no candidate is valid
//!
//! # Example
//!
//! ```
//! use modeltree::testing::piecewise_block;
//! use modeltree::{SplitDecision, SplitParams, SplitSelector};
//!
//! let params = SplitParams::builder().err_tolerance(0.001).n_tolerance(2).build();
//! let decision = SplitSelector::new(params)
//!     .choose_best_split_seeded(&piecewise_block(), 0, 0)
//!     .unwrap();
//!
//! assert_eq!(decision.split(), Some((1, 5.0)));
//! ```

mod params;
mod selector;

pub use params::{ConfigError, SplitParams};
pub use selector::{SplitSelector, choose_best_split};

use crate::training::leaf::LeafModel;
use crate::training::linear::FitError;

// ============================================================================
// SplitDecision
// ============================================================================

/// Outcome of one node decision.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitDecision {
    /// Terminal node holding a fitted linear model.
    Leaf(LeafModel),
    /// Internal node: rows with `row[feature] <= threshold` go left.
    Split { feature: usize, threshold: f64 },
}

impl SplitDecision {
    /// Returns true for [`SplitDecision::Leaf`].
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, SplitDecision::Leaf(_))
    }

    /// The leaf model, if this is a leaf.
    pub fn as_leaf(&self) -> Option<&LeafModel> {
        match self {
            SplitDecision::Leaf(leaf) => Some(leaf),
            SplitDecision::Split { .. } => None,
        }
    }

    /// The `(feature, threshold)` pair, if this is a split.
    pub fn split(&self) -> Option<(usize, f64)> {
        match self {
            SplitDecision::Leaf(_) => None,
            SplitDecision::Split { feature, threshold } => Some((*feature, *threshold)),
        }
    }
}

// ============================================================================
// SplitCandidate
// ============================================================================

/// A scored `(feature, threshold)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitCandidate {
    /// Column index of the split feature (never the target column).
    pub feature: usize,
    /// Observed feature value used as threshold.
    pub threshold: f64,
    /// Summed error of the two sides.
    pub error: f64,
}

impl SplitCandidate {
    /// Whether `self` should replace `best`. Ties keep the incumbent and a
    /// NaN error never wins.
    #[inline]
    fn improves_on(&self, best: Option<&SplitCandidate>) -> bool {
        !self.error.is_nan() && best.is_none_or(|best| self.error < best.error)
    }
}

// ============================================================================
// SplitError
// ============================================================================

/// Errors raised by the split search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplitError {
    #[error(transparent)]
    Fit(#[from] FitError),
    #[error("invalid split parameters: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot exclude {requested} of {available} features: at least one must remain")]
    TooManyExcluded { requested: usize, available: usize },
}
