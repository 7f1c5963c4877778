//! Node decisions for model-tree training.
//!
//! The components compose bottom-up:
//!
//! - [`partition`]: split rows of a block by a feature threshold
//! - [`linear`]: ordinary least squares with an intercept
//! - [`oracle`]: leaf coefficients and residual-variance error for a block
//! - [`split`]: greedy search choosing between a leaf and the best split
//!
//! A tree builder calls [`SplitSelector::choose_best_split`] once per node,
//! partitions the block with the returned `(feature, threshold)` and recurses
//! until every node resolves to a [`SplitDecision::Leaf`].
//!
//! Random-forest growers pass a non-zero `n_exclude` to drop random features
//! per node; see [`sampling`].

mod leaf;
pub mod linear;
pub mod oracle;
pub mod partition;
pub mod sampling;
pub mod split;

pub use leaf::LeafModel;
pub use linear::{DEFAULT_SINGULAR_TOLERANCE, FitError, LinearFit, fit_ols};
pub use oracle::{LeafOracle, LinearOracle};
pub use partition::{Partition, count_left, partition};
pub use sampling::{remaining_features, sample_excluded_features};
pub use split::{
    ConfigError, SplitCandidate, SplitDecision, SplitError, SplitParams, SplitSelector,
    choose_best_split,
};
