//! modeltree: split selection and linear leaves for model trees.
//!
//! A model tree is a decision tree whose leaves hold linear regression models
//! instead of constants. This crate provides the per-node decision routine
//! such a tree is grown with: given a block of samples it either fits a leaf
//! model or picks the best `(feature, threshold)` split.
//!
//! # Key Types
//!
//! - [`SampleBlock`] - Rows of samples, column 0 is the target
//! - [`SplitParams`] - Stopping tolerances for the split search
//! - [`SplitSelector`] - Greedy split search over observed thresholds
//! - [`SplitDecision`] / [`LeafModel`] - Result of one node decision
//!
//! # Example
//!
//! ```
//! use modeltree::{SampleBlock, SplitDecision, SplitParams, SplitSelector, assert_approx_eq};
//!
//! // y = 2x, perfectly linear: the whole block is one leaf.
//! let rows: Vec<[f64; 2]> = (1..=10).map(|x| [2.0 * x as f64, x as f64]).collect();
//! let block = SampleBlock::from_rows(&rows).unwrap();
//!
//! let params = SplitParams::builder().err_tolerance(0.001).n_tolerance(2).build();
//! let selector = SplitSelector::new(params);
//!
//! match selector.choose_best_split_seeded(&block, 0, 42).unwrap() {
//!     SplitDecision::Leaf(leaf) => assert_approx_eq!(leaf.weights()[0], 2.0, 1e-9),
//!     SplitDecision::Split { .. } => unreachable!(),
//! }
//! ```
//!
//! Growing the tree itself, bagging and prediction over a tree are left to
//! the caller; see the [`training`] module for the building blocks.

// Re-export approx traits for users who want to compare coefficients
pub use approx;

pub mod data;
pub mod testing;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use data::{BlockError, SampleBlock};

pub use training::{
    ConfigError, FitError, LeafModel, LeafOracle, LinearOracle, SplitDecision, SplitError,
    SplitParams, SplitSelector, choose_best_split,
};

pub use utils::Parallelism;
