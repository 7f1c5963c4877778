//! Row partitioning by a feature threshold.
//!
//! Rows whose value in the split column is `<= threshold` go left, everything
//! else (including NaN) goes right. Every row keeps all of its columns and
//! rows keep their relative order on each side:
//!
//! ```text
//! feature 1, threshold 2.0
//!
//!   [y0, 3.0]          left:  [y1, 1.0]
//!   [y1, 1.0]   ==>           [y2, 2.0]
//!   [y2, 2.0]          right: [y0, 3.0]
//! ```
//!
//! Either side may be empty, so partitions are plain arrays rather than
//! [`SampleBlock`](crate::SampleBlock)s.

use ndarray::{Array2, ArrayView2};

use crate::data::axis;

/// The two sides of a partitioned block.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Rows with `row[feature] <= threshold`.
    pub left: Array2<f64>,
    /// All other rows.
    pub right: Array2<f64>,
}

impl Partition {
    /// Number of rows on the left side.
    #[inline]
    pub fn n_left(&self) -> usize {
        self.left.len_of(axis::ROWS)
    }

    /// Number of rows on the right side.
    #[inline]
    pub fn n_right(&self) -> usize {
        self.right.len_of(axis::ROWS)
    }

    /// Whether both sides hold at least `min_rows` rows.
    #[inline]
    pub fn both_sides_have(&self, min_rows: usize) -> bool {
        self.n_left() >= min_rows && self.n_right() >= min_rows
    }
}

/// Split `rows` on `feature` at `threshold`.
///
/// # Panics
///
/// Panics if `feature` is not a column of `rows`.
pub fn partition(rows: ArrayView2<'_, f64>, feature: usize, threshold: f64) -> Partition {
    let mut left_idx = Vec::new();
    let mut right_idx = Vec::new();
    for (row, &value) in rows.column(feature).iter().enumerate() {
        if value <= threshold {
            left_idx.push(row);
        } else {
            right_idx.push(row);
        }
    }

    Partition {
        left: rows.select(axis::ROWS, &left_idx),
        right: rows.select(axis::ROWS, &right_idx),
    }
}

/// Number of rows that [`partition`] would send left, without copying.
#[inline]
pub fn count_left(rows: ArrayView2<'_, f64>, feature: usize, threshold: f64) -> usize {
    rows.column(feature)
        .iter()
        .filter(|&&value| value <= threshold)
        .count()
}
