//! Owned sample block with a target column.

use std::ops::{Deref, Range};

use ndarray::{Array2, ArrayView1, ArrayView2};

use super::axis;

/// Column holding the dependent variable.
pub const TARGET_COLUMN: usize = 0;

/// Errors raised when constructing a [`SampleBlock`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("sample block has no rows")]
    Empty,
    #[error("sample block needs a target and at least one feature column, got {n_columns} column(s)")]
    NoFeatures { n_columns: usize },
    #[error("data length mismatch: expected {expected} values for the given shape, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// A block of samples under consideration at one tree node.
///
/// Shape: `[n_samples, 1 + n_features]`. Column [`TARGET_COLUMN`] is the
/// target, the remaining columns are features. A block always has at least
/// one row and one feature.
///
/// # Example
///
/// ```
/// use modeltree::SampleBlock;
///
/// let block = SampleBlock::from_vec(vec![2.0, 1.0, 4.0, 2.0, 6.0, 3.0], 3, 2).unwrap();
///
/// assert_eq!(block.n_samples(), 3);
/// assert_eq!(block.n_features(), 1);
/// assert_eq!(block.target().to_vec(), vec![2.0, 4.0, 6.0]);
/// assert_eq!(block.feature(1).to_vec(), vec![1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBlock(Array2<f64>);

impl SampleBlock {
    /// Wrap an existing array, validating its shape.
    pub fn new(data: Array2<f64>) -> Result<Self, BlockError> {
        let (n_rows, n_columns) = data.dim();
        if n_rows == 0 {
            return Err(BlockError::Empty);
        }
        if n_columns < 2 {
            return Err(BlockError::NoFeatures { n_columns });
        }
        Ok(Self(data))
    }

    /// Create from a flat Vec in row-major order.
    ///
    /// # Arguments
    ///
    /// * `data` - Flat vector of length `n_samples * n_columns`
    /// * `n_samples` - Number of rows
    /// * `n_columns` - Number of columns, target included
    pub fn from_vec(data: Vec<f64>, n_samples: usize, n_columns: usize) -> Result<Self, BlockError> {
        let actual = data.len();
        // An overflowing shape cannot match any vector
        let expected = n_samples.checked_mul(n_columns).unwrap_or(usize::MAX);
        if actual != expected {
            return Err(BlockError::ShapeMismatch { expected, actual });
        }
        let array = Array2::from_shape_vec((n_samples, n_columns), data)
            .map_err(|_| BlockError::ShapeMismatch { expected, actual })?;
        Self::new(array)
    }

    /// Create from a slice of rows. Every row must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, BlockError> {
        let first = rows.first().ok_or(BlockError::Empty)?;
        let n_columns = first.as_ref().len();

        let mut data = Vec::with_capacity(rows.len() * n_columns);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n_columns {
                return Err(BlockError::RaggedRow {
                    row,
                    expected: n_columns,
                    actual: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Self::from_vec(data, rows.len(), n_columns)
    }

    /// Number of samples (rows).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.0.len_of(axis::ROWS)
    }

    /// Number of columns, target included.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.0.len_of(axis::COLS)
    }

    /// Number of independent variables.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.n_columns() - 1
    }

    /// Column indices of the features, `1..n_columns`.
    #[inline]
    pub fn feature_indices(&self) -> Range<usize> {
        1..self.n_columns()
    }

    /// The target column.
    #[inline]
    pub fn target(&self) -> ArrayView1<'_, f64> {
        self.0.column(TARGET_COLUMN)
    }

    /// A feature column by column index.
    ///
    /// # Panics
    ///
    /// Panics if `feature` is out of range.
    #[inline]
    pub fn feature(&self, feature: usize) -> ArrayView1<'_, f64> {
        self.0.column(feature)
    }

    /// View of the whole block.
    #[inline]
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.0.view()
    }

    /// Consume and return the inner array.
    #[inline]
    pub fn into_inner(self) -> Array2<f64> {
        self.0
    }
}

impl Deref for SampleBlock {
    type Target = Array2<f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Array2<f64>> for SampleBlock {
    type Error = BlockError;

    fn try_from(data: Array2<f64>) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}
