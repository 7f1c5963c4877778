//! Sample blocks for split selection.
//!
//! A block is a dense `f64` matrix with one sample per row. Column 0 always
//! holds the dependent variable (target); columns `1..k` hold the features.
//!
//! ```text
//!          target  f1    f2   ...
//! row 0  [  y0,    x01,  x02, ... ]
//! row 1  [  y1,    x11,  x12, ... ]
//! ```
//!
//! Feature indices used throughout the crate are *column* indices, so the
//! first feature is `1`, never `0`.

mod block;

pub use block::{BlockError, SampleBlock, TARGET_COLUMN};

/// Semantic axis constants for sample blocks.
pub mod axis {
    use ndarray::Axis;

    pub const ROWS: Axis = Axis(0);
    pub const COLS: Axis = Axis(1);
}
