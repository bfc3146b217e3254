// File: crates/uniplot-core/src/error.rs
// Summary: Error type for series construction and axis transforms.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// The requested transform does not apply to this data (e.g. log10 on a time axis).
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    #[error("x holds {x_rows} series but y holds {y_rows}")]
    RowCountMismatch { x_rows: usize, y_rows: usize },

    #[error("series {row}: x has {x_len} points but y has {y_len}")]
    LengthMismatch { row: usize, x_len: usize, y_len: usize },
}

pub type Result<T> = std::result::Result<T, SeriesError>;
