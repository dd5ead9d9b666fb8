//! # Grid Error Types

use thiserror::Error;

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was zero.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimensions {
        /// Requested interior width.
        width: usize,
        /// Requested interior height.
        height: usize,
    },

    /// The bordered buffer would not fit in memory addressing.
    #[error("grid of {width}x{height} is too large")]
    TooLarge {
        /// Requested interior width.
        width: usize,
        /// Requested interior height.
        height: usize,
    },

    /// Textual rows were ragged or contained unknown glyphs.
    #[error("malformed grid rows: {0}")]
    MalformedRows(String),
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
