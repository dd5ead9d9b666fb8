//! # Cave Generation Error Types
//!
//! Generation itself is total; every error here is raised while validating
//! inputs or loading configuration, before any grid is allocated.

use hollow_core::GridError;
use thiserror::Error;

/// Errors that can occur while setting up cave generation.
#[derive(Error, Debug)]
pub enum CaveError {
    /// Width or height was zero.
    #[error("invalid cave dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A generation parameter is out of its valid domain.
    #[error("invalid generation parameters: {0}")]
    InvalidParams(String),

    /// A flat generation step array did not have nine entries.
    #[error("generation step needs 9 values, got {len}")]
    InvalidStep {
        /// Number of values supplied.
        len: usize,
    },

    /// Grid construction failed.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("configuration i/o: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cave generation setup.
pub type CaveResult<T> = Result<T, CaveError>;
