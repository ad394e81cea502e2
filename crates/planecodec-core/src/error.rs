//! Error types for plane codec operations

use thiserror::Error;

/// Result type for plane codec operations
pub type PlaneResult<T> = Result<T, PlaneError>;

/// Errors that can occur while encoding or decoding a plane
#[derive(Error, Debug)]
pub enum PlaneError {
    #[error("Plane is {width}x{height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid {codec} retention parameter: {value} (allowed 0..={max})")]
    InvalidRetentionParameter {
        codec: &'static str,
        value: usize,
        max: usize,
    },

    #[error("Invalid plane size: {0} (must be a power of two, at least 8)")]
    InvalidPlaneSize(usize),

    #[error("Sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    #[error("Block count mismatch: expected {expected}, got {actual}")]
    BlockCountMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
