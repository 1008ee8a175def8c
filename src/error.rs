//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Covers parameter validation, buffer allocation and shape checks, worker pool
//! construction, and loading tiling presets from disk.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid parameter: {arg}={value}")]
    InvalidParameter { arg: &'static str, value: String },

    #[error("Cannot allocate a {width}x{height} RGB buffer")]
    AllocationFailure { width: usize, height: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Worker pool error: {0}")]
    ThreadPool(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tiling preset: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid<V: std::fmt::Display>(arg: &'static str, value: V) -> Self {
        Error::InvalidParameter {
            arg,
            value: value.to_string(),
        }
    }

    /// True for the validation failures a caller can fix by changing its inputs.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::InvalidParameter { .. })
    }
}
