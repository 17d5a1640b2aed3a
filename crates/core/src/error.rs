//! Error types for the core crate.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur during coverage calculations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Packing factor of zero, which would divide by zero
    #[error("Tiles per box must be at least 1")]
    InvalidBoxSize,
}

/// Error code for integration with downstream error handling.
/// Range: 12xxx for core errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    /// Packing factor of zero
    InvalidBoxSize = 12001,
}

impl CoreError {
    /// Returns the error code for this error.
    pub fn code(&self) -> CoreErrorCode {
        match self {
            CoreError::InvalidBoxSize => CoreErrorCode::InvalidBoxSize,
        }
    }
}
