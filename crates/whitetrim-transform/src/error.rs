//! Error types for whitetrim-transform

use thiserror::Error;

/// Errors that can occur while cropping or erasing margins
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] whitetrim_core::Error),

    /// Crop region has no pixels
    #[error("degenerate crop region: {width}x{height}")]
    DegenerateRegion { width: u32, height: u32 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
