//! Error types for the trimming pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end the processing of one image
#[derive(Debug, Error)]
pub enum TrimError {
    /// Decoding, encoding or file access failed
    #[error("io error: {0}")]
    Io(#[from] whitetrim_io::IoError),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] whitetrim_core::Error),

    /// Region detection failed
    #[error("region error: {0}")]
    Region(#[from] whitetrim_region::RegionError),

    /// Cropping or erasing failed
    #[error("transform error: {0}")]
    Transform(#[from] whitetrim_transform::TransformError),

    /// The whole image is trimmable background
    #[error("no content left to keep in {width}x{height} image")]
    DegenerateRegion { width: u32, height: u32 },

    /// An input path has no file name to reuse for the output
    #[error("invalid input path: {0}")]
    InvalidPath(PathBuf),
}

/// Result type for pipeline operations
pub type TrimResult<T> = Result<T, TrimError>;
