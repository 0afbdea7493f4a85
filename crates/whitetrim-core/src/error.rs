//! Error types for whitetrim-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// whitetrim error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions (zero width or height, or a sample count
    /// that does not fit in memory)
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Unsupported number of samples per pixel
    #[error("invalid channel count: {0} (expected 3 or 4)")]
    InvalidChannels(u32),

    /// Raw sample buffer does not match the declared geometry
    #[error("sample buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// Pixel coordinate outside the image
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Sample slice has the wrong number of channels for this image
    #[error("pixel has {actual} samples, image expects {expected}")]
    SampleCount { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Rectangle has no pixels (min > max on some axis)
    #[error("degenerate rectangle: no pixels inside")]
    DegenerateRect,
}

/// Result type alias for whitetrim operations
pub type Result<T> = std::result::Result<T, Error>;
