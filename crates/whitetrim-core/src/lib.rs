//! whitetrim Core - Basic data structures for margin trimming
//!
//! This crate provides the fundamental data structures shared by the
//! whitetrim crates:
//!
//! - [`Image`] / [`ImageMut`] - Decoded RGB/RGBA image (immutable / mutable)
//! - [`Rect`] - Inclusive pixel rectangle
//! - [`VisitedMask`] - One bit per pixel coordinate
//! - [`BackgroundPredicate`] - Per-pixel background test
//! - [`BlankOptions`] / [`BlankStatus`] - Blank image classification

pub mod background;
pub mod error;
pub mod image;
pub mod mask;
pub mod rect;

pub use background::{BackgroundMode, BackgroundPredicate};
pub use error::{Error, Result};
pub use image::{BlankOptions, BlankStatus, Channels, Image, ImageFormat, ImageMut};
pub use mask::VisitedMask;
pub use rect::Rect;

/// Sample-level constants for RGB/RGBA pixels.
///
/// Pixels are stored as consecutive 8-bit samples in R, G, B[, A] order.
pub mod color {
    /// Number of color samples tested by background predicates.
    pub const COLOR_SAMPLES: usize = 3;

    /// Opaque white, long enough for an RGBA pixel; take the first `spp`
    /// samples for a given layout.
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
}
