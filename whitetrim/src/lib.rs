//! whitetrim - White-margin trimming and blank page detection
//!
//! Classifies decoded images as blank or not and removes the white margin
//! around their content.
//!
//! # Overview
//!
//! - Blank classification with an early-exit foreground count
//! - Margin cropping via a breadth-first fill from the image corners
//! - Margin cropping to the box of all non-background pixels
//! - In-place margin erasing that keeps the image size
//! - PNG and JPEG decoding and encoding
//! - A batch driver that keeps going past failed images, optionally on a
//!   rayon pool (feature `parallel`)
//!
//! Progress is reported through the [`log`] facade; install any logger to
//! see it.
//!
//! # Example
//!
//! ```
//! use whitetrim::{Channels, Image, TrimOptions, TrimOutcome, trim_image};
//!
//! let page = Image::new_filled(64, 64, Channels::Rgb, &[255, 255, 255]).unwrap();
//! let outcome = trim_image(&page, &TrimOptions::default()).unwrap();
//! assert_eq!(outcome, TrimOutcome::Blank);
//! assert_eq!(outcome.status().to_string(), "blank");
//! ```

pub mod batch;
mod error;
pub mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use whitetrim_core::*;

// Re-export stage crates as modules
pub use whitetrim_io as io;
pub use whitetrim_region as region;
pub use whitetrim_transform as transform;

#[cfg(feature = "parallel")]
pub use batch::process_batch_parallel;
pub use batch::{BatchEntry, BatchReport, BatchSummary, process_batch};
pub use error::{TrimError, TrimResult};
pub use pipeline::{
    DegeneratePolicy, ProcessedImage, TrimMode, TrimOptions, TrimOutcome, output_path_for,
    process_bytes, process_file, trim_image,
};
pub use whitetrim_transform::EraseOptions;
