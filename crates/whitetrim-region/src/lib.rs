//! whitetrim-region - Background region detection for whitetrim
//!
//! This crate finds the part of an image that can be trimmed away:
//!
//! - **Seed fill** - Breadth-first traversal from the image corners over
//!   background pixels, producing a [`VisitedMask`]
//! - **Bounding boxes** - The smallest [`Rect`] enclosing everything the
//!   fill did not reach, or everything that fails the background test
//!
//! # Examples
//!
//! ```
//! use whitetrim_core::{BackgroundPredicate, Channels, Image, Rect};
//! use whitetrim_region::{bounding_box, fill_from_corners};
//!
//! let mut image = Image::new_filled(10, 10, Channels::Rgb, &[255, 255, 255])
//!     .unwrap()
//!     .to_mut();
//! image.set_pixel(6, 3, &[0, 0, 0]).unwrap();
//! let image: Image = image.into();
//!
//! let mask = fill_from_corners(&image, &BackgroundPredicate::strict()).unwrap();
//! assert_eq!(bounding_box(&mask), Rect::single_pixel(6, 3));
//! ```
//!
//! [`VisitedMask`]: whitetrim_core::VisitedMask
//! [`Rect`]: whitetrim_core::Rect

pub mod bbox;
pub mod error;
pub mod seedfill;

// Re-export core types
pub use whitetrim_core;

pub use bbox::{bounding_box, bounding_box_in, foreground_bounding_box};
pub use error::{RegionError, RegionResult};
pub use seedfill::{corner_seeds, fill_from_corners, fill_from_seeds};
