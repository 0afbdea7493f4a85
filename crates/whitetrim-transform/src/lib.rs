//! whitetrim-transform - Margin removal for whitetrim
//!
//! Two strategies are provided:
//!
//! - [`crop`] - Extract the sub-image inside a [`Rect`], usually the
//!   bounding box of everything the corner fill did not reach
//! - [`erase`] - Paint a fixed border strip and every background-like
//!   pixel white, keeping the image size
//!
//! [`Rect`]: whitetrim_core::Rect

pub mod crop;
pub mod erase;
mod error;

pub use crop::crop;
pub use erase::{EraseOptions, erase, erase_copy};
pub use error::{TransformError, TransformResult};
