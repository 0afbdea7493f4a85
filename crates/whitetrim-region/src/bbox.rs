//! Bounding boxes of the untrimmable region
//!
//! Two variants:
//!
//! - [`bounding_box`] encloses every coordinate *not* set in a fill mask.
//!   Background islands the fill could not reach count as content.
//! - [`foreground_bounding_box`] encloses every pixel failing the
//!   background predicate, with no connectivity analysis.
//!
//! Both return [`Rect::degenerate`] when nothing qualifies; callers must
//! handle that case explicitly.

use crate::error::{RegionError, RegionResult};
use whitetrim_core::{BackgroundPredicate, Image, Rect, VisitedMask};

/// Smallest rectangle enclosing every coordinate not set in `mask`.
///
/// Scans row-major. Returns a degenerate rectangle if every coordinate is
/// set.
pub fn bounding_box(mask: &VisitedMask) -> Rect {
    let mut rect = Rect::degenerate();
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if !mask.get(x, y) {
                rect.include(x as i32, y as i32);
            }
        }
    }
    rect
}

/// [`bounding_box`] with an explicit image size.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] if the mask was not built
/// for a `width x height` image.
pub fn bounding_box_in(mask: &VisitedMask, width: u32, height: u32) -> RegionResult<Rect> {
    if mask.width() != width || mask.height() != height {
        return Err(RegionError::DimensionMismatch {
            expected: (width, height),
            actual: (mask.width(), mask.height()),
        });
    }
    Ok(bounding_box(mask))
}

/// Smallest rectangle enclosing every pixel that fails `predicate`.
pub fn foreground_bounding_box(image: &Image, predicate: &BackgroundPredicate) -> Rect {
    let mut rect = Rect::degenerate();
    let spp = image.spp() as usize;
    for y in 0..image.height() {
        for (x, pixel) in image.row(y).chunks_exact(spp).enumerate() {
            if !predicate.is_background(pixel) {
                rect.include(x as i32, y as i32);
            }
        }
    }
    rect
}
