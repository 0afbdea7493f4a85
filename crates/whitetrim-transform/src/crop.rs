//! Rectangle extraction
//!
//! Thin checked layer over [`Image::clip_rectangle`]: the crop region must
//! be non-degenerate and lie inside the source, so the output is never
//! larger than the input and never empty.

use crate::{TransformError, TransformResult};
use whitetrim_core::{Image, Rect};

/// Crop an image to the inclusive rectangle `rect`
///
/// Output pixel `(x, y)` equals source pixel
/// `(x + rect.min_x, y + rect.min_y)`. Channel layout and the recorded
/// input format carry over.
///
/// # Errors
///
/// Returns [`TransformError::DegenerateRegion`] if `rect` is degenerate
/// or does not overlap the image at all.
///
/// # Examples
///
/// ```
/// use whitetrim_core::{Channels, Image, Rect};
/// use whitetrim_transform::crop;
///
/// let image = Image::new_filled(10, 10, Channels::Rgb, &[255, 255, 255]).unwrap();
/// let cropped = crop(&image, &Rect::new(4, 4, 5, 5)).unwrap();
/// assert_eq!((cropped.width(), cropped.height()), (2, 2));
/// ```
pub fn crop(image: &Image, rect: &Rect) -> TransformResult<Image> {
    let Some(clipped) = rect.clip(image.width(), image.height()) else {
        return Err(TransformError::DegenerateRegion {
            width: rect.width(),
            height: rect.height(),
        });
    };

    // Whole-frame crops share the buffer
    if clipped.width() == image.width() && clipped.height() == image.height() {
        return Ok(image.clone());
    }

    Ok(image.clip_rectangle(&clipped)?)
}
