//! In-place margin erasing
//!
//! A local alternative to flood-fill cropping. Every pixel in a fixed
//! strip along the four edges, and every pixel the predicate accepts, is
//! overwritten with opaque white. No connectivity analysis is done, so a
//! dark pixel inside the strip is erased just like a light one, and the
//! image size never changes.

use whitetrim_core::color::WHITE;
use whitetrim_core::{BackgroundPredicate, Image, ImageMut};

/// Options for [`erase`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraseOptions {
    /// Width in pixels of the strip painted along every edge
    pub border_width: u32,
    /// Pixels matching this are painted regardless of position
    pub predicate: BackgroundPredicate,
}

impl Default for EraseOptions {
    fn default() -> Self {
        Self {
            border_width: Self::DEFAULT_BORDER_WIDTH,
            predicate: BackgroundPredicate::tolerant(BackgroundPredicate::DEFAULT_THRESHOLD),
        }
    }
}

impl EraseOptions {
    /// Default edge strip width.
    pub const DEFAULT_BORDER_WIDTH: u32 = 5;

    /// Set the edge strip width.
    pub fn with_border_width(mut self, border_width: u32) -> Self {
        self.border_width = border_width;
        self
    }

    /// Set the per-pixel predicate.
    pub fn with_predicate(mut self, predicate: BackgroundPredicate) -> Self {
        self.predicate = predicate;
        self
    }

    /// Whether `(x, y)` lies in the edge strip of a `width x height` image.
    ///
    /// The strip is symmetric: `border_width` columns on the left and on
    /// the right, and as many rows at the top and bottom.
    pub fn in_border(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        let b = self.border_width;
        x < b || y < b || x >= width.saturating_sub(b) || y >= height.saturating_sub(b)
    }
}

/// Erase margins in place
///
/// # Examples
///
/// ```
/// use whitetrim_core::{Channels, Image};
/// use whitetrim_transform::{EraseOptions, erase};
///
/// let image = Image::new(20, 20, Channels::Rgb).unwrap();
/// let mut image = image.try_into_mut().unwrap();
/// erase(&mut image, &EraseOptions::default());
/// assert_eq!(image.pixel(0, 0), Some(&[255u8, 255, 255][..]));
/// assert_eq!(image.pixel(10, 10), Some(&[0u8, 0, 0][..]));
/// ```
pub fn erase(image: &mut ImageMut, options: &EraseOptions) {
    let width = image.width();
    let height = image.height();
    let spp = image.spp() as usize;
    let white = &WHITE[..spp];

    let row_len = width as usize * spp;
    for (y, row) in image.data_mut().chunks_exact_mut(row_len).enumerate() {
        for (x, pixel) in row.chunks_exact_mut(spp).enumerate() {
            if options.in_border(x as u32, y as u32, width, height)
                || options.predicate.is_background(pixel)
            {
                pixel.copy_from_slice(white);
            }
        }
    }
}

/// Erase margins on a copy, leaving `image` untouched.
pub fn erase_copy(image: &Image, options: &EraseOptions) -> Image {
    let mut out = image.to_mut();
    erase(&mut out, options);
    out.into()
}
