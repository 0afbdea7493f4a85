//! Rectangle clipping operations for images
//!
//! Extracting a rectangular sub-region into a new image. Samples are
//! copied verbatim; there is no resampling.

use super::{Image, ImageData};
use crate::Rect;
use crate::error::{Error, Result};
use std::sync::Arc;

impl Image {
    /// Extract an inclusive rectangular sub-region from the image.
    ///
    /// Creates a new image containing the specified rectangle. If the
    /// rectangle extends beyond the image bounds, it is clipped to the
    /// valid region. The channel layout and input format are preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The rectangle is degenerate ([`Error::DegenerateRect`])
    /// - The rectangle is entirely outside the image bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use whitetrim_core::{Channels, Image, Rect};
    ///
    /// let image = Image::new(100, 80, Channels::Rgb).unwrap();
    /// let clipped = image.clip_rectangle(&Rect::new(10, 20, 59, 59)).unwrap();
    /// assert_eq!(clipped.width(), 50);
    /// assert_eq!(clipped.height(), 40);
    /// ```
    ///
    /// Regions extending beyond the image are clipped:
    ///
    /// ```
    /// use whitetrim_core::{Channels, Image, Rect};
    ///
    /// let image = Image::new(100, 80, Channels::Rgb).unwrap();
    /// let clipped = image.clip_rectangle(&Rect::new(80, 60, 129, 109)).unwrap();
    /// assert_eq!(clipped.width(), 20);   // clipped: 100 - 80
    /// assert_eq!(clipped.height(), 20);  // clipped: 80 - 60
    /// ```
    pub fn clip_rectangle(&self, rect: &Rect) -> Result<Image> {
        if rect.is_degenerate() {
            return Err(Error::DegenerateRect);
        }

        let clipped = rect.clip(self.width(), self.height()).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "clip rectangle {} is outside image bounds ({}x{})",
                rect,
                self.width(),
                self.height()
            ))
        })?;

        let x0 = clipped.min_x as u32;
        let y0 = clipped.min_y as u32;
        let out_w = clipped.width();
        let out_h = clipped.height();

        let spp = self.spp() as usize;
        let row_len = out_w as usize * spp;
        let mut data = Vec::with_capacity(row_len * out_h as usize);
        for y in y0..y0 + out_h {
            let start = self.index(x0, y, 0);
            data.extend_from_slice(&self.data()[start..start + row_len]);
        }

        Ok(Image {
            inner: Arc::new(ImageData {
                width: out_w,
                height: out_h,
                channels: self.channels(),
                informat: self.informat(),
                data,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Channels, Error, Image, Rect};

    fn gradient(w: u32, h: u32) -> Image {
        let mut image = Image::new(w, h, Channels::Rgba).unwrap().to_mut();
        for y in 0..h {
            for x in 0..w {
                image.set_pixel_unchecked(x, y, &[x as u8, y as u8, (x + y) as u8, 255]);
            }
        }
        image.into()
    }

    #[test]
    fn test_clip_copies_translated_pixels() {
        let image = gradient(8, 6);
        let clipped = image.clip_rectangle(&Rect::new(2, 1, 4, 3)).unwrap();
        assert_eq!(clipped.width(), 3);
        assert_eq!(clipped.height(), 3);
        assert_eq!(clipped.channels(), Channels::Rgba);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(
                    clipped.pixel(x, y).unwrap(),
                    image.pixel(x + 2, y + 1).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_clip_single_pixel() {
        let image = gradient(5, 5);
        let clipped = image.clip_rectangle(&Rect::single_pixel(4, 4)).unwrap();
        assert_eq!((clipped.width(), clipped.height()), (1, 1));
        assert_eq!(clipped.data(), &[4, 4, 8, 255]);
    }

    #[test]
    fn test_clip_full_image() {
        let image = gradient(5, 4);
        let clipped = image.clip_rectangle(&Rect::new(0, 0, 4, 3)).unwrap();
        assert_eq!(clipped, image);
    }

    #[test]
    fn test_clip_degenerate_rejected() {
        let image = gradient(5, 4);
        assert!(matches!(
            image.clip_rectangle(&Rect::degenerate()),
            Err(Error::DegenerateRect)
        ));
    }

    #[test]
    fn test_clip_outside_rejected() {
        let image = gradient(5, 4);
        assert!(image.clip_rectangle(&Rect::new(5, 0, 9, 3)).is_err());
    }
}
