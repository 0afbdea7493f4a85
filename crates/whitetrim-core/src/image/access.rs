//! Pixel access functions
//!
//! Low-level functions for reading and writing individual pixels of the
//! flat sample buffer.
//!
//! # Addressing
//!
//! `index(x, y, c) = (y * width + x) * channels + c`. All checked accessors
//! require `x < width` and `y < height`.

use super::{Image, ImageData, ImageMut};
use crate::error::{Error, Result};

impl ImageData {
    #[inline]
    pub(super) fn index(&self, x: u32, y: u32, c: usize) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels.count() as usize + c
    }

    #[inline]
    pub(super) fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub(super) fn pixel_range(&self, x: u32, y: u32) -> std::ops::Range<usize> {
        let start = self.index(x, y, 0);
        start..start + self.channels.count() as usize
    }

    fn out_of_bounds(&self, x: u32, y: u32) -> Error {
        Error::PixelOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl Image {
    /// Get the buffer offset of sample `c` of pixel `(x, y)`.
    ///
    /// No bounds checking is done; the caller guarantees the coordinate is
    /// inside the image.
    #[inline]
    pub fn index(&self, x: u32, y: u32, c: usize) -> usize {
        self.inner.index(x, y, c)
    }

    /// Get the samples of the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if !self.inner.in_bounds(x, y) {
            return None;
        }
        Some(&self.inner.data[self.inner.pixel_range(x, y)])
    }

    /// Get the samples of the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset lies outside the buffer.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> &[u8] {
        &self.inner.data[self.inner.pixel_range(x, y)]
    }

    /// Get the samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.inner.width as usize * self.spp() as usize;
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }
}

impl ImageMut {
    /// Get the buffer offset of sample `c` of pixel `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32, c: usize) -> usize {
        self.inner.index(x, y, c)
    }

    /// Get the samples of the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if !self.inner.in_bounds(x, y) {
            return None;
        }
        Some(&self.inner.data[self.inner.pixel_range(x, y)])
    }

    /// Get mutable samples of the pixel at (x, y).
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8]> {
        if !self.inner.in_bounds(x, y) {
            return None;
        }
        let range = self.inner.pixel_range(x, y);
        Some(&mut self.inner.data[range])
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds,
    /// or [`Error::SampleCount`] if `pixel` does not have one sample per
    /// channel.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: &[u8]) -> Result<()> {
        if !self.inner.in_bounds(x, y) {
            return Err(self.inner.out_of_bounds(x, y));
        }
        let spp = self.spp() as usize;
        if pixel.len() != spp {
            return Err(Error::SampleCount {
                expected: spp,
                actual: pixel.len(),
            });
        }
        self.set_pixel_unchecked(x, y, pixel);
        Ok(())
    }

    /// Set the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset lies outside the buffer or `pixel`
    /// has the wrong length.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: &[u8]) {
        let range = self.inner.pixel_range(x, y);
        self.inner.data[range].copy_from_slice(pixel);
    }
}
