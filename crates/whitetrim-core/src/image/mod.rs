//! Image - The decoded pixel container
//!
//! The `Image` structure holds one decoded raster as a flat, row-major
//! sequence of 8-bit samples.
//!
//! # Pixel layout
//!
//! - Samples are stored contiguously, with no row padding
//! - Each pixel has 3 (RGB) or 4 (RGBA) samples
//! - The sample for channel `c` of pixel `(x, y)` lives at
//!   `(y * width + x) * channels + c`
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared ownership).
//! To modify sample data, convert to `ImageMut` via [`Image::try_into_mut`]
//! or [`Image::to_mut`], then convert back with `Into<Image>`.

mod access;
mod clip;
mod statistics;

pub use statistics::{BlankOptions, BlankStatus};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Samples per pixel
///
/// Only 8-bit RGB and RGBA images are handled; codecs expand grayscale
/// and palette images before they reach the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channels {
    /// Red, green, blue
    Rgb = 3,
    /// Red, green, blue, alpha
    Rgba = 4,
}

impl Channels {
    /// Create `Channels` from a raw sample count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannels`] if `count` is not 3 or 4.
    pub fn from_count(count: u32) -> Result<Self> {
        match count {
            3 => Ok(Channels::Rgb),
            4 => Ok(Channels::Rgba),
            _ => Err(Error::InvalidChannels(count)),
        }
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn count(self) -> u32 {
        self as u32
    }

    /// Check whether the last sample is alpha.
    #[inline]
    pub fn has_alpha(self) -> bool {
        self == Channels::Rgba
    }
}

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format (constructed in memory)
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Map a file extension (case-insensitive, without the dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" | "jfif" => Some(Self::Jpeg),
            _ => None,
        }
    }
}

/// Internal image data
#[derive(Debug, Clone, PartialEq, Eq)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel
    channels: Channels,
    /// Format the image was decoded from
    informat: ImageFormat,
    /// The samples, row-major
    data: Vec<u8>,
}

impl ImageData {
    fn sample_len(width: u32, height: u32, channels: Channels) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(channels.count() as usize))
            .ok_or(Error::InvalidDimension { width, height })
    }
}

/// Image - Main pixel container
///
/// `Image` is immutable once created and uses reference counting via
/// `Arc` for cheap cloning. Width and height are always at least 1.
///
/// # Examples
///
/// ```
/// use whitetrim_core::{Channels, Image};
///
/// let image = Image::new(640, 480, Channels::Rgb).unwrap();
/// assert_eq!(image.width(), 640);
/// assert_eq!(image.height(), 480);
/// assert_eq!(image.data().len(), 640 * 480 * 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image with all samples set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        let len = ImageData::sample_len(width, height, channels)?;
        Ok(Self::from_parts(width, height, channels, vec![0u8; len]))
    }

    /// Create a new image with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::SampleCount`] if `pixel` does not have one sample per channel.
    ///
    /// ```
    /// use whitetrim_core::{Channels, Image};
    ///
    /// let white = Image::new_filled(4, 2, Channels::Rgb, &[255, 255, 255]).unwrap();
    /// assert_eq!(white.pixel(3, 1), Some(&[255u8, 255, 255][..]));
    /// ```
    pub fn new_filled(width: u32, height: u32, channels: Channels, pixel: &[u8]) -> Result<Self> {
        let spp = channels.count() as usize;
        if pixel.len() != spp {
            return Err(Error::SampleCount {
                expected: spp,
                actual: pixel.len(),
            });
        }
        let len = ImageData::sample_len(width, height, channels)?;
        let data = pixel.iter().copied().cycle().take(len).collect();
        Ok(Self::from_parts(width, height, channels, data))
    }

    /// Wrap an existing row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::BufferLength`] if `data.len() != width * height * channels`.
    pub fn from_raw(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        let expected = ImageData::sample_len(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(width, height, channels, data))
    }

    fn from_parts(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Self {
        Image {
            inner: Arc::new(ImageData {
                width,
                height,
                channels,
                informat: ImageFormat::Unknown,
                data,
            }),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Get the samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.channels.count()
    }

    /// Check whether the image carries an alpha channel.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.inner.channels.has_alpha()
    }

    /// Get the format the image was decoded from.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the number of strong references to this image.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check whether two images share dimensions and channel layout.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.channels() == other.channels()
    }

    /// Create a deep copy of this image.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Image {
            inner: Arc::new((*self.inner).clone()),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: (*self.inner).clone(),
        }
    }

    /// Consume the image and return its sample buffer.
    ///
    /// Copies only if the data is shared.
    pub fn into_raw(self) -> Vec<u8> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => data.data,
            Err(arc) => arc.data.clone(),
        }
    }
}

/// Mutable image
///
/// Allows modification of sample data. Dimensions and channel layout are
/// fixed; convert back to an immutable [`Image`] using `Into<Image>`.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Get the samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.channels.count()
    }

    /// Check whether the image carries an alpha channel.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.inner.channels.has_alpha()
    }

    /// Get the format the image was decoded from.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Record the format the image was decoded from.
    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Set every pixel to `pixel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SampleCount`] if `pixel` does not have one sample per
    /// channel.
    pub fn fill(&mut self, pixel: &[u8]) -> Result<()> {
        let spp = self.spp() as usize;
        if pixel.len() != spp {
            return Err(Error::SampleCount {
                expected: spp,
                actual: pixel.len(),
            });
        }
        for chunk in self.inner.data.chunks_exact_mut(spp) {
            chunk.copy_from_slice(pixel);
        }
        Ok(())
    }
}

impl From<ImageMut> for Image {
    fn from(image_mut: ImageMut) -> Self {
        Image {
            inner: Arc::new(image_mut.inner),
        }
    }
}
