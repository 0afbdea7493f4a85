//! Background pixel classification
//!
//! A [`BackgroundPredicate`] decides whether one pixel counts as
//! background. Only the R, G and B samples are tested; alpha never is.

use crate::color::COLOR_SAMPLES;
use crate::image::Image;

/// How the color samples are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundMode {
    /// Every color sample must equal 255
    Strict,
    /// Every color sample must be strictly greater than the threshold
    Tolerant,
}

/// Per-pixel background test
///
/// # Examples
///
/// ```
/// use whitetrim_core::BackgroundPredicate;
///
/// let strict = BackgroundPredicate::strict();
/// assert!(strict.is_background(&[255, 255, 255]));
/// assert!(!strict.is_background(&[254, 255, 255]));
///
/// let tolerant = BackgroundPredicate::tolerant(200);
/// assert!(tolerant.is_background(&[201, 230, 255, 0]));
/// assert!(!tolerant.is_background(&[200, 255, 255]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackgroundPredicate {
    /// Per-channel lower bound (exclusive); ignored in strict mode
    pub threshold: u8,
    /// Comparison mode
    pub mode: BackgroundMode,
}

impl Default for BackgroundPredicate {
    fn default() -> Self {
        Self::tolerant(Self::DEFAULT_THRESHOLD)
    }
}

impl BackgroundPredicate {
    /// Default tolerant threshold.
    pub const DEFAULT_THRESHOLD: u8 = 200;

    /// Exact white: R = G = B = 255.
    pub const fn strict() -> Self {
        Self {
            threshold: 254,
            mode: BackgroundMode::Strict,
        }
    }

    /// Near white: R, G and B all greater than `threshold`.
    pub const fn tolerant(threshold: u8) -> Self {
        Self {
            threshold,
            mode: BackgroundMode::Tolerant,
        }
    }

    /// Classify one pixel given its samples (3 or 4).
    #[inline]
    pub fn is_background(&self, pixel: &[u8]) -> bool {
        let mut color = pixel.iter().take(COLOR_SAMPLES);
        match self.mode {
            BackgroundMode::Strict => color.all(|&s| s == u8::MAX),
            BackgroundMode::Tolerant => color.all(|&s| s > self.threshold),
        }
    }

    /// Classify the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn is_background_at(&self, image: &Image, x: u32, y: u32) -> bool {
        self.is_background(image.pixel_unchecked(x, y))
    }
}
