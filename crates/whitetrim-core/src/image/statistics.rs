//! Foreground statistics and blank-image classification
//!
//! An image is *blank* when the number of pixels failing the background
//! predicate does not exceed an area threshold. The scan is row-major and
//! stops as soon as the count passes the threshold, so clearly non-blank
//! images are rejected after touching only a few rows.

use super::Image;
use crate::BackgroundPredicate;

/// Options for blank classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankOptions {
    /// Largest number of foreground pixels a blank image may contain
    pub area_threshold: u64,
    /// Test applied to every pixel
    pub predicate: BackgroundPredicate,
}

impl Default for BlankOptions {
    fn default() -> Self {
        Self {
            area_threshold: Self::DEFAULT_AREA_THRESHOLD,
            predicate: BackgroundPredicate::tolerant(Self::DEFAULT_COLOR_THRESHOLD),
        }
    }
}

impl BlankOptions {
    /// Default foreground pixel allowance.
    pub const DEFAULT_AREA_THRESHOLD: u64 = 225;
    /// Default per-channel threshold of the tolerant predicate.
    pub const DEFAULT_COLOR_THRESHOLD: u8 = 225;

    /// Set the foreground pixel allowance
    pub fn with_area_threshold(mut self, area_threshold: u64) -> Self {
        self.area_threshold = area_threshold;
        self
    }

    /// Set the background predicate
    pub fn with_predicate(mut self, predicate: BackgroundPredicate) -> Self {
        self.predicate = predicate;
        self
    }
}

/// Result of blank classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlankStatus {
    /// Foreground count within the allowance
    Blank,
    /// Foreground count above the allowance
    NotBlank,
}

impl BlankStatus {
    /// Check for [`BlankStatus::Blank`].
    pub fn is_blank(self) -> bool {
        self == BlankStatus::Blank
    }
}

impl std::fmt::Display for BlankStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlankStatus::Blank => f.write_str("blank"),
            BlankStatus::NotBlank => f.write_str("not blank"),
        }
    }
}

impl Image {
    /// Count the pixels that fail `predicate`.
    pub fn count_foreground(&self, predicate: &BackgroundPredicate) -> u64 {
        self.data()
            .chunks_exact(self.spp() as usize)
            .filter(|pixel| !predicate.is_background(pixel))
            .count() as u64
    }

    /// Classify the image as blank.
    ///
    /// Returns `false` as soon as more than `options.area_threshold`
    /// foreground pixels have been seen. An image with exactly
    /// `area_threshold` foreground pixels is still blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use whitetrim_core::{BlankOptions, Channels, Image};
    ///
    /// let white = Image::new_filled(10, 10, Channels::Rgb, &[255, 255, 255]).unwrap();
    /// assert!(white.is_blank(&BlankOptions::default()));
    ///
    /// let black = Image::new(20, 20, Channels::Rgb).unwrap();
    /// assert!(!black.is_blank(&BlankOptions::default()));
    /// ```
    pub fn is_blank(&self, options: &BlankOptions) -> bool {
        let mut foreground = 0u64;
        for pixel in self.data().chunks_exact(self.spp() as usize) {
            if !options.predicate.is_background(pixel) {
                foreground += 1;
                if foreground > options.area_threshold {
                    return false;
                }
            }
        }
        true
    }

    /// Classify the image, returning a printable status.
    pub fn blank_status(&self, options: &BlankOptions) -> BlankStatus {
        if self.is_blank(options) {
            BlankStatus::Blank
        } else {
            BlankStatus::NotBlank
        }
    }
}
