//! whitetrim-test - Regression test framework for whitetrim
//!
//! This crate provides a small regression test harness and synthetic
//! image builders, supporting two modes:
//!
//! - **Compare**: Check values and images, write nothing (default)
//! - **Display**: Also write every checked image to `tests/regout/` for
//!   visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use whitetrim_test::{RegParams, white_image};
//!
//! let mut rp = RegParams::new("crop");
//! rp.compare_values(2.0, cropped.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use whitetrim_core::{Channels, Image, Rect};

/// Opaque white as an RGB pixel
pub const WHITE_RGB: [u8; 3] = [255, 255, 255];
/// Opaque black as an RGB pixel
pub const BLACK_RGB: [u8; 3] = [0, 0, 0];

/// Create an image with every pixel set to `pixel`.
///
/// The channel layout follows the length of `pixel` (3 or 4 samples).
pub fn uniform_image(w: u32, h: u32, pixel: &[u8]) -> TestResult<Image> {
    let channels = Channels::from_count(pixel.len() as u32)?;
    Ok(Image::new_filled(w, h, channels, pixel)?)
}

/// Create an all-white RGB image.
pub fn white_image(w: u32, h: u32) -> TestResult<Image> {
    uniform_image(w, h, &WHITE_RGB)
}

/// Return a copy of `image` with the inclusive `rect` painted `pixel`.
///
/// Parts of `rect` outside the image are ignored.
pub fn paint_rect(image: &Image, rect: &Rect, pixel: &[u8]) -> TestResult<Image> {
    let mut out = image.to_mut();
    if let Some(r) = rect.clip(image.width(), image.height()) {
        for y in r.min_y..=r.max_y {
            for x in r.min_x..=r.max_x {
                out.set_pixel(x as u32, y as u32, pixel)?;
            }
        }
    }
    Ok(out.into())
}

/// Return a copy of `image` with the one-pixel outline of `rect` painted
/// `pixel`, leaving the interior untouched.
///
/// Parts of the outline outside the image are ignored.
pub fn paint_ring(image: &Image, rect: &Rect, pixel: &[u8]) -> TestResult<Image> {
    let mut out = image.to_mut();
    if let Some(r) = rect.clip(image.width(), image.height()) {
        for y in r.min_y..=r.max_y {
            for x in r.min_x..=r.max_x {
                // Edges of the unclipped outline
                let on_edge =
                    x == rect.min_x || x == rect.max_x || y == rect.min_y || y == rect.max_y;
                if on_edge {
                    out.set_pixel(x as u32, y as u32, pixel)?;
                }
            }
        }
    }
    Ok(out.into())
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // whitetrim-test is at crates/whitetrim-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
