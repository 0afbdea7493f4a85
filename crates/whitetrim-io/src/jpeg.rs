//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Grayscale input is replicated into RGB; CMYK and
//! 16-bit luminance input are rejected. JPEG has no alpha channel, so
//! RGBA images lose their alpha on write.

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use jpeg_encoder::{ColorType, Encoder};
use std::io::{Read, Write};
use whitetrim_core::{Channels, Image};

/// Quality used when no explicit value is given.
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Returns
/// An RGB `Image`.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Image> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);

    let data = match info.pixel_format {
        PixelFormat::RGB24 => pixels,
        PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g]).collect(),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    Ok(Image::from_raw(width, height, Channels::Rgb, data)?)
}

/// Write a JPEG image at the given quality (1-100).
pub fn write_jpeg<W: Write>(image: &Image, writer: W, quality: u8) -> IoResult<()> {
    let too_large = || {
        IoError::EncodeError(format!(
            "image {}x{} exceeds JPEG size limit",
            image.width(),
            image.height()
        ))
    };
    let width = u16::try_from(image.width()).map_err(|_| too_large())?;
    let height = u16::try_from(image.height()).map_err(|_| too_large())?;

    let color_type = if image.has_alpha() {
        ColorType::Rgba
    } else {
        ColorType::Rgb
    };

    let encoder = Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(image.data(), width, height, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_jpeg_roundtrip_dimensions() {
        let image = Image::new_filled(16, 8, Channels::Rgb, &[255, 255, 255]).unwrap();
        let mut buffer = Vec::new();
        write_jpeg(&image, &mut buffer, DEFAULT_QUALITY).unwrap();
        let decoded = read_jpeg(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 8);
        assert_eq!(decoded.channels(), Channels::Rgb);
        // Flat white survives lossy coding closely
        assert!(decoded.data().iter().all(|&s| s >= 250));
    }

    #[test]
    fn test_rgba_drops_alpha() {
        let image = Image::new_filled(8, 8, Channels::Rgba, &[0, 0, 0, 10]).unwrap();
        let mut buffer = Vec::new();
        write_jpeg(&image, &mut buffer, DEFAULT_QUALITY).unwrap();
        let decoded = read_jpeg(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.channels(), Channels::Rgb);
    }

    #[test]
    fn test_too_large_for_jpeg() {
        let image = Image::new(70_000, 1, Channels::Rgb).unwrap();
        let result = write_jpeg(&image, Vec::new(), DEFAULT_QUALITY);
        assert!(matches!(result, Err(IoError::EncodeError(_))));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let result = read_jpeg(Cursor::new(vec![0xFF, 0xD8, 0xFF, 0x00, 0x01]));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
