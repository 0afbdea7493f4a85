//! PNG image format support
//!
//! Every PNG variant is normalized to 8-bit RGB or RGBA on read: palettes
//! and sub-byte depths are expanded, 16-bit samples are stripped to their
//! high byte, and grayscale is replicated into the three color channels.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use whitetrim_core::{Channels, Image};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }

    // Samples per pixel in the decoded buffer, and the layout we store
    let (src_spp, channels) = match color_type {
        ColorType::Grayscale => (1, Channels::Rgb),
        ColorType::GrayscaleAlpha => (2, Channels::Rgba),
        ColorType::Rgb => (3, Channels::Rgb),
        ColorType::Rgba => (4, Channels::Rgba),
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let used = width as usize * src_spp;

    let mut data = Vec::with_capacity(width as usize * height as usize * channels.count() as usize);
    for y in 0..height as usize {
        let row_start = y * bytes_per_row;
        let row = buf
            .get(row_start..row_start + used)
            .ok_or_else(|| IoError::InvalidData(format!("PNG row {} is truncated", y)))?;
        match src_spp {
            1 => {
                for &g in row {
                    data.extend_from_slice(&[g, g, g]);
                }
            }
            2 => {
                for ga in row.chunks_exact(2) {
                    data.extend_from_slice(&[ga[0], ga[0], ga[0], ga[1]]);
                }
            }
            _ => data.extend_from_slice(row),
        }
    }

    Ok(Image::from_raw(width, height, channels, data)?)
}

/// Write a PNG image
///
/// RGB images are written as 8-bit truecolor, RGBA images as 8-bit
/// truecolor with alpha.
pub fn write_png<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let color_type = if image.has_alpha() {
        ColorType::Rgba
    } else {
        ColorType::Rgb
    };

    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    // Rows are unpadded, so the sample buffer is already in PNG order
    writer
        .write_image_data(image.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
