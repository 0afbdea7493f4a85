//! whitetrim-io - Image codec boundary for whitetrim
//!
//! Decodes files or in-memory buffers into [`Image`] values and encodes
//! them back. Supported formats:
//!
//! - PNG (feature `png-format`, default)
//! - JPEG (feature `jpeg`, default)
//!
//! Decoder errors are returned unmodified inside [`IoError`]; nothing is
//! retried.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use whitetrim_core::ImageFormat;

use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;
use whitetrim_core::Image;

/// Read an image from a file path.
///
/// The format is detected from the file contents, not the extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let data = fs::read(path)?;
    read_image_mem(&data)
}

/// Decode an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    let format = detect_format_from_bytes(data)?;
    let image = match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data))?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data))?,
        other => return Err(unsupported(other)),
    };

    let mut image = image.try_into_mut().unwrap_or_else(|shared| shared.to_mut());
    image.set_informat(format);
    Ok(image.into())
}

/// Write an image to a file path in the given format.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P, format: ImageFormat) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_to(image, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into a new buffer in the given format.
pub fn write_image_mem(image: &Image, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(image, &mut buffer, format)?;
    Ok(buffer)
}

/// Encode an image into any writer in the given format.
pub fn write_image_to<W: Write>(image: &Image, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(image, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(image, writer, jpeg::DEFAULT_QUALITY),
        other => {
            let _ = writer;
            Err(unsupported(other))
        }
    }
}

fn unsupported(format: ImageFormat) -> IoError {
    IoError::UnsupportedFormat(format!(
        "{:?} support is not available in this build",
        format
    ))
}
