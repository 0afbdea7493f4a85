//! Codec boundary regression test
//!
//! Run with:
//! ```
//! cargo test -p whitetrim-io --test codec_reg
//! ```

use whitetrim_core::{Channels, Image, ImageFormat, Rect};
use whitetrim_io::{
    IoError, detect_format, detect_format_from_bytes, read_image, read_image_mem, write_image,
    write_image_mem,
};
use whitetrim_test::{BLACK_RGB, RegParams, paint_rect, white_image};

fn scratch_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("whitetrim-codec-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn codec_reg() {
    let mut rp = RegParams::new("codec");
    let page = paint_rect(&white_image(48, 32).unwrap(), &Rect::new(8, 8, 23, 19), &BLACK_RGB)
        .unwrap();
    let dir = scratch_dir();

    // -----------------------------------------------------------
    // PNG is lossless
    // -----------------------------------------------------------
    let png_path = dir.join("page.png");
    write_image(&page, &png_path, ImageFormat::Png).unwrap();
    rp.compare_flags(true, detect_format(&png_path).unwrap() == ImageFormat::Png);
    let decoded = read_image(&png_path).unwrap();
    rp.compare_images(&page, &decoded);
    rp.compare_flags(true, decoded.informat() == ImageFormat::Png);

    let rgba = Image::new_filled(5, 4, Channels::Rgba, &[1, 2, 3, 128]).unwrap();
    let bytes = write_image_mem(&rgba, ImageFormat::Png).unwrap();
    rp.compare_images(&rgba, &read_image_mem(&bytes).unwrap());

    // -----------------------------------------------------------
    // JPEG keeps size and is close to the source
    // -----------------------------------------------------------
    let jpeg_path = dir.join("page.jpg");
    write_image(&page, &jpeg_path, ImageFormat::Jpeg).unwrap();
    rp.compare_flags(true, detect_format(&jpeg_path).unwrap() == ImageFormat::Jpeg);
    let decoded = read_image(&jpeg_path).unwrap();
    rp.compare_values(48.0, decoded.width() as f64, 0.0);
    rp.compare_values(32.0, decoded.height() as f64, 0.0);
    rp.compare_flags(true, decoded.channels() == Channels::Rgb);
    let corner = decoded.pixel(0, 0).unwrap();
    rp.compare_values(255.0, corner[0] as f64, 8.0);
    let center = decoded.pixel(15, 13).unwrap();
    rp.compare_values(0.0, center[0] as f64, 8.0);

    // -----------------------------------------------------------
    // Rejected input
    // -----------------------------------------------------------
    rp.compare_flags(
        true,
        matches!(detect_format_from_bytes(&[0x89]), Err(IoError::InvalidData(_))),
    );
    rp.compare_flags(
        true,
        matches!(read_image_mem(b"GIF89a...."), Err(IoError::UnsupportedFormat(_))),
    );
    let mut truncated = write_image_mem(&page, ImageFormat::Png).unwrap();
    truncated.truncate(40);
    rp.compare_flags(true, read_image_mem(&truncated).is_err());

    let _ = std::fs::remove_dir_all(&dir);
    assert!(rp.cleanup(), "codec regression test failed");
}
