//! Margin crop and erase regression test
//!
//! Run with:
//! ```
//! cargo test -p whitetrim-transform --test margin_reg
//! ```

use proptest::prelude::*;
use whitetrim_core::{BackgroundPredicate, Image, Rect};
use whitetrim_region::{bounding_box, fill_from_corners};
use whitetrim_test::{
    BLACK_RGB, RegParams, WHITE_RGB, paint_rect, paint_ring, uniform_image, white_image,
};
use whitetrim_transform::{EraseOptions, crop, erase_copy};

fn trim(image: &Image) -> Image {
    let mask = fill_from_corners(image, &BackgroundPredicate::strict()).unwrap();
    crop(image, &bounding_box(&mask)).unwrap()
}

#[test]
fn margin_reg() {
    let mut rp = RegParams::new("margin");

    // -----------------------------------------------------------
    // 2x2 black square in a 10x10 page crops to itself
    // -----------------------------------------------------------
    let page = paint_rect(&white_image(10, 10).unwrap(), &Rect::new(4, 4, 5, 5), &BLACK_RGB)
        .unwrap();
    let cropped = trim(&page);
    rp.write_image(&cropped).unwrap();
    rp.compare_images(&uniform_image(2, 2, &BLACK_RGB).unwrap(), &cropped);

    // -----------------------------------------------------------
    // Enclosed island survives the crop unchanged
    // -----------------------------------------------------------
    let ringed = paint_ring(&white_image(10, 10).unwrap(), &Rect::new(2, 2, 7, 7), &BLACK_RGB)
        .unwrap();
    let cropped = trim(&ringed);
    rp.write_image(&cropped).unwrap();
    rp.compare_values(6.0, cropped.width() as f64, 0.0);
    rp.compare_values(6.0, cropped.height() as f64, 0.0);
    let expected = paint_ring(&white_image(6, 6).unwrap(), &Rect::new(0, 0, 5, 5), &BLACK_RGB)
        .unwrap();
    rp.compare_images(&expected, &cropped);

    // -----------------------------------------------------------
    // Erase keeps the frame and whitens the strip
    // -----------------------------------------------------------
    let dark = uniform_image(16, 12, &[30, 30, 30]).unwrap();
    let erased = erase_copy(&dark, &EraseOptions::default().with_border_width(3));
    rp.write_image(&erased).unwrap();
    rp.compare_flags(true, erased.sizes_equal(&dark));
    let interior = paint_rect(
        &white_image(16, 12).unwrap(),
        &Rect::new(3, 3, 12, 8),
        &[30, 30, 30],
    )
    .unwrap();
    rp.compare_images(&interior, &erased);

    // Erasing a white page changes nothing
    let white = white_image(8, 8).unwrap();
    rp.compare_images(&white, &erase_copy(&white, &EraseOptions::default()));
    rp.compare_flags(true, white.pixel(0, 0) == Some(&WHITE_RGB[..]));

    assert!(rp.cleanup(), "margin regression test failed");
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn crop_never_grows(
        w in 1u32..32,
        h in 1u32..32,
        x0 in 0i32..32,
        y0 in 0i32..32,
        x1 in 0i32..32,
        y1 in 0i32..32,
    ) {
        let image = white_image(w, h).unwrap();
        let rect = Rect::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1));
        match crop(&image, &rect) {
            Ok(out) => {
                prop_assert!(out.width() >= 1 && out.width() <= w);
                prop_assert!(out.height() >= 1 && out.height() <= h);
            }
            Err(_) => prop_assert!(rect.clip(w, h).is_none()),
        }
    }

    #[test]
    fn erase_output_is_light_or_untouched(
        gray in 0u8..=255,
        border in 0u32..6,
    ) {
        let image = uniform_image(9, 7, &[gray, gray, gray]).unwrap();
        let opts = EraseOptions::default().with_border_width(border);
        let erased = erase_copy(&image, &opts);
        for y in 0..7 {
            for x in 0..9 {
                let p = erased.pixel(x, y).unwrap();
                prop_assert!(p == &WHITE_RGB[..] || p == &[gray, gray, gray][..]);
            }
        }
    }
}
