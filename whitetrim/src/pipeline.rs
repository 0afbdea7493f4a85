//! Single-image trimming pipeline
//!
//! Every image goes through the same stages:
//!
//! 1. Blank classification. A blank image stops here and produces no
//!    output.
//! 2. Region detection, depending on [`TrimMode`]: a flood fill from the
//!    corners followed by a bounding box of everything it missed, or a
//!    plain bounding box of non-background pixels.
//! 3. Cropping to that box, or erasing margins in place.
//!
//! Decoding and encoding happen around this in [`process_bytes`] and
//! [`process_file`].

use crate::error::{TrimError, TrimResult};
use std::path::{Path, PathBuf};
use whitetrim_core::{BackgroundPredicate, BlankOptions, BlankStatus, Image, ImageFormat, Rect};
use whitetrim_region::{bounding_box_in, fill_from_corners, foreground_bounding_box};
use whitetrim_transform::{EraseOptions, crop, erase_copy};

/// How margins are removed from a non-blank image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimMode {
    /// Crop to the bounding box of everything not connected to the corners
    /// through background pixels
    #[default]
    Crop,
    /// Keep the size, painting the edge strip and background-like pixels
    /// white
    Erase(EraseOptions),
    /// Crop to the bounding box of every non-background pixel, ignoring
    /// connectivity
    CropForeground,
}

/// What to do when no pixel survives region detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Return [`TrimError::DegenerateRegion`]
    Fail,
    /// Report the image as blank
    #[default]
    Blank,
    /// Keep the single pixel at the origin
    SinglePixel,
}

/// Pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimOptions {
    /// Blank classification settings
    pub blank: BlankOptions,
    /// Background test used by region detection in the crop modes
    pub fill_predicate: BackgroundPredicate,
    /// Margin removal strategy
    pub mode: TrimMode,
    /// Handling of images with nothing left to keep
    pub degenerate: DegeneratePolicy,
    /// Encoding of the output; `None` keeps the input format
    pub output_format: Option<ImageFormat>,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            blank: BlankOptions::default(),
            fill_predicate: BackgroundPredicate::strict(),
            mode: TrimMode::default(),
            degenerate: DegeneratePolicy::default(),
            output_format: None,
        }
    }
}

impl TrimOptions {
    /// Set the blank classification settings.
    pub fn with_blank(mut self, blank: BlankOptions) -> Self {
        self.blank = blank;
        self
    }

    /// Set the region detection predicate.
    pub fn with_fill_predicate(mut self, predicate: BackgroundPredicate) -> Self {
        self.fill_predicate = predicate;
        self
    }

    /// Set the margin removal strategy.
    pub fn with_mode(mut self, mode: TrimMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the degenerate region policy.
    pub fn with_degenerate(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    /// Force the output encoding.
    pub fn with_output_format(mut self, format: ImageFormat) -> Self {
        self.output_format = Some(format);
        self
    }
}

/// Result of trimming one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrimOutcome {
    /// The image is blank; nothing is produced
    Blank,
    /// The image was cropped to `region` of the source
    Trimmed { image: Image, region: Rect },
    /// The image was erased in place
    Erased(Image),
}

impl TrimOutcome {
    /// Blank classification of the source image.
    pub fn status(&self) -> BlankStatus {
        match self {
            Self::Blank => BlankStatus::Blank,
            _ => BlankStatus::NotBlank,
        }
    }

    /// The produced image, if any.
    pub fn image(&self) -> Option<&Image> {
        match self {
            Self::Blank => None,
            Self::Trimmed { image, .. } | Self::Erased(image) => Some(image),
        }
    }

    /// Consume the outcome, returning the produced image.
    pub fn into_image(self) -> Option<Image> {
        match self {
            Self::Blank => None,
            Self::Trimmed { image, .. } | Self::Erased(image) => Some(image),
        }
    }
}

/// Trim a decoded image
///
/// # Errors
///
/// Returns [`TrimError::DegenerateRegion`] when region detection keeps no
/// pixel and the policy is [`DegeneratePolicy::Fail`].
///
/// # Examples
///
/// ```
/// use whitetrim::{Channels, Image, Rect, TrimOptions, TrimOutcome, trim_image};
///
/// let mut image = Image::new_filled(40, 40, Channels::Rgb, &[255, 255, 255])
///     .unwrap()
///     .to_mut();
/// for y in 10..30 {
///     for x in 5..25 {
///         image.set_pixel(x, y, &[0, 0, 0]).unwrap();
///     }
/// }
/// let image: Image = image.into();
///
/// match trim_image(&image, &TrimOptions::default()).unwrap() {
///     TrimOutcome::Trimmed { image, region } => {
///         assert_eq!(region, Rect::new(5, 10, 24, 29));
///         assert_eq!((image.width(), image.height()), (20, 20));
///     }
///     other => panic!("unexpected outcome: {:?}", other),
/// }
/// ```
pub fn trim_image(image: &Image, options: &TrimOptions) -> TrimResult<TrimOutcome> {
    let (width, height) = (image.width(), image.height());

    if image.is_blank(&options.blank) {
        log::debug!("{}x{} image classified blank", width, height);
        return Ok(TrimOutcome::Blank);
    }

    let region = match options.mode {
        TrimMode::Erase(erase) => {
            log::debug!(
                "erasing {}px border of {}x{} image",
                erase.border_width,
                width,
                height
            );
            return Ok(TrimOutcome::Erased(erase_copy(image, &erase)));
        }
        TrimMode::Crop => {
            let mask = fill_from_corners(image, &options.fill_predicate)?;
            log::debug!(
                "corner fill reached {} of {} pixels",
                mask.count(),
                u64::from(width) * u64::from(height)
            );
            bounding_box_in(&mask, width, height)?
        }
        TrimMode::CropForeground => foreground_bounding_box(image, &options.fill_predicate),
    };
    log::debug!("content region {}", region);

    crop_region(image, region, options.degenerate)
}

fn crop_region(image: &Image, region: Rect, policy: DegeneratePolicy) -> TrimResult<TrimOutcome> {
    if !region.is_degenerate() {
        let cropped = crop(image, &region)?;
        return Ok(TrimOutcome::Trimmed {
            image: cropped,
            region,
        });
    }

    match policy {
        DegeneratePolicy::Fail => Err(TrimError::DegenerateRegion {
            width: image.width(),
            height: image.height(),
        }),
        DegeneratePolicy::Blank => {
            log::debug!("no content region, reporting blank");
            Ok(TrimOutcome::Blank)
        }
        DegeneratePolicy::SinglePixel => {
            let region = Rect::single_pixel(0, 0);
            Ok(TrimOutcome::Trimmed {
                image: crop(image, &region)?,
                region,
            })
        }
    }
}

/// An image trimmed and re-encoded in memory
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    /// Pipeline result
    pub outcome: TrimOutcome,
    /// Encoded output, absent for blank images
    pub encoded: Option<Vec<u8>>,
    /// Encoding of `encoded`
    pub format: ImageFormat,
}

/// Decode, trim and re-encode an image held in memory.
///
/// The output uses [`TrimOptions::output_format`] if set, otherwise the
/// source format.
pub fn process_bytes(data: &[u8], options: &TrimOptions) -> TrimResult<ProcessedImage> {
    let image = whitetrim_io::read_image_mem(data)?;
    let format = resolve_format(options, None, image.informat());
    let outcome = trim_image(&image, options)?;

    let encoded = match outcome.image() {
        Some(out) => Some(whitetrim_io::write_image_mem(out, format)?),
        None => None,
    };

    Ok(ProcessedImage {
        outcome,
        encoded,
        format,
    })
}

/// Trim the image file at `input` and write the result to `output`.
///
/// Nothing is written for a blank image. The output format is taken from
/// [`TrimOptions::output_format`], then the extension of `output`, then
/// the format of the input.
pub fn process_file<P, Q>(input: P, output: Q, options: &TrimOptions) -> TrimResult<TrimOutcome>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    let image = whitetrim_io::read_image(input)?;
    let outcome = trim_image(&image, options)?;

    match outcome.image() {
        Some(out) => {
            let extension = output
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(ImageFormat::from_extension);
            let format = resolve_format(options, extension, image.informat());
            whitetrim_io::write_image(out, output, format)?;
            log::info!(
                "{}: {} ({}x{} -> {}x{}), wrote {}",
                input.display(),
                outcome.status(),
                image.width(),
                image.height(),
                out.width(),
                out.height(),
                output.display()
            );
        }
        None => log::info!("{}: {}", input.display(), outcome.status()),
    }

    Ok(outcome)
}

/// Output location for `input` inside `output_dir`: same file name.
pub fn output_path_for<P, Q>(input: P, output_dir: Q) -> TrimResult<PathBuf>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let name = input
        .file_name()
        .ok_or_else(|| TrimError::InvalidPath(input.to_path_buf()))?;
    Ok(output_dir.as_ref().join(name))
}

fn resolve_format(
    options: &TrimOptions,
    from_path: Option<ImageFormat>,
    source: ImageFormat,
) -> ImageFormat {
    options
        .output_format
        .or(from_path)
        .or(match source {
            ImageFormat::Unknown => None,
            known => Some(known),
        })
        .unwrap_or(ImageFormat::Png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitetrim_core::Channels;

    fn page(w: u32, h: u32, dark: Rect) -> Image {
        let mut image = Image::new_filled(w, h, Channels::Rgb, &[255, 255, 255])
            .unwrap()
            .to_mut();
        for y in dark.min_y..=dark.max_y {
            for x in dark.min_x..=dark.max_x {
                image.set_pixel(x as u32, y as u32, &[0, 0, 0]).unwrap();
            }
        }
        image.into()
    }

    #[test]
    fn test_blank_stops_early() {
        let image = Image::new_filled(50, 50, Channels::Rgb, &[255, 255, 255]).unwrap();
        let outcome = trim_image(&image, &TrimOptions::default()).unwrap();
        assert_eq!(outcome, TrimOutcome::Blank);
        assert_eq!(outcome.status(), BlankStatus::Blank);
        assert!(outcome.image().is_none());
    }

    #[test]
    fn test_crop_mode() {
        let image = page(60, 40, Rect::new(10, 5, 29, 24));
        let outcome = trim_image(&image, &TrimOptions::default()).unwrap();
        assert_eq!(outcome.status(), BlankStatus::NotBlank);
        match outcome {
            TrimOutcome::Trimmed { image, region } => {
                assert_eq!(region, Rect::new(10, 5, 29, 24));
                assert_eq!(image.width(), 20);
                assert!(image.data().iter().all(|&s| s == 0));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_erase_mode_keeps_size() {
        let image = page(60, 40, Rect::new(0, 0, 29, 24));
        let options = TrimOptions::default().with_mode(TrimMode::Erase(EraseOptions::default()));
        let outcome = trim_image(&image, &options).unwrap();
        let erased = outcome.into_image().unwrap();
        assert!(erased.sizes_equal(&image));
        assert_eq!(erased.pixel(0, 0), Some(&[255u8, 255, 255][..]));
        assert_eq!(erased.pixel(10, 10), Some(&[0u8, 0, 0][..]));
    }

    #[test]
    fn test_dark_corner_only_kept_by_crop_foreground() {
        let mut image = page(40, 40, Rect::new(10, 10, 29, 29)).to_mut();
        image.set_pixel(0, 0, &[0, 0, 0]).unwrap();
        let image: Image = image.into();

        // The corner fill marks a dark seed without expanding it
        match trim_image(&image, &TrimOptions::default()).unwrap() {
            TrimOutcome::Trimmed { region, .. } => assert_eq!(region, Rect::new(10, 10, 29, 29)),
            other => panic!("unexpected outcome: {:?}", other),
        }

        let options = TrimOptions::default().with_mode(TrimMode::CropForeground);
        match trim_image(&image, &options).unwrap() {
            TrimOutcome::Trimmed { region, .. } => assert_eq!(region, Rect::new(0, 0, 29, 29)),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_policies() {
        // Light gray page: not blank for a strict blank test, but fully
        // reachable for a tolerant fill
        let image = Image::new_filled(30, 30, Channels::Rgb, &[240, 240, 240]).unwrap();
        let base = TrimOptions::default()
            .with_blank(BlankOptions::default().with_predicate(BackgroundPredicate::strict()))
            .with_fill_predicate(BackgroundPredicate::tolerant(200));

        let blank = trim_image(&image, &base).unwrap();
        assert_eq!(blank, TrimOutcome::Blank);

        let fail = trim_image(&image, &base.with_degenerate(DegeneratePolicy::Fail));
        assert!(matches!(
            fail,
            Err(TrimError::DegenerateRegion {
                width: 30,
                height: 30
            })
        ));

        let single = trim_image(&image, &base.with_degenerate(DegeneratePolicy::SinglePixel));
        match single.unwrap() {
            TrimOutcome::Trimmed { image, region } => {
                assert_eq!(region, Rect::single_pixel(0, 0));
                assert_eq!(image.data(), &[240, 240, 240]);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_output_path_for() {
        let path = output_path_for("assets/samples/ad 2.png", "output").unwrap();
        assert_eq!(path, Path::new("output").join("ad 2.png"));
        assert!(matches!(
            output_path_for("/", "output"),
            Err(TrimError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_resolve_format() {
        let opts = TrimOptions::default();
        assert_eq!(resolve_format(&opts, None, ImageFormat::Unknown), ImageFormat::Png);
        assert_eq!(resolve_format(&opts, None, ImageFormat::Jpeg), ImageFormat::Jpeg);
        assert_eq!(
            resolve_format(&opts, Some(ImageFormat::Png), ImageFormat::Jpeg),
            ImageFormat::Png
        );
        let forced = opts.with_output_format(ImageFormat::Jpeg);
        assert_eq!(
            resolve_format(&forced, Some(ImageFormat::Png), ImageFormat::Png),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_process_bytes_roundtrip() {
        let image = page(50, 50, Rect::new(20, 20, 39, 39));
        let png = whitetrim_io::write_image_mem(&image, ImageFormat::Png).unwrap();
        let processed = process_bytes(&png, &TrimOptions::default()).unwrap();
        assert_eq!(processed.format, ImageFormat::Png);
        let decoded = whitetrim_io::read_image_mem(processed.encoded.as_deref().unwrap()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (20, 20));
    }

    #[test]
    fn test_process_bytes_blank_has_no_output() {
        let image = Image::new_filled(20, 20, Channels::Rgb, &[255, 255, 255]).unwrap();
        let png = whitetrim_io::write_image_mem(&image, ImageFormat::Png).unwrap();
        let processed = process_bytes(&png, &TrimOptions::default()).unwrap();
        assert_eq!(processed.outcome.status(), BlankStatus::Blank);
        assert!(processed.encoded.is_none());
    }

    #[test]
    fn test_process_bytes_decode_error() {
        let result = process_bytes(b"not an image", &TrimOptions::default());
        assert!(matches!(result, Err(TrimError::Io(_))));
    }
}
