//! Seed fill operations
//!
//! Multi-source breadth-first fill over background pixels. The fill uses
//! an explicit FIFO queue, so stack usage does not depend on image size.
//!
//! Seeds are queued unconditionally and marked visited when popped,
//! whether or not they are background. Neighbors are queued only when
//! they are background themselves, and at most once each: a second mask
//! records what is already waiting in the queue. A corner that is
//! foreground therefore ends up in the mask as a single unexpanded pixel,
//! which the bounding-box scan treats as trimmable, while foreground
//! elsewhere is never marked.

use crate::error::{RegionError, RegionResult};
use std::collections::VecDeque;
use whitetrim_core::{BackgroundPredicate, Image, VisitedMask};

/// The four corner coordinates of a `width x height` image.
///
/// Order: top-left, bottom-left, top-right, bottom-right. Corners repeat
/// when a side is one pixel long.
pub fn corner_seeds(width: u32, height: u32) -> [(u32, u32); 4] {
    let right = width.saturating_sub(1);
    let bottom = height.saturating_sub(1);
    [(0, 0), (0, bottom), (right, 0), (right, bottom)]
}

/// Find the border-connected background region
///
/// Seeds the fill with the four image corners.
///
/// # Examples
///
/// ```
/// use whitetrim_core::{BackgroundPredicate, Channels, Image};
/// use whitetrim_region::fill_from_corners;
///
/// let white = Image::new_filled(4, 3, Channels::Rgb, &[255, 255, 255]).unwrap();
/// let mask = fill_from_corners(&white, &BackgroundPredicate::strict()).unwrap();
/// assert!(mask.is_full());
/// ```
pub fn fill_from_corners(image: &Image, predicate: &BackgroundPredicate) -> RegionResult<VisitedMask> {
    fill_from_seeds(
        image,
        &corner_seeds(image.width(), image.height()),
        predicate,
    )
}

/// Breadth-first fill from arbitrary seed points
///
/// Seeds outside the image are discarded when popped, like any other
/// out-of-bounds coordinate.
///
/// # Arguments
///
/// * `image` - Image to traverse
/// * `seeds` - Starting coordinates, visited in order
/// * `predicate` - Background test deciding which pixels expand
///
/// # Returns
///
/// A mask with one bit per visited coordinate.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `seeds` is empty.
pub fn fill_from_seeds(
    image: &Image,
    seeds: &[(u32, u32)],
    predicate: &BackgroundPredicate,
) -> RegionResult<VisitedMask> {
    if seeds.is_empty() {
        return Err(RegionError::InvalidParameters(
            "seed fill needs at least one seed".to_string(),
        ));
    }

    Ok(flood(image, seeds, predicate).0)
}

/// Run the fill, also returning how many coordinates were queued.
fn flood(
    image: &Image,
    seeds: &[(u32, u32)],
    predicate: &BackgroundPredicate,
) -> (VisitedMask, usize) {
    let width = image.width();
    let height = image.height();
    let mut visited = VisitedMask::new(width, height);
    let mut queued = VisitedMask::new(width, height);

    let mut queue: VecDeque<(u32, u32)> = VecDeque::with_capacity(seeds.len());
    for &(x, y) in seeds {
        if x < width && y < height {
            queued.set(x, y);
        }
        queue.push_back((x, y));
    }
    let mut pushes = queue.len();

    while let Some((x, y)) = queue.pop_front() {
        if x >= width || y >= height {
            continue;
        }

        // Marked before the test, so a failing seed is visited too
        if !visited.set(x, y) {
            continue;
        }

        if !predicate.is_background_at(image, x, y) {
            continue;
        }

        // 4-way neighbors; only background ones are queued, once each
        let mut push = |nx: u32, ny: u32| {
            if !queued.get(nx, ny) && predicate.is_background_at(image, nx, ny) {
                queued.set(nx, ny);
                queue.push_back((nx, ny));
                pushes += 1;
            }
        };
        if x > 0 {
            push(x - 1, y);
        }
        if x + 1 < width {
            push(x + 1, y);
        }
        if y > 0 {
            push(x, y - 1);
        }
        if y + 1 < height {
            push(x, y + 1);
        }
    }

    (visited, pushes)
}
