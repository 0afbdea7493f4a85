//! Rect - Inclusive pixel rectangles
//!
//! A `Rect` names the first and last row and column it covers. The
//! empty rectangle is represented explicitly as a *degenerate* value
//! (`min > max`) so that a bounding-box fold can start from it.

/// An inclusive rectangle of pixel coordinates
///
/// Valid iff `min_x <= max_x` and `min_y <= max_y`. Small and frequently
/// copied, so it is a plain `Copy` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Leftmost column
    pub min_x: i32,
    /// Topmost row
    pub min_y: i32,
    /// Rightmost column (inclusive)
    pub max_x: i32,
    /// Bottom row (inclusive)
    pub max_y: i32,
}

impl Default for Rect {
    fn default() -> Self {
        Self::degenerate()
    }
}

impl Rect {
    /// Create a rectangle from inclusive bounds.
    ///
    /// No validation is performed; use [`Rect::is_degenerate`] to check.
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The empty rectangle: folding any point into it yields that point.
    pub const fn degenerate() -> Self {
        Self {
            min_x: i32::MAX,
            min_y: i32::MAX,
            max_x: i32::MIN,
            max_y: i32::MIN,
        }
    }

    /// A 1x1 rectangle at (x, y).
    pub const fn single_pixel(x: i32, y: i32) -> Self {
        Self::new(x, y, x, y)
    }

    /// Check whether the rectangle contains no pixels.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Number of columns covered, 0 when degenerate.
    #[inline]
    pub fn width(&self) -> u32 {
        if self.is_degenerate() {
            0
        } else {
            (i64::from(self.max_x) - i64::from(self.min_x) + 1) as u32
        }
    }

    /// Number of rows covered, 0 when degenerate.
    #[inline]
    pub fn height(&self) -> u32 {
        if self.is_degenerate() {
            0
        } else {
            (i64::from(self.max_y) - i64::from(self.min_y) + 1) as u32
        }
    }

    /// Number of pixels covered.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Grow the rectangle so that it covers (x, y).
    #[inline]
    pub fn include(&mut self, x: i32, y: i32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Intersect with the `[0, width) x [0, height)` image frame.
    ///
    /// Returns `None` if the result is empty.
    pub fn clip(&self, width: u32, height: u32) -> Option<Rect> {
        if self.is_degenerate() || width == 0 || height == 0 {
            return None;
        }
        let max_x = i64::from(width) - 1;
        let max_y = i64::from(height) - 1;
        let clipped = Rect {
            min_x: self.min_x.max(0),
            min_y: self.min_y.max(0),
            max_x: i64::from(self.max_x).min(max_x) as i32,
            max_y: i64::from(self.max_y).min(max_y) as i32,
        };
        if clipped.is_degenerate() {
            None
        } else {
            Some(clipped)
        }
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_degenerate() {
            write!(f, "[empty]")
        } else {
            write!(
                f,
                "[{}..={}, {}..={}]",
                self.min_x, self.max_x, self.min_y, self.max_y
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate() {
        let r = Rect::degenerate();
        assert!(r.is_degenerate());
        assert_eq!(r.width(), 0);
        assert_eq!(r.height(), 0);
        assert_eq!(r.area(), 0);
        assert_eq!(Rect::default(), r);
        assert!(Rect::new(5, 0, 4, 3).is_degenerate());
    }

    #[test]
    fn test_include_from_degenerate() {
        let mut r = Rect::degenerate();
        r.include(4, 7);
        assert_eq!(r, Rect::single_pixel(4, 7));
        r.include(2, 9);
        assert_eq!(r, Rect::new(2, 7, 4, 9));
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 3);
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(4, 4, 5, 5);
        assert!(r.contains(4, 5));
        assert!(r.contains(5, 5));
        assert!(!r.contains(6, 5));
        assert!(!Rect::degenerate().contains(0, 0));
    }

    #[test]
    fn test_clip() {
        let r = Rect::new(-3, 2, 20, 4);
        assert_eq!(r.clip(10, 10), Some(Rect::new(0, 2, 9, 4)));
        assert_eq!(Rect::new(12, 0, 14, 1).clip(10, 10), None);
        assert_eq!(Rect::degenerate().clip(10, 10), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "[1..=3, 2..=4]");
        assert_eq!(Rect::degenerate().to_string(), "[empty]");
    }
}
