//! VisitedMask - One bit per pixel coordinate
//!
//! Bits are packed MSB to LSB into 32-bit words, one run of words per
//! row, the same layout a 1 bpp raster uses. A mask is built once per
//! flood fill and read back by the bounding-box scan.

/// Bitset over the pixel coordinates of a `width x height` image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedMask {
    width: u32,
    height: u32,
    /// 32-bit words per row
    wpl: u32,
    words: Vec<u32>,
}

impl VisitedMask {
    /// Create an all-clear mask.
    pub fn new(width: u32, height: u32) -> Self {
        let wpl = width.div_ceil(32);
        Self {
            width,
            height,
            wpl,
            words: vec![0u32; wpl as usize * height as usize],
        }
    }

    /// Mask width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn locate(&self, x: u32, y: u32) -> (usize, u32) {
        let word = y as usize * self.wpl as usize + (x / 32) as usize;
        (word, 31 - (x % 32))
    }

    /// Test the bit at (x, y).
    ///
    /// Coordinates outside the mask read as clear.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (word, bit) = self.locate(x, y);
        (self.words[word] >> bit) & 1 != 0
    }

    /// Set the bit at (x, y).
    ///
    /// Returns `true` if the bit was previously clear. Coordinates outside
    /// the mask are ignored and return `false`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (word, bit) = self.locate(x, y);
        let was_clear = (self.words[word] >> bit) & 1 == 0;
        self.words[word] |= 1 << bit;
        was_clear
    }

    /// Number of set bits.
    pub fn count(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// Check whether every coordinate is set.
    pub fn is_full(&self) -> bool {
        self.count() == u64::from(self.width) * u64::from(self.height)
    }
}
