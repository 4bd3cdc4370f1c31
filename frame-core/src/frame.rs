//! Frame buffer model
//!
//! A frame is the flat pixel dump of the display stamped with its width.
//! Pixels are stored in scanline order (row 0 is top, left to right).

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::ops::{Index, Range};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::pattern::Pattern;

/// Display width in pixels
pub const WIDTH: usize = 240;
/// Display height in pixels
pub const HEIGHT: usize = 160;

/// Widest frame accepted
pub const MAX_WIDTH: usize = WIDTH;
/// Tallest frame accepted
pub const MAX_HEIGHT: usize = HEIGHT;

/// Glyph used when rendering a color that has none
pub const UNNAMED_GLYPH: char = '?';

/// A rectangular grid of pixels
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Pixels (row-major)
    pixels: Vec<Color>,
    /// Number of columns
    width: usize,
}

impl Frame {
    /// Wrap a pixel buffer.
    ///
    /// The width must be in `1..=MAX_WIDTH` and the buffer must hold between
    /// one and `MAX_HEIGHT` whole rows.
    pub fn new(pixels: Vec<Color>, width: usize) -> Result<Self> {
        if width == 0 || width > MAX_WIDTH {
            return Err(Error::InvalidWidth(width));
        }
        let len = pixels.len();
        if len == 0 || len % width != 0 || len / width > MAX_HEIGHT {
            return Err(Error::InvalidLength { len, width });
        }
        Ok(Self { pixels, width })
    }

    /// Build from the runtime's raw packed framebuffer
    pub fn from_rgb16(buf: &[u16], width: usize) -> Result<Self> {
        Self::new(buf.iter().copied().map(Color::from_rgb16).collect(), width)
    }

    /// Build from `0xRRGGBB` values
    pub fn from_rgb24(buf: &[u32], width: usize) -> Result<Self> {
        let pixels = buf
            .iter()
            .map(|&raw| Color::from_rgb24(raw))
            .collect::<Result<Vec<_>>>()?;
        Self::new(pixels, width)
    }

    /// Get number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get number of rows
    pub fn height(&self) -> usize {
        self.pixels.len() / self.width
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false: a frame has at least one pixel
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels in scanline order
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Rows, top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Color]> + '_ {
        self.pixels.chunks_exact(self.width)
    }

    /// Get a single row, returning None if out of bounds
    pub fn row(&self, y: usize) -> Option<&[Color]> {
        self.rows().nth(y)
    }

    /// Pixel at column `x`, row `y`
    pub fn at(&self, x: usize, y: usize) -> Result<Color> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Pixel at a flat scanline index
    pub fn at_index(&self, index: usize) -> Result<Color> {
        self.pixels
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.pixels.len(),
            })
    }

    /// Overwrite one pixel.
    ///
    /// Frames are otherwise immutable. This exists so tests can corrupt a
    /// known-good frame and check that a comparison fails.
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        let i = self.offset(x, y)?;
        self.pixels[i] = color;
        Ok(())
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height() {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height(),
            });
        }
        Ok(y * self.width + x)
    }

    /// Copy a rectangle into a new frame.
    ///
    /// The rectangle must be non-empty and lie inside this frame.
    pub fn sub(&self, x: usize, y: usize, width: usize, height: usize) -> Result<Frame> {
        let fits_x = x.checked_add(width).is_some_and(|end| end <= self.width);
        let fits_y = y.checked_add(height).is_some_and(|end| end <= self.height());
        if width == 0 || height == 0 || !fits_x || !fits_y {
            return Err(Error::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                frame_width: self.width,
                frame_height: self.height(),
            });
        }

        let mut pixels = Vec::with_capacity(width * height);
        for row in self.rows().skip(y).take(height) {
            pixels.extend_from_slice(&row[x..x + width]);
        }
        Frame::new(pixels, width)
    }

    /// Copy the half-open rectangle `start..end`, corners given as `(x, y)`
    pub fn slice(&self, range: Range<(usize, usize)>) -> Result<Frame> {
        let (x0, y0) = range.start;
        let (x1, y1) = range.end;
        self.sub(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }

    /// How many pixels of each color the frame has
    pub fn counts(&self) -> HashMap<Color, usize> {
        let mut counts = HashMap::new();
        for &color in &self.pixels {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct colors present in the frame
    pub fn colors(&self) -> HashSet<Color> {
        self.pixels.iter().copied().collect()
    }

    /// Iterate over pixels in scanline order
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Color>> {
        self.pixels.iter().copied()
    }

    /// Check if any pixel has the given color
    pub fn contains(&self, color: Color) -> bool {
        self.pixels.contains(&color)
    }

    /// Check if any pixel has the given `0xRRGGBB` color, in device precision
    pub fn contains_rgb24(&self, raw: u32) -> Result<bool> {
        Ok(self.contains(Color::from_rgb24(raw)?))
    }

    /// Compare with another frame, rejecting frames of a different width
    pub fn try_eq(&self, other: &Frame) -> Result<bool> {
        if self.width != other.width {
            return Err(Error::WidthMismatch {
                left: self.width,
                right: other.width,
            });
        }
        Ok(self.pixels == other.pixels)
    }

    /// Check the frame against a pattern without building a report
    pub fn matches_pattern(&self, pattern: &str) -> Result<bool> {
        Pattern::parse(pattern)?.matches(self)
    }

    /// Render one row as glyphs
    pub fn render_row(row: &[Color]) -> String {
        row.iter()
            .map(|c| match c.glyph() {
                Some(glyph) => glyph.to_string(),
                None => UNNAMED_GLYPH.to_string(),
            })
            .collect()
    }
}

impl Index<usize> for Frame {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.pixels[index]
    }
}

impl Index<(usize, usize)> for Frame {
    type Output = Color;

    fn index(&self, (x, y): (usize, usize)) -> &Color {
        match self.offset(x, y) {
            Ok(i) => &self.pixels[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = Color;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Color>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Malformed patterns never match; `assert_pattern` reports them as errors.
impl PartialEq<str> for Frame {
    fn eq(&self, other: &str) -> bool {
        self.matches_pattern(other).unwrap_or(false)
    }
}

impl PartialEq<&str> for Frame {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", Frame::render_row(row))?;
        }
        Ok(())
    }
}
