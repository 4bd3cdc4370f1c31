//! Color representation for frame pixels
//!
//! The Firefly Zero framebuffer stores every pixel as RGB565 with all bits
//! inverted. [`Color`] keeps exactly that packed value, so comparisons happen
//! in the precision the device renders in:
//! - red and blue keep their top 5 bits, green its top 6 bits
//! - unpacking shifts the channels back to 8 bits, low bits stay zero
//! - converting an arbitrary 24-bit color is lossy by design of the hardware

use std::fmt;

use crate::error::{Error, Result};
use crate::palette::{self, Glyph};

/// Largest value accepted by [`Color::from_rgb24`].
pub const RGB24_MAX: u32 = 0xFF_FFFF;

/// A pixel color in the device's packed, bit-inverted RGB565 format
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u16);

impl Color {
    /// Pack 8-bit channels, dropping the bits RGB565 cannot hold
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        let r5 = (r >> 3) as u16;
        let g6 = (g >> 2) as u16;
        let b5 = (b >> 3) as u16;
        Color(!((r5 << 11) | (g6 << 5) | b5))
    }

    /// Convert a `0xRRGGBB` value
    pub fn from_rgb24(raw: u32) -> Result<Self> {
        if raw > RGB24_MAX {
            return Err(Error::ColorOutOfRange(raw));
        }
        Ok(Self::from_rgb24_lossy(raw))
    }

    /// Wrap a packed value exactly as the runtime's framebuffer holds it
    pub const fn from_rgb16(packed: u16) -> Self {
        Color(packed)
    }

    /// The packed framebuffer value
    pub const fn rgb16(self) -> u16 {
        self.0
    }

    pub(crate) const fn from_rgb24_lossy(raw: u32) -> Self {
        Self::new((raw >> 16) as u8, (raw >> 8) as u8, raw as u8)
    }

    const fn unpacked(self) -> u16 {
        !self.0
    }

    /// Red channel, 0 (none) to 248 (full)
    pub const fn r(self) -> u8 {
        (((self.unpacked() >> 11) & 0x1F) << 3) as u8
    }

    /// Green channel, 0 (none) to 252 (full)
    pub const fn g(self) -> u8 {
        (((self.unpacked() >> 5) & 0x3F) << 2) as u8
    }

    /// Blue channel, 0 (none) to 248 (full)
    pub const fn b(self) -> u8 {
        ((self.unpacked() & 0x1F) << 3) as u8
    }

    /// Unpacked color as `0xRRGGBB`
    pub const fn rgb24(self) -> u32 {
        ((self.r() as u32) << 16) | ((self.g() as u32) << 8) | self.b() as u32
    }

    /// Channels scaled to the [0.0, 1.0] range
    pub fn rgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r()) / 255.0,
            f64::from(self.g()) / 255.0,
            f64::from(self.b()) / 255.0,
        )
    }

    /// Hue, lightness and saturation, each in [0.0, 1.0]
    pub fn to_hls(self) -> (f64, f64, f64) {
        let (r, g, b) = self.rgb();
        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);
        let sum = maxc + minc;
        let range = maxc - minc;
        let l = sum / 2.0;
        if range == 0.0 {
            return (0.0, l, 0.0);
        }
        let s = if l <= 0.5 {
            range / sum
        } else {
            range / (2.0 - maxc - minc)
        };
        (hue(r, g, b, maxc, range), l, s)
    }

    /// Hue, saturation and value, each in [0.0, 1.0]
    pub fn to_hsv(self) -> (f64, f64, f64) {
        let (r, g, b) = self.rgb();
        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);
        let range = maxc - minc;
        if range == 0.0 {
            return (0.0, 0.0, maxc);
        }
        (hue(r, g, b, maxc, range), range / maxc, maxc)
    }

    /// NTSC YIQ: luma in [0.0, 1.0], chroma components signed
    pub fn to_yiq(self) -> (f64, f64, f64) {
        let (r, g, b) = self.rgb();
        let y = 0.30 * r + 0.59 * g + 0.11 * b;
        let i = 0.74 * (r - y) - 0.27 * (b - y);
        let q = 0.48 * (r - y) + 0.41 * (b - y);
        (y, i, q)
    }

    /// Symbolic name for colors of the default palette
    pub fn name(self) -> Option<&'static str> {
        palette::name_of(self)
    }

    /// Canonical pattern glyph, if the color has one
    pub fn glyph(self) -> Option<&'static str> {
        palette::glyph_of(self)
    }

    /// Unpacked color as `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.rgb24())
    }

    /// Compare against a pattern glyph, rejecting glyphs outside the palette
    pub fn matches_glyph(self, glyph: &str) -> Result<bool> {
        Ok(Glyph::parse(glyph)?.matches(self))
    }
}

fn hue(r: f64, g: f64, b: f64, maxc: f64, range: f64) -> f64 {
    let rc = (maxc - r) / range;
    let gc = (maxc - g) / range;
    let bc = (maxc - b) / range;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    (h / 6.0).rem_euclid(1.0)
}

/// Compares in device precision. Values above 24 bits are never equal to
/// any color; use [`Color::from_rgb24`] or [`Frame::contains_rgb24`] to get
/// [`Error::ColorOutOfRange`] for them instead.
///
/// [`Frame::contains_rgb24`]: crate::Frame::contains_rgb24
impl PartialEq<u32> for Color {
    fn eq(&self, other: &u32) -> bool {
        *other <= RGB24_MAX && *self == Color::from_rgb24_lossy(*other)
    }
}

impl PartialEq<Color> for u32 {
    fn eq(&self, other: &Color) -> bool {
        other == self
    }
}

// Unknown glyphs never match; use `matches_glyph` to surface them as errors.
impl PartialEq<str> for Color {
    fn eq(&self, other: &str) -> bool {
        self.matches_glyph(other).unwrap_or(false)
    }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<Color> for &str {
    fn eq(&self, other: &Color) -> bool {
        other == *self
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Color::{name}"),
            None => write!(f, "#{:06X}", self.rgb24()),
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(0x{:06X})", self.rgb24())
    }
}

impl From<u16> for Color {
    fn from(packed: u16) -> Self {
        Color::from_rgb16(packed)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.rgb16()
    }
}

impl TryFrom<u32> for Color {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self> {
        Color::from_rgb24(raw)
    }
}
