//! Default palette and pattern glyphs
//!
//! Firefly Zero apps draw with SWEETIE-16 by default
//! (https://lospec.com/palette-list/sweetie-16). The palette is a set of
//! `const` colors; the glyph table maps pattern characters onto them and is
//! read-only for the lifetime of the process.

use crate::color::Color;
use crate::error::{Error, Result};

impl Color {
    /// Black from the default palette: #1A1C2C
    pub const BLACK: Color = Color::from_rgb24_lossy(0x1A1C2C);
    /// Purple from the default palette: #5D275D
    pub const PURPLE: Color = Color::from_rgb24_lossy(0x5D275D);
    /// Red from the default palette: #B13E53
    pub const RED: Color = Color::from_rgb24_lossy(0xB13E53);
    /// Orange from the default palette: #EF7D57
    pub const ORANGE: Color = Color::from_rgb24_lossy(0xEF7D57);
    /// Yellow from the default palette: #FFCD75
    pub const YELLOW: Color = Color::from_rgb24_lossy(0xFFCD75);
    /// Light green from the default palette: #A7F070
    pub const LIGHT_GREEN: Color = Color::from_rgb24_lossy(0xA7F070);
    /// Green from the default palette: #38B764
    pub const GREEN: Color = Color::from_rgb24_lossy(0x38B764);
    /// Dark green from the default palette: #257179
    pub const DARK_GREEN: Color = Color::from_rgb24_lossy(0x257179);
    /// Dark blue from the default palette: #29366F
    pub const DARK_BLUE: Color = Color::from_rgb24_lossy(0x29366F);
    /// Blue from the default palette: #3B5DC9
    pub const BLUE: Color = Color::from_rgb24_lossy(0x3B5DC9);
    /// Light blue from the default palette: #41A6F6
    pub const LIGHT_BLUE: Color = Color::from_rgb24_lossy(0x41A6F6);
    /// Cyan from the default palette: #73EFF7
    pub const CYAN: Color = Color::from_rgb24_lossy(0x73EFF7);
    /// White from the default palette: #F4F4F4
    pub const WHITE: Color = Color::from_rgb24_lossy(0xF4F4F4);
    /// Light gray from the default palette: #94B0C2
    pub const LIGHT_GRAY: Color = Color::from_rgb24_lossy(0x94B0C2);
    /// Gray from the default palette: #566C86
    pub const GRAY: Color = Color::from_rgb24_lossy(0x566C86);
    /// Dark gray from the default palette: #333C57
    pub const DARK_GRAY: Color = Color::from_rgb24_lossy(0x333C57);

    // Extreme colors, useful for debugging. No glyphs.

    /// Pure black: #000000
    pub const TRUE_BLACK: Color = Color::from_rgb24_lossy(0x000000);
    /// Pure white: #FFFFFF
    pub const TRUE_WHITE: Color = Color::from_rgb24_lossy(0xFFFFFF);
    /// Pure red: #FF0000
    pub const TRUE_RED: Color = Color::from_rgb24_lossy(0xFF0000);
    /// Pure green: #00FF00
    pub const TRUE_GREEN: Color = Color::from_rgb24_lossy(0x00FF00);
    /// Pure blue: #0000FF
    pub const TRUE_BLUE: Color = Color::from_rgb24_lossy(0x0000FF);
}

/// Every named color, in palette order
pub static NAMED: [(&str, Color); 21] = [
    ("BLACK", Color::BLACK),
    ("PURPLE", Color::PURPLE),
    ("RED", Color::RED),
    ("ORANGE", Color::ORANGE),
    ("YELLOW", Color::YELLOW),
    ("LIGHT_GREEN", Color::LIGHT_GREEN),
    ("GREEN", Color::GREEN),
    ("DARK_GREEN", Color::DARK_GREEN),
    ("DARK_BLUE", Color::DARK_BLUE),
    ("BLUE", Color::BLUE),
    ("LIGHT_BLUE", Color::LIGHT_BLUE),
    ("CYAN", Color::CYAN),
    ("WHITE", Color::WHITE),
    ("LIGHT_GRAY", Color::LIGHT_GRAY),
    ("GRAY", Color::GRAY),
    ("DARK_GRAY", Color::DARK_GRAY),
    ("TRUE_BLACK", Color::TRUE_BLACK),
    ("TRUE_WHITE", Color::TRUE_WHITE),
    ("TRUE_RED", Color::TRUE_RED),
    ("TRUE_GREEN", Color::TRUE_GREEN),
    ("TRUE_BLUE", Color::TRUE_BLUE),
];

/// Pattern glyphs. The first glyph listed for a color is its canonical one.
pub static GLYPHS: [(&str, Color); 27] = [
    ("K", Color::BLACK),
    ("P", Color::PURPLE),
    ("R", Color::RED),
    ("O", Color::ORANGE),
    ("Y", Color::YELLOW),
    ("g", Color::LIGHT_GREEN),
    ("G", Color::GREEN),
    ("D", Color::DARK_GREEN),
    ("d", Color::DARK_BLUE),
    ("B", Color::BLUE),
    ("b", Color::LIGHT_BLUE),
    ("C", Color::CYAN),
    ("W", Color::WHITE),
    ("◔", Color::LIGHT_GRAY),
    ("◑", Color::GRAY),
    ("◕", Color::DARK_GRAY),
    // Gray-scale aliases. In a dark theme white looks black and vice versa.
    ("○", Color::WHITE),
    ("●", Color::BLACK),
    // Emoji show the actual color, but many terminals render them two
    // cells wide, so diffs containing them are misaligned.
    ("🖤", Color::BLACK),
    ("💜", Color::PURPLE),
    ("♥\u{fe0f}", Color::RED),
    ("🧡", Color::ORANGE),
    ("💛", Color::YELLOW),
    ("💚", Color::GREEN),
    ("💙", Color::BLUE),
    ("🤍", Color::WHITE),
    ("🩶", Color::GRAY),
];

/// Glyph matching any color
pub const WILDCARD: &str = ".";

/// A resolved pattern glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// `.`, matches every color
    Wildcard,
    /// Matches exactly one color
    Color(Color),
}

impl Glyph {
    /// Resolve a single glyph
    pub fn parse(glyph: &str) -> Result<Self> {
        Self::parse_at(glyph, 1)
    }

    pub(crate) fn parse_at(glyph: &str, line: usize) -> Result<Self> {
        if glyph == WILDCARD {
            return Ok(Glyph::Wildcard);
        }
        GLYPHS
            .iter()
            .find(|(g, _)| *g == glyph)
            .map(|&(_, color)| Glyph::Color(color))
            .ok_or_else(|| Error::UnknownGlyph {
                glyph: glyph.to_string(),
                line,
            })
    }

    pub fn matches(self, color: Color) -> bool {
        match self {
            Glyph::Wildcard => true,
            Glyph::Color(expected) => expected == color,
        }
    }
}

pub(crate) fn name_of(color: Color) -> Option<&'static str> {
    NAMED
        .iter()
        .find(|(_, c)| *c == color)
        .map(|&(name, _)| name)
}

pub(crate) fn glyph_of(color: Color) -> Option<&'static str> {
    GLYPHS
        .iter()
        .find(|(_, c)| *c == color)
        .map(|&(glyph, _)| glyph)
}
