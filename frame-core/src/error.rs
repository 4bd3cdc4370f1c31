//! Error types for frame operations

use std::io;
use thiserror::Error;

use crate::diff::Mismatch;
use crate::frame::{MAX_HEIGHT, MAX_WIDTH};

/// Frame error type
///
/// Everything except [`Error::Mismatch`] and [`Error::Io`] is a precondition
/// violation: the caller passed something the operation never accepts.
#[derive(Error, Debug)]
pub enum Error {
    /// 24-bit color value does not fit in 24 bits
    #[error("color value {0:#08X} does not fit in 24 bits")]
    ColorOutOfRange(u32),

    /// Packed pixel record does not fit in 16 bits
    #[error("packed color value {0:#X} does not fit in 16 bits")]
    PackedOutOfRange(u32),

    /// Frame width is zero or wider than the display
    #[error("frame width {0} is outside 1..={max}", max = MAX_WIDTH)]
    InvalidWidth(usize),

    /// Buffer length is empty, not a multiple of the width, or too tall
    #[error(
        "buffer of {len} pixels cannot form a frame of width {width} (at most {max} rows)",
        max = MAX_HEIGHT
    )]
    InvalidLength { len: usize, width: usize },

    /// 2-D coordinate outside the frame
    #[error("pixel ({x}, {y}) is out of bounds for a {width}x{height} frame")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Flat index outside the frame
    #[error("pixel index {index} is out of bounds for a frame of {len} pixels")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Requested sub-region is empty or does not fit in the frame
    #[error("region {width}x{height} at ({x}, {y}) does not fit in a {frame_width}x{frame_height} frame")]
    RegionOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        frame_width: usize,
        frame_height: usize,
    },

    /// Glyph has no palette color assigned
    #[error("unknown glyph {glyph:?} on pattern line {line}")]
    UnknownGlyph { glyph: String, line: usize },

    /// Pattern (or pattern line) has nothing to compare
    #[error("pattern is empty")]
    EmptyPattern,

    /// Pattern line is longer than a frame row
    #[error("pattern line {line} has {len} glyphs but the frame is {width} pixels wide")]
    PatternTooWide { line: usize, len: usize, width: usize },

    /// Pattern has more lines than the frame has rows
    #[error("pattern has {lines} lines but the frame is {height} pixels tall")]
    PatternTooTall { lines: usize, height: usize },

    /// Frames of different width cannot be compared
    #[error("cannot compare frames of width {left} and {right}")]
    WidthMismatch { left: usize, right: usize },

    /// Frame does not match the expected pattern or snapshot
    #[error("{0}")]
    Mismatch(Box<Mismatch>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// True for match failures, false for precondition and I/O errors.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Error::Mismatch(_))
    }

    /// The mismatch report, if this is a match failure.
    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Error::Mismatch(report) => Some(report),
            _ => None,
        }
    }
}

impl From<Mismatch> for Error {
    fn from(report: Mismatch) -> Self {
        Error::Mismatch(Box::new(report))
    }
}

/// Result type for frame operations
pub type Result<T> = std::result::Result<T, Error>;
