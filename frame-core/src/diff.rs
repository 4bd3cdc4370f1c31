//! Line-level mismatch reports
//!
//! When a frame does not match, every compared row is listed next to what
//! was expected. Matching rows are printed green, differing rows red, so the
//! broken part stands out in a test runner's terminal output.

use std::fmt;

use log::debug;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::frame::Frame;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Comparison result for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiff {
    /// Row index in the frame
    pub row: usize,
    /// Row rendered as glyphs, truncated to the expected length
    pub actual: String,
    /// Expected glyphs
    pub expected: String,
    /// Column of the first differing pixel
    pub first_difference: Option<usize>,
    /// Actual and expected pixel at `first_difference`, when both exist.
    /// Glyph rows cannot tell colors outside the palette apart.
    pub colors: Option<(Color, Color)>,
}

impl LineDiff {
    pub fn is_equal(&self) -> bool {
        self.first_difference.is_none()
    }
}

/// Aggregate failure for a pattern or snapshot comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    lines: Vec<LineDiff>,
    pattern: String,
    color: bool,
}

impl Mismatch {
    pub fn new(lines: Vec<LineDiff>, pattern: String) -> Self {
        let report = Self {
            lines,
            pattern,
            color: true,
        };
        debug!(
            "frame mismatch: {} of {} lines differ",
            report.differing(),
            report.total()
        );
        report
    }

    /// Toggle ANSI colors in the rendered report
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Number of rows that differ
    pub fn differing(&self) -> usize {
        self.lines.iter().filter(|l| !l.is_equal()).count()
    }

    /// Number of rows compared
    pub fn total(&self) -> usize {
        self.lines.len()
    }

    /// Every compared row
    pub fn lines(&self) -> &[LineDiff] {
        &self.lines
    }

    /// The expectation that failed
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn paint(&self, f: &mut fmt::Formatter<'_>, code: &str, text: &str) -> fmt::Result {
        if self.color {
            write!(f, "{code}{text}{RESET}")
        } else {
            f.write_str(text)
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "frame mismatch: {} of {} lines differ",
            self.differing(),
            self.total()
        )?;
        for line in &self.lines {
            let text = match (line.first_difference, line.colors) {
                (None, _) => format!("{:>4}: {} == {}", line.row, line.actual, line.expected),
                (Some(x), None) => format!(
                    "{:>4}: {} != {}  (x={x})",
                    line.row, line.actual, line.expected
                ),
                (Some(x), Some((act, exp))) => format!(
                    "{:>4}: {} != {}  (x={x}: {} != {})",
                    line.row,
                    line.actual,
                    line.expected,
                    act.to_hex(),
                    exp.to_hex()
                ),
            };
            let code = if line.is_equal() { GREEN } else { RED };
            self.paint(f, code, &text)?;
            writeln!(f)?;
        }
        writeln!(f, "expected:")?;
        for line in self.pattern.lines().filter(|l| !l.trim().is_empty()) {
            writeln!(f, "    {}", line.trim())?;
        }
        Ok(())
    }
}

/// Compare a frame with a stored snapshot pixel by pixel.
///
/// Frames of a different width cannot be compared. Rows missing on either
/// side count as differing.
pub fn compare_frames(actual: &Frame, expected: &Frame) -> Result<()> {
    if actual.width() != expected.width() {
        return Err(Error::WidthMismatch {
            left: actual.width(),
            right: expected.width(),
        });
    }
    if actual == expected {
        return Ok(());
    }

    let height = actual.height().max(expected.height());
    let lines = (0..height)
        .map(|y| {
            let act = actual.row(y).unwrap_or(&[]);
            let exp = expected.row(y).unwrap_or(&[]);
            let first_difference = if act.len() != exp.len() {
                Some(0)
            } else {
                act.iter().zip(exp).position(|(a, e)| a != e)
            };
            let colors = first_difference.and_then(|x| Some((*act.get(x)?, *exp.get(x)?)));
            LineDiff {
                row: y,
                actual: Frame::render_row(act),
                expected: Frame::render_row(exp),
                first_difference,
                colors,
            }
        })
        .collect();
    Err(Mismatch::new(lines, expected.to_string()).into())
}
