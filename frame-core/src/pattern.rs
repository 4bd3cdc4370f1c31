//! ASCII-art frame patterns
//!
//! A pattern describes the expected frame one row per line:
//!
//! ```text
//! K R G
//! B Y .
//! ```
//!
//! All whitespace is ignored, so rows may be indented and spaced out. Blank
//! lines are skipped. Each remaining glyph is an extended grapheme cluster,
//! which lets multi-code-point emoji stand for a single pixel. A line may be
//! shorter than the row it checks; the rest of the row is not constrained.

use log::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::color::Color;
use crate::diff::{LineDiff, Mismatch};
use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::palette::Glyph;

/// One non-blank pattern line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternLine {
    /// 1-based line number in the pattern source
    pub number: usize,
    /// The line with whitespace removed
    pub text: String,
    /// Resolved glyphs
    pub glyphs: Vec<Glyph>,
}

impl PatternLine {
    fn parse(raw: &str, number: usize) -> Result<Option<Self>> {
        let text = strip_whitespace(raw);
        if text.is_empty() {
            return Ok(None);
        }
        let glyphs = text
            .graphemes(true)
            .map(|g| Glyph::parse_at(g, number))
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(Self {
            number,
            text,
            glyphs,
        }))
    }

    /// Number of pixels the line checks
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Position of the first pixel that does not match, if any
    pub fn first_difference(&self, row: &[Color]) -> Option<usize> {
        self.glyphs
            .iter()
            .zip(row)
            .position(|(glyph, &color)| !glyph.matches(color))
    }

    /// Check a row's prefix against the line
    pub fn matches(&self, row: &[Color]) -> bool {
        self.first_difference(row).is_none()
    }
}

/// A parsed pattern with every glyph resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    lines: Vec<PatternLine>,
}

impl Pattern {
    /// Parse a pattern.
    ///
    /// Unknown glyphs are reported here, before any frame is compared.
    pub fn parse(source: &str) -> Result<Self> {
        let mut lines = Vec::new();
        for (i, raw) in source.lines().enumerate() {
            if let Some(line) = PatternLine::parse(raw, i + 1)? {
                lines.push(line);
            }
        }
        if lines.is_empty() {
            return Err(Error::EmptyPattern);
        }
        trace!("parsed pattern with {} lines", lines.len());
        Ok(Self {
            source: source.to_string(),
            lines,
        })
    }

    /// Non-blank lines, top to bottom
    pub fn lines(&self) -> &[PatternLine] {
        &self.lines
    }

    /// The pattern as it was written
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Ensure every line fits the frame
    fn validate(&self, frame: &Frame) -> Result<()> {
        if self.lines.len() > frame.height() {
            return Err(Error::PatternTooTall {
                lines: self.lines.len(),
                height: frame.height(),
            });
        }
        match self.lines.iter().find(|line| line.len() > frame.width()) {
            Some(line) => Err(Error::PatternTooWide {
                line: line.number,
                len: line.len(),
                width: frame.width(),
            }),
            None => Ok(()),
        }
    }

    /// Check the frame, returning whether every line matches
    pub fn matches(&self, frame: &Frame) -> Result<bool> {
        self.validate(frame)?;
        Ok(self
            .lines
            .iter()
            .zip(frame.rows())
            .all(|(line, row)| line.matches(row)))
    }

    /// Check the frame, reporting every compared line on mismatch
    pub fn check(&self, frame: &Frame) -> Result<()> {
        self.validate(frame)?;
        let diffs: Vec<LineDiff> = self
            .lines
            .iter()
            .zip(frame.rows())
            .enumerate()
            .map(|(y, (line, row))| LineDiff {
                row: y,
                actual: Frame::render_row(&row[..line.len()]),
                expected: line.text.clone(),
                first_difference: line.first_difference(row),
                colors: None,
            })
            .collect();

        if diffs.iter().all(LineDiff::is_equal) {
            return Ok(());
        }
        Err(Mismatch::new(diffs, self.source.clone()).into())
    }
}

/// Check a single row against one pattern line.
///
/// Fails with a precondition error if the line is empty, longer than the
/// row, or contains an unknown glyph.
pub fn check_line(row: &[Color], line: &str) -> Result<bool> {
    let line = PatternLine::parse(line, 1)?.ok_or(Error::EmptyPattern)?;
    if line.len() > row.len() {
        return Err(Error::PatternTooWide {
            line: 1,
            len: line.len(),
            width: row.len(),
        });
    }
    Ok(line.matches(row))
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
