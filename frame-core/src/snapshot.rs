//! Frame assertions and snapshot persistence
//!
//! Snapshots capture a frame in the binary container so later runs can be
//! compared against it pixel by pixel. Given the same app and input, the
//! runtime must produce identical snapshots.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;

use crate::codec;
use crate::diff::compare_frames;
use crate::error::Result;
use crate::frame::Frame;
use crate::pattern::Pattern;
use crate::png;

impl Frame {
    /// Serialize into the binary container
    pub fn write<W: Write>(&self, w: W) -> Result<()> {
        codec::write(self, w)
    }

    /// Deserialize from the binary container
    pub fn read<R: Read>(r: R) -> Result<Frame> {
        codec::read(r)
    }

    /// Save as a binary snapshot file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(
            "saving {}x{} snapshot to {}",
            self.width(),
            self.height(),
            path.display()
        );
        self.write(BufWriter::new(File::create(path)?))
    }

    /// Load a binary snapshot file
    pub fn load(path: impl AsRef<Path>) -> Result<Frame> {
        let path = path.as_ref();
        debug!("loading snapshot from {}", path.display());
        Frame::read(BufReader::new(File::open(path)?))
    }

    /// Encode as PNG
    pub fn write_png<W: Write>(&self, w: W) -> Result<()> {
        png::write(self, w)
    }

    /// Save a PNG rendering of the frame
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("saving PNG to {}", path.display());
        self.write_png(BufWriter::new(File::create(path)?))
    }

    /// Assert that the frame matches an ASCII pattern.
    ///
    /// Malformed patterns fail with a precondition error before anything is
    /// compared; a mismatch fails with [`Error::Mismatch`](crate::Error::Mismatch).
    pub fn assert_pattern(&self, pattern: &str) -> Result<()> {
        Pattern::parse(pattern)?.check(self)
    }

    /// Assert that the frame matches the pattern stored in a text file
    pub fn assert_pattern_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.assert_pattern(&fs::read_to_string(path)?)
    }

    /// Assert that the frame is identical to a snapshot
    pub fn assert_snapshot(&self, expected: &Frame) -> Result<()> {
        compare_frames(self, expected)
    }

    /// Assert that the frame is identical to a binary snapshot stream
    pub fn assert_snapshot_reader<R: Read>(&self, r: R) -> Result<()> {
        self.assert_snapshot(&Frame::read(r)?)
    }

    /// Assert that the frame is identical to a binary snapshot file
    pub fn assert_snapshot_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.assert_snapshot(&Frame::load(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::error::Error;
    use std::io::{Cursor, Seek, SeekFrom};

    fn get_frame() -> Frame {
        #[rustfmt::skip]
        let buf = [
            0x00, 0x08, 0x10, 0x18,
            0x0800, 0x0808, 0x0810, 0x0818,
            0x1000, 0x1008, 0x1010, 0x1018,
        ];
        Frame::from_rgb24(&buf, 4).unwrap()
    }

    fn palette_frame() -> Frame {
        let buf = vec![
            Color::BLACK,
            Color::RED,
            Color::GREEN,
            Color::BLUE,
            Color::YELLOW,
            Color::WHITE,
        ];
        Frame::new(buf, 3).unwrap()
    }

    #[test]
    fn test_assert_snapshot_stream() {
        let good = get_frame();
        let mut bad = get_frame();
        bad.set(3, 0, Color::from_rgb24(0x66).unwrap()).unwrap();

        let mut snapshot = Cursor::new(Vec::new());
        good.write(&mut snapshot).unwrap();

        snapshot.seek(SeekFrom::Start(0)).unwrap();
        good.assert_snapshot_reader(&mut snapshot).unwrap();

        snapshot.seek(SeekFrom::Start(0)).unwrap();
        let err = bad.assert_snapshot_reader(&mut snapshot).unwrap_err();
        assert!(err.is_mismatch());
        assert_eq!(err.mismatch().unwrap().differing(), 1);
    }

    #[test]
    fn test_assert_pattern() {
        let f = palette_frame();
        f.assert_pattern("K").unwrap();
        f.assert_pattern("KRG\nBYW").unwrap();
        assert!(f.assert_pattern("B").unwrap_err().is_mismatch());
    }

    #[test]
    fn test_assert_pattern_reports_one_line() {
        let f = palette_frame();
        let err = f.assert_pattern("KRB\nBYW").unwrap_err();
        let report = err.mismatch().unwrap();
        assert_eq!(report.differing(), 1);
        assert_eq!(report.total(), 2);
        assert!(err.to_string().contains("1 of 2 lines differ"));
    }

    #[test]
    fn test_assert_pattern_preconditions() {
        let f = palette_frame();
        let err = f.assert_pattern("KRGB").unwrap_err();
        assert!(matches!(err, Error::PatternTooWide { .. }));
        assert!(!err.is_mismatch());
        // The bad glyph is on a line that would match otherwise.
        assert!(matches!(
            f.assert_pattern("KRB\nBY?"),
            Err(Error::UnknownGlyph { line: 2, .. })
        ));
        assert!(matches!(
            f.assert_pattern("K\nB\nK"),
            Err(Error::PatternTooTall { .. })
        ));
    }

    #[test]
    fn test_files() {
        let dir = tempfile::tempdir().unwrap();
        let f = get_frame();

        let bin = dir.path().join("frame.bin");
        f.save(&bin).unwrap();
        assert_eq!(Frame::load(&bin).unwrap(), f);
        f.assert_snapshot_file(&bin).unwrap();

        let png_path = dir.path().join("frame.png");
        f.save_png(&png_path).unwrap();
        assert_eq!(fs::read(&png_path).unwrap()[..8], png::SIGNATURE);

        let pattern = dir.path().join("frame.txt");
        fs::write(&pattern, "  KRG\n  BYW\n").unwrap();
        palette_frame().assert_pattern_file(&pattern).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = get_frame()
            .assert_snapshot_file(dir.path().join("nope.bin"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
