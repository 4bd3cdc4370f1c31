//! Named snapshots on disk
//!
//! A store maps snapshot names to `<dir>/<name>.bin`. In update mode frames
//! are recorded, otherwise they are compared against the recording.

use std::fs;
use std::path::PathBuf;

use frame_core::Frame;

use crate::config::Config;
use crate::error::{Error, Result};

/// What an assertion did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The frame matched the recorded snapshot
    Matched,
    /// The snapshot was (re)recorded
    Updated,
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    config: Config,
}

impl SnapshotStore {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Store configured from the environment
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Binary snapshot file for `name`
    pub fn path(&self, name: &str) -> PathBuf {
        self.config.snapshot_dir.join(format!("{name}.bin"))
    }

    /// PNG rendering for `name`
    pub fn png_path(&self, name: &str) -> PathBuf {
        self.config.snapshot_dir.join(format!("{name}.png"))
    }

    /// Record the frame or compare it against the recording
    pub fn assert(&self, name: &str, frame: &Frame) -> Result<Outcome> {
        if self.config.update {
            self.record(name, frame)?;
            return Ok(Outcome::Updated);
        }

        let path = self.path(name);
        if !path.exists() {
            return Err(Error::MissingSnapshot(path));
        }
        let expected = Frame::load(&path)?;
        match frame.assert_snapshot(&expected) {
            Ok(()) => {
                tracing::debug!(snapshot = name, "snapshot matched");
                Ok(Outcome::Matched)
            }
            Err(frame_core::Error::Mismatch(report)) => {
                tracing::warn!(
                    snapshot = name,
                    differing = report.differing(),
                    "snapshot mismatch"
                );
                let report = (*report).with_color(self.config.color);
                Err(frame_core::Error::from(report).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn record(&self, name: &str, frame: &Frame) -> Result<()> {
        fs::create_dir_all(&self.config.snapshot_dir)?;
        let path = self.path(name);
        frame.save(&path)?;
        if self.config.write_png {
            frame.save_png(self.png_path(name))?;
        }
        tracing::info!(snapshot = name, path = %path.display(), "snapshot recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_core::Color;

    fn frame() -> Frame {
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

    fn store(dir: &std::path::Path, update: bool) -> SnapshotStore {
        SnapshotStore::new(Config {
            snapshot_dir: dir.join("snapshots"),
            update,
            write_png: true,
            color: false,
        })
    }

    #[test]
    fn test_record_then_match() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = store(dir.path(), true);
        assert_eq!(recorder.assert("menu", &frame()).unwrap(), Outcome::Updated);
        assert!(recorder.path("menu").exists());
        assert!(recorder.png_path("menu").exists());

        let checker = store(dir.path(), false);
        assert_eq!(checker.assert("menu", &frame()).unwrap(), Outcome::Matched);
    }

    #[test]
    fn test_missing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let checker = store(dir.path(), false);
        match checker.assert("nope", &frame()) {
            Err(Error::MissingSnapshot(path)) => assert_eq!(path, checker.path("nope")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_mismatch_without_color() {
        let dir = tempfile::tempdir().unwrap();
        store(dir.path(), true).assert("menu", &frame()).unwrap();

        let mut changed = frame();
        changed.set(2, 0, Color::BLUE).unwrap();
        let err = store(dir.path(), false).assert("menu", &changed).unwrap_err();
        assert!(err.is_mismatch());
        let report = err.to_string();
        assert!(report.contains("1 of 2 lines differ"));
        assert!(!report.contains('\x1b'));
    }

    #[test]
    fn test_no_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = store(dir.path(), true).config().clone();
        config.write_png = false;
        let recorder = SnapshotStore::new(config);
        recorder.assert("menu", &frame()).unwrap();
        assert!(recorder.path("menu").exists());
        assert!(!recorder.png_path("menu").exists());
    }
}
