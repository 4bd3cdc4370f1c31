//! Error types for app tests

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::runtime::RuntimeError;

/// Test harness error type
#[derive(Error, Debug)]
pub enum Error {
    /// Frame, pattern or snapshot error
    #[error(transparent)]
    Frame(#[from] frame_core::Error),

    /// App lifecycle violated (start twice, update after exit, ...)
    #[error("invalid app state: {0}")]
    State(&'static str),

    /// The runtime failed
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    /// App ID is not `author.app`
    #[error("invalid app ID {0:?}: expected `author.app`, each part 1 to 16 characters")]
    InvalidId(String),

    /// Input value out of range
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Config file could not be parsed
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// No stored snapshot to compare against
    #[error("snapshot {} does not exist; set FIREFLY_UPDATE_SNAPSHOTS=1 to record it", .0.display())]
    MissingSnapshot(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// True if a frame did not match its pattern or snapshot
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Error::Frame(e) if e.is_mismatch())
    }
}

/// Result type for app tests
pub type Result<T> = std::result::Result<T, Error>;
