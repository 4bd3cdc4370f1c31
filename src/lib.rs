//! Visual snapshot testing for Firefly Zero apps
//!
//! Run an app, grab its framebuffer, and check it against an ASCII pattern
//! or a recorded snapshot:
//!
//! - `app`: app lifecycle on top of a [`Runtime`]
//! - `input`: pad and button input fed on every update
//! - `snapshot`: named snapshots on disk with a record mode
//! - `config`: snapshot settings from a file and the environment
//!
//! Frames, colors, patterns and the file formats live in `frame-core` and
//! are re-exported here.

pub mod app;
pub mod config;
mod error;
pub mod input;
mod logging;
pub mod runtime;
pub mod snapshot;

pub use app::{App, AppId};
pub use config::Config;
pub use error::{Error, Result};
pub use input::{Buttons, Input, Pad};
pub use logging::init_logging;
pub use runtime::{Runtime, RuntimeError};
pub use snapshot::{Outcome, SnapshotStore};

pub use frame_core::{
    check_line, Color, Frame, Glyph, Mismatch, Pattern, HEIGHT, RGB24_MAX, WIDTH,
};

/// Frame crate, for the codecs and lower-level matching API
pub use frame_core;
