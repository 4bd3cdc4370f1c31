//! Frame Core - Platform-independent frame model for visual snapshot tests
//!
//! This crate provides the data structures and matching logic behind
//! Firefly Zero app tests:
//! - Color codec for the device's packed RGB565 framebuffer
//! - Default palette and pattern glyphs
//! - Frame buffer with 2-D addressing and sub-region extraction
//! - ASCII-art pattern matching with line-level diff reports
//! - Binary snapshot container and a minimal PNG encoder
//!
//! Everything here is deterministic and free of environment access: the
//! same frame and expectation always produce the same result.

pub mod codec;
mod color;
pub mod diff;
mod error;
mod frame;
pub mod palette;
pub mod pattern;
pub mod png;
mod snapshot;

pub use color::{Color, RGB24_MAX};
pub use diff::{LineDiff, Mismatch};
pub use error::{Error, Result};
pub use frame::{Frame, HEIGHT, MAX_HEIGHT, MAX_WIDTH, UNNAMED_GLYPH, WIDTH};
pub use palette::Glyph;
pub use pattern::{check_line, Pattern};
