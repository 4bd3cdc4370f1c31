//! Minimal PNG encoder
//!
//! Writes 8-bit truecolor images with exactly three chunks: `IHDR`, a single
//! `IDAT` holding the zlib stream of unfiltered scanlines, and `IEND`. There
//! is no decoder; PNG snapshots exist for humans to look at, comparisons use
//! the binary container.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};

use crate::error::Result;
use crate::frame::Frame;

/// File signature
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGB: u8 = 2;
const FILTER_NONE: u8 = 0;

/// CRC-32 as used by PNG chunks
pub fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(bytes);
    crc.sum()
}

fn write_chunk<W: Write>(w: &mut W, kind: &[u8; 4], data: &[u8]) -> Result<()> {
    let len = u32::try_from(data.len()).map_err(std::io::Error::other)?;
    w.write_all(&len.to_be_bytes())?;
    w.write_all(kind)?;
    w.write_all(data)?;
    let mut crc = Crc::new();
    crc.update(kind);
    crc.update(data);
    w.write_all(&crc.sum().to_be_bytes())?;
    Ok(())
}

fn header(frame: &Frame) -> [u8; 13] {
    let mut ihdr = [0u8; 13];
    // Frame dimensions are bounded by the display size.
    ihdr[0..4].copy_from_slice(&(frame.width() as u32).to_be_bytes());
    ihdr[4..8].copy_from_slice(&(frame.height() as u32).to_be_bytes());
    ihdr[8] = BIT_DEPTH;
    ihdr[9] = COLOR_TYPE_RGB;
    // Compression, filter and interlace methods stay 0.
    ihdr
}

/// Scanlines, each prefixed with filter type 0, three bytes per pixel
fn scanlines(frame: &Frame) -> Vec<u8> {
    let mut raw = Vec::with_capacity(frame.height() * (1 + 3 * frame.width()));
    for row in frame.rows() {
        raw.push(FILTER_NONE);
        for color in row {
            raw.extend_from_slice(&[color.r(), color.g(), color.b()]);
        }
    }
    raw
}

/// Encode a frame as PNG
pub fn write<W: Write>(frame: &Frame, mut w: W) -> Result<()> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&scanlines(frame))?;
    let idat = encoder.finish()?;

    w.write_all(&SIGNATURE)?;
    write_chunk(&mut w, b"IHDR", &header(frame))?;
    write_chunk(&mut w, b"IDAT", &idat)?;
    write_chunk(&mut w, b"IEND", &[])?;
    w.flush()?;
    Ok(())
}
