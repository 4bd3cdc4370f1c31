//! Binary snapshot container
//!
//! Layout, all little-endian:
//!
//! ```text
//! [u16 width][u32 pixel]*
//! ```
//!
//! Each pixel record holds the packed framebuffer value. There is no header,
//! trailer or checksum; the height follows from the record count. A trailing
//! partial record is treated as the end of the stream.

use std::io::{self, Read, Write};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::frame::{Frame, MAX_HEIGHT, MAX_WIDTH};

const RECORD_LEN: usize = 4;

/// Serialize a frame
pub fn write<W: Write>(frame: &Frame, mut w: W) -> Result<()> {
    let width = u16::try_from(frame.width()).map_err(|_| Error::InvalidWidth(frame.width()))?;
    w.write_all(&width.to_le_bytes())?;
    for color in frame {
        w.write_all(&u32::from(color.rgb16()).to_le_bytes())?;
    }
    w.flush()?;
    Ok(())
}

/// Deserialize a frame
pub fn read<R: Read>(mut r: R) -> Result<Frame> {
    let mut width = [0u8; 2];
    r.read_exact(&mut width)?;
    let width = usize::from(u16::from_le_bytes(width));
    if width == 0 || width > MAX_WIDTH {
        return Err(Error::InvalidWidth(width));
    }

    // Stop reading as soon as the stream holds more than a full screen.
    let max_len = width * MAX_HEIGHT;
    let mut pixels = Vec::new();
    let mut record = [0u8; RECORD_LEN];
    while fill(&mut r, &mut record)? == RECORD_LEN {
        if pixels.len() == max_len {
            return Err(Error::InvalidLength {
                len: max_len + 1,
                width,
            });
        }
        let raw = u32::from_le_bytes(record);
        let packed = u16::try_from(raw).map_err(|_| Error::PackedOutOfRange(raw))?;
        pixels.push(Color::from_rgb16(packed));
    }
    Frame::new(pixels, width)
}

/// Read until `buf` is full or the stream ends, returning the bytes read
fn fill<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
