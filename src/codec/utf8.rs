//! UTF-8 encoder for raw 32-bit glyph values.
//!
//! Glyphs are stored as plain `u32` so that a buffer can hold whatever the
//! application writes; validity is only checked here, when bytes are produced.

use crate::error::{Error, Result};

/// Longest encoding of a single codepoint.
pub const MAX_UTF8_LEN: usize = 4;

const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;
const CODEPOINT_LIMIT: u32 = 0x11_0000;

/// Number of bytes needed to encode `c`.
///
/// Fails for values at or above `0x110000` and for UTF-16 surrogates.
pub fn encoded_len(c: u32) -> Result<usize> {
    match c {
        _ if SURROGATES.contains(&c) => Err(Error::EncodingOutOfRange(c)),
        0..0x80 => Ok(1),
        0x80..0x800 => Ok(2),
        0x800..0x1_0000 => Ok(3),
        0x1_0000..CODEPOINT_LIMIT => Ok(4),
        _ => Err(Error::EncodingOutOfRange(c)),
    }
}

/// Encode `c` into `out`, returning the number of bytes written.
#[allow(clippy::cast_possible_truncation)]
pub fn encode(c: u32, out: &mut [u8; MAX_UTF8_LEN]) -> Result<usize> {
    let len = encoded_len(c)?;
    match len {
        1 => out[0] = c as u8,
        2 => {
            out[0] = 0xC0 | (c >> 6) as u8;
            out[1] = 0x80 | (c & 0x3F) as u8;
        }
        3 => {
            out[0] = 0xE0 | (c >> 12) as u8;
            out[1] = 0x80 | ((c >> 6) & 0x3F) as u8;
            out[2] = 0x80 | (c & 0x3F) as u8;
        }
        _ => {
            out[0] = 0xF0 | (c >> 18) as u8;
            out[1] = 0x80 | ((c >> 12) & 0x3F) as u8;
            out[2] = 0x80 | ((c >> 6) & 0x3F) as u8;
            out[3] = 0x80 | (c & 0x3F) as u8;
        }
    }
    Ok(len)
}
