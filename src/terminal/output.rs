//! `OutputBuffer`: Single-write output buffer for one frame of escape codes.

use crate::buffer::Color;
use crate::codec::{ansi, utf8};
use crate::layout::Point;
use std::io::Write;

/// UTF-8 for U+FFFD, written in place of glyphs that have no encoding.
const REPLACEMENT: &[u8] = "\u{FFFD}".as_bytes();

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then handed to the sink in a single
/// `write_all` to prevent terminal flickering.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Write one glyph as UTF-8.
    ///
    /// Values that are not Unicode scalar values are written as U+FFFD.
    pub fn write_glyph(&mut self, glyph: u32) {
        let mut bytes = [0; utf8::MAX_UTF8_LEN];
        match utf8::encode(glyph, &mut bytes) {
            Ok(len) => self.data.extend_from_slice(&bytes[..len]),
            Err(e) => {
                tracing::trace!(%e, "substituting replacement character");
                self.data.extend_from_slice(REPLACEMENT);
            }
        }
    }

    /// Move cursor to a 0-indexed cell.
    #[inline]
    pub fn cursor_move(&mut self, p: Point) {
        ansi::write_cursor_position(&mut self.data, p);
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(ansi::HIDE_CURSOR);
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(ansi::SHOW_CURSOR);
    }

    /// Set foreground color. `Color::Reset` resets every attribute.
    #[inline]
    pub fn set_fg(&mut self, color: Color) {
        self.data.extend_from_slice(ansi::foreground(color).as_bytes());
    }

    /// Set background color. `Color::Reset` resets every attribute.
    #[inline]
    pub fn set_bg(&mut self, color: Color) {
        self.data.extend_from_slice(ansi::background(color).as_bytes());
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(ansi::RESET);
    }

    /// Switch to the alternate screen.
    #[inline]
    pub fn enter_alt_screen(&mut self) {
        self.data.extend_from_slice(ansi::ENTER_ALT_SCREEN);
    }

    /// Return from the alternate screen.
    #[inline]
    pub fn leave_alt_screen(&mut self) {
        self.data.extend_from_slice(ansi::LEAVE_ALT_SCREEN);
    }

    /// Flush to a writer in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OutputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputBuffer")
            .field("len", &self.data.len())
            .finish()
    }
}
