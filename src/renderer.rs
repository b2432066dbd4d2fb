//! Renderer: Owns the front and back buffers and writes frames to a sink.
//!
//! The application draws into [`Renderer::back_mut`], then calls
//! [`Renderer::render`]. Each render diffs back against front, writes the
//! resulting bytes to the sink in one write, and clears back for the next
//! frame. Front is never exposed mutably; it mirrors the terminal.

use crate::buffer::diff::{render_frame, DiffResult};
use crate::buffer::Buffer;
use crate::error::{Error, Result};
use crate::layout::Point;
use crate::terminal::OutputBuffer;
use std::io::Write;

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    /// Frames successfully written.
    pub frames: u64,
    /// Total cells redrawn across all frames.
    pub cells_changed: u64,
    /// Total bytes written to the sink.
    pub bytes_written: u64,
    /// Frames whose write to the sink failed.
    pub failed_frames: u64,
}

/// Diffing renderer over an output sink.
pub struct Renderer<W: Write> {
    /// What the terminal currently shows.
    front: Buffer,
    /// The frame being assembled.
    back: Buffer,
    /// Where the cursor rests between frames.
    cursor: Point,
    /// Pre-allocated output buffer.
    output: OutputBuffer,
    /// Destination for rendered bytes.
    sink: W,
    /// Whether the next frame must redraw every cell.
    needs_full_redraw: bool,
    /// Render statistics.
    stats: RenderStats,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer for a terminal of the given size.
    ///
    /// Both buffers start empty, matching a freshly cleared screen. The
    /// cursor is moved to the top-left cell and the sink is flushed.
    pub fn new(size: Point, mut sink: W) -> Result<Self> {
        let front = Buffer::new(size)?;
        let back = Buffer::new(size)?;

        let mut output = OutputBuffer::new();
        output.cursor_move(Point::ZERO);
        output.flush_to(&mut sink).map_err(Error::Sink)?;
        output.clear();

        tracing::debug!(width = size.x, height = size.y, "renderer created");
        Ok(Self {
            front,
            back,
            cursor: Point::ZERO,
            output,
            sink,
            needs_full_redraw: false,
            stats: RenderStats::default(),
        })
    }

    /// Size shared by both buffers.
    #[inline]
    pub const fn size(&self) -> Point {
        self.back.size()
    }

    /// The last rendered frame.
    #[inline]
    pub const fn front(&self) -> &Buffer {
        &self.front
    }

    /// The frame being assembled.
    #[inline]
    pub const fn back(&self) -> &Buffer {
        &self.back
    }

    /// Get a mutable reference to the frame being assembled.
    #[inline]
    pub fn back_mut(&mut self) -> &mut Buffer {
        &mut self.back
    }

    /// Where the cursor is left after each frame.
    #[inline]
    pub const fn cursor(&self) -> Point {
        self.cursor
    }

    /// Set where the cursor is left after each frame.
    pub fn set_cursor(&mut self, p: Point) -> Result<()> {
        if !self.back.contains(p) {
            return Err(Error::OutOfBounds {
                x: p.x,
                y: p.y,
                width: self.back.width(),
                height: self.back.height(),
            });
        }
        self.cursor = p;
        Ok(())
    }

    /// Forget what the terminal shows; the next frame redraws every cell.
    pub fn invalidate(&mut self) {
        self.needs_full_redraw = true;
    }

    /// Whether the next frame will redraw every cell.
    #[inline]
    pub const fn needs_full_redraw(&self) -> bool {
        self.needs_full_redraw
    }

    /// Render statistics so far.
    #[inline]
    pub const fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Render the back buffer and clear it.
    ///
    /// If the sink fails, the error is returned, the back buffer is kept so
    /// the frame can be retried, and the next frame redraws every cell since
    /// the terminal may hold a partial frame.
    pub fn render(&mut self) -> Result<DiffResult> {
        let _span = tracing::trace_span!("render").entered();

        self.output.clear();
        let result = render_frame(
            &mut self.front,
            &self.back,
            self.cursor,
            self.needs_full_redraw,
            &mut self.output,
        );

        if let Err(e) = self.output.flush_to(&mut self.sink) {
            tracing::warn!(%e, bytes = result.bytes, "frame write failed, scheduling full redraw");
            self.stats.failed_frames += 1;
            self.needs_full_redraw = true;
            return Err(Error::Sink(e));
        }

        self.needs_full_redraw = false;
        self.back.clear();

        self.stats.frames += 1;
        self.stats.cells_changed += result.cells_changed as u64;
        self.stats.bytes_written += result.bytes as u64;
        tracing::debug!(
            cells = result.cells_changed,
            moves = result.cursor_moves,
            colors = result.color_changes,
            bytes = result.bytes,
            "frame rendered"
        );

        Ok(result)
    }

    /// Get a reference to the sink.
    #[inline]
    pub const fn sink(&self) -> &W {
        &self.sink
    }

    /// Get a mutable reference to the sink.
    #[inline]
    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Consume the renderer, returning the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

impl<W: Write> std::fmt::Debug for Renderer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("size", &self.size())
            .field("cursor", &self.cursor)
            .field("needs_full_redraw", &self.needs_full_redraw)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Attributes, Color};
    use std::io;

    fn renderer(width: i16, height: i16) -> Renderer<Vec<u8>> {
        let mut renderer = Renderer::new(Point::new(width, height), Vec::new()).unwrap();
        renderer.sink_mut().clear();
        renderer
    }

    /// Sink that fails every write after the first `remaining` succeed.
    struct FlakySink {
        remaining: usize,
        written: Vec<u8>,
    }

    impl Write for FlakySink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.remaining -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_new_homes_cursor() {
        let renderer = Renderer::new(Point::new(10, 4), Vec::new()).unwrap();
        assert_eq!(renderer.sink(), b"\x1b[1;1H");
        assert_eq!(renderer.front().size(), renderer.back().size());
    }

    #[test]
    fn test_new_rejects_negative_size() {
        assert!(matches!(
            Renderer::new(Point::new(-3, 4), Vec::new()),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_render_clears_back_and_keeps_front() {
        let mut renderer = renderer(4, 2);
        let attrs = Attributes::new(Color::Red, Color::Reset);
        renderer
            .back_mut()
            .set_char(Point::new(2, 1), 'R', attrs)
            .unwrap();

        let result = renderer.render().unwrap();
        assert_eq!(result.cells_changed, 1);
        assert_eq!(renderer.back(), &Buffer::new(Point::new(4, 2)).unwrap());
        assert_eq!(renderer.front().glyph(Point::new(2, 1)).unwrap(), u32::from('R'));
        assert_eq!(renderer.front().attributes(Point::new(2, 1)).unwrap(), attrs);
        assert_eq!(renderer.stats().frames, 1);
    }

    #[test]
    fn test_unchanged_frame_is_cursor_only() {
        let mut renderer = renderer(6, 3);
        renderer.render().unwrap();
        assert_eq!(renderer.sink(), b"\x1b[?25l\x1b[1;1H\x1b[?25h");
    }

    #[test]
    fn test_cursor_is_restored() {
        let mut renderer = renderer(6, 3);
        renderer.set_cursor(Point::new(4, 2)).unwrap();
        renderer.render().unwrap();
        assert_eq!(renderer.sink(), b"\x1b[?25l\x1b[3;5H\x1b[?25h");
        assert!(renderer.set_cursor(Point::new(6, 0)).is_err());
        assert_eq!(renderer.cursor(), Point::new(4, 2));
    }

    #[test]
    fn test_cleared_cell_is_erased_next_frame() {
        let mut renderer = renderer(3, 1);
        renderer
            .back_mut()
            .set_char(Point::new(1, 0), 'O', Attributes::DEFAULT)
            .unwrap();
        renderer.render().unwrap();
        renderer.sink_mut().clear();

        // Back was cleared by the previous render, so the ball disappears.
        let result = renderer.render().unwrap();
        assert_eq!(result.cells_changed, 1);
        assert_eq!(
            renderer.sink(),
            b"\x1b[?25l\x1b[0m\x1b[1;1H\x1b[1;2H \x1b[1;1H\x1b[?25h"
        );
        assert_eq!(renderer.front().glyph(Point::new(1, 0)).unwrap(), 0);
    }

    #[test]
    fn test_invalidate_forces_full_redraw() {
        let mut renderer = renderer(2, 2);
        renderer.invalidate();
        let result = renderer.render().unwrap();
        assert_eq!(result.cells_changed, 4);
        assert!(!renderer.needs_full_redraw());

        let result = renderer.render().unwrap();
        assert_eq!(result.cells_changed, 0);
    }

    #[test]
    fn test_sink_failure_schedules_full_redraw() {
        let sink = FlakySink {
            remaining: 1,
            written: Vec::new(),
        };
        let mut renderer = Renderer::new(Point::new(3, 2), sink).unwrap();
        renderer
            .back_mut()
            .set_char(Point::ZERO, 'E', Attributes::DEFAULT)
            .unwrap();

        let err = renderer.render().unwrap_err();
        assert!(matches!(err, Error::Sink(_)));
        assert!(renderer.needs_full_redraw());
        assert_eq!(renderer.stats().failed_frames, 1);
        // The frame is still there for a retry.
        assert_eq!(renderer.back().glyph(Point::ZERO).unwrap(), u32::from('E'));

        renderer.sink_mut().remaining = 1;
        let result = renderer.render().unwrap();
        assert_eq!(result.cells_changed, 6);
        assert!(renderer.sink().written.ends_with(b"\x1b[1;1H\x1b[?25h"));
    }

    #[test]
    fn test_into_sink() {
        let mut renderer = renderer(1, 1);
        renderer.render().unwrap();
        let bytes = renderer.into_sink();
        assert!(bytes.starts_with(b"\x1b[?25l"));
    }
}
