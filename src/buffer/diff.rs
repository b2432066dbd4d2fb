//! Diffing Engine: Reconcile the front buffer with the back buffer.
//!
//! One frame is produced per call, in row-major scan order:
//! 1. Hide the cursor, reset attributes and home the cursor
//! 2. For every cell, bring the terminal's active colors in line with the
//!    back buffer, then redraw the cell if its glyph or colors changed
//! 3. Skip explicit cursor moves while changed cells are contiguous
//! 4. Advance rows with explicit moves, then restore and show the cursor
//!
//! The front buffer is updated in place so that it mirrors the terminal.

use super::{Attributes, Buffer, Color};
use crate::layout::Point;
use crate::terminal::OutputBuffer;

/// State tracker for the diffing algorithm.
///
/// Tracks the terminal's active colors at the current point of the output
/// stream, and the column the cursor will be at after the last glyph written
/// on the current row. SGR bold is on exactly when an active color is bright.
#[derive(Debug, Clone)]
struct DiffState {
    /// Active foreground and background.
    current: Attributes,
    /// Column the cursor sits at on the current row.
    column: i16,
}

impl DiffState {
    /// State right after `ESC[0m` with the cursor at column 0.
    const fn new() -> Self {
        Self {
            current: Attributes::DEFAULT,
            column: 0,
        }
    }

    /// Emit the SGR codes that turn the active colors into `target`.
    ///
    /// RESET is `ESC[0m` for either role, so resetting one color drops the
    /// other as well; the surviving color is re-asserted. Bold left over from
    /// a bright color is cleared the same way before plain colors are set.
    fn transition(
        &mut self,
        target: Attributes,
        output: &mut OutputBuffer,
        result: &mut DiffResult,
    ) {
        if self.current.is_bright() && !target.is_bright() {
            output.reset_attrs();
            result.color_changes += 1;
            self.current = Attributes::DEFAULT;
        }

        if self.current.fg != target.fg {
            output.set_fg(target.fg);
            result.color_changes += 1;
            if target.fg == Color::Reset {
                self.current.bg = Color::Reset;
            }
        }

        if self.current.bg != target.bg {
            output.set_bg(target.bg);
            result.color_changes += 1;
            if target.bg == Color::Reset && target.fg != Color::Reset {
                output.set_fg(target.fg);
                result.color_changes += 1;
            }
        }

        self.current = target;
    }

    /// Draw an empty cell as a space in the default background.
    fn blank(&self, output: &mut OutputBuffer) {
        if self.current.bg == Color::Reset {
            output.write_raw(b" ");
        } else {
            output.set_bg(Color::Reset);
            output.write_raw(b" ");
            output.set_fg(self.current.fg);
            output.set_bg(self.current.bg);
        }
    }
}

/// Result of a diff operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Number of cells that were redrawn.
    pub cells_changed: usize,
    /// Number of cursor move sequences emitted.
    pub cursor_moves: usize,
    /// Number of color sequences emitted.
    pub color_changes: usize,
    /// Total bytes appended to the output.
    pub bytes: usize,
}

/// Render one frame: diff `back` against `front` and append the escape
/// stream to `output`.
///
/// `cursor` is where the cursor is left after the frame. With `force`, every
/// cell is treated as stale regardless of what `front` holds. When nothing
/// differs and `force` is off, only the cursor hide, restore and show codes
/// are written.
pub fn render_frame(
    front: &mut Buffer,
    back: &Buffer,
    cursor: Point,
    force: bool,
    output: &mut OutputBuffer,
) -> DiffResult {
    debug_assert_eq!(front.size(), back.size());

    let start = output.len();
    let mut result = DiffResult::default();

    output.cursor_hide();

    if force || front != back {
        output.reset_attrs();
        output.cursor_move(Point::ZERO);
        result.cursor_moves += 1;
        diff_cells(front, back, force, output, &mut result);
    }

    output.cursor_move(cursor);
    output.cursor_show();

    result.bytes = output.len() - start;
    result
}

fn diff_cells(
    front: &mut Buffer,
    back: &Buffer,
    force: bool,
    output: &mut OutputBuffer,
    result: &mut DiffResult,
) {
    let size = back.size();
    let back_glyphs = back.glyphs();
    let back_attrs = back.attribute_grid();
    let mut state = DiffState::new();

    for y in 0..size.y {
        for x in 0..size.x {
            let p = Point::new(x, y);
            let Some(idx) = back.index_of(p) else {
                continue;
            };
            let (front_glyphs, front_attrs) = front.grids_mut();

            let back_attr = back_attrs[idx];
            let back_ch = back_glyphs[idx];

            let attr_stale = force || front_attrs[idx] != back_attr;
            if attr_stale || back_attr != state.current {
                state.transition(back_attr, output, result);
                front_attrs[idx] = back_attr;
            }

            if attr_stale || front_glyphs[idx] != back_ch {
                if state.column != x {
                    output.cursor_move(p);
                    result.cursor_moves += 1;
                }

                if back_ch == 0 {
                    state.blank(output);
                } else {
                    output.write_glyph(back_ch);
                }
                front_glyphs[idx] = back_ch;

                state.column = x + 1;
                result.cells_changed += 1;
            }
        }

        // Row advance is always explicit; terminal line-wrap is never assumed.
        state.column = 0;
        if y + 1 < size.y {
            output.cursor_move(Point::new(0, y + 1));
            result.cursor_moves += 1;
        }
    }
}
