//! ANSI escape sequences.
//!
//! Colors map to fixed SGR strings through static tables indexed by
//! [`Color`]. Both roles map RESET to the full `ESC[0m`, which clears the
//! foreground and the background together; the diff compensates for that.

use crate::buffer::Color;
use crate::layout::Point;

/// Switch to the alternate screen.
pub const ENTER_ALT_SCREEN: &[u8] = b"\x1b[?1049h";
/// Return from the alternate screen.
pub const LEAVE_ALT_SCREEN: &[u8] = b"\x1b[?1049l";
/// Hide the cursor.
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
/// Show the cursor.
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
/// Reset every SGR attribute.
pub const RESET: &[u8] = b"\x1b[0m";

static FOREGROUND: [&str; Color::COUNT] = [
    "\x1b[0m",
    "\x1b[30m",
    "\x1b[31m",
    "\x1b[32m",
    "\x1b[33m",
    "\x1b[34m",
    "\x1b[35m",
    "\x1b[36m",
    "\x1b[37m",
    "\x1b[30;1m",
    "\x1b[31;1m",
    "\x1b[32;1m",
    "\x1b[33;1m",
    "\x1b[34;1m",
    "\x1b[35;1m",
    "\x1b[36;1m",
    "\x1b[37;1m",
];

static BACKGROUND: [&str; Color::COUNT] = [
    "\x1b[0m",
    "\x1b[40m",
    "\x1b[41m",
    "\x1b[42m",
    "\x1b[43m",
    "\x1b[44m",
    "\x1b[45m",
    "\x1b[46m",
    "\x1b[47m",
    "\x1b[40;1m",
    "\x1b[41;1m",
    "\x1b[42;1m",
    "\x1b[43;1m",
    "\x1b[44;1m",
    "\x1b[45;1m",
    "\x1b[46;1m",
    "\x1b[47;1m",
];

/// SGR sequence selecting `color` as the foreground.
#[inline]
pub fn foreground(color: Color) -> &'static str {
    FOREGROUND[color.index()]
}

/// SGR sequence selecting `color` as the background.
#[inline]
pub fn background(color: Color) -> &'static str {
    BACKGROUND[color.index()]
}

/// Write a cursor-position sequence for a 0-indexed cell.
///
/// The wire format is 1-indexed `ESC[{row};{col}H`.
#[inline]
pub fn write_cursor_position(output: &mut Vec<u8>, p: Point) {
    let row = i32::from(p.y) + 1;
    let col = i32::from(p.x) + 1;
    output.extend_from_slice(format!("\x1b[{row};{col}H").as_bytes());
}
