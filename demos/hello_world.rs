//! Hello world: a patch of Hangul glyphs with a red stripe through it.
//!
//! Prints the terminal size on the last row, waits, and restores the terminal.

use gridpaint::{window_size, Attributes, Color, Point, Renderer, TerminalSession};
use std::time::Duration;

fn main() -> gridpaint::Result<()> {
    let _session = TerminalSession::new()?;
    let size = window_size()?;
    let mut renderer = Renderer::new(size, std::io::stdout())?;

    let back = renderer.back_mut();
    for x in 0..5 {
        for y in 0..5 {
            let p = Point::new(x, y);
            if (x * y) % 2 == 0 {
                if let Ok(attrs) = back.attributes_mut(p) {
                    *attrs = Attributes::new(Color::Reset, Color::Blue);
                }
            }
            if let Ok(glyph) = back.glyph_mut(p) {
                *glyph = 0xCFC3; // 쿃
            }
        }
    }

    if size.y > 2 {
        for x in 2..20.min(size.x) {
            back.set_char(
                Point::new(x, 2),
                'B',
                Attributes::new(Color::Red, Color::Reset),
            )?;
        }
    }

    renderer.render()?;

    let mut status = gridpaint::OutputBuffer::new();
    status.cursor_move(Point::new(0, size.y - 1));
    status.write_raw(format!("{} {}", size.x, size.y).as_bytes());
    status
        .flush_to(renderer.sink_mut())
        .map_err(gridpaint::Error::Sink)?;

    std::thread::sleep(Duration::from_secs(5));
    Ok(())
}
