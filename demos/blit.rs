//! Blit: compose two off-screen buffers and copy the result to the screen.

use gridpaint::{window_size, Attributes, Buffer, Color, Point, Rect, Renderer, TerminalSession};
use std::time::Duration;

fn main() -> gridpaint::Result<()> {
    let _session = TerminalSession::new()?;
    let mut renderer = Renderer::new(window_size()?, std::io::stdout())?;

    let mut canvas = Buffer::new(Point::new(20, 10))?;
    let mut patch = Buffer::new(Point::new(10, 5))?;

    canvas.fill(
        Rect::from_size(canvas.size()),
        u32::from('A'),
        Attributes::new(Color::Reset, Color::Blue),
    );
    patch.fill(
        Rect::from_size(patch.size()),
        u32::from('B'),
        Attributes::new(Color::Reset, Color::Red),
    );

    canvas.blit(&patch, Rect::from_size(canvas.size()), Rect::from_size(patch.size()));

    let screen = Rect::from_size(renderer.size());
    renderer
        .back_mut()
        .blit(&canvas, screen, Rect::from_size(canvas.size()));
    renderer.render()?;

    std::thread::sleep(Duration::from_secs(3));
    Ok(())
}
