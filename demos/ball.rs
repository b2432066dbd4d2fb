//! Ball: a glyph bouncing off the edges of the screen for 200 frames.

use gridpaint::{window_size, Attributes, Point, Renderer, TerminalSession};
use std::time::Duration;

fn main() -> gridpaint::Result<()> {
    let _session = TerminalSession::new()?;
    let mut renderer = Renderer::new(window_size()?, std::io::stdout())?;
    let size = renderer.size();

    let mut ball = Point::ZERO;
    let mut direction = Point::new(1, 1);

    for _ in 0..200 {
        let next = ball + direction;
        if next.x < 0 || next.x >= size.x {
            direction.x = -direction.x;
        }
        if next.y < 0 || next.y >= size.y {
            direction.y = -direction.y;
        }
        ball = ball + direction;

        // The previous position is erased because render clears the back buffer.
        renderer
            .back_mut()
            .set_char(ball, 'O', Attributes::DEFAULT)?;
        renderer.render()?;

        std::thread::sleep(Duration::from_millis(50));
    }

    Ok(())
}
