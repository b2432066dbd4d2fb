//! # Gridpaint
//!
//! A minimal diffing terminal renderer.
//!
//! Gridpaint keeps a grid of Unicode codepoints and 16-color attributes and
//! turns successive snapshots of it into the smallest practical stream of
//! escape codes.
//!
//! ## Core Concepts
//!
//! - **Front and back buffers**: back is drawn by the application, front
//!   mirrors the terminal
//! - **Cell diff**: only changed cells are redrawn, in scan order
//! - **Color tracking**: SGR codes are emitted only when the active colors change
//! - **Cursor runs**: contiguous changes share one cursor move
//!
//! ## Example
//!
//! ```rust,no_run
//! use gridpaint::{Attributes, Color, Point, Renderer};
//!
//! # fn main() -> gridpaint::Result<()> {
//! let mut renderer = Renderer::new(Point::new(80, 24), std::io::stdout())?;
//! renderer
//!     .back_mut()
//!     .set_char(Point::new(0, 0), 'H', Attributes::new(Color::Red, Color::Reset))?;
//! renderer.render()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod codec;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod terminal;

// Re-exports for convenience
pub use buffer::diff::DiffResult;
pub use buffer::{Attributes, Buffer, Color};
pub use error::{Error, Result};
pub use layout::{Point, Rect};
pub use renderer::{RenderStats, Renderer};
pub use terminal::{window_size, OutputBuffer, SessionConfig, TerminalSession};
