//! Terminal module: Output accumulation and the OS-facing session layer.
//!
//! - [`OutputBuffer`]: one frame of bytes, written to the sink in one go
//! - [`session`]: raw mode, alternate screen and window size via crossterm

mod output;
pub mod session;

pub use output::OutputBuffer;
pub use session::{window_size, SessionConfig, TerminalSession};
