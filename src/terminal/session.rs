//! Terminal session: raw mode, alternate screen and window size.
//!
//! These are thin wrappers over crossterm. The renderer never calls them; a
//! host program opens a [`TerminalSession`], sizes a
//! [`Renderer`](crate::Renderer) with [`window_size`] and hands it stdout.

use super::OutputBuffer;
use crate::error::{Error, Result};
use crate::layout::Point;
use crossterm::terminal;
use std::io;

/// Configuration for a [`TerminalSession`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Switch to the alternate screen for the session's lifetime.
    pub alternate_screen: bool,
    /// Disable canonical input processing and echo.
    pub raw_mode: bool,
    /// Show the cursor again on teardown.
    pub restore_cursor: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            raw_mode: true,
            restore_cursor: true,
        }
    }
}

/// Current window size as `(columns, rows)`.
pub fn window_size() -> Result<Point> {
    let (cols, rows) = terminal::size().map_err(Error::Terminal)?;
    if cols == 0 {
        return Err(Error::Terminal(io::Error::other(
            "terminal reported zero columns",
        )));
    }
    let too_large = || Error::InvalidDimensions {
        width: i32::from(cols),
        height: i32::from(rows),
    };
    Ok(Point::new(
        i16::try_from(cols).map_err(|_| too_large())?,
        i16::try_from(rows).map_err(|_| too_large())?,
    ))
}

/// Guard that configures the terminal and restores it on drop.
#[derive(Debug)]
pub struct TerminalSession {
    config: SessionConfig,
}

impl TerminalSession {
    /// Open a session with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(SessionConfig::default())
    }

    /// Open a session with custom configuration.
    pub fn with_config(config: SessionConfig) -> Result<Self> {
        if config.raw_mode {
            terminal::enable_raw_mode().map_err(Error::Terminal)?;
        }

        // From here on, drop undoes whatever succeeded.
        let session = Self { config };
        if session.config.alternate_screen {
            let mut output = OutputBuffer::with_capacity(16);
            output.enter_alt_screen();
            output
                .flush_to(&mut io::stdout())
                .map_err(Error::Terminal)?;
        }

        tracing::debug!(config = ?session.config, "terminal session opened");
        Ok(session)
    }

    /// The configuration this session was opened with.
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut output = OutputBuffer::with_capacity(32);
        if self.config.restore_cursor {
            output.reset_attrs();
            output.cursor_show();
        }
        if self.config.raw_mode {
            if let Err(e) = terminal::disable_raw_mode() {
                tracing::warn!(%e, "failed to leave raw mode");
            }
        }
        if self.config.alternate_screen {
            output.leave_alt_screen();
        }

        if let Err(e) = output.flush_to(&mut io::stdout()) {
            tracing::warn!(%e, "failed to restore terminal");
        }
        tracing::debug!("terminal session closed");
    }
}
