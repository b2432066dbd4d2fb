//! Error types for gridpaint.

use std::fmt;
use std::io;

/// Result type alias for gridpaint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for gridpaint operations.
#[derive(Debug)]
pub enum Error {
    /// The cell grids for a buffer could not be allocated.
    Allocation {
        /// Number of cells requested.
        cells: usize,
    },
    /// Negative buffer dimensions, or a size that does not fit the grid.
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// Cell position outside the buffer.
    OutOfBounds {
        /// Column.
        x: i16,
        /// Row.
        y: i16,
        /// Buffer width.
        width: i16,
        /// Buffer height.
        height: i16,
    },
    /// Value is not a Unicode scalar value and has no UTF-8 encoding.
    EncodingOutOfRange(u32),
    /// The output sink rejected a write or flush.
    Sink(io::Error),
    /// Terminal setup or teardown failed (raw mode, window size, alternate screen).
    Terminal(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { cells } => write!(f, "failed to allocate {cells} cells"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {width}x{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "position ({x}, {y}) out of bounds for {width}x{height} buffer"
            ),
            Self::EncodingOutOfRange(c) => write!(f, "codepoint {c:#x} cannot be encoded"),
            Self::Sink(e) => write!(f, "output sink error: {e}"),
            Self::Terminal(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sink(e) | Self::Terminal(e) => Some(e),
            _ => None,
        }
    }
}
