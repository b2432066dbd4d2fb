//! Layout module: Integer geometry for addressing cells and blit regions.
//!
//! Coordinates are signed so that regions may start off-screen; anything
//! outside a buffer is clipped by the buffer operations themselves.

mod point;
mod rect;

pub use point::Point;
pub use rect::Rect;
