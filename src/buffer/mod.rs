//! Buffer module: Core data structures for the front/back rendering model.
//!
//! This module contains:
//! - [`Color`] and [`Attributes`]: 16-color cell styling
//! - [`Buffer`]: A grid of glyphs and attributes
//! - [`diff`]: Diffing engine for generating minimal ANSI sequences

mod cell;
#[allow(clippy::module_inception)]
mod buffer;
pub mod diff;

pub use buffer::Buffer;
pub use cell::{Attributes, Color};
