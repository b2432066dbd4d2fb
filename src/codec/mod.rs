//! Codec module: Pure byte-level encodings used by the renderer.
//!
//! - [`utf8`]: codepoint to UTF-8 bytes
//! - [`ansi`]: color SGR tables and fixed control sequences

pub mod ansi;
pub mod utf8;

pub use utf8::{encode, encoded_len, MAX_UTF8_LEN};
