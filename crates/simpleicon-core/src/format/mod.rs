//! SimpleIcon text format decoding.
//!
//! The decoder follows the same layered structure for every format version:
//! - `layout`: delimiters, field positions and band geometry (source of truth)
//! - `reader`: safe access to header fields and the pixel-data cursor
//! - `parser`: header validation and version dispatch
//! - `error`: explicit, actionable errors
//!
//! Decoding is pure and contains no I/O; file access lives in `source`.
//! A decode call either returns a complete `Icon` or an error, never a
//! partially filled grid.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::DecodeError;
pub use parser::{DecodeStrategy, decode};
