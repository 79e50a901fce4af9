//! Formatted output.
//!
//! Leaf-first: integer conversion, the output buffer, argument resolution,
//! and the scanner that drives them.

pub mod arg;
pub mod buffer;
pub mod convert;
pub mod printf;

pub use printf::{Formatter, format, format_to_vec};
