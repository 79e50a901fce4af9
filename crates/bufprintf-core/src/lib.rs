//! # bufprintf-core
//!
//! Safe Rust implementation of a minimal printf-style formatting engine.
//!
//! A template containing `%d`, `%s`, `%c` and `%%` specifiers is rendered
//! against a list of tagged [`FormatArg`] values. Output bytes accumulate in a
//! fixed-capacity [`OutputBuffer`] and reach the [`Sink`] in as few write
//! calls as possible. No `unsafe` code is permitted at the crate level; the
//! OS-facing sinks live in `bufprintf-abi`.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod sink;
pub mod stdio;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{DEFAULT_CAPACITY, FormatMode, FormatterConfig};
pub use error::FormatError;
pub use metrics::{BufferCounters, FormatStats, StatsSnapshot};
pub use sink::{IoSink, Sink};
pub use stdio::arg::{ArgKind, FormatArg, Resolved, resolve};
pub use stdio::buffer::OutputBuffer;
pub use stdio::convert::{DecimalBuf, MAX_DECIMAL_LEN, to_decimal};
pub use stdio::printf::{
    ESCAPE, Formatter, Segment, Segments, count_arguments, format, format_to_vec, segments,
};
#[cfg(any(test, feature = "testing"))]
pub use testing::RecordingSink;
