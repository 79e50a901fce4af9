//! # bufprintf-abi
//!
//! OS boundary layer for bufprintf.
//!
//! The safe engine in `bufprintf-core` knows nothing about file descriptors.
//! This crate supplies the sink that does ([`FdSink`], one `write(2)` per
//! flush) and a mutex-guarded formatter for handles that must be shared
//! across threads ([`SharedFormatter`]), including the process-wide
//! [`stdout()`] and [`stderr()`] instances behind [`printf`] and [`eprintf`].
//!
//! # Architecture
//!
//! ```text
//! caller -> printf (this crate) -> SharedFormatter lock -> Formatter (core) -> FdSink -> write(2)
//! ```

#[macro_use]
mod macros;

pub mod fd;
pub mod shared;

pub use fd::FdSink;
pub use shared::{SharedFormatter, eprintf, printf, stderr, stdout};

// Re-exported so `fmt_args!` expands without callers naming the core crate.
#[doc(hidden)]
pub use bufprintf_core as core_reexport;
