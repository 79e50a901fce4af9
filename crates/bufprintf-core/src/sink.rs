//! Byte sinks: the single write primitive the engine flushes into.
//!
//! A sink is append-only. The engine never seeks, rewinds or reads it, and it
//! issues exactly one `write` per flush. A short count or an error fails that
//! flush; there is no partial-write retry loop.

use std::io;

/// Destination for flushed output.
pub trait Sink {
    /// Write `bytes` in one call, returning how many were accepted.
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        (**self).write(bytes)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        (**self).write(bytes)
    }
}

/// In-memory sink; never fails.
impl Sink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.extend_from_slice(bytes);
        Ok(bytes.len())
    }
}

/// Adapts any [`io::Write`] into a [`Sink`] using a single `write` call per
/// flush (deliberately not `write_all`).
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.inner.write(bytes)
    }
}
