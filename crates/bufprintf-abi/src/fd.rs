//! File-descriptor sink.
//!
//! Each flush is exactly one `write(2)`. A negative return becomes the OS
//! error; a short count is returned as-is and the core turns it into
//! `FormatError::ShortWrite`. No retry on `EINTR` or partial writes.

use std::ffi::c_int;
use std::io;

use bufprintf_core::Sink;

/// Sink writing to a raw file descriptor it does not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdSink {
    fd: c_int,
}

impl FdSink {
    /// Wrap `fd`. The descriptor is never closed by this type.
    #[must_use]
    pub const fn new(fd: c_int) -> Self {
        Self { fd }
    }

    #[must_use]
    pub const fn stdout() -> Self {
        Self::new(libc::STDOUT_FILENO)
    }

    #[must_use]
    pub const fn stderr() -> Self {
        Self::new(libc::STDERR_FILENO)
    }

    #[must_use]
    pub const fn fd(&self) -> c_int {
        self.fd
    }
}

impl Sink for FdSink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        if bytes.is_empty() {
            return Ok(0);
        }
        // SAFETY: `bytes` is a live slice for the duration of the call and
        // `write` reads at most `bytes.len()` bytes from it.
        let rc = unsafe { libc::write(self.fd, bytes.as_ptr().cast(), bytes.len()) };
        if rc < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(rc as usize)
        }
    }
}
