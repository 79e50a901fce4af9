//! Mutex-guarded formatters.
//!
//! A [`SharedFormatter`] serializes whole `format` calls: the lock is held
//! from the first byte scanned to the final flush, so output from concurrent
//! callers never interleaves within a call. The process-wide stdout/stderr
//! instances are built lazily from `FormatterConfig::from_env()`.

use std::sync::OnceLock;

use parking_lot::Mutex;

use bufprintf_core::{FormatArg, FormatError, Formatter, FormatterConfig, Sink, StatsSnapshot};

use crate::fd::FdSink;

/// A formatter that can be shared by reference across threads.
#[derive(Debug)]
pub struct SharedFormatter<S> {
    inner: Mutex<Formatter<S>>,
}

impl<S: Sink> SharedFormatter<S> {
    pub fn new(sink: S, config: FormatterConfig) -> Self {
        Self {
            inner: Mutex::new(Formatter::with_config(sink, config)),
        }
    }

    /// Lock, format, flush, unlock.
    pub fn format(
        &self,
        template: impl AsRef<[u8]>,
        args: &[FormatArg<'_>],
    ) -> Result<(), FormatError> {
        self.inner.lock().format(template, args)
    }

    /// Counters accumulated across all callers.
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.lock().stats()
    }

    /// Run `f` with exclusive access to the underlying formatter.
    pub fn with<R>(&self, f: impl FnOnce(&mut Formatter<S>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn into_inner(self) -> Formatter<S> {
        self.inner.into_inner()
    }
}

/// Process-wide formatter bound to standard output.
pub fn stdout() -> &'static SharedFormatter<FdSink> {
    static STDOUT: OnceLock<SharedFormatter<FdSink>> = OnceLock::new();
    STDOUT.get_or_init(|| SharedFormatter::new(FdSink::stdout(), FormatterConfig::from_env()))
}

/// Process-wide formatter bound to standard error.
pub fn stderr() -> &'static SharedFormatter<FdSink> {
    static STDERR: OnceLock<SharedFormatter<FdSink>> = OnceLock::new();
    STDERR.get_or_init(|| SharedFormatter::new(FdSink::stderr(), FormatterConfig::from_env()))
}

/// Format to standard output.
pub fn printf(template: impl AsRef<[u8]>, args: &[FormatArg<'_>]) -> Result<(), FormatError> {
    stdout().format(template, args)
}

/// Format to standard error.
pub fn eprintf(template: impl AsRef<[u8]>, args: &[FormatArg<'_>]) -> Result<(), FormatError> {
    stderr().format(template, args)
}
