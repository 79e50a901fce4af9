//! printf formatting engine.
//!
//! Scans a template one segment at a time, resolves `%d`, `%s` and `%c`
//! against the argument list in left-to-right order, and streams the result
//! through an [`OutputBuffer`]. The buffer is force-flushed when the template
//! is exhausted.
//!
//! Directive table:
//!
//! | specifier | argument | output                                   |
//! |-----------|----------|------------------------------------------|
//! | `%%`      | none     | `%`                                      |
//! | `%d`      | integer  | decimal text                             |
//! | `%s`      | text     | bytes verbatim                           |
//! | `%c`      | char     | one byte                                 |
//! | other     | none     | `%` and the specifier byte               |
//!
//! A `%d`/`%s`/`%c` with no argument left renders as `%` plus the specifier.
//! A lone `%` at the very end of the template is emitted as-is. No width,
//! precision, flag or length modifiers are recognized.

use crate::config::{FormatMode, FormatterConfig};
use crate::error::FormatError;
use crate::metrics::{FormatStats, StatsSnapshot};
use crate::sink::Sink;
use crate::stdio::arg::{ArgKind, FormatArg, Resolved, resolve};
use crate::stdio::buffer::OutputBuffer;
use crate::stdio::convert::to_decimal;

/// The byte that introduces a directive.
pub const ESCAPE: u8 = b'%';

// ---------------------------------------------------------------------------
// Segment: parsed pieces of a template
// ---------------------------------------------------------------------------

/// A segment of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Bytes to emit verbatim. Includes a lone trailing `%`.
    Literal(&'a [u8]),
    /// A `%%` escape (emit a single '%').
    Percent,
    /// `%` followed by this specifier byte (known or not).
    Directive(u8),
}

impl Segment<'_> {
    /// Whether this segment would claim an argument slot.
    #[must_use]
    pub fn takes_argument(&self) -> bool {
        matches!(self, Segment::Directive(spec) if ArgKind::from_specifier(*spec).is_some())
    }
}

/// Iterator over the segments of a template.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a [u8],
}

/// Split `template` into literal runs and directives.
#[must_use]
pub fn segments(template: &[u8]) -> Segments<'_> {
    Segments { rest: template }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let rest = self.rest;
        match rest {
            [] => None,
            [ESCAPE] => {
                self.rest = &[];
                Some(Segment::Literal(rest))
            }
            [ESCAPE, spec, tail @ ..] => {
                self.rest = tail;
                Some(if *spec == ESCAPE {
                    Segment::Percent
                } else {
                    Segment::Directive(*spec)
                })
            }
            _ => {
                let end = rest
                    .iter()
                    .position(|&b| b == ESCAPE)
                    .unwrap_or(rest.len());
                let (literal, tail) = rest.split_at(end);
                self.rest = tail;
                Some(Segment::Literal(literal))
            }
        }
    }
}

/// Number of argument slots `template` can claim.
#[must_use]
pub fn count_arguments(template: &[u8]) -> usize {
    segments(template).filter(Segment::takes_argument).count()
}

// ---------------------------------------------------------------------------
// Formatter
// ---------------------------------------------------------------------------

/// A formatting engine bound to one sink with its own buffer.
///
/// Each formatter owns its buffer, so two formatters never share state.
/// Reusing one formatter across calls keeps the allocation.
#[derive(Debug)]
pub struct Formatter<S> {
    buffer: OutputBuffer<S>,
    mode: FormatMode,
    stats: FormatStats,
}

impl<S: Sink> Formatter<S> {
    /// Formatter with the default 1024-byte buffer in strict mode.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, FormatterConfig::default())
    }

    pub fn with_config(sink: S, config: FormatterConfig) -> Self {
        Self {
            buffer: OutputBuffer::new(sink, config.effective_capacity()),
            mode: config.mode,
            stats: FormatStats::new(),
        }
    }

    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Render `template` against `args` and flush everything to the sink.
    ///
    /// Only sink failures are reported. On failure the call stops at once and
    /// whatever was buffered for it is dropped.
    pub fn format(
        &mut self,
        template: impl AsRef<[u8]>,
        args: &[FormatArg<'_>],
    ) -> Result<(), FormatError> {
        self.stats.calls += 1;
        self.scan(template.as_ref(), args)?;
        self.buffer.flush()
    }

    fn scan(&mut self, template: &[u8], args: &[FormatArg<'_>]) -> Result<(), FormatError> {
        let mut pending = args.iter();
        for segment in segments(template) {
            match segment {
                Segment::Literal(bytes) => self.buffer.extend(bytes)?,
                Segment::Percent => self.buffer.push(ESCAPE)?,
                Segment::Directive(spec) => {
                    let Some(kind) = ArgKind::from_specifier(spec) else {
                        self.stats.fallbacks += 1;
                        self.emit_verbatim(spec)?;
                        continue;
                    };
                    // The slot is claimed here, before the tag is checked.
                    let Some(arg) = pending.next() else {
                        self.stats.fallbacks += 1;
                        self.emit_verbatim(spec)?;
                        continue;
                    };
                    match resolve(arg, kind) {
                        Some(value) => self.emit(value)?,
                        None => {
                            self.stats.mismatches += 1;
                            if self.mode.mismatch_visible() {
                                self.emit_verbatim(spec)?;
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn emit(&mut self, value: Resolved<'_>) -> Result<(), FormatError> {
        match value {
            Resolved::Integer(n) => self.buffer.extend(to_decimal(n).as_bytes()),
            Resolved::Text(bytes) => self.buffer.extend(bytes),
            Resolved::Char(c) => self.buffer.push(c),
        }
    }

    fn emit_verbatim(&mut self, spec: u8) -> Result<(), FormatError> {
        self.buffer.push(ESCAPE)?;
        self.buffer.push(spec)
    }

    /// Flush anything still buffered. `format` already does this on success,
    /// so this only matters after direct buffer use.
    pub fn flush(&mut self) -> Result<(), FormatError> {
        self.buffer.flush()
    }

    /// Current counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.buffer.counters())
    }

    pub fn buffer(&self) -> &OutputBuffer<S> {
        &self.buffer
    }

    pub fn sink(&self) -> &S {
        self.buffer.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.buffer.sink_mut()
    }

    /// Give back the sink without flushing.
    pub fn into_inner(self) -> S {
        self.buffer.into_inner()
    }
}

// ---------------------------------------------------------------------------
// One-shot entry points
// ---------------------------------------------------------------------------

/// Format once into `sink` through a buffer that lives only for this call.
pub fn format<S: Sink + ?Sized>(
    sink: &mut S,
    template: impl AsRef<[u8]>,
    args: &[FormatArg<'_>],
) -> Result<(), FormatError> {
    Formatter::new(sink).format(template, args)
}

/// Format into a fresh `Vec<u8>` (sprintf-style).
#[must_use]
pub fn format_to_vec(template: impl AsRef<[u8]>, args: &[FormatArg<'_>]) -> Vec<u8> {
    let template = template.as_ref();
    let mut out = Vec::with_capacity(template.len());
    if let Err(err) = format(&mut out, template, args) {
        unreachable!("Vec<u8> sink rejected a write: {err}");
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
