//! Per-formatter counters.
//!
//! Plain integers rather than atomics: a formatter is owned by one caller at a
//! time, and the shared handle in `bufprintf-abi` serializes access.
//!
//! Byte accounting: every emitted byte ends up in exactly one of flushed,
//! discarded (lost to a failed or short flush) or still pending in the buffer.

/// Counters kept by the scanner.
#[derive(Debug, Default, Clone)]
pub struct FormatStats {
    /// Completed or attempted `format` calls.
    pub calls: u64,
    /// Placeholders rendered as literal `%` + specifier (exhausted arguments
    /// or unknown specifiers).
    pub fallbacks: u64,
    /// Placeholders whose argument had the wrong tag.
    pub mismatches: u64,
}

/// Counters kept by the output buffer.
#[derive(Debug, Default, Clone)]
pub struct BufferCounters {
    /// Bytes accepted by `push`/`extend`.
    pub pushed: u64,
    /// Sink write calls issued.
    pub flushes: u64,
    /// Bytes the sink reported as written.
    pub flushed: u64,
    /// Bytes dropped by failed or short flushes.
    pub discarded: u64,
    /// Failed or short sink writes.
    pub sink_errors: u64,
}

impl FormatStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calls: 0,
            fallbacks: 0,
            mismatches: 0,
        }
    }

    /// Combine with the buffer's counters into one snapshot.
    #[must_use]
    pub fn snapshot(&self, buffer: &BufferCounters) -> StatsSnapshot {
        StatsSnapshot {
            calls: self.calls,
            bytes_emitted: buffer.pushed,
            flushes: buffer.flushes,
            bytes_flushed: buffer.flushed,
            bytes_discarded: buffer.discarded,
            fallbacks: self.fallbacks,
            mismatches: self.mismatches,
            sink_errors: buffer.sink_errors,
        }
    }
}

/// Point-in-time copy of a formatter's counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub calls: u64,
    pub bytes_emitted: u64,
    pub flushes: u64,
    pub bytes_flushed: u64,
    pub bytes_discarded: u64,
    pub fallbacks: u64,
    pub mismatches: u64,
    pub sink_errors: u64,
}

impl StatsSnapshot {
    /// Bytes still sitting in the buffer at snapshot time.
    #[must_use]
    pub fn pending(&self) -> u64 {
        self.bytes_emitted
            .saturating_sub(self.bytes_flushed)
            .saturating_sub(self.bytes_discarded)
    }
}

impl std::fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "calls={} emitted={} flushes={} flushed={} discarded={} fallbacks={} mismatches={} sink_errors={}",
            self.calls,
            self.bytes_emitted,
            self.flushes,
            self.bytes_flushed,
            self.bytes_discarded,
            self.fallbacks,
            self.mismatches,
            self.sink_errors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_merges_scanner_and_buffer_counters() {
        let mut stats = FormatStats::new();
        stats.calls = 2;
        stats.mismatches = 1;
        let buffer = BufferCounters {
            pushed: 10,
            flushes: 1,
            flushed: 6,
            ..BufferCounters::default()
        };
        let snap = stats.snapshot(&buffer);
        assert_eq!(snap.calls, 2);
        assert_eq!(snap.mismatches, 1);
        assert_eq!(snap.flushes, 1);
        assert_eq!(snap.pending(), 4);
    }

    #[test]
    fn discarded_bytes_are_not_pending() {
        let buffer = BufferCounters {
            pushed: 5,
            flushes: 1,
            flushed: 2,
            discarded: 3,
            sink_errors: 1,
        };
        let snap = FormatStats::new().snapshot(&buffer);
        assert_eq!(snap.pending(), 0);
    }

    #[test]
    fn display_is_single_line() {
        let snap = FormatStats::new().snapshot(&BufferCounters::default());
        let s = snap.to_string();
        assert!(!s.contains('\n'));
        assert!(s.starts_with("calls=0"));
        assert!(s.contains("discarded=0"));
    }
}
