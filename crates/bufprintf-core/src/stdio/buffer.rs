//! Fixed-capacity output buffer.
//!
//! Bytes accumulate until the buffer is full or the caller forces a flush,
//! then leave in a single sink write. This is the fully-buffered stdio mode
//! only: there is no line buffering and no read side.
//!
//! Invariants:
//! - `cursor <= data.len()`, and `data.len()` is fixed at creation.
//! - A push into a full buffer flushes first, so no byte is ever dropped.
//! - A flush of an empty buffer issues no write call.

use crate::error::FormatError;
use crate::metrics::BufferCounters;
use crate::sink::Sink;

/// Output buffer bound to one sink.
#[derive(Debug)]
pub struct OutputBuffer<S> {
    data: Box<[u8]>,
    /// Number of valid bytes in `data`.
    cursor: usize,
    sink: S,
    counters: BufferCounters,
}

impl<S: Sink> OutputBuffer<S> {
    /// Create a buffer of `capacity` bytes (at least 1) in front of `sink`.
    pub fn new(sink: S, capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity.max(1)].into_boxed_slice(),
            cursor: 0,
            sink,
            counters: BufferCounters::default(),
        }
    }

    /// Buffer capacity.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes currently held.
    pub fn len(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Bytes waiting for the next flush.
    pub fn pending(&self) -> &[u8] {
        &self.data[..self.cursor]
    }

    // -----------------------------------------------------------------------
    // Write side
    // -----------------------------------------------------------------------

    /// Append one byte, flushing first if the buffer is full.
    pub fn push(&mut self, byte: u8) -> Result<(), FormatError> {
        if self.cursor == self.data.len() {
            self.flush()?;
        }
        self.data[self.cursor] = byte;
        self.cursor += 1;
        self.counters.pushed += 1;
        Ok(())
    }

    /// Append a run of bytes, filling and flushing the buffer as many times
    /// as needed.
    pub fn extend(&mut self, bytes: &[u8]) -> Result<(), FormatError> {
        let mut rest = bytes;
        while !rest.is_empty() {
            if self.cursor == self.data.len() {
                self.flush()?;
            }
            let room = self.data.len() - self.cursor;
            let take = room.min(rest.len());
            self.data[self.cursor..self.cursor + take].copy_from_slice(&rest[..take]);
            self.cursor += take;
            self.counters.pushed += take as u64;
            rest = &rest[take..];
        }
        Ok(())
    }

    /// Hand every buffered byte to the sink in one write and empty the
    /// buffer. No-op when empty.
    ///
    /// On failure the buffered bytes are discarded: some prefix may already
    /// be in the sink, and resending it would duplicate output.
    pub fn flush(&mut self) -> Result<(), FormatError> {
        if self.cursor == 0 {
            return Ok(());
        }
        let expected = self.cursor;
        self.cursor = 0;
        self.counters.flushes += 1;

        match self.sink.write(&self.data[..expected]) {
            Ok(written) if written >= expected => {
                self.counters.flushed += expected as u64;
                Ok(())
            }
            Ok(written) => {
                self.counters.flushed += written as u64;
                self.counters.discarded += (expected - written) as u64;
                self.counters.sink_errors += 1;
                Err(FormatError::ShortWrite { expected, written })
            }
            Err(err) => {
                self.counters.discarded += expected as u64;
                self.counters.sink_errors += 1;
                Err(FormatError::Io(err))
            }
        }
    }

    // -----------------------------------------------------------------------
    // Sink access
    // -----------------------------------------------------------------------

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Give back the sink. Pending bytes are NOT flushed; call
    /// [`flush`](Self::flush) first if they matter.
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Byte and write-call counters since creation.
    pub fn counters(&self) -> &BufferCounters {
        &self.counters
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSink;

    #[test]
    fn small_pushes_are_absorbed() {
        let mut buf = OutputBuffer::new(RecordingSink::new(), 64);
        for &b in b"hello" {
            buf.push(b).unwrap();
        }
        assert_eq!(buf.pending(), b"hello");
        assert_eq!(buf.sink().write_count(), 0);
    }

    #[test]
    fn full_buffer_flushes_exactly_once_before_next_byte() {
        let cap = 8;
        let mut buf = OutputBuffer::new(RecordingSink::new(), cap);
        for b in 0..cap as u8 {
            buf.push(b'a' + b).unwrap();
        }
        // Exactly at capacity: nothing written yet.
        assert_eq!(buf.len(), cap);
        assert_eq!(buf.sink().write_count(), 0);

        buf.push(b'z').unwrap();
        assert_eq!(buf.sink().write_count(), 1);
        assert_eq!(buf.sink().writes()[0], b"abcdefgh");
        assert_eq!(buf.pending(), b"z");

        buf.flush().unwrap();
        assert_eq!(buf.sink().bytes(), b"abcdefghz");
        assert_eq!(buf.counters().pushed, buf.counters().flushed);
    }

    #[test]
    fn flush_of_empty_buffer_is_noop() {
        let mut buf = OutputBuffer::new(RecordingSink::new(), 4);
        buf.flush().unwrap();
        assert_eq!(buf.sink().write_count(), 0);

        buf.push(b'x').unwrap();
        buf.flush().unwrap();
        buf.flush().unwrap();
        assert_eq!(buf.sink().write_count(), 1);
        assert_eq!(buf.counters().flushes, 1);
    }

    #[test]
    fn extend_splits_across_flushes() {
        let mut buf = OutputBuffer::new(RecordingSink::new(), 4);
        buf.extend(b"abcdefghij").unwrap();
        assert_eq!(buf.sink().writes(), &[b"abcd".to_vec(), b"efgh".to_vec()]);
        assert_eq!(buf.pending(), b"ij");
        buf.flush().unwrap();
        assert_eq!(buf.sink().bytes(), b"abcdefghij");
    }

    #[test]
    fn extend_matches_bytewise_push() {
        let data: Vec<u8> = (0..=255).collect();
        let mut a = OutputBuffer::new(RecordingSink::new(), 7);
        let mut b = OutputBuffer::new(RecordingSink::new(), 7);
        a.extend(&data).unwrap();
        for &byte in &data {
            b.push(byte).unwrap();
        }
        a.flush().unwrap();
        b.flush().unwrap();
        assert_eq!(a.sink().writes(), b.sink().writes());
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut buf = OutputBuffer::new(RecordingSink::new(), 0);
        assert_eq!(buf.capacity(), 1);
        buf.push(b'a').unwrap();
        buf.push(b'b').unwrap();
        buf.flush().unwrap();
        assert_eq!(buf.sink().write_count(), 2);
    }

    #[test]
    fn sink_error_propagates_and_discards() {
        let mut buf = OutputBuffer::new(RecordingSink::failing_at(0), 4);
        buf.extend(b"abc").unwrap();
        let err = buf.flush().unwrap_err();
        assert!(matches!(err, FormatError::Io(_)));
        assert!(buf.is_empty());
        assert_eq!(buf.counters().sink_errors, 1);
        assert_eq!(buf.counters().discarded, 3);

        // The next flush is a fresh write, not a resend.
        buf.push(b'd').unwrap();
        buf.flush().unwrap();
        assert_eq!(buf.sink().writes()[1], b"d");
    }

    #[test]
    fn short_write_is_fatal() {
        let mut buf = OutputBuffer::new(RecordingSink::short_at(0, 2), 8);
        buf.extend(b"hello").unwrap();
        let err = buf.flush().unwrap_err();
        assert!(matches!(
            err,
            FormatError::ShortWrite {
                expected: 5,
                written: 2
            }
        ));
        assert_eq!(buf.counters().flushed, 2);
        assert_eq!(buf.counters().discarded, 3);
        assert!(buf.is_empty());
        assert_eq!(buf.sink().write_count(), 1);
    }

    #[test]
    fn push_surfaces_flush_failure() {
        let mut buf = OutputBuffer::new(RecordingSink::failing_at(0), 2);
        buf.push(b'a').unwrap();
        buf.push(b'b').unwrap();
        assert!(buf.push(b'c').is_err());
        // The failing byte was never stored.
        assert!(buf.is_empty());
    }
}
