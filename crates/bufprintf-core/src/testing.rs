//! Test doubles for exercising flush boundaries and sink failures.
//!
//! Compiled for this crate's own tests and, for downstream crates, behind the
//! `testing` feature.

use std::io;

use crate::sink::Sink;

/// Sink that keeps every write call separately, for asserting flush
/// boundaries. Can be told to fail or short-write on a given call.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    writes: Vec<Vec<u8>>,
    fault: Option<Fault>,
}

#[derive(Debug, Clone, Copy)]
struct Fault {
    /// Zero-based index of the write call that misbehaves.
    at_call: usize,
    /// `None` fails with an error; `Some(n)` accepts only `n` bytes.
    accept: Option<usize>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `call`-th write (zero-based) with `BrokenPipe`.
    #[must_use]
    pub fn failing_at(call: usize) -> Self {
        Self {
            writes: Vec::new(),
            fault: Some(Fault {
                at_call: call,
                accept: None,
            }),
        }
    }

    /// Accept only `accept` bytes on the `call`-th write (zero-based).
    #[must_use]
    pub fn short_at(call: usize, accept: usize) -> Self {
        Self {
            writes: Vec::new(),
            fault: Some(Fault {
                at_call: call,
                accept: Some(accept),
            }),
        }
    }

    /// Every write call received so far, in order. Failed calls are recorded
    /// with the bytes that were accepted.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// Number of write calls received.
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// All accepted bytes concatenated.
    pub fn bytes(&self) -> Vec<u8> {
        self.writes.concat()
    }
}

impl Sink for RecordingSink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        let call = self.writes.len();
        match self.fault {
            Some(Fault {
                at_call,
                accept: None,
            }) if at_call == call => {
                self.writes.push(Vec::new());
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "injected failure"))
            }
            Some(Fault {
                at_call,
                accept: Some(n),
            }) if at_call == call => {
                let n = n.min(bytes.len());
                self.writes.push(bytes[..n].to_vec());
                Ok(n)
            }
            _ => {
                self.writes.push(bytes.to_vec());
                Ok(bytes.len())
            }
        }
    }
}
