//! Structured logging for harness runs.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL log record with required + optional fields.
//! - [`LogEmitter`]: writes JSONL lines to a file or an in-memory buffer.
//! - [`validate_log_line`] / [`validate_log_text`]: schema checks, including
//!   byte accounting on attached stats.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use bufprintf_core::{FormatMode, StatsSnapshot};

// ---------------------------------------------------------------------------
// Log entry
// ---------------------------------------------------------------------------

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Error,
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `trace_id`, `level`, `event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    // Required
    pub timestamp: String,
    pub trace_id: String,
    pub level: LogLevel,
    pub event: String,

    // Optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    /// Mismatch mode (`strict` or `hardened`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ns: Option<u64>,
    /// Engine counters at the end of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Serializable mirror of [`StatsSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub calls: u64,
    pub bytes_emitted: u64,
    pub flushes: u64,
    pub bytes_flushed: u64,
    #[serde(default)]
    pub bytes_discarded: u64,
    pub fallbacks: u64,
    pub mismatches: u64,
    pub sink_errors: u64,
}

impl From<StatsSnapshot> for StatsRecord {
    fn from(s: StatsSnapshot) -> Self {
        Self {
            calls: s.calls,
            bytes_emitted: s.bytes_emitted,
            flushes: s.flushes,
            bytes_flushed: s.bytes_flushed,
            bytes_discarded: s.bytes_discarded,
            fallbacks: s.fallbacks,
            mismatches: s.mismatches,
            sink_errors: s.sink_errors,
        }
    }
}

impl LogEntry {
    /// Create a new log entry with required fields only.
    #[must_use]
    pub fn new(trace_id: impl Into<String>, level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: now_utc(),
            trace_id: trace_id.into(),
            level,
            event: event.into(),
            run_id: None,
            mode: None,
            case_name: None,
            outcome: None,
            latency_ns: None,
            stats: None,
            details: None,
        }
    }

    /// Set the mismatch mode.
    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Set the fixture case name.
    #[must_use]
    pub fn with_case(mut self, case_name: impl Into<String>) -> Self {
        self.case_name = Some(case_name.into());
        self
    }

    /// Set the outcome.
    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Set latency in nanoseconds.
    #[must_use]
    pub fn with_latency_ns(mut self, ns: u64) -> Self {
        self.latency_ns = Some(ns);
        self
    }

    /// Attach engine counters.
    #[must_use]
    pub fn with_stats(mut self, stats: StatsSnapshot) -> Self {
        self.stats = Some(stats.into());
        self
    }

    /// Set free-form details.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Serialize to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// Log emitter
// ---------------------------------------------------------------------------

/// In-memory log target, cloneable so tests can read what was written.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Everything written so far, as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        let guard = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&guard).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut guard = self.0.lock().unwrap_or_else(|e| e.into_inner());
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Writes structured JSONL log entries.
pub struct LogEmitter {
    writer: Box<dyn Write>,
    seq: u64,
    run_id: String,
}

impl LogEmitter {
    /// Create an emitter that writes to a file.
    pub fn to_file(path: &Path, run_id: &str) -> std::io::Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self::to_writer(
            Box::new(std::io::BufWriter::new(file)),
            run_id,
        ))
    }

    /// Create an emitter that writes to a shared in-memory buffer.
    #[must_use]
    pub fn to_buffer(run_id: &str) -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (Self::to_writer(Box::new(buffer.clone()), run_id), buffer)
    }

    fn to_writer(writer: Box<dyn Write>, run_id: &str) -> Self {
        Self {
            writer,
            seq: 0,
            run_id: run_id.to_string(),
        }
    }

    /// Generate the next trace ID.
    fn next_trace_id(&mut self) -> String {
        self.seq += 1;
        format!("bufprintf::{}::{:03}", self.run_id, self.seq)
    }

    /// Emit a fully-populated log entry, filling trace_id and run_id if unset.
    pub fn emit_entry(&mut self, mut entry: LogEntry) -> std::io::Result<LogEntry> {
        if entry.trace_id.is_empty() {
            entry.trace_id = self.next_trace_id();
        }
        if entry.run_id.is_none() {
            entry.run_id = Some(self.run_id.clone());
        }
        let line = entry.to_jsonl().map_err(std::io::Error::other)?;
        writeln!(self.writer, "{line}")?;
        Ok(entry)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validation error for a log line.
#[derive(Debug)]
pub struct LogValidationError {
    pub line_number: usize,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for LogValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: field '{}': {}",
            self.line_number, self.field, self.message
        )
    }
}

const REQUIRED_FIELDS: [&str; 4] = ["timestamp", "trace_id", "level", "event"];
const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const MODES: &[&str] = &[FormatMode::Strict.as_str(), FormatMode::Hardened.as_str()];
const OUTCOMES: &[&str] = &["pass", "fail", "error"];

/// Validate a single JSONL line against the schema.
///
/// Attached stats must balance: flushed plus discarded bytes can never
/// exceed emitted bytes.
pub fn validate_log_line(
    line: &str,
    line_number: usize,
) -> Result<LogEntry, Vec<LogValidationError>> {
    let error = |field: &str, message: String| LogValidationError {
        line_number,
        field: field.to_string(),
        message,
    };

    let value: serde_json::Value = serde_json::from_str(line)
        .map_err(|e| vec![error("<json>", format!("invalid JSON: {e}"))])?;
    let Some(obj) = value.as_object() else {
        return Err(vec![error("<root>", "expected JSON object".to_string())]);
    };

    let mut errors: Vec<LogValidationError> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !obj.contains_key(**field))
        .map(|field| error(*field, "required field missing".to_string()))
        .collect();

    for (field, allowed) in [("level", LEVELS), ("mode", MODES), ("outcome", OUTCOMES)] {
        if let Some(v) = obj.get(field).and_then(serde_json::Value::as_str)
            && !allowed.contains(&v)
        {
            errors.push(error(field, format!("invalid {field}: '{v}'")));
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let entry: LogEntry =
        serde_json::from_value(value).map_err(|e| vec![error("<schema>", e.to_string())])?;
    if let Some(stats) = &entry.stats
        && stats.bytes_flushed.saturating_add(stats.bytes_discarded) > stats.bytes_emitted
    {
        return Err(vec![error(
            "stats",
            format!(
                "flushed {} + discarded {} exceeds emitted {}",
                stats.bytes_flushed, stats.bytes_discarded, stats.bytes_emitted
            ),
        )]);
    }
    Ok(entry)
}

/// Validate every non-empty line of JSONL text.
///
/// Returns the number of valid entries, or all errors found.
pub fn validate_log_text(content: &str) -> Result<usize, Vec<LogValidationError>> {
    let mut errors = Vec::new();
    let mut valid = 0;
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match validate_log_line(line, i + 1) {
            Ok(_) => valid += 1,
            Err(mut errs) => errors.append(&mut errs),
        }
    }
    if errors.is_empty() { Ok(valid) } else { Err(errors) }
}

fn now_utc() -> String {
    // Approximate calendar fields without a date/time dependency.
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        1970 + secs / 31_557_600,
        (secs % 31_557_600) / 2_629_800 + 1,
        (secs % 2_629_800) / 86400 + 1,
        (secs % 86400) / 3600,
        (secs % 3600) / 60,
        secs % 60,
        millis,
    )
}
