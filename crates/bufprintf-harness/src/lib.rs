//! Conformance testing harness for bufprintf.
//!
//! This crate provides:
//! - Fixtures: JSON cases pairing a template and tagged arguments with the
//!   expected output per mismatch mode
//! - Runner: execute a fixture set against the core engine
//! - Verification summaries and text diffs for failures
//! - Structured JSONL logging for format and verification events

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureArg, FixtureCase, FixtureSet, ModeSelection};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
