//! Test execution engine.

use bufprintf_core::{FormatMode, Formatter, FormatterConfig, StatsSnapshot};

use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet, ModeSelection, to_format_args};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Mode being tested (strict or hardened).
    pub mode: FormatMode,
    /// Buffer capacity each case runs with.
    pub capacity: usize,
}

impl TestRunner {
    /// Create a new test runner with the default capacity.
    #[must_use]
    pub fn new(campaign: impl Into<String>, mode: FormatMode) -> Self {
        Self {
            campaign: campaign.into(),
            mode,
            capacity: bufprintf_core::DEFAULT_CAPACITY,
        }
    }

    /// Run every case at a different buffer capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .filter(|case| case.mode.includes(self.mode))
            .map(|case| {
                let (actual, _) = self.execute_case(case);
                let case_name = if case.mode == ModeSelection::Both {
                    format!("{} [{}]", case.name, self.mode.as_str())
                } else {
                    case.name.clone()
                };
                let passed = actual == case.expected_output;
                VerificationResult {
                    case_name,
                    mode: self.mode.as_str().to_string(),
                    passed,
                    diff: (!passed).then(|| diff::render_diff(&case.expected_output, &actual)),
                    expected: case.expected_output.clone(),
                    actual,
                }
            })
            .collect()
    }

    /// Format one case into memory, returning the output and the counters.
    pub fn execute_case(&self, case: &FixtureCase) -> (String, StatsSnapshot) {
        let config = FormatterConfig::with_capacity(self.capacity).mode(self.mode);
        let args = to_format_args(&case.args);
        let mut formatter = Formatter::with_config(Vec::new(), config);
        let outcome = formatter.format(case.template.as_bytes(), &args);
        let stats = formatter.stats();
        let bytes = formatter.into_inner();
        let actual = match outcome {
            Ok(()) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => format!("error:{err}"),
        };
        (actual, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> FixtureSet {
        FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"printf/smoke",
                "captured_at":"2026-10-16T00:00:00Z",
                "cases":[
                    {"name":"greet","template":"%s, %d","args":[{"str":"Alice"},{"int":30}],"expected_output":"Alice, 30","mode":"both"},
                    {"name":"strict_drop","template":"%c","args":[{"int":300}],"expected_output":"","mode":"strict"},
                    {"name":"hard_show","template":"%c","args":[{"int":300}],"expected_output":"%c","mode":"hardened"}
                ]
            }"#,
        )
        .expect("valid fixture json")
    }

    #[test]
    fn strict_runner_executes_matching_cases() {
        let results = TestRunner::new("smoke", FormatMode::Strict).run(&fixture());
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));
        assert_eq!(results[0].case_name, "greet [strict]");
        assert_eq!(results[1].case_name, "strict_drop");
    }

    #[test]
    fn hardened_runner_executes_matching_cases() {
        let results = TestRunner::new("smoke", FormatMode::Hardened).run(&fixture());
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));
        assert_eq!(results[1].case_name, "hard_show");
    }

    #[test]
    fn tiny_capacity_gives_same_output() {
        let results = TestRunner::new("tiny", FormatMode::Strict)
            .with_capacity(1)
            .run(&fixture());
        assert!(results.iter().all(|r| r.passed));
    }

    #[test]
    fn failing_case_carries_diff() {
        let mut set = fixture();
        set.cases[0].expected_output = "Bob, 31".into();
        let results = TestRunner::new("fail", FormatMode::Strict).run(&set);
        assert!(!results[0].passed);
        let diff = results[0].diff.as_deref().unwrap();
        assert!(diff.contains("-Bob, 31"));
        assert!(diff.contains("+Alice, 30"));
    }

    #[test]
    fn execute_case_reports_stats() {
        let set = fixture();
        let (out, stats) = TestRunner::new("s", FormatMode::Strict).execute_case(&set.cases[1]);
        assert_eq!(out, "");
        assert_eq!(stats.mismatches, 1);
        assert_eq!(stats.flushes, 0);
    }
}
