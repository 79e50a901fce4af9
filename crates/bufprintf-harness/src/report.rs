//! Report generation for conformance results.

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// A conformance report over one or more fixture sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Modes tested (e.g. `strict+hardened`).
    pub mode: String,
    /// Buffer capacity the cases ran with.
    pub capacity: usize,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Mode: {}\n", self.mode));
        out.push_str(&format!("- Capacity: {}\n", self.capacity));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Mode | Status |\n");
        out.push_str("|------|------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("| {} | {} | {} |\n", r.case_name, r.mode, status));
        }
        for r in self.summary.results.iter().filter(|r| !r.passed) {
            if let Some(diff) = &r.diff {
                out.push_str(&format!("\n## {}\n\n```\n{diff}```\n", r.case_name));
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::VerificationResult;

    fn report(passed: bool) -> ConformanceReport {
        ConformanceReport {
            title: "t".into(),
            mode: "strict".into(),
            capacity: 1024,
            timestamp: "now".into(),
            summary: VerificationSummary::from_results(vec![VerificationResult {
                case_name: "c1".into(),
                mode: "strict".into(),
                passed,
                expected: "a".into(),
                actual: if passed { "a" } else { "b" }.into(),
                diff: (!passed).then(|| crate::diff::render_diff("a", "b")),
            }]),
        }
    }

    #[test]
    fn markdown_lists_cases() {
        let md = report(true).to_markdown();
        assert!(md.contains("| c1 | strict | PASS |"));
        assert!(!md.contains("## c1"));
    }

    #[test]
    fn markdown_includes_failure_diffs() {
        let md = report(false).to_markdown();
        assert!(md.contains("| c1 | strict | FAIL |"));
        assert!(md.contains("## c1"));
        assert!(md.contains("+b"));
    }

    #[test]
    fn json_round_trips_summary_counts() {
        let v: serde_json::Value = serde_json::from_str(&report(false).to_json()).unwrap();
        assert_eq!(v["summary"]["failed"], 1);
        assert_eq!(v["capacity"], 1024);
    }
}
