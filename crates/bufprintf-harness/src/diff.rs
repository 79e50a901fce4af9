//! Diff rendering for fixture comparison.
//!
//! Output is byte-oriented and may contain control characters, so both sides
//! are escaped before the per-line comparison.

/// Render a text diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    let exp: Vec<&str> = expected.split('\n').collect();
    let act: Vec<&str> = actual.split('\n').collect();
    for i in 0..exp.len().max(act.len()) {
        let e = exp.get(i).copied();
        let a = act.get(i).copied();
        if e != a {
            out.push_str(&format!("@@ line {} @@\n", i + 1));
            if let Some(e) = e {
                out.push_str(&format!("-{}\n", e.escape_debug()));
            }
            if let Some(a) = a {
                out.push_str(&format!("+{}\n", a.escape_debug()));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical() {
        assert_eq!(render_diff("a\nb", "a\nb"), "[identical]");
    }

    #[test]
    fn changed_line_is_reported() {
        let d = render_diff("Alice, 30", "Alice, %d");
        assert!(d.contains("@@ line 1 @@"));
        assert!(d.contains("-Alice, 30"));
        assert!(d.contains("+Alice, %d"));
    }

    #[test]
    fn missing_trailing_line_is_reported() {
        let d = render_diff("a\nb", "a");
        assert!(d.contains("@@ line 2 @@"));
        assert!(d.contains("-b"));
    }

    #[test]
    fn control_bytes_are_escaped() {
        let d = render_diff("x", "x\t");
        assert!(d.contains("+x\\t"));
    }
}
