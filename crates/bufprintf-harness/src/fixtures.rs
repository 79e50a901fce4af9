//! Fixture loading and management.

use std::str::FromStr;

use bufprintf_core::{FormatArg, FormatMode};
use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// One tagged argument as it appears in fixture JSON (`{"int": 30}`,
/// `{"str": "Alice"}`, `{"char": "A"}`) or on the command line
/// (`int:30`, `str:Alice`, `char:A`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureArg {
    Int(i64),
    Str(String),
    Char(char),
    /// Any other JSON value; always resolves as unrepresented.
    Other(serde_json::Value),
}

impl FixtureArg {
    /// Borrow as an engine argument.
    #[must_use]
    pub fn to_format_arg(&self) -> FormatArg<'_> {
        match self {
            Self::Int(v) => FormatArg::Int(*v),
            Self::Str(s) => FormatArg::Text(s.as_bytes()),
            Self::Char(c) => FormatArg::from(*c),
            Self::Other(_) => FormatArg::Unrepresented,
        }
    }
}

impl FromStr for FixtureArg {
    type Err = HarnessError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| HarnessError::InvalidArg {
            input: input.to_string(),
            reason,
        };
        let (kind, value) = input.split_once(':').ok_or_else(|| invalid("expected kind:value"))?;
        match kind {
            "int" => value
                .parse::<i64>()
                .map(Self::Int)
                .map_err(|_| invalid("not a 64-bit signed integer")),
            "str" => Ok(Self::Str(value.to_string())),
            "char" => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Self::Char(c)),
                    _ => Err(invalid("char takes exactly one character")),
                }
            }
            "other" => Ok(Self::Other(serde_json::Value::String(value.to_string()))),
            _ => Err(invalid("kind must be int, str, char or other")),
        }
    }
}

/// Borrow a whole argument list as engine arguments.
#[must_use]
pub fn to_format_args(args: &[FixtureArg]) -> Vec<FormatArg<'_>> {
    args.iter().map(FixtureArg::to_format_arg).collect()
}

/// Which mismatch modes a case (or a verify run) covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModeSelection {
    Strict,
    Hardened,
    #[default]
    Both,
}

impl ModeSelection {
    /// Engine modes selected, strict first.
    #[must_use]
    pub fn modes(self) -> &'static [FormatMode] {
        match self {
            Self::Strict => &[FormatMode::Strict],
            Self::Hardened => &[FormatMode::Hardened],
            Self::Both => &[FormatMode::Strict, FormatMode::Hardened],
        }
    }

    #[must_use]
    pub fn includes(self, mode: FormatMode) -> bool {
        self.modes().contains(&mode)
    }
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Template string.
    pub template: String,
    /// Arguments, in order.
    #[serde(default)]
    pub args: Vec<FixtureArg>,
    /// Expected sink contents.
    pub expected_output: String,
    /// `strict`, `hardened`, or `both` (default). Anything else is a load
    /// error rather than a silent strict run.
    #[serde(default)]
    pub mode: ModeSelection,
}

/// A collection of fixture cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Family name (e.g. `printf/core`).
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_deserialize_externally_tagged() {
        let args: Vec<FixtureArg> =
            serde_json::from_str(r#"[{"int":30},{"str":"Alice"},{"char":"A"},{"other":1.5}]"#)
                .unwrap();
        assert_eq!(
            args,
            vec![
                FixtureArg::Int(30),
                FixtureArg::Str("Alice".into()),
                FixtureArg::Char('A'),
                FixtureArg::Other(serde_json::json!(1.5)),
            ]
        );
        let engine = to_format_args(&args);
        assert_eq!(engine[0], FormatArg::Int(30));
        assert_eq!(engine[1], FormatArg::Text(b"Alice"));
        assert_eq!(engine[2], FormatArg::Char(b'A'));
        assert_eq!(engine[3], FormatArg::Unrepresented);
    }

    #[test]
    fn cli_args_parse() {
        assert_eq!("int:-7".parse::<FixtureArg>().unwrap(), FixtureArg::Int(-7));
        assert_eq!(
            "str:a:b".parse::<FixtureArg>().unwrap(),
            FixtureArg::Str("a:b".into())
        );
        assert_eq!("char:x".parse::<FixtureArg>().unwrap(), FixtureArg::Char('x'));
        assert_eq!("str:".parse::<FixtureArg>().unwrap(), FixtureArg::Str(String::new()));
    }

    #[test]
    fn cli_args_reject_garbage() {
        for bad in ["30", "int:abc", "char:", "char:ab", "float:1.0"] {
            let err = bad.parse::<FixtureArg>().unwrap_err();
            assert!(matches!(err, HarnessError::InvalidArg { .. }), "{bad}");
        }
    }

    #[test]
    fn non_ascii_char_is_unrepresented() {
        assert_eq!(FixtureArg::Char('é').to_format_arg(), FormatArg::Unrepresented);
    }

    #[test]
    fn mode_defaults_to_both() {
        let case: FixtureCase =
            serde_json::from_str(r#"{"name":"n","template":"%%","expected_output":"%"}"#).unwrap();
        assert_eq!(case.mode, ModeSelection::Both);
        assert!(case.args.is_empty());
    }

    #[test]
    fn misspelled_mode_is_rejected() {
        let err = serde_json::from_str::<FixtureCase>(
            r#"{"name":"n","template":"%d","expected_output":"","mode":"hardend"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn selection_expands_to_engine_modes() {
        assert_eq!(ModeSelection::Strict.modes(), &[FormatMode::Strict]);
        assert!(ModeSelection::Both.includes(FormatMode::Hardened));
        assert!(!ModeSelection::Strict.includes(FormatMode::Hardened));
    }
}
