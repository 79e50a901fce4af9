//! Formatter configuration.
//!
//! Two knobs, both fixed when a formatter is built:
//! - buffer capacity (default [`DEFAULT_CAPACITY`]), clamped to at least 1.
//! - [`FormatMode`], selecting what a type-mismatched placeholder produces.
//!
//! [`FormatterConfig::from_env`] reads `BUFPRINTF_CAPACITY` and
//! `BUFPRINTF_MODE`; malformed values fall back to the defaults.

/// Default output buffer capacity in bytes.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Environment variable holding the buffer capacity.
pub const CAPACITY_ENV: &str = "BUFPRINTF_CAPACITY";

/// Environment variable holding the mismatch mode.
pub const MODE_ENV: &str = "BUFPRINTF_MODE";

/// Policy for a placeholder whose argument has the wrong tag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatMode {
    /// Emit nothing for the placeholder.
    #[default]
    Strict,
    /// Emit the escape byte and the specifier verbatim, like an unknown
    /// specifier, so the gap is visible in the output.
    Hardened,
}

impl FormatMode {
    /// Parse from string (case-insensitive). Unknown strings map to `Strict`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "hardened" | "literal" | "visible" => Self::Hardened,
            _ => Self::Strict,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Hardened => "hardened",
        }
    }

    /// Returns true if mismatched placeholders are rendered literally.
    #[must_use]
    pub const fn mismatch_visible(self) -> bool {
        matches!(self, Self::Hardened)
    }
}

/// Construction-time settings for a [`crate::Formatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterConfig {
    pub capacity: usize,
    pub mode: FormatMode,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            mode: FormatMode::Strict,
        }
    }
}

impl FormatterConfig {
    /// Config with the given capacity and strict mode.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Replace the mismatch mode.
    #[must_use]
    pub fn mode(mut self, mode: FormatMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build from `BUFPRINTF_CAPACITY` / `BUFPRINTF_MODE`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let capacity = lookup(CAPACITY_ENV)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&c| c > 0)
            .unwrap_or(DEFAULT_CAPACITY);
        let mode = lookup(MODE_ENV)
            .map(|v| FormatMode::from_str_loose(&v))
            .unwrap_or_default();
        Self { capacity, mode }
    }

    /// Capacity actually used by the buffer.
    #[must_use]
    pub fn effective_capacity(&self) -> usize {
        self.capacity.max(1)
    }
}
