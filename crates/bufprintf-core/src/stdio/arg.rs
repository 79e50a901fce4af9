//! Tagged argument values and their resolution against a specifier.
//!
//! Callers convert host values into [`FormatArg`] up front (usually through
//! `From`). The scanner then asks [`resolve`] for the kind a specifier wants;
//! a tag that does not match yields `None` and the scanner applies the
//! configured mismatch policy.

/// Typed argument value for formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg<'a> {
    Int(i64),
    Text(&'a [u8]),
    Char(u8),
    /// A value with no faithful representation (floats, out-of-range
    /// unsigned integers, non-ASCII characters).
    Unrepresented,
}

/// The interpretation a specifier requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Integer, // 'd'
    Text,    // 's'
    Char,    // 'c'
}

impl ArgKind {
    /// Map a specifier byte to the kind it consumes. `None` for `%` and for
    /// unknown specifiers, neither of which takes an argument.
    #[must_use]
    pub const fn from_specifier(spec: u8) -> Option<Self> {
        match spec {
            b'd' => Some(Self::Integer),
            b's' => Some(Self::Text),
            b'c' => Some(Self::Char),
            _ => None,
        }
    }
}

/// A successfully resolved argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Integer(i64),
    Text(&'a [u8]),
    Char(u8),
}

/// Extract `arg` as `want`, or `None` when the tag does not match.
#[must_use]
pub fn resolve<'a>(arg: &FormatArg<'a>, want: ArgKind) -> Option<Resolved<'a>> {
    match (want, *arg) {
        (ArgKind::Integer, FormatArg::Int(v)) => Some(Resolved::Integer(v)),
        (ArgKind::Text, FormatArg::Text(s)) => Some(Resolved::Text(s)),
        (ArgKind::Char, FormatArg::Char(c)) => Some(Resolved::Char(c)),
        _ => None,
    }
}

impl FormatArg<'_> {
    /// Short tag name, used in logs and fixture reports.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Text(_) => "str",
            Self::Char(_) => "char",
            Self::Unrepresented => "unrepresented",
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

macro_rules! from_lossless {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FormatArg<'_> {
                fn from(v: $ty) -> Self {
                    FormatArg::Int(i64::from(v))
                }
            }
        )*
    };
}

from_lossless!(i64, i32, i16, i8, u32, u16);

impl From<isize> for FormatArg<'_> {
    fn from(v: isize) -> Self {
        i64::try_from(v).map_or(FormatArg::Unrepresented, FormatArg::Int)
    }
}

impl From<u64> for FormatArg<'_> {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(FormatArg::Unrepresented, FormatArg::Int)
    }
}

impl From<usize> for FormatArg<'_> {
    fn from(v: usize) -> Self {
        i64::try_from(v).map_or(FormatArg::Unrepresented, FormatArg::Int)
    }
}

/// A byte is a character, not a small integer.
impl From<u8> for FormatArg<'_> {
    fn from(c: u8) -> Self {
        FormatArg::Char(c)
    }
}

impl From<char> for FormatArg<'_> {
    fn from(c: char) -> Self {
        if c.is_ascii() {
            FormatArg::Char(c as u8)
        } else {
            FormatArg::Unrepresented
        }
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(s: &'a str) -> Self {
        FormatArg::Text(s.as_bytes())
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(s: &'a String) -> Self {
        FormatArg::Text(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for FormatArg<'a> {
    fn from(s: &'a [u8]) -> Self {
        FormatArg::Text(s)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for FormatArg<'a> {
    fn from(s: &'a [u8; N]) -> Self {
        FormatArg::Text(s)
    }
}

impl From<f64> for FormatArg<'_> {
    fn from(_: f64) -> Self {
        FormatArg::Unrepresented
    }
}

impl From<f32> for FormatArg<'_> {
    fn from(_: f32) -> Self {
        FormatArg::Unrepresented
    }
}

impl From<bool> for FormatArg<'_> {
    fn from(_: bool) -> Self {
        FormatArg::Unrepresented
    }
}
