//! Helper macros for building argument lists.

/// Build a `[FormatArg; N]` from heterogeneous values through `From`.
///
/// # Usage
///
/// ```ignore
/// let args = fmt_args!["Alice", 30, 'A'];
/// bufprintf_abi::printf("%s is %d (%c)\n", &args)?;
/// ```
#[macro_export]
macro_rules! fmt_args {
    () => {
        {
            let empty: [$crate::core_reexport::FormatArg<'_>; 0] = [];
            empty
        }
    };
    ($($arg:expr),+ $(,)?) => {
        [$($crate::core_reexport::FormatArg::from($arg)),+]
    };
}
