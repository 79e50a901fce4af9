//! Integration test: argument macro and shared formatters from outside the crate.
//!
//! Run: cargo test -p bufprintf-abi --test shared_stdout_test

use bufprintf_abi::{SharedFormatter, fmt_args};
use bufprintf_core::{FormatArg, FormatMode, FormatterConfig, RecordingSink};

#[test]
fn macro_args_drive_shared_formatter() {
    let shared = SharedFormatter::new(RecordingSink::new(), FormatterConfig::default());
    let name = String::from("Alice");
    let args = fmt_args![&name, 30_i64, b'!'];
    shared.format("%s, %d%c", &args).unwrap();
    let sink = shared.into_inner().into_inner();
    assert_eq!(sink.bytes(), b"Alice, 30!");
}

#[test]
fn hardened_shared_formatter_shows_mismatch() {
    let cfg = FormatterConfig::with_capacity(8).mode(FormatMode::Hardened);
    let shared = SharedFormatter::new(RecordingSink::new(), cfg);
    shared.format("%c|%d", &fmt_args![300, "x"]).unwrap();
    let stats = shared.stats();
    assert_eq!(stats.mismatches, 2);
    let sink = shared.into_inner().into_inner();
    assert_eq!(sink.bytes(), b"%c|%d");
}

#[test]
fn empty_macro_is_empty_list() {
    let shared = SharedFormatter::new(Vec::new(), FormatterConfig::default());
    shared.format("%d", &fmt_args![]).unwrap();
    assert_eq!(shared.into_inner().into_inner(), b"%d");
    let _: [FormatArg<'_>; 0] = fmt_args![];
}

#[test]
fn process_wide_handles_are_singletons() {
    let a = bufprintf_abi::stdout() as *const _;
    let b = bufprintf_abi::stdout() as *const _;
    assert_eq!(a, b);
    // Empty template: no bytes, no write call.
    bufprintf_abi::printf("", &[]).unwrap();
    bufprintf_abi::eprintf("", &[]).unwrap();
    assert_eq!(bufprintf_abi::stdout().stats().flushes, 0);
}
