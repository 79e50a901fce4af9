#![no_main]
use bufprintf_core::{
    FormatArg, FormatMode, Formatter, FormatterConfig, RecordingSink, format_to_vec,
};
use libfuzzer_sys::fuzz_target;

// Input layout: [capacity, mode, argc, args..., template...]. Each arg takes
// two bytes: a kind selector and a payload byte.
fuzz_target!(|data: &[u8]| {
    let [cap, mode, argc, rest @ ..] = data else {
        return;
    };
    let argc = usize::from(*argc % 8).min(rest.len() / 2);
    let (arg_bytes, template) = rest.split_at(argc * 2);

    let args: Vec<FormatArg<'_>> = arg_bytes
        .chunks_exact(2)
        .map(|pair| match pair[0] % 4 {
            0 => FormatArg::Int(i64::from(pair[1] as i8) * 1_000_003),
            1 => FormatArg::Text(&template[..usize::from(pair[1]).min(template.len())]),
            2 => FormatArg::Char(pair[1]),
            _ => FormatArg::Unrepresented,
        })
        .collect();

    let mode = if mode & 1 == 0 {
        FormatMode::Strict
    } else {
        FormatMode::Hardened
    };
    let config = FormatterConfig::with_capacity(usize::from(*cap)).mode(mode);

    let mut formatter = Formatter::with_config(RecordingSink::new(), config);
    formatter
        .format(template, &args)
        .expect("recording sink never fails");

    let stats = formatter.stats();
    assert_eq!(stats.bytes_emitted, stats.bytes_flushed);
    assert_eq!(stats.pending(), 0);

    let sink = formatter.into_inner();
    let capacity = usize::from(*cap).max(1);
    assert!(sink.writes().iter().all(|w| !w.is_empty() && w.len() <= capacity));
    assert_eq!(sink.bytes().len() as u64, stats.bytes_flushed);

    // Buffer size never changes the rendered bytes.
    if mode == FormatMode::Strict {
        assert_eq!(sink.bytes(), format_to_vec(template, &args));
    }
});
