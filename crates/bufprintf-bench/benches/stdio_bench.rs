//! Stdio benchmarks: decimal conversion, template scanning, and buffering.

use bufprintf_abi::{FdSink, fmt_args};
use bufprintf_core::{
    FormatArg, Formatter, FormatterConfig, IoSink, format_to_vec, segments, to_decimal,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_to_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_decimal");
    for (label, n) in [
        ("zero", 0_i64),
        ("small", 42),
        ("negative", -123_456),
        ("max", i64::MAX),
        ("min", i64::MIN),
    ] {
        group.bench_with_input(BenchmarkId::new("bufprintf", label), &n, |b, &n| {
            b.iter(|| black_box(to_decimal(black_box(n))));
        });
    }
    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let templates: &[(&str, &[u8])] = &[
        ("literal", b"the quick brown fox jumps over the lazy dog\n"),
        ("mixed", b"user=%s id=%d grade=%c ratio=100%%\n"),
        ("dense", b"%d%d%d%d%d%d%d%d%d%d%d%d%d%d%d%d"),
    ];
    let mut group = c.benchmark_group("segments");
    for &(label, template) in templates {
        group.throughput(Throughput::Bytes(template.len() as u64));
        group.bench_with_input(BenchmarkId::new("bufprintf", label), template, |b, t| {
            b.iter(|| black_box(segments(black_box(t)).count()));
        });
    }
    group.finish();
}

fn bench_format_to_vec(c: &mut Criterion) {
    let args = fmt_args!["Alice", 30, b'A'];
    let mut group = c.benchmark_group("format_to_vec");
    group.bench_function("mixed", |b| {
        b.iter(|| black_box(format_to_vec(black_box("%s is %d (%c)\n"), &args)));
    });
    let many: Vec<FormatArg<'_>> = (0..64_i64).map(FormatArg::from).collect();
    let template = "%d ".repeat(64);
    group.bench_function("sixty_four_ints", |b| {
        b.iter(|| black_box(format_to_vec(black_box(&template), &many)));
    });
    group.finish();
}

fn bench_capacity(c: &mut Criterion) {
    let text = "x".repeat(4096);
    let args = [FormatArg::from(text.as_str())];
    let mut group = c.benchmark_group("buffer_capacity");
    group.throughput(Throughput::Bytes(text.len() as u64));
    for capacity in [16_usize, 64, 256, 1024, 4096] {
        group.bench_with_input(
            BenchmarkId::new("io_sink", capacity),
            &capacity,
            |b, &cap| {
                let mut formatter = Formatter::with_config(
                    IoSink::new(std::io::sink()),
                    FormatterConfig::with_capacity(cap),
                );
                b.iter(|| formatter.format("%s", &args));
            },
        );
    }
    group.finish();
}

fn bench_fd_sink(c: &mut Criterion) {
    // SAFETY: path is a valid NUL-terminated string; the fd is closed below.
    let fd = unsafe { libc::open(c"/dev/null".as_ptr(), libc::O_WRONLY) };
    if fd < 0 {
        return;
    }
    let args = fmt_args!["bench", 7];
    let mut formatter = Formatter::new(FdSink::new(fd));
    c.bench_function("fd_sink_dev_null", |b| {
        b.iter(|| formatter.format("%s-%d\n", &args));
    });
    // SAFETY: fd came from the successful open above.
    unsafe { libc::close(fd) };
}

criterion_group!(
    benches,
    bench_to_decimal,
    bench_scan,
    bench_format_to_vec,
    bench_capacity,
    bench_fd_sink
);
criterion_main!(benches);
