//! CLI entrypoint for the bufprintf harness.

use std::path::{Path, PathBuf};
use std::time::Instant;

use bufprintf_abi::FdSink;
use bufprintf_core::{FormatMode, Formatter, FormatterConfig};
use bufprintf_harness::fixtures::to_format_args;
use bufprintf_harness::structured_log::{
    LogEmitter, LogEntry, LogLevel, Outcome, validate_log_text,
};
use bufprintf_harness::{
    ConformanceReport, FixtureArg, FixtureSet, HarnessError, ModeSelection, TestRunner,
    VerificationSummary,
};
use clap::{Parser, Subcommand, ValueEnum};

/// Tooling for the bufprintf formatting engine.
#[derive(Debug, Parser)]
#[command(name = "bufprintf-harness")]
#[command(about = "Format templates and verify the bufprintf engine against fixtures")]
struct Cli {
    /// Write structured JSONL logs to this path.
    #[arg(long, global = true)]
    log: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a template to standard output.
    Format {
        /// Template containing %d, %s, %c and %% directives.
        #[arg(long)]
        template: String,
        /// Tagged argument: int:N, str:TEXT, char:C, or other:ANY. Repeatable.
        #[arg(long = "arg", value_parser = parse_arg)]
        args: Vec<FixtureArg>,
        /// Output buffer capacity in bytes.
        #[arg(long, default_value_t = bufprintf_core::DEFAULT_CAPACITY)]
        capacity: usize,
        /// Type-mismatch mode: strict (drop) or hardened (show directive).
        #[arg(long, value_enum, default_value_t = ModeArg::Strict)]
        mode: ModeArg,
    },
    /// Verify the engine against fixture JSON files.
    Verify {
        /// Fixture file, or directory of fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; a .json sibling is written too).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Mode to run: strict, hardened, or both.
        #[arg(long, value_enum, default_value_t = ModeSelection::Both)]
        mode: ModeSelection,
        /// Output buffer capacity in bytes.
        #[arg(long, default_value_t = bufprintf_core::DEFAULT_CAPACITY)]
        capacity: usize,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Check a JSONL log written with --log against the log schema.
    ValidateLog {
        /// Path to the JSONL file.
        #[arg(long)]
        path: PathBuf,
    },
}

/// Mismatch mode for a single `format` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Strict,
    Hardened,
}

impl From<ModeArg> for FormatMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Strict => FormatMode::Strict,
            ModeArg::Hardened => FormatMode::Hardened,
        }
    }
}

fn parse_arg(s: &str) -> Result<FixtureArg, HarnessError> {
    s.parse()
}

fn load_fixture_sets(fixture: &Path) -> Result<Vec<FixtureSet>, Box<dyn std::error::Error>> {
    if fixture.is_file() {
        return Ok(vec![FixtureSet::from_file(fixture)?]);
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(fixture)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut sets = Vec::new();
    for path in paths {
        match FixtureSet::from_file(&path) {
            Ok(set) => sets.push(set),
            Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
        }
    }
    if sets.is_empty() {
        return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
    }
    Ok(sets)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let run_id = format!("{}", std::process::id());
    let mut log = match &cli.log {
        Some(path) => Some(LogEmitter::to_file(path, &run_id)?),
        None => None,
    };

    match cli.command {
        Command::Format {
            template,
            args,
            capacity,
            mode,
        } => {
            let mode = FormatMode::from(mode);
            let config = FormatterConfig::with_capacity(capacity).mode(mode);
            let engine_args = to_format_args(&args);
            let mut formatter = Formatter::with_config(FdSink::stdout(), config);

            let started = Instant::now();
            let result = formatter.format(template.as_bytes(), &engine_args);
            let elapsed = started.elapsed().as_nanos() as u64;

            if let Some(log) = log.as_mut() {
                let outcome = if result.is_ok() {
                    Outcome::Pass
                } else {
                    Outcome::Error
                };
                log.emit_entry(
                    LogEntry::new("", LogLevel::Info, "format")
                        .with_mode(mode.as_str())
                        .with_outcome(outcome)
                        .with_latency_ns(elapsed)
                        .with_stats(formatter.stats())
                        .with_details(serde_json::json!({
                            "template_len": template.len(),
                            "args": args.len(),
                        })),
                )?;
                log.flush()?;
            }
            result?;
        }
        Command::Verify {
            fixture,
            report,
            mode,
            capacity,
            timestamp,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let sets = load_fixture_sets(&fixture)?;
            let modes = mode.modes();

            let mut results = Vec::new();
            for set in &sets {
                for &m in modes {
                    let runner = TestRunner::new(set.family.clone(), m).with_capacity(capacity);
                    let set_results = runner.run(set);
                    if let Some(log) = log.as_mut() {
                        for r in &set_results {
                            let outcome = if r.passed { Outcome::Pass } else { Outcome::Fail };
                            let level = if r.passed { LogLevel::Info } else { LogLevel::Error };
                            log.emit_entry(
                                LogEntry::new("", level, "verify_case")
                                    .with_mode(m.as_str())
                                    .with_case(r.case_name.clone())
                                    .with_outcome(outcome),
                            )?;
                        }
                    }
                    results.extend(set_results);
                }
            }

            // Stable ordering for reproducible reports.
            results.sort_by(|a, b| {
                a.mode
                    .cmp(&b.mode)
                    .then_with(|| a.case_name.cmp(&b.case_name))
            });

            let summary = VerificationSummary::from_results(results);
            let report_doc = ConformanceReport {
                title: String::from("bufprintf Conformance Report"),
                mode: modes
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join("+"),
                capacity,
                timestamp: timestamp
                    .unwrap_or_else(|| format!("{:?}", std::time::SystemTime::now())),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            if let Some(log) = log.as_mut() {
                log.emit_entry(
                    LogEntry::new("", LogLevel::Info, "verify_summary").with_details(
                        serde_json::json!({
                            "total": report_doc.summary.total,
                            "passed": report_doc.summary.passed,
                            "failed": report_doc.summary.failed,
                        }),
                    ),
                )?;
                log.flush()?;
            }

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                for name in report_doc.summary.failures() {
                    eprintln!("FAIL {name}");
                }
                return Err("Conformance verification failed".into());
            }
        }
        Command::ValidateLog { path } => {
            let content = std::fs::read_to_string(&path)?;
            match validate_log_text(&content) {
                Ok(count) => eprintln!("{}: {count} valid entries", path.display()),
                Err(errors) => {
                    for err in &errors {
                        eprintln!("{err}");
                    }
                    return Err(format!("{} invalid log fields", errors.len()).into());
                }
            }
        }
    }

    Ok(())
}
