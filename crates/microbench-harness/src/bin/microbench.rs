//! CLI entrypoint for the microbench harness.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use microbench_harness::report::{self, ReportFormat};
use microbench_harness::structured_log::{
    LogEmitter, LogEntry, LogLevel, Outcome, StreamKind, now_utc,
};
use microbench_harness::{
    FixtureSet, HarnessError, MeasureConfig, MeasureReport, TestRunner, VerificationSummary,
    parse_kernel,
};
use microbench_kernels::KernelId;

/// Runner, verifier and timer for the microbench programs.
#[derive(Debug, Parser)]
#[command(name = "microbench")]
#[command(about = "Run, verify and time the microbench programs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List kernels with their expected outputs.
    List {
        /// Emit JSON instead of a plain table.
        #[arg(long)]
        json: bool,
    },
    /// Run one kernel and print its single output line.
    Run {
        /// Kernel name (e.g. `fib30`, `sum_range`).
        kernel: String,
    },
    /// Check every kernel against its recorded literal output.
    Verify {
        /// Fixture JSON file (defaults to the built-in catalog cases).
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Restrict to these kernels (repeatable).
        #[arg(long = "kernel")]
        kernels: Vec<String>,
        /// Output report path (markdown).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Time kernels with a warmup/sample plan.
    Measure {
        /// Kernels to time (repeatable; defaults to all).
        #[arg(long = "kernel")]
        kernels: Vec<String>,
        /// Untimed runs before sampling (overrides MICROBENCH_WARMUP_ITERS).
        #[arg(long)]
        warmup_iters: Option<u64>,
        /// Timed samples (overrides MICROBENCH_SAMPLES).
        #[arg(long)]
        samples: Option<usize>,
        /// Kernel runs per sample (overrides MICROBENCH_ITERS).
        #[arg(long)]
        iters: Option<u64>,
        /// Output format: `json` (default) or `markdown`.
        #[arg(long, default_value = "json")]
        format: String,
        /// Output file path (if omitted, prints to stdout).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::List { json } => {
            let specs: Vec<_> = KernelId::ALL.into_iter().map(KernelId::spec).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&specs)?);
            } else {
                for spec in specs {
                    println!(
                        "{:<16} {:>14}  {}",
                        spec.id.as_str(),
                        spec.expected_output,
                        spec.summary
                    );
                }
            }
        }
        Command::Run { kernel } => {
            let id = parse_kernel(&kernel)?;
            println!("{}", id.run_output());
        }
        Command::Verify {
            fixture,
            kernels,
            report,
            log,
            timestamp,
        } => {
            let filter = parse_kernels(&kernels)?;
            let set = match &fixture {
                Some(path) => {
                    eprintln!("Verifying against fixtures in {}", path.display());
                    FixtureSet::from_file(path)?
                }
                None => FixtureSet::builtin(),
            }
            .filtered(&filter);
            if set.cases.is_empty() {
                return Err(HarnessError::NoFixtureCases.into());
            }

            let run_id = format!("verify-{}", std::process::id());
            let mut emitter = open_log(log.as_ref(), &run_id)?;
            if let Some(emitter) = emitter.as_mut() {
                emitter.emit_entry(
                    LogEntry::new("", LogLevel::Info, "verify_start")
                        .with_stream(StreamKind::Verify)
                        .with_gate("verify")
                        .with_details(serde_json::json!({ "cases": set.cases.len() })),
                )?;
            }

            let runner = TestRunner::new("verify");
            let results = runner.run(&set);

            if let Some(emitter) = emitter.as_mut() {
                for (case, result) in set.cases.iter().zip(&results) {
                    let (level, outcome) = if result.passed {
                        (LogLevel::Info, Outcome::Pass)
                    } else {
                        (LogLevel::Error, Outcome::Fail)
                    };
                    emitter.emit_entry(
                        LogEntry::new("", level, "verify_case")
                            .with_stream(StreamKind::Verify)
                            .with_gate(runner.campaign.as_str())
                            .with_kernel(case.kernel)
                            .with_outcome(outcome)
                            .with_latency_ns(result.elapsed_ns)
                            .with_details(serde_json::json!({
                                "case": result.case_name,
                                "expected": result.expected,
                                "actual": result.actual,
                            })),
                    )?;
                }
            }

            let summary = VerificationSummary::from_results(results);
            for r in summary.results.iter().filter(|r| !r.passed) {
                eprintln!("FAIL {}:\n{}", r.case_name, r.diff.as_deref().unwrap_or(""));
            }
            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                summary.total, summary.passed, summary.failed
            );

            let mut artifacts = Vec::new();
            if let Some(report_path) = report {
                let ts = timestamp.unwrap_or_else(now_utc);
                let md = report::render_verification_markdown(&summary, &ts);
                report::write_report(&report_path, &md, "verification_report", &run_id)?;
                eprintln!("Wrote report to {}", report_path.display());
                artifacts.push(report_path.display().to_string());
            }

            if let Some(mut emitter) = emitter {
                let outcome = if summary.all_passed() {
                    Outcome::Pass
                } else {
                    Outcome::Fail
                };
                emitter.emit_entry(
                    LogEntry::new("", LogLevel::Info, "verify_end")
                        .with_stream(StreamKind::Verify)
                        .with_gate("verify")
                        .with_outcome(outcome)
                        .with_artifacts(artifacts),
                )?;
                emitter.flush()?;
            }

            if !summary.all_passed() {
                return Err(HarnessError::VerificationFailed {
                    failed: summary.failed,
                    total: summary.total,
                }
                .into());
            }
        }
        Command::Measure {
            kernels,
            warmup_iters,
            samples,
            iters,
            format,
            output,
            log,
            timestamp,
        } => {
            let format = ReportFormat::parse(&format)?;
            let cfg = MeasureConfig::from_env()?.with_overrides(warmup_iters, samples, iters);
            cfg.validate()?;
            let mut ids = parse_kernels(&kernels)?;
            if ids.is_empty() {
                ids = KernelId::ALL.to_vec();
            }

            let run_id = format!("measure-{}", std::process::id());
            let mut emitter = open_log(log.as_ref(), &run_id)?;
            eprintln!(
                "Measuring {} kernel(s): warmup={} samples={} iters={}",
                ids.len(),
                cfg.warmup_iters,
                cfg.sample_count,
                cfg.sample_iters
            );

            let started = Instant::now();
            let report_doc = MeasureReport::collect(&ids, cfg, timestamp.unwrap_or_else(now_utc));
            let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

            if let Some(emitter) = emitter.as_mut() {
                for k in &report_doc.kernels {
                    let outcome = if k.output_matches {
                        Outcome::Pass
                    } else {
                        Outcome::Fail
                    };
                    emitter.emit_entry(
                        LogEntry::new("", LogLevel::Info, "measure_kernel")
                            .with_stream(StreamKind::Perf)
                            .with_gate("measure")
                            .with_kernel(k.kernel)
                            .with_outcome(outcome)
                            .with_latency_ns(k.stats.p50_ns_op.round() as u64)
                            .with_details(serde_json::to_value(&k.stats)?),
                    )?;
                }
            }

            let rendered = report::render_measure(&report_doc, format)?;
            let mut artifacts = Vec::new();
            match output {
                Some(path) => {
                    report::write_report(&path, &rendered, "measure_report", &run_id)?;
                    eprintln!("Wrote report to {}", path.display());
                    artifacts.push(path.display().to_string());
                }
                None => println!("{rendered}"),
            }

            if let Some(mut emitter) = emitter {
                emitter.emit_entry(
                    LogEntry::new("", LogLevel::Info, "measure_end")
                        .with_stream(StreamKind::Perf)
                        .with_gate("measure")
                        .with_duration_ms(duration_ms)
                        .with_artifacts(artifacts),
                )?;
                emitter.flush()?;
            }

            if !report_doc.all_outputs_match() {
                eprintln!("warning: at least one kernel produced an unexpected output");
            }
        }
    }

    Ok(())
}

fn parse_kernels(names: &[String]) -> Result<Vec<KernelId>, HarnessError> {
    names.iter().map(|name| parse_kernel(name)).collect()
}

fn open_log(path: Option<&PathBuf>, run_id: &str) -> std::io::Result<Option<LogEmitter>> {
    path.map(|p| LogEmitter::to_file(p, run_id)).transpose()
}
