//! Report rendering and artifact output.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{HarnessError, Result};
use crate::measure::{LatencyStats, MeasureReport};
use crate::structured_log::ArtifactIndex;
use crate::verify::VerificationSummary;

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(HarnessError::InvalidConfig {
                field: "format".to_string(),
                message: format!("expected json|markdown, got '{other}'"),
            }),
        }
    }
}

/// Render a measurement report in the requested format.
pub fn render_measure(report: &MeasureReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Markdown => Ok(render_measure_markdown(report)),
    }
}

#[must_use]
pub fn render_measure_markdown(report: &MeasureReport) -> String {
    let mut out = String::new();

    writeln!(out, "# {}", report.title).ok();
    writeln!(out).ok();
    writeln!(out, "- Generated: {}", report.timestamp).ok();
    writeln!(
        out,
        "- Plan: warmup={} samples={} iters/sample={}",
        report.config.warmup_iters, report.config.sample_count, report.config.sample_iters
    )
    .ok();
    writeln!(out).ok();

    writeln!(out, "## Latency (ns/run)").ok();
    writeln!(out).ok();
    writeln!(
        out,
        "| Kernel | Family | Output | p50 | p95 | p99 | mean | runs/s |"
    )
    .ok();
    writeln!(
        out,
        "|--------|--------|-------:|----:|----:|----:|-----:|-------:|"
    )
    .ok();
    for k in &report.kernels {
        let output = if k.output_matches {
            k.output.clone()
        } else {
            format!("{} (MISMATCH)", k.output)
        };
        writeln!(
            out,
            "| {} | {:?} | {} | {} | {:.1} |",
            k.kernel,
            k.family,
            output,
            latency_cells(&k.stats),
            k.throughput_runs_s
        )
        .ok();
    }
    out
}

fn latency_cells(stats: &LatencyStats) -> String {
    format!(
        "{:.1} | {:.1} | {:.1} | {:.1}",
        stats.p50_ns_op, stats.p95_ns_op, stats.p99_ns_op, stats.mean_ns_op
    )
}

#[must_use]
pub fn render_verification_markdown(summary: &VerificationSummary, timestamp: &str) -> String {
    let mut out = String::new();

    writeln!(out, "# microbench Verification Report").ok();
    writeln!(out).ok();
    writeln!(out, "- Generated: {timestamp}").ok();
    writeln!(
        out,
        "- Total: {} | Passed: {} | Failed: {}",
        summary.total, summary.passed, summary.failed
    )
    .ok();
    writeln!(out).ok();
    writeln!(out, "| Case | Kernel | Expected | Actual | Status |").ok();
    writeln!(out, "|------|--------|---------:|-------:|--------|").ok();
    for r in &summary.results {
        writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            r.case_name,
            r.kernel,
            r.expected.trim(),
            r.actual,
            if r.passed { "PASS" } else { "FAIL" }
        )
        .ok();
    }
    out
}

/// Lowercase hex SHA-256 of `bytes`.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut hex = String::with_capacity(digest.len() * 2);
    for b in digest.iter() {
        write!(hex, "{b:02x}").ok();
    }
    hex
}

/// Path of the artifact index written next to `report_path`.
#[must_use]
pub fn artifact_index_path(report_path: &Path) -> PathBuf {
    let mut name = report_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".artifacts.json");
    report_path.with_file_name(name)
}

/// Write `content` to `path` and an artifact index recording its digest.
///
/// Returns the index path.
pub fn write_report(path: &Path, content: &str, kind: &str, run_id: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;

    let mut index = ArtifactIndex::new(run_id);
    index.add_with_size(
        path.display().to_string(),
        kind,
        sha256_hex(content.as_bytes()),
        content.len() as u64,
    );
    let index_path = artifact_index_path(path);
    std::fs::write(&index_path, index.to_json()?)?;
    Ok(index_path)
}
