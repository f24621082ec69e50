//! Warmup/sample timing of kernels.
//!
//! Each sample runs the kernel `sample_iters` times back to back and records
//! the mean nanoseconds per run. Warmup runs are untimed. Results pass through
//! `std::hint::black_box` so the optimizer cannot drop the work.

use std::hint::black_box;
use std::time::{Duration, Instant};

use microbench_kernels::{KernelFamily, KernelId};
use serde::{Deserialize, Serialize};

use crate::config::MeasureConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyStats {
    pub samples: usize,
    pub min_ns_op: f64,
    pub p50_ns_op: f64,
    pub p95_ns_op: f64,
    pub p99_ns_op: f64,
    pub max_ns_op: f64,
    pub mean_ns_op: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelMeasurement {
    pub kernel: KernelId,
    pub family: KernelFamily,
    /// Value produced by the last timed run.
    pub output: String,
    /// Whether `output` equals the catalog's expected output.
    pub output_matches: bool,
    pub stats: LatencyStats,
    pub throughput_runs_s: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureReport {
    pub title: String,
    pub timestamp: String,
    pub config: MeasureConfig,
    pub kernels: Vec<KernelMeasurement>,
}

impl MeasureReport {
    /// Measure every kernel in `kernels`, in order.
    #[must_use]
    pub fn collect(kernels: &[KernelId], cfg: MeasureConfig, timestamp: String) -> Self {
        Self {
            title: String::from("microbench Measurement Report"),
            timestamp,
            config: cfg,
            kernels: kernels.iter().map(|&id| measure_kernel(id, cfg)).collect(),
        }
    }

    #[must_use]
    pub fn all_outputs_match(&self) -> bool {
        self.kernels.iter().all(|k| k.output_matches)
    }
}

/// Time one catalog kernel.
#[must_use]
pub fn measure_kernel(id: KernelId, cfg: MeasureConfig) -> KernelMeasurement {
    let (last, stats) = sample_fn(cfg, || id.run());
    let output = last.to_string();
    let throughput_runs_s = if stats.mean_ns_op > 0.0 {
        1e9 / stats.mean_ns_op
    } else {
        0.0
    };
    KernelMeasurement {
        kernel: id,
        family: id.spec().family,
        output_matches: output == id.spec().expected_output,
        output,
        stats,
        throughput_runs_s,
    }
}

/// Run `f` under the warmup/sample plan and return its last value with the
/// latency statistics.
pub fn sample_fn<F>(cfg: MeasureConfig, mut f: F) -> (i64, LatencyStats)
where
    F: FnMut() -> i64,
{
    let mut last = 0;
    for _ in 0..cfg.warmup_iters {
        last = black_box(f());
    }

    let iters = cfg.sample_iters.max(1);
    let mut samples = Vec::with_capacity(cfg.sample_count);
    for _ in 0..cfg.sample_count {
        let start = Instant::now();
        for _ in 0..iters {
            last = black_box(f());
        }
        let dur = start.elapsed().max(Duration::from_nanos(1));
        samples.push(dur.as_nanos() as f64 / iters as f64);
    }
    (last, stats_from_samples(samples))
}

pub fn stats_from_samples(mut samples: Vec<f64>) -> LatencyStats {
    if samples.is_empty() {
        return LatencyStats {
            samples: 0,
            min_ns_op: 0.0,
            p50_ns_op: 0.0,
            p95_ns_op: 0.0,
            p99_ns_op: 0.0,
            max_ns_op: 0.0,
            mean_ns_op: 0.0,
        };
    }
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    LatencyStats {
        samples: samples.len(),
        min_ns_op: samples[0],
        p50_ns_op: percentile_f64_sorted(&samples, 0.50),
        p95_ns_op: percentile_f64_sorted(&samples, 0.95),
        p99_ns_op: percentile_f64_sorted(&samples, 0.99),
        max_ns_op: samples[samples.len() - 1],
        mean_ns_op: mean,
    }
}

fn percentile_f64_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&p));
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() - 1) as f64 * p).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_samples_are_zero() {
        let stats = stats_from_samples(Vec::new());
        assert_eq!(stats.samples, 0);
        assert_eq!(stats.mean_ns_op, 0.0);
    }

    #[test]
    fn percentiles_are_ordered() {
        let samples: Vec<f64> = (1..=100).rev().map(f64::from).collect();
        let stats = stats_from_samples(samples);
        assert_eq!(stats.samples, 100);
        assert_eq!(stats.min_ns_op, 1.0);
        assert_eq!(stats.max_ns_op, 100.0);
        assert!(stats.p50_ns_op <= stats.p95_ns_op);
        assert!(stats.p95_ns_op <= stats.p99_ns_op);
        assert!((stats.mean_ns_op - 50.5).abs() < 1e-9);
    }

    #[test]
    fn single_sample_fills_every_percentile() {
        let stats = stats_from_samples(vec![42.0]);
        assert_eq!(stats.p50_ns_op, 42.0);
        assert_eq!(stats.p99_ns_op, 42.0);
    }

    #[test]
    fn sample_fn_runs_planned_iterations() {
        let cfg = MeasureConfig {
            warmup_iters: 2,
            sample_count: 4,
            sample_iters: 3,
        };
        let mut calls = 0i64;
        let (last, stats) = sample_fn(cfg, || {
            calls += 1;
            calls
        });
        assert_eq!(calls, 2 + 4 * 3);
        assert_eq!(last, calls);
        assert_eq!(stats.samples, 4);
        assert!(stats.min_ns_op > 0.0);
    }

    #[test]
    fn measure_kernel_checks_output() {
        let cfg = MeasureConfig {
            warmup_iters: 0,
            sample_count: 2,
            sample_iters: 5,
        };
        let m = measure_kernel(KernelId::WasmFibonacci, cfg);
        assert_eq!(m.output, "832040");
        assert!(m.output_matches);
        assert!(m.throughput_runs_s > 0.0);
    }

    #[test]
    fn report_collects_in_order() {
        let cfg = MeasureConfig {
            warmup_iters: 0,
            sample_count: 1,
            sample_iters: 1,
        };
        let report = MeasureReport::collect(
            &[KernelId::WasmAdd, KernelId::DataTransform],
            cfg,
            "t0".to_string(),
        );
        let ids: Vec<_> = report.kernels.iter().map(|k| k.kernel).collect();
        assert_eq!(ids, vec![KernelId::WasmAdd, KernelId::DataTransform]);
        assert!(report.all_outputs_match());
    }
}
