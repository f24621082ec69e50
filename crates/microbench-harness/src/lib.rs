//! Harness for the microbench programs.
//!
//! This crate provides:
//! - Standalone program binaries that print one integer and exit
//! - Fixture verify: compare each kernel against its recorded literal output
//! - Measure: warmup/sample timing with percentile latency reports
//! - Structured JSONL logging and artifact indexing for runs

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod fixtures;
pub mod measure;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use config::MeasureConfig;
pub use error::{HarnessError, Result};
pub use fixtures::{FixtureCase, FixtureSet};
pub use measure::{KernelMeasurement, LatencyStats, MeasureReport};
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};

use microbench_kernels::KernelId;

/// Resolve a kernel name or fail with [`HarnessError::UnknownKernel`].
pub fn parse_kernel(name: &str) -> Result<KernelId> {
    KernelId::parse(name).ok_or_else(|| HarnessError::UnknownKernel(name.to_string()))
}
