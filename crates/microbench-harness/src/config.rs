//! Measurement configuration.
//!
//! Defaults can be overridden through the environment before CLI flags are
//! applied:
//! - `MICROBENCH_WARMUP_ITERS`: untimed runs before sampling (default 3)
//! - `MICROBENCH_SAMPLES`: number of timed samples (default 10)
//! - `MICROBENCH_ITERS`: kernel runs per sample (default 1)

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

pub const ENV_WARMUP_ITERS: &str = "MICROBENCH_WARMUP_ITERS";
pub const ENV_SAMPLES: &str = "MICROBENCH_SAMPLES";
pub const ENV_ITERS: &str = "MICROBENCH_ITERS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureConfig {
    pub warmup_iters: u64,
    pub sample_count: usize,
    pub sample_iters: u64,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            warmup_iters: 3,
            sample_count: 10,
            sample_iters: 1,
        }
    }
}

impl MeasureConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values returned by `lookup`.
    ///
    /// Only parse errors are reported here; range checks run in
    /// [`MeasureConfig::validate`] once CLI overrides are applied.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_WARMUP_ITERS) {
            cfg.warmup_iters = parse_field(ENV_WARMUP_ITERS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SAMPLES) {
            cfg.sample_count = parse_field(ENV_SAMPLES, &raw)?;
        }
        if let Some(raw) = lookup(ENV_ITERS) {
            cfg.sample_iters = parse_field(ENV_ITERS, &raw)?;
        }
        Ok(cfg)
    }

    /// Apply explicit overrides (CLI flags win over environment).
    #[must_use]
    pub fn with_overrides(
        mut self,
        warmup_iters: Option<u64>,
        sample_count: Option<usize>,
        sample_iters: Option<u64>,
    ) -> Self {
        if let Some(v) = warmup_iters {
            self.warmup_iters = v;
        }
        if let Some(v) = sample_count {
            self.sample_count = v;
        }
        if let Some(v) = sample_iters {
            self.sample_iters = v;
        }
        self
    }

    /// Reject configurations that cannot produce a latency figure.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(invalid("sample_count", "must be at least 1"));
        }
        if self.sample_iters == 0 {
            return Err(invalid("sample_iters", "must be at least 1"));
        }
        Ok(())
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T> {
    raw.trim()
        .replace('_', "")
        .parse()
        .map_err(|_| invalid(field, &format!("expected an unsigned integer, got '{raw}'")))
}

fn invalid(field: &str, message: &str) -> HarnessError {
    HarnessError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}
