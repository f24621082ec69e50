//! Fixture loading and management.

use microbench_kernels::KernelId;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Schema version written by [`FixtureSet::builtin`].
pub const FIXTURE_VERSION: &str = "v1";

/// A single expected-output case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Kernel being checked.
    pub kernel: KernelId,
    /// Exact line the program prints, without the trailing newline.
    pub expected_output: String,
}

/// A collection of fixture cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Family name for the set.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// One case per catalog kernel, expecting its recorded output.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            version: FIXTURE_VERSION.to_string(),
            family: "programs".to_string(),
            captured_at: "builtin".to_string(),
            cases: KernelId::ALL
                .into_iter()
                .map(|id| FixtureCase {
                    name: format!("{id}_output"),
                    kernel: id,
                    expected_output: id.spec().expected_output.to_string(),
                })
                .collect(),
        }
    }

    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Keep only cases for the given kernels; an empty filter keeps everything.
    #[must_use]
    pub fn filtered(mut self, kernels: &[KernelId]) -> Self {
        if !kernels.is_empty() {
            self.cases.retain(|case| kernels.contains(&case.kernel));
        }
        self
    }
}
