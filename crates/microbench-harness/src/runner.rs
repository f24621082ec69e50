//! Test execution engine.

use std::time::Instant;

use crate::fixtures::{FixtureCase, FixtureSet};
use crate::verify::{VerificationResult, render_diff};

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the verification campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results in case order.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set.cases.iter().map(execute_case).collect()
    }
}

fn execute_case(case: &FixtureCase) -> VerificationResult {
    let start = Instant::now();
    let actual = case.kernel.run_output();
    let elapsed_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
    let passed = actual == case.expected_output.trim();
    let diff = (!passed).then(|| render_diff(&case.expected_output, &actual));
    VerificationResult {
        case_name: case.name.clone(),
        kernel: case.kernel.to_string(),
        passed,
        expected: case.expected_output.clone(),
        actual,
        elapsed_ns,
        diff,
    }
}
