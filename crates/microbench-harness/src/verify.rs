//! Verification results and summaries.

use serde::{Deserialize, Serialize};

/// Outcome of running one fixture case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub case_name: String,
    pub kernel: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
    /// Wall time of the kernel run.
    pub elapsed_ns: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// Aggregate over a verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
            results,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Two-line expected/actual rendering for a mismatched case.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    format!("- expected: {expected}\n+ actual:   {actual}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> VerificationResult {
        VerificationResult {
            case_name: name.to_string(),
            kernel: "fib30".to_string(),
            passed,
            expected: "1".to_string(),
            actual: if passed { "1" } else { "2" }.to_string(),
            elapsed_ns: 10,
            diff: None,
        }
    }

    #[test]
    fn summary_counts() {
        let summary = VerificationSummary::from_results(vec![
            result("a", true),
            result("b", false),
            result("c", true),
        ]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_passed());
    }

    #[test]
    fn empty_summary_passes() {
        assert!(VerificationSummary::from_results(Vec::new()).all_passed());
    }

    #[test]
    fn diff_shows_both_sides() {
        let d = render_diff("832040", "832041");
        assert!(d.contains("expected: 832040"));
        assert!(d.contains("actual:   832041"));
    }
}
