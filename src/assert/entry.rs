// Assertion entry points: compare, render, and either print or hand back

use super::comparator::{AssertShape, Comparison, compare};
use crate::error::AssertifyError;
use crate::report::{ReportOptions, emit};
use serde_json::Value;
use tracing::debug;

/// Result of one assertion: the verdict and its rendered report
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub comparison: Comparison,
    pub report: String,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.comparison.equal
    }

    /// Turn a failing outcome into an error carrying the report
    pub fn into_result(self) -> Result<Self, AssertifyError> {
        if self.passed() {
            Ok(self)
        } else {
            Err(AssertifyError::AssertionFailed {
                mismatch: self.comparison.mismatch.as_ref().map(|m| m.to_string()),
                report: self.report,
            })
        }
    }

    /// Write the report to stdout
    pub fn print(&self) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        // A closed stdout is not an assertion failure
        let _ = emit(&mut handle, &self.report);
    }
}

/// Asserter with injectable report options. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Asserter {
    options: ReportOptions,
}

impl Asserter {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    pub fn check(&self, actual: &Value, expected: &Value, shape: AssertShape) -> Outcome {
        let comparison = compare(actual, expected, shape);
        debug!(
            "assert {:?}: {}",
            shape,
            if comparison.equal { "passed" } else { "failed" }
        );
        let report = self.options.reporter().render(&comparison, actual, expected);
        Outcome { comparison, report }
    }

    pub fn check_equal(&self, actual: &Value, expected: &Value) -> Outcome {
        self.check(actual, expected, AssertShape::Value)
    }

    pub fn check_arrays_equal(&self, actual: &Value, expected: &Value) -> Outcome {
        self.check(actual, expected, AssertShape::Array)
    }

    pub fn check_objects_equal(&self, actual: &Value, expected: &Value) -> Outcome {
        self.check(actual, expected, AssertShape::Object)
    }
}

/// Strict equality check with the default report
pub fn check_equal(actual: &Value, expected: &Value) -> Outcome {
    Asserter::default().check_equal(actual, expected)
}

/// Sequence equality check with the default report
pub fn check_arrays_equal(actual: &Value, expected: &Value) -> Outcome {
    Asserter::default().check_arrays_equal(actual, expected)
}

/// Mapping equality check with the default report
pub fn check_objects_equal(actual: &Value, expected: &Value) -> Outcome {
    Asserter::default().check_objects_equal(actual, expected)
}

/// Print a pass/fail report for strict equality
pub fn assert_equal(actual: &Value, expected: &Value) {
    check_equal(actual, expected).print();
}

/// Print a pass/fail report for sequence equality
pub fn assert_arrays_equal(actual: &Value, expected: &Value) {
    check_arrays_equal(actual, expected).print();
}

/// Print a pass/fail report for mapping equality
pub fn assert_objects_equal(actual: &Value, expected: &Value) {
    check_objects_equal(actual, expected).print();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportStyle;
    use serde_json::json;

    #[test]
    fn test_check_equal_primitives() {
        assert!(check_equal(&json!(1), &json!(1)).passed());
        assert!(!check_equal(&json!(1), &json!("1")).passed());
        assert!(!check_equal(&json!(false), &json!(0)).passed());
    }

    #[test]
    fn test_check_arrays_requires_sequences() {
        assert!(check_arrays_equal(&json!([2, 3]), &json!([2, 3])).passed());
        assert!(!check_arrays_equal(&json!("23"), &json!([2, 3])).passed());
    }

    #[test]
    fn test_check_objects_report_contents() {
        let outcome = check_objects_equal(&json!({"a": "1"}), &json!({"a": "1"}));
        assert!(outcome.passed());
        assert!(outcome.report.contains("TEST PASSED"));
        assert!(outcome.report.contains("{ a: '1' }"));
    }

    #[test]
    fn test_into_result_failure_carries_report() {
        let err = check_arrays_equal(&json!([1]), &json!([2]))
            .into_result()
            .expect_err("should fail");

        match err {
            AssertifyError::AssertionFailed { report, mismatch } => {
                assert!(report.contains("TEST FAILED"));
                assert_eq!(
                    mismatch.as_deref(),
                    Some("Value mismatch at '$[0]': expected 2, got 1")
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_asserter_uses_configured_style() {
        let asserter = Asserter::new(ReportOptions {
            style: ReportStyle::Json,
            ..Default::default()
        });
        let outcome = asserter.check_equal(&json!(true), &json!(true));
        let parsed: Value = serde_json::from_str(&outcome.report).expect("json report");
        assert_eq!(parsed["status"], "passed");
    }
}
