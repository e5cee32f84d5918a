// JSON reporter - machine-readable assertion outcome

use super::Reporter;
use crate::assert::Comparison;
use crate::value::Mismatch;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    status: &'static str,
    equal: bool,
    actual: &'a Value,
    expected: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    mismatch: Option<&'a Mismatch>,
}

/// JSON reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn render(&self, comparison: &Comparison, actual: &Value, expected: &Value) -> String {
        let report = JsonReport {
            status: if comparison.equal { "passed" } else { "failed" },
            equal: comparison.equal,
            actual,
            expected,
            // Always included; `show_mismatch` only affects console output
            mismatch: comparison.mismatch.as_ref(),
        };

        serde_json::to_string(&report).unwrap_or_else(|_| String::new())
    }
}
