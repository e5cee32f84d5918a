// Console reporter - banner, inspected values, separator

use super::{ReportOptions, ReportStyle, Reporter, inspect};
use crate::assert::{Comparison, json_diff};
use console::Style;
use serde_json::Value;

pub const PASS_BANNER: &str = "TEST PASSED🥳🥳🥳";
pub const FAIL_BANNER: &str = "TEST FAILED💥💥💥";
pub const SEPARATOR: &str = "----------";

/// Console reporter
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter {
    options: ReportOptions,
}

impl ConsoleReporter {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    fn colored(&self) -> bool {
        matches!(self.options.style, ReportStyle::Color)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored() {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn banner(&self, equal: bool) -> String {
        if equal {
            self.paint(PASS_BANNER, Style::new().green())
        } else {
            self.paint(FAIL_BANNER, Style::new().yellow())
        }
    }

    fn label(&self, text: &str) -> String {
        self.paint(text, Style::new().cyan())
    }
}

impl Reporter for ConsoleReporter {
    fn render(&self, comparison: &Comparison, actual: &Value, expected: &Value) -> String {
        let mut out = String::from("\n");

        out.push_str(&self.banner(comparison.equal));
        out.push('\n');
        out.push_str(&self.label("result:"));
        out.push('\n');
        out.push_str(&inspect(actual));
        out.push('\n');
        out.push_str(&self.label("expected:"));
        out.push('\n');
        out.push_str(&inspect(expected));
        out.push('\n');

        if !comparison.equal {
            if self.options.show_mismatch
                && let Some(ref mismatch) = comparison.mismatch
            {
                out.push_str(&format!("first mismatch: {}\n", mismatch));
            }
            if self.options.show_diff {
                out.push_str(&json_diff(expected, actual, self.colored()));
                out.push('\n');
            }
        }

        out.push('\n');
        out.push_str(SEPARATOR);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::{AssertShape, compare};
    use serde_json::json;

    #[test]
    fn test_golden_pass_report() {
        let report = crate::report::render(true, &json!([1, 2]), &json!([1, 2]));

        assert_eq!(
            report,
            "\n\x1b[32mTEST PASSED🥳🥳🥳\x1b[0m\n\
             \x1b[36mresult:\x1b[0m\n[ 1, 2 ]\n\
             \x1b[36mexpected:\x1b[0m\n[ 1, 2 ]\n\
             \n----------"
        );
    }

    #[test]
    fn test_golden_fail_report() {
        let report = crate::report::render(false, &json!("a"), &json!("b"));

        assert_eq!(
            report,
            "\n\x1b[33mTEST FAILED💥💥💥\x1b[0m\n\
             \x1b[36mresult:\x1b[0m\n'a'\n\
             \x1b[36mexpected:\x1b[0m\n'b'\n\
             \n----------"
        );
    }

    #[test]
    fn test_plain_report_has_no_escape_codes() {
        let reporter = ConsoleReporter::new(ReportOptions::plain());
        let comparison = compare(&json!({"a": 1}), &json!({"a": 2}), AssertShape::Object);
        let report = reporter.render(&comparison, &json!({"a": 1}), &json!({"a": 2}));

        assert!(!report.contains('\x1b'));
        assert_eq!(
            report,
            "\nTEST FAILED💥💥💥\nresult:\n{ a: 1 }\nexpected:\n{ a: 2 }\n\n----------"
        );
    }

    #[test]
    fn test_show_mismatch_line_on_failure() {
        let options = ReportOptions {
            show_mismatch: true,
            ..ReportOptions::plain()
        };
        let actual = json!({"c": "1", "d": ["2", 3]});
        let expected = json!({"c": "1", "d": ["2", 3, 4]});
        let comparison = compare(&actual, &expected, AssertShape::Object);
        let report = ConsoleReporter::new(options).render(&comparison, &actual, &expected);

        assert!(report.contains("first mismatch: Length mismatch at '$.d': expected 3, got 2\n"));
        assert!(report.ends_with("\n\n----------"));
    }

    #[test]
    fn test_show_mismatch_silent_on_pass() {
        let options = ReportOptions {
            show_mismatch: true,
            show_diff: true,
            ..ReportOptions::plain()
        };
        let comparison = compare(&json!([1]), &json!([1]), AssertShape::Array);
        let report = ConsoleReporter::new(options).render(&comparison, &json!([1]), &json!([1]));

        assert!(!report.contains("first mismatch"));
        assert!(!report.contains("diff"));
    }

    #[test]
    fn test_show_diff_on_failure() {
        let options = ReportOptions {
            show_diff: true,
            ..ReportOptions::plain()
        };
        let comparison = compare(&json!([1, 2]), &json!([1, 3]), AssertShape::Array);
        let report =
            ConsoleReporter::new(options).render(&comparison, &json!([1, 2]), &json!([1, 3]));

        assert!(report.contains("diff (expected - / actual +):"));
    }
}
