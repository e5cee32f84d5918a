// Report module - renders assertion outcomes

pub mod console;
pub mod inspect;
pub mod json;

use crate::assert::Comparison;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Write;

pub use console::ConsoleReporter;
pub use inspect::inspect;
pub use json::JsonReporter;

/// How reports are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// ANSI colored banner and labels
    #[default]
    Color,
    /// Same layout without escape codes
    Plain,
    /// One JSON object per assertion
    Json,
}

/// Rendering options shared by all reporters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportOptions {
    pub style: ReportStyle,
    /// Append the first mismatch location to failing reports
    pub show_mismatch: bool,
    /// Append a character diff to failing reports
    pub show_diff: bool,
}

impl ReportOptions {
    pub fn plain() -> Self {
        Self {
            style: ReportStyle::Plain,
            ..Default::default()
        }
    }

    pub fn reporter(&self) -> Box<dyn Reporter> {
        match self.style {
            ReportStyle::Json => Box::new(JsonReporter),
            ReportStyle::Color | ReportStyle::Plain => Box::new(ConsoleReporter::new(*self)),
        }
    }
}

/// Reporter trait
pub trait Reporter: Send + Sync {
    /// Format a comparison result and both inputs. Never fails.
    fn render(&self, comparison: &Comparison, actual: &Value, expected: &Value) -> String;
}

/// Render the default colored report for a bare verdict
pub fn render(equal: bool, actual: &Value, expected: &Value) -> String {
    let comparison = Comparison {
        equal,
        mismatch: None,
    };
    ConsoleReporter::default().render(&comparison, actual, expected)
}

/// Write a rendered report followed by a newline
pub fn emit<W: Write>(out: &mut W, report: &str) -> std::io::Result<()> {
    writeln!(out, "{}", report)?;
    out.flush()
}
