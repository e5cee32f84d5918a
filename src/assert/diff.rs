use console::Style;
use dissimilar::{Chunk, diff};
use serde_json::Value;
use std::fmt::Write;

/// Generates a character-level diff between two JSON values.
///
/// With `colored` off the chunks are marked `[-...-]` / `{+...+}` instead of
/// being styled, so the output stays readable in logs.
pub fn json_diff(expected: &Value, actual: &Value, colored: bool) -> String {
    let expected_str =
        serde_json::to_string_pretty(expected).unwrap_or_else(|_| expected.to_string());
    let actual_str = serde_json::to_string_pretty(actual).unwrap_or_else(|_| actual.to_string());

    let mut output = String::new();
    let _ = writeln!(output, "diff (expected - / actual +):");

    for chunk in diff(&expected_str, &actual_str) {
        let _ = match (chunk, colored) {
            (Chunk::Equal(text), true) => {
                write!(output, "{}", Style::new().dim().force_styling(true).apply_to(text))
            }
            (Chunk::Delete(text), true) => {
                write!(output, "{}", Style::new().red().force_styling(true).apply_to(text))
            }
            (Chunk::Insert(text), true) => {
                write!(output, "{}", Style::new().green().force_styling(true).apply_to(text))
            }
            (Chunk::Equal(text), false) => write!(output, "{}", text),
            (Chunk::Delete(text), false) => write!(output, "[-{}-]", text),
            (Chunk::Insert(text), false) => write!(output, "{{+{}+}}", text),
        };
    }

    output
}
