// Demo command - the fixture assertions the library grew up with

use anyhow::Result;
use serde_json::{Value, json};
use tracing::info;

use crate::assert::{AssertShape, Asserter};
use crate::report::ReportOptions;
use crate::subjects::{count_letters, middle};

/// One fixture assertion and the verdict it is supposed to produce
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: &'static str,
    pub shape: AssertShape,
    pub actual: Value,
    pub expected: Value,
    pub should_pass: bool,
}

impl Fixture {
    fn new(
        name: &'static str,
        shape: AssertShape,
        actual: Value,
        expected: Value,
        should_pass: bool,
    ) -> Self {
        Self {
            name,
            shape,
            actual,
            expected,
            should_pass,
        }
    }
}

fn middle_of(items: &[i64]) -> Value {
    let items: Vec<Value> = items.iter().copied().map(Value::from).collect();
    Value::Array(middle(&items))
}

fn letter_count(text: &str, letter: &str) -> Value {
    count_letters(text).remove(letter).unwrap_or(Value::Null)
}

/// Mapping cases, `middle` boundaries and letter counts
pub fn fixtures() -> Vec<Fixture> {
    let ab = json!({"a": "1", "b": "2"});
    let ba = json!({"b": "2", "a": "1"});
    let abc = json!({"a": "1", "b": "2", "c": "3"});
    let cd = json!({"c": "1", "d": ["2", 3]});
    let dc = json!({"d": ["2", 3], "c": "1"});
    let cd_long = json!({"c": "1", "d": ["2", 3, 4]});

    vec![
        Fixture::new("mapping key order", AssertShape::Object, ab.clone(), ba, true),
        Fixture::new("mapping key count", AssertShape::Object, ab, abc, false),
        Fixture::new("nested sequence order", AssertShape::Object, cd.clone(), dc, true),
        Fixture::new("nested sequence length", AssertShape::Object, cd, cd_long, false),
        Fixture::new("middle of 1", AssertShape::Array, middle_of(&[1]), json!([]), true),
        Fixture::new("middle of 2", AssertShape::Array, middle_of(&[1, 2]), json!([]), true),
        Fixture::new("middle of 3", AssertShape::Array, middle_of(&[1, 2, 3]), json!([2]), true),
        Fixture::new(
            "middle of 4",
            AssertShape::Array,
            middle_of(&[1, 2, 3, 4]),
            json!([2, 3]),
            true,
        ),
        Fixture::new(
            "middle of 5",
            AssertShape::Array,
            middle_of(&[1, 2, 3, 4, 5]),
            json!([3]),
            true,
        ),
        Fixture::new(
            "middle of 6",
            AssertShape::Array,
            middle_of(&[1, 2, 3, 4, 5, 6]),
            json!([3, 4]),
            true,
        ),
        Fixture::new("count A in Apple", AssertShape::Value, letter_count("Apple", "A"), json!(1), true),
        Fixture::new("count p in Apple", AssertShape::Value, letter_count("Apple", "p"), json!(2), true),
    ]
}

/// Print every fixture report. Returns whether each verdict matched.
pub fn handle_demo(options: ReportOptions) -> Result<bool> {
    let asserter = Asserter::new(options);
    let mut unexpected = 0usize;
    let all = fixtures();

    for fixture in &all {
        let outcome = asserter.check(&fixture.actual, &fixture.expected, fixture.shape);
        outcome.print();

        if outcome.passed() != fixture.should_pass {
            unexpected += 1;
            info!("Fixture '{}' produced an unexpected verdict", fixture.name);
        }
    }

    info!(
        "Ran {} fixture assertion(s), {} unexpected verdict(s)",
        all.len(),
        unexpected
    );

    Ok(unexpected == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fixture_produces_its_verdict() {
        let asserter = Asserter::new(ReportOptions::plain());
        for fixture in fixtures() {
            let outcome = asserter.check(&fixture.actual, &fixture.expected, fixture.shape);
            assert_eq!(
                outcome.passed(),
                fixture.should_pass,
                "fixture '{}'",
                fixture.name
            );
        }
    }

    #[test]
    fn test_handle_demo_succeeds() {
        assert!(handle_demo(ReportOptions::plain()).expect("demo"));
    }
}
