use crate::value::{Mismatch, MismatchKind, Path, Shape, strict_eq, type_name};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

/// Which top-level shape an assertion expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AssertShape {
    /// Any value, compared with strict equality (structurally for composites)
    #[default]
    Value,
    /// Both sides must be sequences
    Array,
    /// Both sides must be mappings
    Object,
}

/// Outcome of a comparison: the equality verdict plus the first mismatch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub equal: bool,
    pub mismatch: Option<Mismatch>,
}

impl Comparison {
    fn from_mismatch(mismatch: Option<Mismatch>) -> Self {
        Self {
            equal: mismatch.is_none(),
            mismatch,
        }
    }
}

/// Strict equality of two values.
///
/// Primitives follow `===` rules. Composites are compared structurally.
pub fn equal_values(a: &Value, b: &Value) -> bool {
    JsonComparator::first_mismatch(a, b, &Path::root()).is_none()
}

/// `true` only when both values are sequences of the same length whose
/// elements are pairwise equal.
pub fn equal_sequences(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(a), Value::Array(b)) => {
            JsonComparator::sequence_mismatch(a, b, &Path::root()).is_none()
        }
        _ => false,
    }
}

/// `true` only when both values are mappings with the same key set and
/// equal values under each key. Key order never matters.
pub fn equal_mappings(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => {
            JsonComparator::mapping_mismatch(a, b, &Path::root()).is_none()
        }
        _ => false,
    }
}

/// Compare `actual` against `expected` for the given shape
pub fn compare(actual: &Value, expected: &Value, shape: AssertShape) -> Comparison {
    JsonComparator::compare(actual, expected, shape)
}

pub struct JsonComparator;

impl JsonComparator {
    pub fn compare(actual: &Value, expected: &Value, shape: AssertShape) -> Comparison {
        let root = Path::root();

        let mismatch = match shape {
            AssertShape::Value => Self::first_mismatch(actual, expected, &root),
            AssertShape::Array => match (actual, expected) {
                (Value::Array(a), Value::Array(e)) => Self::sequence_mismatch(a, e, &root),
                _ => Some(Self::shape_mismatch(actual, expected, Shape::Sequence)),
            },
            AssertShape::Object => match (actual, expected) {
                (Value::Object(a), Value::Object(e)) => Self::mapping_mismatch(a, e, &root),
                _ => Some(Self::shape_mismatch(actual, expected, Shape::Mapping)),
            },
        };

        if let Some(ref m) = mismatch {
            trace!("comparison failed: {}", m);
        }

        Comparison::from_mismatch(mismatch)
    }

    fn shape_mismatch(actual: &Value, expected: &Value, wanted: Shape) -> Mismatch {
        let (actual_name, expected_name) = if Shape::of(actual) != wanted {
            (type_name(actual), wanted.as_str())
        } else {
            (type_name(actual), type_name(expected))
        };
        Mismatch::new(
            Path::root(),
            MismatchKind::Type {
                actual: actual_name,
                expected: expected_name,
            },
        )
    }

    fn first_mismatch(actual: &Value, expected: &Value, path: &Path) -> Option<Mismatch> {
        match (actual, expected) {
            (Value::Array(a), Value::Array(e)) => Self::sequence_mismatch(a, e, path),
            (Value::Object(a), Value::Object(e)) => Self::mapping_mismatch(a, e, path),
            _ if strict_eq(actual, expected) => None,
            _ if type_name(actual) != type_name(expected) => Some(Mismatch::new(
                path.clone(),
                MismatchKind::Type {
                    actual: type_name(actual),
                    expected: type_name(expected),
                },
            )),
            _ => Some(Mismatch::new(
                path.clone(),
                MismatchKind::Value {
                    actual: actual.clone(),
                    expected: expected.clone(),
                },
            )),
        }
    }

    fn sequence_mismatch(actual: &[Value], expected: &[Value], path: &Path) -> Option<Mismatch> {
        if actual.len() != expected.len() {
            return Some(Mismatch::new(
                path.clone(),
                MismatchKind::Length {
                    actual: actual.len(),
                    expected: expected.len(),
                },
            ));
        }

        actual
            .iter()
            .zip(expected)
            .enumerate()
            .find_map(|(i, (a, e))| Self::first_mismatch(a, e, &path.index(i)))
    }

    fn mapping_mismatch(
        actual: &Map<String, Value>,
        expected: &Map<String, Value>,
        path: &Path,
    ) -> Option<Mismatch> {
        if actual.len() != expected.len() {
            return Some(Mismatch::new(
                path.clone(),
                MismatchKind::KeyCount {
                    actual: actual.len(),
                    expected: expected.len(),
                },
            ));
        }

        // Same key count, so a key missing on the expected side is the only
        // way the key sets can differ.
        for (key, act_val) in actual {
            let Some(exp_val) = expected.get(key) else {
                return Some(Mismatch::new(
                    path.clone(),
                    MismatchKind::MissingKey { key: key.clone() },
                ));
            };
            if let Some(m) = Self::first_mismatch(act_val, exp_val, &path.key(key)) {
                return Some(m);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sequences_identical() {
        assert!(equal_sequences(&json!([1, "2", true]), &json!([1, "2", true])));
        assert!(equal_sequences(&json!([]), &json!([])));
    }

    #[test]
    fn test_sequences_type_strict() {
        assert!(!equal_sequences(&json!([1, "2"]), &json!([1, 2])));
    }

    #[test]
    fn test_sequences_length_mismatch() {
        assert!(!equal_sequences(&json!([1, 2]), &json!([1, 2, 3])));
        assert!(!equal_sequences(&json!([1, 2, 3]), &json!([1, 2])));
    }

    #[test]
    fn test_sequences_non_sequence_input() {
        assert!(!equal_sequences(&json!("abc"), &json!(["a", "b", "c"])));
        assert!(!equal_sequences(&json!([1]), &json!({"0": 1})));
        assert!(!equal_sequences(&json!(null), &json!(null)));
    }

    #[test]
    fn test_mappings_key_order_independent() {
        let ab = json!({"a": "1", "b": "2"});
        let ba = json!({"b": "2", "a": "1"});
        assert!(equal_mappings(&ab, &ba));
    }

    #[test]
    fn test_mappings_key_count() {
        let ab = json!({"a": "1", "b": "2"});
        let abc = json!({"a": "1", "b": "2", "c": "3"});
        assert!(!equal_mappings(&ab, &abc));
        assert!(!equal_mappings(&abc, &ab));
    }

    #[test]
    fn test_mappings_nested_sequences() {
        let obj1 = json!({"c": "1", "d": ["2", 3]});
        let obj2 = json!({"d": ["2", 3], "c": "1"});
        let obj4 = json!({"c": "1", "d": ["2", 3, 4]});
        assert!(equal_mappings(&obj1, &obj2));
        assert!(!equal_mappings(&obj1, &obj4));
    }

    #[test]
    fn test_mappings_missing_key() {
        assert!(!equal_mappings(&json!({"a": 1}), &json!({"b": 1})));
    }

    #[test]
    fn test_mappings_value_vs_sequence() {
        assert!(!equal_mappings(&json!({"a": [1]}), &json!({"a": 1})));
        assert!(!equal_mappings(&json!({"a": 1}), &json!({"a": [1]})));
    }

    #[test]
    fn test_mappings_recurse_into_nested_mappings() {
        let a = json!({"user": {"name": "x", "tags": ["a"]}});
        let b = json!({"user": {"tags": ["a"], "name": "x"}});
        let c = json!({"user": {"tags": ["b"], "name": "x"}});
        assert!(equal_mappings(&a, &b));
        assert!(!equal_mappings(&a, &c));
    }

    #[test]
    fn test_sequence_vs_mapping_distinct() {
        assert!(!equal_values(&json!([]), &json!({})));
        assert!(!equal_values(&json!({"0": "a"}), &json!(["a"])));
    }

    #[test]
    fn test_compare_reports_first_mismatch_path() {
        let result = compare(
            &json!({"c": "1", "d": ["2", 3, 5]}),
            &json!({"c": "1", "d": ["2", 3, 4]}),
            AssertShape::Object,
        );
        assert!(!result.equal);
        let mismatch = result.mismatch.expect("mismatch");
        assert_eq!(mismatch.path.to_string(), "$.d[2]");
        assert_eq!(
            mismatch.kind,
            MismatchKind::Value {
                actual: json!(5),
                expected: json!(4)
            }
        );
    }

    #[test]
    fn test_compare_length_mismatch_path() {
        let result = compare(
            &json!({"c": "1", "d": ["2", 3]}),
            &json!({"c": "1", "d": ["2", 3, 4]}),
            AssertShape::Object,
        );
        let mismatch = result.mismatch.expect("mismatch");
        assert_eq!(mismatch.path.to_string(), "$.d");
        assert!(matches!(
            mismatch.kind,
            MismatchKind::Length {
                actual: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn test_compare_shape_mismatch_at_root() {
        let result = compare(&json!("x"), &json!(["x"]), AssertShape::Array);
        assert!(!result.equal);
        let mismatch = result.mismatch.expect("mismatch");
        assert!(mismatch.path.is_root());
        assert_eq!(
            mismatch.kind,
            MismatchKind::Type {
                actual: "string",
                expected: "sequence"
            }
        );
    }

    #[test]
    fn test_compare_equal_has_no_mismatch() {
        let result = compare(&json!([1, 2]), &json!([1, 2]), AssertShape::Array);
        assert!(result.equal);
        assert!(result.mismatch.is_none());
    }

    #[test]
    fn test_compare_value_type_mismatch() {
        let result = compare(&json!(1), &json!("1"), AssertShape::Value);
        assert_eq!(
            result.mismatch.map(|m| m.kind),
            Some(MismatchKind::Type {
                actual: "number",
                expected: "string"
            })
        );
    }
}
