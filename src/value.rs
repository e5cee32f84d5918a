// Value shapes and strict primitive equality

use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt;

/// Coarse shape of a value as seen by the comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Null,
    Primitive,
    Sequence,
    Mapping,
}

impl Shape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Self::Primitive,
            Value::Array(_) => Self::Sequence,
            Value::Object(_) => Self::Mapping,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Primitive => "primitive",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

/// Type name used in mismatch messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// Strict equality for primitives: same type and same value, no coercion.
///
/// Composite values never compare equal here; they go through the comparator.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_eq(a, b),
        _ => false,
    }
}

/// Numeric equality where `1` and `1.0` are the same number.
fn numbers_eq(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Location inside a value, rendered as `$`, `$.key`, `$.key[2]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Key(key.to_string()));
        next
    }

    pub fn index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Index(index));
        next
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                Segment::Key(k) => write!(f, ".{}", k)?,
                Segment::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What went wrong at the first mismatching location
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchKind {
    /// The two values have different types
    Type {
        actual: &'static str,
        expected: &'static str,
    },
    /// Same type, different primitive value
    Value { actual: Value, expected: Value },
    /// Sequences of different lengths
    Length { actual: usize, expected: usize },
    /// Mappings with a different number of keys
    KeyCount { actual: usize, expected: usize },
    /// Key present on the actual side only
    MissingKey { key: String },
}

/// First mismatch found while comparing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    pub path: Path,
    #[serde(flatten)]
    pub kind: MismatchKind,
}

impl Mismatch {
    pub fn new(path: Path, kind: MismatchKind) -> Self {
        Self { path, kind }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MismatchKind::Type { actual, expected } => write!(
                f,
                "Type mismatch at '{}': expected {}, got {}",
                self.path, expected, actual
            ),
            MismatchKind::Value { actual, expected } => write!(
                f,
                "Value mismatch at '{}': expected {}, got {}",
                self.path, expected, actual
            ),
            MismatchKind::Length { actual, expected } => write!(
                f,
                "Length mismatch at '{}': expected {}, got {}",
                self.path, expected, actual
            ),
            MismatchKind::KeyCount { actual, expected } => write!(
                f,
                "Key count mismatch at '{}': expected {}, got {}",
                self.path, expected, actual
            ),
            MismatchKind::MissingKey { key } => write!(
                f,
                "Key '{}' missing in expected value at '{}'",
                key, self.path
            ),
        }
    }
}
