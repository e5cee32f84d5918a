// Small functions used as assertion subjects by the demo and fixtures

use serde_json::{Map, Value};

/// Count every character of `text` except spaces. Case sensitive.
pub fn count_letters(text: &str) -> Map<String, Value> {
    let mut counts: Map<String, Value> = Map::new();
    for ch in text.chars().filter(|c| *c != ' ') {
        let entry = counts.entry(ch.to_string()).or_insert(Value::from(0u64));
        let next = entry.as_u64().unwrap_or(0) + 1;
        *entry = Value::from(next);
    }
    counts
}

/// 1-based position(s) of the middle of a sequence of `len` items.
///
/// Empty below three items, one position for odd lengths, two adjacent
/// positions for even lengths.
pub fn middle(items: &[Value]) -> Vec<Value> {
    let len = items.len();
    if len < 3 {
        return Vec::new();
    }

    let first = len.div_ceil(2);
    let mut positions = vec![Value::from(first)];
    if is_even(len as i64) {
        positions.push(Value::from(first + 1));
    }
    positions
}

/// Parity test; negative numbers use the mathematical rule
pub fn is_even(n: i64) -> bool {
    n.rem_euclid(2) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seq(n: i64) -> Vec<Value> {
        (1..=n).map(Value::from).collect()
    }

    #[test]
    fn test_middle_boundaries() {
        assert!(middle(&seq(0)).is_empty());
        assert!(middle(&seq(1)).is_empty());
        assert!(middle(&seq(2)).is_empty());
        assert_eq!(middle(&seq(3)), vec![json!(2)]);
        assert_eq!(middle(&seq(4)), vec![json!(2), json!(3)]);
        assert_eq!(middle(&seq(5)), vec![json!(3)]);
        assert_eq!(middle(&seq(6)), vec![json!(3), json!(4)]);
    }

    #[test]
    fn test_count_letters_skips_spaces() {
        let counts = count_letters("LHL is cool");
        assert_eq!(counts.get("L"), Some(&json!(2)));
        assert_eq!(counts.get("o"), Some(&json!(2)));
        assert!(counts.get(" ").is_none());
    }

    #[test]
    fn test_count_letters_case_sensitive() {
        let counts = count_letters("Apple");
        assert_eq!(counts.get("A"), Some(&json!(1)));
        assert_eq!(counts.get("p"), Some(&json!(2)));
        assert!(counts.get("a").is_none());
    }

    #[test]
    fn test_is_even() {
        assert!(is_even(0));
        assert!(is_even(4));
        assert!(!is_even(7));
        assert!(is_even(-2));
        assert!(!is_even(-3));
    }
}
