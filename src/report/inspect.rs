// Human-readable rendering of values in the style of Node's util.inspect

use serde_json::{Map, Number, Value};

const BREAK_LENGTH: usize = 80;
const INDENT: &str = "  ";

/// Render a value so composite contents are expanded inline.
///
/// `{ a: '1', d: [ '2', 3 ] }` stays on one line while it fits in
/// 80 columns; longer values break one entry per line with two-space
/// indentation. Mapping keys keep their insertion order.
pub fn inspect(value: &Value) -> String {
    inspect_at(value, 0, 0)
}

/// `lead` is the number of columns already taken on the line where the
/// value starts (indentation plus any `key: ` prefix).
fn inspect_at(value: &Value, depth: usize, lead: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let child_lead = INDENT.len() * (depth + 1);
            let entries: Vec<String> = items
                .iter()
                .map(|v| inspect_at(v, depth + 1, child_lead))
                .collect();
            join_entries(&entries, "[", "]", depth, lead)
        }
        Value::Object(map) => {
            let entries = object_entries(map, depth);
            join_entries(&entries, "{", "}", depth, lead)
        }
    }
}

fn object_entries(map: &Map<String, Value>, depth: usize) -> Vec<String> {
    map.iter()
        .map(|(k, v)| {
            let key = format_key(k);
            let child_lead = INDENT.len() * (depth + 1) + key.chars().count() + 2;
            format!("{}: {}", key, inspect_at(v, depth + 1, child_lead))
        })
        .collect()
}

fn join_entries(entries: &[String], open: &str, close: &str, depth: usize, lead: usize) -> String {
    if entries.is_empty() {
        return format!("{}{}", open, close);
    }

    if entries.iter().all(|e| !e.contains('\n')) {
        let single = format!("{} {} {}", open, entries.join(", "), close);
        if lead + single.chars().count() <= BREAK_LENGTH {
            return single;
        }
    }

    let indentation = INDENT.repeat(depth);
    let separator = format!(",\n{}{}", indentation, INDENT);
    format!(
        "{}\n{}{}{}\n{}{}",
        open,
        indentation,
        INDENT,
        entries.join(&separator),
        indentation,
        close
    )
}

/// JS prints integral floats without a fractional part
fn format_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            format!("{}", f)
        }
        _ => n.to_string(),
    }
}

fn format_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Single quotes by default, switching to double quotes or backticks to
/// avoid escaping
fn quote(s: &str) -> String {
    let quote = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') && !s.contains("${") {
        '`'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
