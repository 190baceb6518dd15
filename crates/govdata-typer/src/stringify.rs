//! Source-literal stringification with numeric-string cleanup.
//!
//! Governed data files are hand-authored and freely mix numbers with
//! numeric-looking strings. To keep regenerated modules looking
//! hand-written, string values that survive JS numeric coercion are
//! emitted as bare number literals, textually unchanged, instead of being
//! "corrupted" into quoted strings on every regeneration.

use serde_json::Value;

/// Default indent width for emitted literals.
pub const DEFAULT_INDENT: usize = 2;

/// The numeric sniff: true when `v - parseFloat(v) + 1 >= 0` holds under
/// JS numeric coercion and the value is not an array.
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Array(_) => false,
        Value::Number(_) => true,
        Value::String(s) => is_numeric_string(s),
        _ => false,
    }
}

/// Numeric sniff for bare strings.
pub fn is_numeric_string(s: &str) -> bool {
    // NaN poisons the arithmetic, so any non-numeric operand fails the
    // comparison; infinities cancel to NaN and fail it too.
    js_number(s) - js_parse_float(s) + 1.0 >= 0.0
}

/// Render a JSON value as a source-code literal: identifier keys unquoted,
/// numeric-looking strings unquoted, `indent` spaces per level.
pub fn to_js_literal(value: &Value, indent: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, indent, 0);
    out
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => {
            if is_numeric_string(s) {
                out.push_str(s);
            } else {
                write_quoted(out, s);
            }
        }
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            let pad = " ".repeat(indent * (depth + 1));
            for (i, item) in items.iter().enumerate() {
                out.push_str(&pad);
                write_value(out, item, indent, depth + 1);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&" ".repeat(indent * depth));
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            let pad = " ".repeat(indent * (depth + 1));
            for (i, (key, item)) in map.iter().enumerate() {
                out.push_str(&pad);
                if is_identifier(key) {
                    out.push_str(key);
                } else {
                    write_quoted(out, key);
                }
                out.push_str(": ");
                write_value(out, item, indent, depth + 1);
                if i + 1 < map.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&" ".repeat(indent * depth));
            out.push('}');
        }
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// JS `Number(s)` semantics: whole-string coercion. NaN when not numeric.
fn js_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        return i128::from_str_radix(hex, 16).map_or(f64::NAN, |n| n as f64);
    }
    if let Some(oct) = t.strip_prefix("0o").or_else(|| t.strip_prefix("0O")) {
        return i128::from_str_radix(oct, 8).map_or(f64::NAN, |n| n as f64);
    }
    if let Some(bin) = t.strip_prefix("0b").or_else(|| t.strip_prefix("0B")) {
        return i128::from_str_radix(bin, 2).map_or(f64::NAN, |n| n as f64);
    }
    // Rust's float parser accepts "inf"/"nan" spellings that JS rejects.
    let unsigned = t.strip_prefix(&['+', '-'][..]).unwrap_or(t);
    if unsigned.eq_ignore_ascii_case("inf")
        || unsigned.eq_ignore_ascii_case("infinity")
        || unsigned.eq_ignore_ascii_case("nan")
    {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// JS `parseFloat(s)` semantics: longest leading decimal-float prefix.
fn js_parse_float(s: &str) -> f64 {
    let t = s.trim_start();
    let (sign, digits) = match t.as_bytes().first() {
        Some(b'-') => (-1.0, &t[1..]),
        Some(b'+') => (1.0, &t[1..]),
        _ => (1.0, t),
    };
    if digits.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let bytes = digits.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            seen_digit = true;
        }
    }
    if !seen_digit {
        return f64::NAN;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let mut exp_end = exp;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp {
            end = exp_end;
        }
    }
    digits[..end].parse::<f64>().map_or(f64::NAN, |n| sign * n)
}
