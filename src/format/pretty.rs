// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Deterministic rendering of bodies
//!
//! Containers that fit in [`WIDTH`] columns stay on one line, larger ones are
//! broken up one entry per line. Object keys keep their insertion order and
//! width is counted in characters.

use serde_json::Value;

use crate::http::RequestData;

/// Line width before containers are broken up
pub const WIDTH: usize = 80;

const INDENT: usize = 2;

/// Render a JSON value
pub fn pretty_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

/// Render raw bytes as an escaped byte-string literal
pub fn pretty_bytes(bytes: &[u8]) -> String {
    format!("b\"{}\"", bytes.escape_ascii())
}

/// Render a request `data` body
pub fn pretty_data(data: &RequestData) -> String {
    match data {
        RequestData::Text(text) => quote(text),
        RequestData::Bytes(bytes) => pretty_bytes(bytes),
        // pairs, not an object: repeated keys are all sent
        RequestData::Form(pairs) => {
            let pairs = pairs
                .iter()
                .map(|(k, v)| {
                    Value::Array(vec![Value::String(k.clone()), Value::String(v.clone())])
                })
                .collect();
            pretty_json(&Value::Array(pairs))
        }
    }
}

fn write_value(out: &mut String, value: &Value, indent: usize) {
    let inline = inline(value);
    if indent + inline.chars().count() <= WIDTH {
        out.push_str(&inline);
        return;
    }

    match value {
        Value::Array(items) if !items.is_empty() => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                pad(out, indent + INDENT);
                write_value(out, item, indent + INDENT);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            pad(out, indent);
            out.push(']');
        }
        Value::Object(map) if !map.is_empty() => {
            out.push_str("{\n");
            for (i, (key, item)) in map.iter().enumerate() {
                pad(out, indent + INDENT);
                out.push_str(&quote(key));
                out.push_str(": ");
                write_value(out, item, indent + INDENT);
                if i + 1 < map.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            pad(out, indent);
            out.push('}');
        }
        // long scalars cannot be split
        _ => out.push_str(&inline),
    }
}

fn inline(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(inline).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quote(k), inline(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        scalar => scalar.to_string(),
    }
}

fn quote(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}

fn pad(out: &mut String, width: usize) {
    out.extend(std::iter::repeat(' ').take(width));
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_short_values_stay_inline() {
        assert_eq!(pretty_json(&json!({"a": 1, "b": [1, 2]})), r#"{"a": 1, "b": [1, 2]}"#);
        assert_eq!(pretty_json(&json!([])), "[]");
        assert_eq!(pretty_json(&json!("x\"y")), r#""x\"y""#);
        assert_eq!(pretty_json(&json!(null)), "null");
    }

    #[test]
    fn test_key_order_preserved() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        assert_eq!(pretty_json(&value), r#"{"z": 1, "a": 2, "m": 3}"#);
    }

    #[test]
    fn test_long_values_break() {
        let long = "x".repeat(50);
        let value = json!({"first": long, "second": {"nested": long}});
        let expected = format!(
            "{{\n  \"first\": \"{long}\",\n  \"second\": {{\"nested\": \"{long}\"}}\n}}"
        );
        assert_eq!(pretty_json(&value), expected);
    }

    #[test]
    fn test_bytes_and_data() {
        assert_eq!(pretty_bytes(b""), "b\"\"");
        assert_eq!(pretty_bytes(b"hi\n\x00"), "b\"hi\\n\\x00\"");
        assert_eq!(pretty_data(&RequestData::Text("a=1".into())), "\"a=1\"");
        assert_eq!(
            pretty_data(&RequestData::Form(vec![("q".into(), "rust".into())])),
            r#"[["q", "rust"]]"#
        );
    }

    #[test]
    fn test_form_keeps_repeated_keys() {
        let form = RequestData::Form(vec![
            ("tag".into(), "a".into()),
            ("tag".into(), "b".into()),
        ]);
        assert_eq!(pretty_data(&form), r#"[["tag", "a"], ["tag", "b"]]"#);
    }

    #[test]
    fn test_width_counts_characters() {
        // 70 two-byte characters still fit on one line
        let value = json!({"k": "é".repeat(70)});
        let rendered = pretty_json(&value);
        assert!(!rendered.contains('\n'));
        assert_eq!(rendered.chars().count(), 79);
    }
}
