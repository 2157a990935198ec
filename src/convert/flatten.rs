//! JSON to HTTPie field flattening
//!
//! Turns a JSON document into the request items HTTPie would need to
//! rebuild it: strings become `key=value`, everything else `key:=json`, and
//! nesting is spelled with brackets (`user[name]=Ann`, `items[0]:=1`).
//! Object keys are visited in lexicographic order so output is stable.
//!
//! Each token must survive shell word splitting: a string value with
//! whitespace is quoted on its own (`note='two words'`), and a key path with
//! whitespace quotes the whole token (`'first name=Ann'`).

use serde_json::{Number, Value as JsonValue};

use crate::strings::single_quote;

const STRING_SEPARATOR: &str = "=";
const JSON_SEPARATOR: &str = ":=";

/// Flatten a JSON value into HTTPie field tokens under `prefix`
///
/// An empty prefix makes the top-level object keys bare field names.
pub fn flatten(value: &JsonValue, prefix: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    flatten_into(value, prefix, &mut tokens);
    tokens
}

fn flatten_into(value: &JsonValue, prefix: &str, tokens: &mut Vec<String>) {
    match value {
        JsonValue::Object(map) => {
            if map.is_empty() && !prefix.is_empty() {
                tokens.push(field_token(prefix, JSON_SEPARATOR, "{}"));
                return;
            }
            let mut entries: Vec<(&String, &JsonValue)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (key, child) in entries {
                flatten_into(child, &child_prefix(prefix, key), tokens);
            }
        }
        JsonValue::Array(items) => {
            if items.is_empty() && !prefix.is_empty() {
                tokens.push(field_token(prefix, JSON_SEPARATOR, "[]"));
                return;
            }
            for (idx, child) in items.iter().enumerate() {
                flatten_into(child, &format!("{}[{}]", prefix, idx), tokens);
            }
        }
        JsonValue::String(s) => tokens.push(field_token(prefix, STRING_SEPARATOR, s)),
        JsonValue::Number(n) => tokens.push(field_token(prefix, JSON_SEPARATOR, &render_number(n))),
        JsonValue::Bool(b) => tokens.push(field_token(prefix, JSON_SEPARATOR, &b.to_string())),
        JsonValue::Null => tokens.push(field_token(prefix, JSON_SEPARATOR, "null")),
    }
}

fn child_prefix(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}[{}]", prefix, key)
    }
}

/// Join a key path and value into one request item word
fn field_token(path: &str, separator: &str, value: &str) -> String {
    if has_whitespace(path) {
        single_quote(&format!("{}{}{}", path, separator, value))
    } else if has_whitespace(value) {
        format!("{}{}{}", path, separator, single_quote(value))
    } else {
        format!("{}{}{}", path, separator, value)
    }
}

fn has_whitespace(s: &str) -> bool {
    s.chars().any(char::is_whitespace)
}

/// Render a number, dropping the fraction of integral floats (`3.0` -> `3`)
pub fn render_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}
