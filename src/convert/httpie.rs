//! HTTPie command generation
//!
//! Renders a request as `http METHOD URL [Name:Value ...] [field ...]`.
//! A non-empty JSON object or array body is spelled out as request items
//! through the flattener; any other body (including `{}` and `[]`, which
//! have no items) is passed as `--raw`.

use serde_json::Value as JsonValue;
use tracing::debug;

use super::flatten::flatten;
use crate::request::Request;
use crate::strings::single_quote;

/// Render a request as an HTTPie command
pub fn build_httpie(request: &Request) -> String {
    let mut parts: Vec<String> = vec![
        "http".to_string(),
        request.method.to_ascii_uppercase(),
        request.url.clone(),
    ];

    for (name, value) in &request.headers {
        parts.push(header_item(name, value));
    }

    if request.has_body() {
        parts.extend(body_items(&request.body));
    }

    parts.join(" ")
}

/// `Name:value`, quoting values that contain a space or a period
fn header_item(name: &str, value: &str) -> String {
    if value.contains(' ') || value.contains('.') {
        format!("{}:{}", name, single_quote(value))
    } else {
        format!("{}:{}", name, value)
    }
}

fn body_items(body: &str) -> Vec<String> {
    match serde_json::from_str::<JsonValue>(body.trim()) {
        Ok(value) if has_items(&value) => flatten(&value, ""),
        Ok(_) | Err(_) => {
            debug!("body has no request items, passing it as --raw");
            vec!["--raw".to_string(), single_quote(body)]
        }
    }
}

fn has_items(value: &JsonValue) -> bool {
    match value {
        JsonValue::Object(map) => !map.is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        _ => false,
    }
}
