//! Curl command generation

use crate::request::Request;
use crate::strings::single_quote;

/// Render a request as a curl command
///
/// `-X` is omitted for GET. Header values and the body are single-quoted
/// verbatim; embedded single quotes are not escaped.
pub fn build_curl(request: &Request) -> String {
    let mut parts: Vec<String> = vec!["curl".to_string(), request.url.clone()];

    if !request.is_get() {
        parts.push("-X".to_string());
        parts.push(request.method.clone());
    }

    for (name, value) in &request.headers {
        parts.push("-H".to_string());
        parts.push(single_quote(&format!("{}: {}", name, value)));
    }

    if request.has_body() {
        parts.push("--data-raw".to_string());
        parts.push(single_quote(&request.body));
    }

    parts.join(" ")
}
