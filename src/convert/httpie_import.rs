//! HTTPie command parsing
//!
//! Reads `http [METHOD] URL [items...]`. Headers are kept as given, data
//! fields are gathered into one JSON object body. Field keys are literal by
//! default, so `user[name]=Ann` produces `{"user[name]":"Ann"}`; with
//! [`ConvertOptions::nest_fields`] the bracket paths are rebuilt into nested
//! JSON instead.

use serde_json::{Map, Value as JsonValue};
use tracing::{debug, warn};

use super::ConvertOptions;
use crate::http;
use crate::input::InputItem;
use crate::json::to_sorted_string;
use crate::request::json::{insert_path, is_nested_path};
use crate::request::Request;
use crate::strings::{split_words, unquote};

/// Pseudo-command names accepted as the first word
const PROGRAM_NAMES: &[&str] = &["http", "https"];

/// Flag carrying a verbatim request body
const RAW_FLAG: &str = "--raw";

/// Parse an HTTPie command with the default options
pub fn parse_httpie(command: &str) -> Request {
    parse_httpie_with(command, &ConvertOptions::default())
}

/// Parse an HTTPie command into a Request
pub fn parse_httpie_with(command: &str, options: &ConvertOptions) -> Request {
    let words = split_words(command);
    let mut words = words.iter().map(String::as_str).peekable();
    let mut request = Request::default();

    if words.peek().is_some_and(|w| PROGRAM_NAMES.contains(w)) {
        words.next();
    }

    if let Some(method) = words.next_if(|w| http::is_supported(w)) {
        request.method = http::normalize(method);
    }

    request.url = words.next().map(|w| unquote(w).to_string()).unwrap_or_default();

    let mut fields: Vec<(String, JsonValue)> = Vec::new();
    let mut raw_body: Option<String> = None;

    while let Some(word) = words.next() {
        if word == RAW_FLAG {
            raw_body = words.next().map(|w| unquote(w).to_string());
            continue;
        }
        if let Some(raw) = word.strip_prefix("--raw=") {
            raw_body = Some(unquote(raw).to_string());
            continue;
        }
        if word.starts_with('-') {
            debug!(flag = word, "dropping flag");
            continue;
        }

        match InputItem::parse(word) {
            Some(InputItem::Header { name, value }) => {
                if options.filter_httpie_headers && !options.allows_header(&name) {
                    debug!(header = %name, "dropping header outside whitelist");
                    continue;
                }
                request.headers.insert(name, value);
            }
            Some(item) => {
                if let Some(value) = item.json_value() {
                    fields.push((item.key().to_string(), value));
                }
            }
            None => debug!(word, "ignoring word that is not a request item"),
        }
    }

    request.body = match raw_body {
        Some(raw) => raw,
        None if fields.is_empty() => String::new(),
        None => assemble_body(fields, options.nest_fields),
    };

    request
}

/// Serialize data fields as a JSON object with sorted keys
fn assemble_body(fields: Vec<(String, JsonValue)>, nest: bool) -> String {
    let mut root = JsonValue::Object(Map::new());

    for (key, value) in fields {
        if nest && is_nested_path(&key) {
            match insert_path(&mut root, &key, value.clone()) {
                Ok(()) => continue,
                Err(e) => warn!(error = %e, "keeping field key literally"),
            }
        }
        insert_literal(&mut root, key, value);
    }

    to_sorted_string(root)
}

fn insert_literal(root: &mut JsonValue, key: String, value: JsonValue) {
    match root {
        JsonValue::Object(map) => {
            map.insert(key, value);
        }
        // A root array from `[0]=x` has no room for named keys
        _ => debug!(key = %key, "body is an array, dropping named field"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> ConvertOptions {
        ConvertOptions {
            nest_fields: true,
            ..ConvertOptions::default()
        }
    }

    #[test]
    fn test_method_url_and_fields() {
        let req = parse_httpie("http GET https://x.test/items id:=5 active:=true");
        assert_eq!(req.method, "GET");
        assert_eq!(req.url, "https://x.test/items");
        assert_eq!(req.body, r#"{"active":true,"id":5}"#);
    }

    #[test]
    fn test_method_optional_and_case_insensitive() {
        let req = parse_httpie("http x.test/a");
        assert_eq!(req.method, "GET");
        assert_eq!(req.url, "x.test/a");

        let req = parse_httpie("https delete x.test/a");
        assert_eq!(req.method, "DELETE");
        assert_eq!(req.url, "x.test/a");
    }

    #[test]
    fn test_without_program_name() {
        let req = parse_httpie("POST x.test name=Ann");
        assert_eq!(req.method, "POST");
        assert_eq!(req.url, "x.test");
        assert_eq!(req.body, r#"{"name":"Ann"}"#);
    }

    #[test]
    fn test_headers_not_filtered_by_default() {
        let req = parse_httpie("http x.test Authorization:'Bearer abc' X-Trace:1");
        assert_eq!(req.headers["Authorization"], "Bearer abc");
        assert_eq!(req.headers["X-Trace"], "1");
        assert!(!req.has_body());
    }

    #[test]
    fn test_headers_filtered_when_enabled() {
        let options = ConvertOptions {
            filter_httpie_headers: true,
            ..ConvertOptions::default()
        };
        let req = parse_httpie_with("http x.test Authorization:t X-Trace:1", &options);
        assert_eq!(req.headers.len(), 1);
        assert!(req.headers.contains_key("Authorization"));
    }

    #[test]
    fn test_string_and_typed_fields() {
        let req = parse_httpie(r#"http POST x.test name=Ann age:=30 tags:='["a","b"]' when:=soon"#);
        assert_eq!(req.body, r#"{"age":30,"name":"Ann","tags":["a","b"],"when":"soon"}"#);
    }

    #[test]
    fn test_quoted_string_field() {
        let req = parse_httpie("http POST x.test note='two words'");
        assert_eq!(req.body, r#"{"note":"two words"}"#);
    }

    #[test]
    fn test_bracket_keys_stay_flat() {
        let req = parse_httpie("http POST x.test user[name]=Ann items[0]:=1");
        assert_eq!(req.body, r#"{"items[0]":1,"user[name]":"Ann"}"#);
    }

    #[test]
    fn test_bracket_keys_nested_when_enabled() {
        let req = parse_httpie_with(
            "http POST x.test user[name]=Ann items[0]:=1 items[1]=x user[age]:=30",
            &nested(),
        );
        assert_eq!(req.body, r#"{"items":[1,"x"],"user":{"age":30,"name":"Ann"}}"#);
    }

    #[test]
    fn test_bad_nested_path_falls_back_to_literal() {
        let req = parse_httpie_with("http POST x.test a=1 a[b]=2", &nested());
        assert_eq!(req.body, r#"{"a":"1","a[b]":"2"}"#);
    }

    #[test]
    fn test_later_field_overwrites() {
        let req = parse_httpie("http POST x.test a=1 a=2");
        assert_eq!(req.body, r#"{"a":"2"}"#);
    }

    #[test]
    fn test_raw_body_and_flags() {
        let req = parse_httpie("http POST x.test --verbose --raw 'a=1&b=2'");
        assert_eq!(req.method, "POST");
        assert_eq!(req.url, "x.test");
        assert_eq!(req.body, "a=1&b=2");
    }

    #[test]
    fn test_ignored_words() {
        let req = parse_httpie("http x.test justaword");
        assert!(req.headers.is_empty());
        assert!(!req.has_body());
    }

    #[test]
    fn test_empty_and_degenerate_input() {
        assert_eq!(parse_httpie(""), Request::default());
        assert_eq!(parse_httpie("http"), Request::default());
        assert_eq!(parse_httpie("http POST").method, "POST");
        assert_eq!(parse_httpie("http POST").url, "");
    }
}
