//! cURL command parsing
//!
//! Extracts the handful of things a conversion keeps from a curl command
//! line: the URL, the `-X` method, whitelisted `-H` headers and the quoted
//! data payload. Every other flag is dropped. Input is expected to be a
//! single normalized line (see [`crate::input::normalize`]).
//!
//! Each rule is a standalone `extract_*` function so it can be tested on
//! its own.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::ConvertOptions;
use crate::http;
use crate::request::{Headers, Request};
use crate::strings::trim_quotes;

/// First http(s) URL in the command, up to whitespace or a quote
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"https?://[^\s'"]+"#).unwrap());

/// `-X POST`, `-XPOST`, `--request POST`, `--request=POST`
static METHOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)(?:-X\s*|--request[\s=]+)(\w+)").unwrap());

/// `-H '...'` / `--header "..."`, capturing the quoted text
static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|\s)(?:-H|--header)\s+['"]([^'"]+)['"]"#).unwrap());

/// Standalone `-d` flag, value either attached or after whitespace
static SHORT_DATA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?:^|\s)(-d)[\s'"]"#).unwrap());

/// Separator between header name and value inside `-H`
const HEADER_SEPARATOR: &str = ": ";

/// Parse a curl command with the default options
pub fn parse_curl(command: &str) -> Request {
    parse_curl_with(command, &ConvertOptions::default())
}

/// Parse a curl command into a Request
pub fn parse_curl_with(command: &str, options: &ConvertOptions) -> Request {
    Request {
        url: extract_url(command),
        method: extract_method(command),
        headers: extract_headers(command, options),
        body: extract_body(command),
    }
}

/// Find the request URL
///
/// The word following `curl` wins, with surrounding quotes stripped, unless
/// it is a flag. Otherwise the first `http://` or `https://` URL anywhere in
/// the command is used. Empty when neither exists.
pub fn extract_url(command: &str) -> String {
    let words: Vec<&str> = command.split_whitespace().collect();

    let after_curl = words
        .windows(2)
        .filter(|pair| pair[0] == "curl")
        .map(|pair| trim_quotes(pair[1]))
        .find(|candidate| !candidate.is_empty() && !candidate.starts_with('-'));

    if let Some(url) = after_curl {
        return url.to_string();
    }

    match URL_RE.find(command) {
        Some(m) => m.as_str().to_string(),
        None => {
            debug!("no URL found in curl command");
            String::new()
        }
    }
}

/// Find the `-X` method, uppercased; `GET` when absent
pub fn extract_method(command: &str) -> String {
    METHOD_RE
        .captures(command)
        .and_then(|caps| caps.get(1))
        .map(|m| http::normalize(m.as_str()))
        .unwrap_or_else(|| http::GET.to_string())
}

/// Collect quoted `-H` headers whose names are on the whitelist
///
/// Each header is split on the first `": "`; anything without that
/// separator is ignored. A repeated name keeps the last value.
pub fn extract_headers(command: &str, options: &ConvertOptions) -> Headers {
    let mut headers = Headers::new();

    for caps in HEADER_RE.captures_iter(command) {
        let Some(raw) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        let Some((name, value)) = raw.split_once(HEADER_SEPARATOR) else {
            debug!(header = raw, "header has no ': ' separator, ignoring");
            continue;
        };

        if options.allows_header(name) {
            headers.insert(name.trim().to_string(), value.to_string());
        } else {
            debug!(header = name, "dropping header outside whitelist");
        }
    }

    headers
}

/// Capture the quoted payload of the data flag, verbatim
///
/// `--data-raw` is preferred, then `--data` (which also matches
/// `--data-binary` and friends), then `-d`. From the flag onwards the first
/// quote opens the value and the next quote of the same kind closes it. No
/// quote, or no closing quote, gives an empty body.
pub fn extract_body(command: &str) -> String {
    let Some(start) = data_flag_position(command) else {
        return String::new();
    };
    let rest = &command[start..];

    let Some((open, quote)) = rest.char_indices().find(|(_, c)| *c == '\'' || *c == '"') else {
        debug!("data flag without a quoted value");
        return String::new();
    };

    let value = &rest[open + 1..];
    match value.find(quote) {
        Some(close) => value[..close].to_string(),
        None => {
            debug!("data value has no closing quote");
            String::new()
        }
    }
}

fn data_flag_position(command: &str) -> Option<usize> {
    command
        .find("--data-raw")
        .or_else(|| command.find("--data"))
        .or_else(|| {
            SHORT_DATA_RE
                .captures(command)
                .and_then(|caps| caps.get(1))
                .map(|m| m.start())
        })
}
