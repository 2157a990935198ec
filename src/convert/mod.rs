//! Conversion engine
//!
//! Parses a curl or HTTPie command into a [`Request`] and renders it back
//! out in either syntax:
//!
//! - **Curl parsing** ([`parse_curl`]): URL, `-X` method, whitelisted `-H`
//!   headers and the quoted `--data-raw`/`--data`/`-d` payload
//! - **HTTPie parsing** ([`parse_httpie`]): optional METHOD, URL, `Name:Value`
//!   headers and `key=value` / `key:=json` fields assembled into a JSON body
//! - **Curl building** ([`build_curl`]) and **HTTPie building**
//!   ([`build_httpie`]), the latter flattening the JSON body into field
//!   tokens with [`flatten`]
//!
//! ```text
//! $ echo "curl 'https://api.example.com/users' -X POST --data-raw '{\"name\":\"Ann\"}'" | reqconv --httpie
//! http POST https://api.example.com/users name=Ann
//! ```
//!
//! Nothing here fails: unrecognized input degrades to an empty URL, `GET`,
//! no headers and no body.

pub mod curl;
pub mod curl_import;
pub mod flatten;
pub mod httpie;
pub mod httpie_import;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use tracing::debug;

use crate::errors::ConvertError;
use crate::request::Request;
use crate::strings::split_words;

pub use curl::build_curl;
pub use curl_import::{parse_curl, parse_curl_with};
pub use flatten::flatten;
pub use httpie::build_httpie;
pub use httpie_import::{parse_httpie, parse_httpie_with};

/// Header names kept when no whitelist is configured
pub const DEFAULT_HEADER_WHITELIST: &[&str] = &["Authorization", "Content-Type"];

/// Command syntax
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// curl command line
    Curl,
    /// HTTPie command line
    Httpie,
}

impl Format {
    /// Heading printed above converted output
    pub fn label(&self) -> &'static str {
        match self {
            Format::Curl => "Cleaned Curl",
            Format::Httpie => "HTTPie Format",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Curl => write!(f, "curl"),
            Format::Httpie => write!(f, "httpie"),
        }
    }
}

impl FromStr for Format {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "curl" => Ok(Format::Curl),
            "httpie" | "http" => Ok(Format::Httpie),
            other => Err(ConvertError::Argument(format!(
                "unknown format '{}', expected 'curl' or 'httpie'",
                other
            ))),
        }
    }
}

/// Knobs shared by the parsers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Header names kept by the curl parser, compared case-insensitively
    pub header_whitelist: Vec<String>,
    /// Apply the whitelist to HTTPie headers as well
    pub filter_httpie_headers: bool,
    /// Rebuild nested JSON from `key[sub]` field paths
    pub nest_fields: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            header_whitelist: DEFAULT_HEADER_WHITELIST.iter().map(|s| s.to_string()).collect(),
            filter_httpie_headers: false,
            nest_fields: false,
        }
    }
}

impl ConvertOptions {
    /// Check if a header name is on the whitelist
    pub fn allows_header(&self, name: &str) -> bool {
        self.header_whitelist.iter().any(|h| h.eq_ignore_ascii_case(name.trim()))
    }
}

/// Guess the syntax of a normalized command line
pub fn detect_format(command: &str) -> Format {
    let words = split_words(command);
    match words.first().map(String::as_str) {
        Some("curl") => Format::Curl,
        Some("http") | Some("https") => Format::Httpie,
        _ if words.iter().any(|w| w == "curl") => Format::Curl,
        _ => Format::Httpie,
    }
}

/// Parse a normalized command in the given syntax
pub fn parse(command: &str, format: Format, options: &ConvertOptions) -> Request {
    match format {
        Format::Curl => parse_curl_with(command, options),
        Format::Httpie => parse_httpie_with(command, options),
    }
}

/// Render a request in the given syntax
pub fn build(request: &Request, format: Format) -> String {
    match format {
        Format::Curl => build_curl(request),
        Format::Httpie => build_httpie(request),
    }
}

/// Convert a normalized command line to `to` syntax
///
/// `from` of `None` detects the input syntax from the command itself.
pub fn convert(command: &str, from: Option<Format>, to: Format, options: &ConvertOptions) -> String {
    let from = from.unwrap_or_else(|| {
        let detected = detect_format(command);
        debug!(format = %detected, "detected input format");
        detected
    });

    let request = parse(command, from, options);
    debug!(
        request = %serde_json::to_string(&request).unwrap_or_default(),
        "parsed request"
    );

    build(&request, to)
}
