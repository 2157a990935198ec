//! reqconv library interface
//!
//! Converts HTTP request commands between curl and HTTPie syntax.
//!
//! ```
//! use reqconv::{build_httpie, parse_curl};
//!
//! let request = parse_curl(
//!     r#"curl 'https://api.example.com/users' -X POST -H 'Authorization: Bearer abc' --data-raw '{"name":"Ann","age":30}'"#,
//! );
//! assert_eq!(
//!     build_httpie(&request),
//!     "http POST https://api.example.com/users Authorization:'Bearer abc' age:=30 name=Ann"
//! );
//! ```
//!
//! # Module Organization
//!
//! - [`convert`] - Parsers, builders and the JSON field flattener
//! - [`request`] - The canonical [`Request`] model
//! - [`input`] - Input normalization and HTTPie request items
//! - [`config`] - Optional TOML configuration
//! - [`errors`] - Error types (ConvertError, Result)
//! - [`core`] - CLI execution

pub mod cli;
pub mod config;
pub mod context;
pub mod convert;
pub mod core;
pub mod errors;
pub mod http;
pub mod input;
pub mod json;
pub mod logging;
pub mod output;
pub mod request;
pub mod status;
pub mod strings;

pub use convert::{
    build_curl, build_httpie, convert, detect_format, flatten, parse_curl, parse_curl_with,
    parse_httpie, parse_httpie_with, ConvertOptions, Format,
};
pub use request::Request;
