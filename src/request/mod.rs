//! Canonical request model
//!
//! Both parsers produce a [`Request`] and both builders render one. The
//! model carries only what survives a conversion: URL, method, the kept
//! headers and a raw JSON body.

pub mod json;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::http;

/// Request headers, iterated in lexicographic order of their names
pub type Headers = BTreeMap<String, String>;

/// A parsed HTTP request invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    /// Target URL; empty when none could be found
    pub url: String,
    /// Uppercase HTTP method
    pub method: String,
    /// Headers kept by the parser
    pub headers: Headers,
    /// Raw JSON body text; empty means no body
    pub body: String,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: http::GET.to_string(),
            headers: Headers::new(),
            body: String::new(),
        }
    }
}

impl Request {
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    pub fn is_get(&self) -> bool {
        self.method == http::GET
    }
}
