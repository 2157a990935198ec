//! HTTP method constants and utilities

/// HTTP GET method
pub const GET: &str = "GET";

/// HTTP POST method
pub const POST: &str = "POST";

/// HTTP PUT method
pub const PUT: &str = "PUT";

/// HTTP PATCH method
pub const PATCH: &str = "PATCH";

/// HTTP DELETE method
pub const DELETE: &str = "DELETE";

/// HTTP HEAD method
pub const HEAD: &str = "HEAD";

/// HTTP OPTIONS method
pub const OPTIONS: &str = "OPTIONS";

/// Methods recognized as the optional positional METHOD of an HTTPie command
pub const SUPPORTED_METHODS: &[&str] = &[GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS];

/// Check if a word names one of the supported methods (case-insensitive)
pub fn is_supported(word: &str) -> bool {
    SUPPORTED_METHODS.iter().any(|m| m.eq_ignore_ascii_case(word))
}

/// Normalize a method name to its canonical uppercase form
pub fn normalize(method: &str) -> String {
    method.to_ascii_uppercase()
}
