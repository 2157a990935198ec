//! HTTP protocol constants
//!
//! Method names shared by the parsers and builders.

mod method;

pub use method::*;
