//! Configuration
//!
//! Optional `config.toml` with default flags, the default output format,
//! the header whitelist and field nesting.

#[allow(clippy::module_inception)]
mod config;

pub use config::{Config, CONFIG_DIR_ENV, CONFIG_FILE_NAME};
