//! Diagnostics setup
//!
//! All diagnostics go to stderr through `tracing`, so stdout carries only
//! the converted command. `RUST_LOG` overrides the default `warn` level;
//! `--debug` forces debug output for this crate.

use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Install the global subscriber; a second call is a no-op
pub fn init(debug: bool, format: LogFormat) {
    let filter = if debug {
        EnvFilter::new(concat!(env!("CARGO_CRATE_NAME"), "=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}
