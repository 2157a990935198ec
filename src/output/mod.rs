//! Output writer
//!
//! Prints the converted command, optionally preceded by a label naming its
//! format (only useful on a terminal; pipes get the bare command).

use std::io::{self, Write};

use console::style;

use crate::convert::Format;

/// How the result is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Print the format label line first
    pub label: bool,
    /// Style the label with ANSI colors
    pub colors: bool,
}

/// Label line, "✅ HTTPie Format:" or "✅ Cleaned Curl:"
pub fn label(format: Format) -> String {
    format!("✅ {}:", format.label())
}

/// Write a converted command
pub fn write_result<W: Write>(
    out: &mut W,
    format: Format,
    command: &str,
    options: &OutputOptions,
) -> io::Result<()> {
    if options.label {
        let text = label(format);
        if options.colors {
            writeln!(out, "\n{}", style(text).green().bold().force_styling(true))?;
        } else {
            writeln!(out, "\n{}", text)?;
        }
    }
    writeln!(out, "{}", command)?;
    out.flush()
}
