//! CLI execution
//!
//! Loads the config, merges its default flags into the arguments, sets up
//! logging, then reads one command (inline or from stdin), converts it and
//! prints the result. Errors surface here as a message and exit status 1.

use std::io::Read;

use clap::Parser;
use tracing::{debug, warn};

use crate::cli::Args;
use crate::config::Config;
use crate::context::Environment;
use crate::convert::convert;
use crate::errors::{ConvertError, Result};
use crate::input;
use crate::logging;
use crate::output::{write_result, OutputOptions};
use crate::status::ExitStatus;

/// Prompt shown when the command is pasted interactively
const PASTE_PROMPT: &str = "Paste your curl or HTTPie command, then press Ctrl+D:";

/// Main entry point for the CLI.
///
/// Loads configuration, parses arguments, and runs one conversion.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = std::path::Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let debug = args.iter().any(|a| a == "--debug");

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => return handle_error(e, debug),
    };

    let merged_args = merge_default_options(args, &config);

    let parsed = match Args::try_parse_from(&merged_args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    logging::init(parsed.debug, parsed.log_format.unwrap_or_default());
    debug!(config = %config.config_file().display(), "configuration loaded");

    if let Some(shell) = parsed.generate_completions {
        generate_completions(shell, &env.program_name);
        return ExitStatus::Success;
    }

    match program(&parsed, &config, env) {
        Ok(status) => status,
        Err(e) => handle_error(e, parsed.debug),
    }
}

/// Read, convert and print one command
pub fn program(args: &Args, config: &Config, env: Environment) -> Result<ExitStatus> {
    let raw = read_command(args, &env)?;
    let command = input::normalize(&raw);
    if command.is_empty() {
        warn!("no command given, nothing to convert");
    }

    let mut options = config.convert_options();
    options.nest_fields |= args.nest;
    options.filter_httpie_headers |= args.filter_headers;

    let to = args.output_format(config.default_output);
    let converted = convert(&command, args.from, to, &options);

    let output = OutputOptions {
        label: env.stdout_isatty && !args.quiet,
        colors: env.colors,
    };
    write_result(&mut env.stdout.lock(), to, &converted, &output)?;

    Ok(ExitStatus::Success)
}

fn read_command(args: &Args, env: &Environment) -> Result<String> {
    if let Some(command) = args.inline_command() {
        return Ok(command);
    }

    if env.stdin_isatty {
        eprintln!("{}", PASTE_PROMPT);
    }

    let mut raw = String::new();
    env.stdin.lock().read_to_string(&mut raw)?;
    Ok(raw)
}

/// Prepend configured default flags to the command-line arguments
fn merge_default_options(args: Vec<String>, config: &Config) -> Vec<String> {
    if config.default_options.is_empty() {
        return args;
    }

    let (flags, positional): (Vec<_>, Vec<_>) = config.default_options.iter()
        .partition(|opt| opt.starts_with('-'));

    if !positional.is_empty() {
        eprintln!("Warning: Positional arguments in default options are ignored: {:?}", positional);
    }

    if flags.is_empty() {
        return args;
    }

    let mut merged = Vec::with_capacity(args.len() + flags.len());

    if let Some(program) = args.first() {
        merged.push(program.clone());
    }

    merged.extend(flags.into_iter().cloned());
    merged.extend(args.into_iter().skip(1));

    merged
}

fn handle_error(error: ConvertError, debug: bool) -> ExitStatus {
    if debug {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }

    ExitStatus::Error
}

fn generate_completions(shell: clap_complete::Shell, program_name: &str) {
    use clap::CommandFactory;

    let mut cmd = Args::command();
    clap_complete::generate(shell, &mut cmd, program_name, &mut std::io::stdout());
}
