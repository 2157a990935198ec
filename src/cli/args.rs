//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueEnum};
use clap_complete::Shell;

use crate::convert::Format;
use crate::strings::shell_quote;

/// reqconv - convert HTTP request commands between curl and HTTPie syntax
///
/// Pass the command as one quoted argument, or paste it (multi-line with
/// trailing backslashes is fine) on standard input.
#[derive(Parser, Debug, Clone)]
#[command(name = "reqconv", version, about, long_about = None)]
pub struct Args {
    /// Command to convert; read from stdin when omitted
    #[arg(value_name = "COMMAND", trailing_var_arg = true, num_args = 1..)]
    pub command: Vec<String>,

    // =========================================================================
    // FORMATS
    // =========================================================================

    /// Input syntax (detected from the command when omitted)
    #[arg(short = 'f', long = "from", value_name = "FORMAT", value_enum)]
    pub from: Option<Format>,

    /// Output syntax
    #[arg(short = 't', long = "to", value_name = "FORMAT", value_enum)]
    pub to: Option<Format>,

    /// Output a curl command (shorthand for --to curl)
    #[arg(short = 'c', long = "curl", action = ArgAction::SetTrue)]
    pub curl: bool,

    /// Output an HTTPie command (shorthand for --to httpie, wins over --curl)
    #[arg(short = 'H', long = "httpie", action = ArgAction::SetTrue)]
    pub httpie: bool,

    // =========================================================================
    // PARSING
    // =========================================================================

    /// Rebuild nested JSON from bracket fields like user[name]=Ann
    #[arg(long = "nest", action = ArgAction::SetTrue)]
    pub nest: bool,

    /// Apply the header whitelist to HTTPie input as well
    #[arg(long = "filter-headers", action = ArgAction::SetTrue)]
    pub filter_headers: bool,

    // =========================================================================
    // OUTPUT & TROUBLESHOOTING
    // =========================================================================

    /// Print only the converted command, without the format label
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    pub quiet: bool,

    /// Diagnostics format on stderr: text (default) or json (JSON Lines)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    /// Print debug diagnostics and full error details
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,

    /// Generate shell completions and exit
    #[arg(long = "generate-completions", value_name = "SHELL", value_enum)]
    pub generate_completions: Option<Shell>,
}

impl Args {
    /// Resolve the output format: `--to`, then `--httpie`, then `--curl`,
    /// then the configured default, then curl
    pub fn output_format(&self, configured: Option<Format>) -> Format {
        if let Some(to) = self.to {
            return to;
        }
        if self.httpie {
            return Format::Httpie;
        }
        if self.curl {
            return Format::Curl;
        }
        configured.unwrap_or(Format::Curl)
    }

    /// The inline command, if one was given
    ///
    /// A single argument is taken as the whole command line. Several
    /// arguments are the words the shell already split, so any word holding
    /// whitespace or quotes is quoted again before joining.
    pub fn inline_command(&self) -> Option<String> {
        match self.command.as_slice() {
            [] => None,
            [line] => Some(line.clone()),
            words => Some(words.iter().map(|w| shell_quote(w)).collect::<Vec<_>>().join(" ")),
        }
    }
}

/// Log format for diagnostics
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("reqconv").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_output_format_precedence() {
        assert_eq!(parse(&[]).output_format(None), Format::Curl);
        assert_eq!(parse(&[]).output_format(Some(Format::Httpie)), Format::Httpie);
        assert_eq!(parse(&["-c"]).output_format(Some(Format::Httpie)), Format::Curl);
        assert_eq!(parse(&["-c", "-H"]).output_format(None), Format::Httpie);
        assert_eq!(parse(&["-H", "--to", "curl"]).output_format(None), Format::Curl);
    }

    #[test]
    fn test_inline_command_keeps_its_flags() {
        let args = parse(&["--httpie", "curl", "-X", "POST", "https://x.test", "-H", "Authorization: t"]);
        assert!(args.httpie);
        assert_eq!(
            args.inline_command().unwrap(),
            "curl -X POST https://x.test -H 'Authorization: t'"
        );
    }

    #[test]
    fn test_inline_words_requoted() {
        let args = parse(&["curl", "u", "--data-raw", r#"{"a":"b"}"#, "-H", "X-Note: it's"]);
        assert_eq!(
            args.inline_command().unwrap(),
            r#"curl u --data-raw '{"a":"b"}' -H "X-Note: it's""#
        );
    }

    #[test]
    fn test_single_inline_argument_is_verbatim() {
        let args = parse(&["curl u -H 'Authorization: t'"]);
        assert_eq!(args.inline_command().unwrap(), "curl u -H 'Authorization: t'");
    }

    #[test]
    fn test_no_inline_command() {
        assert_eq!(parse(&["-q"]).inline_command(), None);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let err = Args::try_parse_from(["reqconv", "--to", "wget"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_from_format() {
        assert_eq!(parse(&["--from", "httpie"]).from, Some(Format::Httpie));
        assert_eq!(parse(&["-f", "curl"]).from, Some(Format::Curl));
    }
}
