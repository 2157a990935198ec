//! Common test utilities for reqconv integration tests
//!
//! Runs the built binary with an isolated config directory, optional
//! config file contents and optional stdin.

#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Environment variable the binary reads its config directory from
pub const CONFIG_DIR_ENV: &str = "REQCONV_CONFIG_DIR";

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CliResponse {
    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }

    /// Stdout without the trailing newline
    pub fn line(&self) -> &str {
        self.stdout.trim_end_matches('\n')
    }
}

/// Isolated environment for one CLI run
pub struct MockEnvironment {
    pub config_dir: TempDir,
    pub stdin: Option<Vec<u8>>,
    pub env_vars: Vec<(String, String)>,
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().expect("Failed to create temp config dir"),
            stdin: None,
            env_vars: Vec::new(),
        }
    }

    /// Write `config.toml` into the config directory
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write config file");
        self
    }

    pub fn with_stdin(mut self, content: &str) -> Self {
        self.stdin = Some(content.as_bytes().to_vec());
        self
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env_vars.push((key.to_string(), value.to_string()));
        self
    }
}

/// Run the CLI with no stdin
pub fn reqconv(args: &[&str]) -> CliResponse {
    reqconv_with_env(args, &MockEnvironment::new())
}

/// Run the CLI, feeding `stdin`
pub fn reqconv_stdin(args: &[&str], stdin: &str) -> CliResponse {
    reqconv_with_env(args, &MockEnvironment::new().with_stdin(stdin))
}

/// Run the CLI in the given environment
pub fn reqconv_with_env(args: &[&str], env: &MockEnvironment) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_reqconv"));
    cmd.args(args);
    cmd.env(CONFIG_DIR_ENV, env.config_dir.path());
    cmd.env_remove("RUST_LOG");
    for (key, value) in &env.env_vars {
        cmd.env(key, value);
    }

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    if let Some(ref stdin_data) = env.stdin {
        cmd.stdin(Stdio::piped());
        let mut child = cmd.spawn().expect("Failed to spawn command");
        {
            let stdin = child.stdin.as_mut().expect("Failed to open stdin");
            // The process may exit before reading stdin (e.g. fatal config error).
            if let Err(e) = stdin.write_all(stdin_data) {
                assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe, "Failed to write to stdin: {e}");
            }
        }
        let output = child.wait_with_output().expect("Failed to wait for command");
        parse_output(output)
    } else {
        cmd.stdin(Stdio::null());
        let output = cmd.output().expect("Failed to execute command");
        parse_output(output)
    }
}

fn parse_output(output: Output) -> CliResponse {
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(1),
    }
}
