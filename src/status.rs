//! Exit status codes for the CLI
//!
//! - 0: Success
//! - 1: Any error (bad arguments, bad config, unreadable input)
//!
//! A command that cannot be understood is not an error: the conversion
//! degrades to default fields and still exits 0.

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}
