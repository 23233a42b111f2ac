//! Exit codes for the CLI following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - the help display was written (or the reader went away)
//! - `5`: I/O error writing the display
//! - `6`: Configuration error
//! - `7`: Render defect in the banner font or static table data
//! - `126-255`: Reserved by shell

use crate::error::HelpError;

/// Standard exit codes for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Writing the display failed (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,

    /// Font or table data is broken (code 7)
    RenderError = 7,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

impl ExitCode {
    /// Convert a `HelpError` to the appropriate exit code.
    pub fn from_error(error: &HelpError) -> Self {
        match error {
            HelpError::Config(_) | HelpError::UnknownToolkit { .. } => ExitCode::ConfigError,

            // Packaging defects: the font or catalog shipped broken
            HelpError::UnknownFont { .. }
            | HelpError::FontLoad { .. }
            | HelpError::EmptyTitle
            | HelpError::UnrenderableTitle { .. }
            | HelpError::RowWidth { .. } => ExitCode::RenderError,

            HelpError::Write(_) => ExitCode::IoError,
        }
    }
}
