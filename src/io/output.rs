//! Output management for the help display.
//!
//! Owns the stdout and stderr sinks so the display can be captured in
//! tests, and turns write failures into exit codes.

use crate::display::theme::Theme;
use crate::document::DisplayDocument;
use crate::error::HelpError;
use crate::io::exit_code::ExitCode;
use std::io::{self, Write};

/// Writes the rendered display and error reports.
pub struct OutputManager {
    theme: Theme,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl OutputManager {
    /// Create a new output manager on the process stdout and stderr.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    /// Create an output manager with custom writers.
    pub fn new_with_writers(theme: Theme, stdout: Box<dyn Write>, stderr: Box<dyn Write>) -> Self {
        Self {
            theme,
            stdout,
            stderr,
        }
    }

    /// Render the document to stdout.
    ///
    /// A closed pipe (`tkhelp | head`) counts as success.
    pub fn display(&mut self, document: &DisplayDocument) -> ExitCode {
        match document.render(&mut self.stdout, &self.theme) {
            Ok(()) => ExitCode::Success,
            Err(HelpError::Write(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!("stdout closed before the display was written");
                ExitCode::Success
            }
            Err(e) => self.error(&e),
        }
    }

    /// Report an error with suggestions on stderr.
    pub fn error(&mut self, error: &HelpError) -> ExitCode {
        tracing::debug!("reporting {} error", error.status_code());
        let mut report = format!("{}\n", self.theme.error_with_icon(&error.to_string()));
        for suggestion in error.recovery_suggestions() {
            report.push_str(&format!("  Suggestion: {suggestion}\n"));
        }
        // Nothing sensible is left to do when stderr itself is gone
        let _ = self.stderr.write_all(report.as_bytes());
        let _ = self.stderr.flush();
        ExitCode::from_error(error)
    }

    /// Print a warning on stderr.
    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.stderr, "{}", self.theme.warning_with_icon(message))
    }
}
