//! Output handling and exit codes for the CLI.

pub mod exit_code;
pub mod output;

pub use exit_code::ExitCode;
pub use output::OutputManager;
