//! Error types for the help display renderer
//!
//! Every failure here is a packaging or authoring defect (bad font,
//! malformed static table, broken config) rather than a runtime condition,
//! so callers report the error and exit instead of recovering.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rendering the help display
#[derive(Error, Debug)]
pub enum HelpError {
    /// Banner font errors
    #[error("Unknown banner font '{font}'. Use 'standard' or a path to a .flf font file")]
    UnknownFont { font: String },

    #[error("Failed to load banner font '{path}': {reason}")]
    FontLoad { path: PathBuf, reason: String },

    #[error("Banner title must not be empty")]
    EmptyTitle,

    #[error("Banner font has no glyphs for any character of '{title}'")]
    UnrenderableTitle { title: String },

    /// Static table data errors
    #[error("Table '{table}' row {row} has {found} fields but the table has {expected} columns")]
    RowWidth {
        table: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Unknown toolkit '{name}'. Available toolkits: {available}")]
    UnknownToolkit { name: String, available: String },

    /// Output sink errors
    #[error("Failed to write help output: {0}")]
    Write(#[from] std::io::Error),
}

impl HelpError {
    /// Get a stable status code for this error type.
    pub fn status_code(&self) -> &'static str {
        match self {
            Self::UnknownFont { .. } => "UNKNOWN_FONT",
            Self::FontLoad { .. } => "FONT_LOAD_ERROR",
            Self::EmptyTitle => "EMPTY_TITLE",
            Self::UnrenderableTitle { .. } => "UNRENDERABLE_TITLE",
            Self::RowWidth { .. } => "ROW_WIDTH_MISMATCH",
            Self::Config(_) => "CONFIG_ERROR",
            Self::UnknownToolkit { .. } => "UNKNOWN_TOOLKIT",
            Self::Write(_) => "WRITE_ERROR",
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::UnknownFont { .. } => vec![
                "Set banner.font to 'standard' in settings.toml",
                "Or point TKHELP_BANNER__FONT at an existing .flf file",
            ],
            Self::FontLoad { .. } => vec![
                "Check that the font file exists and is a valid FIGlet font",
            ],
            Self::UnrenderableTitle { .. } => vec![
                "Use ASCII characters in banner.title",
                "Or configure a .flf font that covers the title's characters",
            ],
            Self::Config(_) => vec![
                "Check settings.toml for typos",
                "Unset TKHELP_* environment variables to fall back to defaults",
            ],
            Self::UnknownToolkit { .. } => {
                vec!["Pass one of the available toolkits with --toolkit"]
            }
            Self::Write(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                vec!["Check that stdout is writable"]
            }
            _ => vec![],
        }
    }
}

/// Result type alias for help rendering operations
pub type HelpResult<T> = Result<T, HelpError>;
