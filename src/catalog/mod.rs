//! Static catalogs of the tools and shell functions shipped in each toolkit
//! container image.
//!
//! Everything here is compile-time data. A [`Toolkit`] bundles the banner
//! title, the welcome facts and the reference tables for one image.

mod programming;
mod python;

pub use programming::PROGRAMMING;
pub use python::PYTHON;

use crate::error::{HelpError, HelpResult};

/// A CLI or TUI tool installed in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolEntry {
    pub name: &'static str,
    /// Empty when the command is the same as the name
    pub command: &'static str,
    pub language: &'static str,
    pub purpose: &'static str,
}

impl ToolEntry {
    pub const fn new(
        name: &'static str,
        command: &'static str,
        language: &'static str,
        purpose: &'static str,
    ) -> Self {
        Self {
            name,
            command,
            language,
            purpose,
        }
    }

    /// The command to type, falling back to the name.
    pub fn invocation(&self) -> &'static str {
        if self.command.is_empty() {
            self.name
        } else {
            self.command
        }
    }

    pub fn command_is_name(&self) -> bool {
        self.command.is_empty()
    }
}

/// A shell function defined in the container's `.bashrc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionEntry {
    pub command: &'static str,
    pub purpose: &'static str,
}

impl FunctionEntry {
    pub const fn new(command: &'static str, purpose: &'static str) -> Self {
        Self { command, purpose }
    }
}

/// A labelled value shown in the welcome box, e.g. `OS Base: Debian Slim`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

impl Fact {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// Everything displayed for one container image.
#[derive(Debug, Clone, Copy)]
pub struct Toolkit {
    /// Lookup key used by `--toolkit` and the `toolkit` setting
    pub key: &'static str,
    /// Banner text
    pub title: &'static str,
    /// First line of the welcome box
    pub heading: &'static str,
    pub author: &'static str,
    pub facts: &'static [Fact],
    pub tools: &'static [ToolEntry],
    /// `None` when the image defines no shell helpers
    pub functions: Option<&'static [FunctionEntry]>,
    pub closing: Closing,
}

/// Final line of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closing {
    /// Italic reminder, e.g. `Remember to 'tmux a'`
    Reminder(&'static str),
    /// Points the user at the help command itself
    HelpCommand {
        command: &'static str,
        expansion: &'static str,
    },
}

/// All toolkits known to this binary, default first.
pub const TOOLKITS: &[&Toolkit] = &[&PROGRAMMING, &PYTHON];

/// Look up a toolkit by key (case-insensitive).
pub fn find_toolkit(name: &str) -> HelpResult<&'static Toolkit> {
    TOOLKITS
        .iter()
        .copied()
        .find(|toolkit| toolkit.key.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| HelpError::UnknownToolkit {
            name: name.to_string(),
            available: TOOLKITS
                .iter()
                .map(|toolkit| toolkit.key)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_invocation_falls_back_to_name() {
        let git = ToolEntry::new("git", "", "C", "Version Control");
        assert!(git.command_is_name());
        assert_eq!(git.invocation(), "git");

        let rg = ToolEntry::new("ripgrep", "rg", "Rust", "Modern version of grep");
        assert!(!rg.command_is_name());
        assert_eq!(rg.invocation(), "rg");
    }

    #[test]
    fn test_find_toolkit() {
        assert_eq!(find_toolkit("programming").unwrap().key, "programming");
        assert_eq!(find_toolkit("Python").unwrap().key, "python");

        let err = find_toolkit("rust").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("rust"));
        assert!(message.contains("programming, python"));
    }

    #[test]
    fn test_toolkit_keys_are_unique() {
        let keys: HashSet<_> = TOOLKITS.iter().map(|toolkit| toolkit.key).collect();
        assert_eq!(keys.len(), TOOLKITS.len());
    }

    #[test]
    fn test_catalog_fields_are_populated() {
        for toolkit in TOOLKITS {
            assert!(!toolkit.title.trim().is_empty());
            assert!(!toolkit.tools.is_empty());
            for tool in toolkit.tools {
                assert!(!tool.name.is_empty(), "{} has a nameless tool", toolkit.key);
                assert!(!tool.language.is_empty(), "{} has no language", tool.name);
                assert!(!tool.purpose.is_empty(), "{} has no purpose", tool.name);
            }
            for function in toolkit.functions.unwrap_or_default() {
                assert!(!function.command.is_empty());
                assert!(!function.purpose.is_empty());
            }
        }
    }
}
