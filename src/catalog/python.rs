//! Catalog for the slimmer Python Toolkit image.

use super::{Closing, Fact, ToolEntry, Toolkit};

pub const PYTHON: Toolkit = Toolkit {
    key: "python",
    title: "Python Toolkit",
    heading: "Python Toolkit Container",
    author: "Edward Jazzhands",
    facts: &[
        Fact::new("OS Base", "Debian Slim"),
        Fact::new("Container Version", "0.1"),
    ],
    tools: TOOLS,
    functions: None,
    closing: Closing::HelpCommand {
        command: "tkhelp",
        expansion: "Tool-Kit help",
    },
};

const TOOLS: &[ToolEntry] = &[
    ToolEntry::new("git", "", "C", "Version Control"),
    ToolEntry::new("curl", "", "C", "Mostly installing things"),
    ToolEntry::new("uv", "", "Rust", "Manages all things python"),
    ToolEntry::new("nvm", "", "Shell", "Node Version Manager for Javascript"),
    ToolEntry::new("node", "", "C++", "Javascript runtime"),
    ToolEntry::new("tmux", "", "C", "Screen multiplexer"),
    ToolEntry::new("make", "", "C", "Build automation"),
    ToolEntry::new("just", "", "Rust", "Command runner - replaces Make"),
    ToolEntry::new("gulp", "", "Javascript", "Command runner for JS stuff"),
    ToolEntry::new("neovim", "", "C", "Terminal text editor"),
    ToolEntry::new("bat", "", "Rust", "cat with color"),
    ToolEntry::new("fzf", "", "Go", "fuzzy finder"),
    ToolEntry::new("ripgrep", "rg", "Rust", "modern version of grep"),
    ToolEntry::new("black", "", "Python", "formatting"),
    ToolEntry::new("rich-cli", "rich", "Python", "Syntax highlighting in terminal"),
    ToolEntry::new("neovim", "nvim", "C", "Terminal-based text/code editor"),
    ToolEntry::new("ducktools-pytui", "pytui", "Python", "Experimental Python managing TUI"),
    ToolEntry::new("harlequin", "", "Python", "SQLite database viewer and editor"),
];
