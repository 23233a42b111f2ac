//! Catalog for the general purpose Programming Toolkit image.

use super::{Closing, Fact, FunctionEntry, ToolEntry, Toolkit};

pub const PROGRAMMING: Toolkit = Toolkit {
    key: "programming",
    title: "Programming Toolkit",
    heading: "Programming Toolkit Container",
    author: "Edward Jazzhands",
    facts: &[Fact::new("OS Base", "Debian Slim")],
    tools: TOOLS,
    functions: Some(FUNCTIONS),
    closing: Closing::Reminder("Remember to 'tmux a'"),
};

const TOOLS: &[ToolEntry] = &[
    ToolEntry::new("sudo", "", "C", "Run commands as another user"),
    ToolEntry::new("git", "", "C", "Version Control"),
    ToolEntry::new("Github CLI", "gh", "Go", "Github official CLI"),
    ToolEntry::new("GNU-PG", "gpg", "C", "Encryption and signing"),
    ToolEntry::new("gopass", "", "Go", "Password manager using GPG"),
    ToolEntry::new("curl", "", "C", "Downloading things"),
    ToolEntry::new("wget", "", "C", "Downloading things"),
    ToolEntry::new("homebrew", "brew", "Ruby", "Package manager"),
    ToolEntry::new("uv", "", "Rust", "Manages all things python"),
    ToolEntry::new("npm", "", "Javascript", "Node Package Manager"),
    ToolEntry::new("pnpm", "", "Javascript", "Performant Node Package Manager"),
    ToolEntry::new("nvm", "", "Shell", "Node Version Manager for Javascript"),
    ToolEntry::new("node", "", "C++", "Javascript runtime"),
    ToolEntry::new("typescript", "tsc", "Javascript", "TypeScript compiler"),
    ToolEntry::new("tmux", "", "C", "Screen multiplexer"),
    ToolEntry::new("make", "", "C", "Build automation"),
    ToolEntry::new("just", "", "Rust", "Command runner - replaces Make"),
    ToolEntry::new("nano", "", "C", "Terminal text editor"),
    ToolEntry::new("neovim", "nvim", "C", "Terminal text editor with TUI"),
    ToolEntry::new("batcat", "bat", "Rust", "Cat with color"),
    ToolEntry::new("btop", "", "C++", "System process viewer"),
    ToolEntry::new("zoxide", "z", "Rust", "Smarter cd command"),
    ToolEntry::new("fzf", "", "Go", "Fuzzy finder"),
    ToolEntry::new("ripgrep", "rg", "Rust", "Modern version of grep"),
    ToolEntry::new("nox", "", "Python", "Environment testing for Python"),
    ToolEntry::new("rich-cli", "rich", "Python", "Syntax highlighting in terminal"),
    ToolEntry::new("ducktools-pytui", "pytui", "Python", "Experimental Python managing TUI"),
    ToolEntry::new("harlequin", "", "Python", "SQLite database viewer and editor"),
    ToolEntry::new("lazygit", "", "Go", "Terminal UI for git"),
    ToolEntry::new("cloctui", "", "Python/Perl", "Terminal UI for CLOC"),
    ToolEntry::new("hugo", "", "Go", "Static site generator"),
];

const FUNCTIONS: &[FunctionEntry] = &[
    FunctionEntry::new("fcd", "Fuzzy cd into a directory"),
    FunctionEntry::new("fsh", "Fuzzy shell history"),
    FunctionEntry::new("rgf", "Ripgrep by filename"),
    FunctionEntry::new("colortest", "Print a 16-bit gradient to test truecolor support"),
    FunctionEntry::new("resource", "Re-source the .bashrc file"),
    FunctionEntry::new("activate", "Activate the Python virtual environment"),
    FunctionEntry::new("bashrc", "Open the .bashrc file in nano"),
    FunctionEntry::new("tkhelp", "Display this help message"),
];
