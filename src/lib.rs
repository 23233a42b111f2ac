//! Welcome banner and reference tables for the toolkit containers.
//!
//! The binary prints a FIGlet banner, a welcome box, the table of
//! installed tools and the table of shell helpers. The library exposes
//! each piece so the output can be rendered into any writer.

pub mod catalog;
pub mod config;
pub mod display;
pub mod document;
pub mod error;
pub mod io;

// Explicit exports for better API clarity
pub use catalog::{FunctionEntry, TOOLKITS, ToolEntry, Toolkit, find_toolkit};
pub use config::{ColorChoice, Settings};
pub use document::{Block, DisplayDocument};
pub use error::{HelpError, HelpResult};
