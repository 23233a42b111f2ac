//! Terminal display utilities for the help screen.
//!
//! Provides the FIGlet banner, styled reference tables and the shared
//! color theme.

pub mod banner;
pub mod tables;
pub mod theme;

pub use banner::{Banner, BannerFont, DEFAULT_WIDTH, terminal_width};
pub use tables::{ColumnSpec, TableBuilder, create_functions_table, create_tools_table};
pub use theme::Theme;
