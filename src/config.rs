//! Configuration module for the help display.
//!
//! Settings are layered:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides (applied by the binary)
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `TKHELP_` and use double
//! underscores to separate nested levels:
//! - `TKHELP_TOOLKIT=python` sets `toolkit`
//! - `TKHELP_BANNER__FONT=/usr/share/figlet/small.flf` sets `banner.font`
//! - `TKHELP_DISPLAY__COLOR=never` sets `display.color`

use crate::display::banner::DEFAULT_WIDTH;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Which toolkit catalog to display
    #[serde(default = "default_toolkit")]
    pub toolkit: String,

    /// Banner settings
    #[serde(default)]
    pub banner: BannerConfig,

    /// Terminal output settings
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BannerConfig {
    /// "standard" or a path to a .flf font file
    #[serde(default = "default_font")]
    pub font: String,

    /// Replaces the toolkit's own title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DisplayConfig {
    /// Fixed terminal width; detected from stdout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,

    /// Width used when detection fails
    #[serde(default = "default_width")]
    pub default_width: usize,

    /// When to emit ANSI colors
    #[serde(default)]
    pub color: ColorChoice,
}

/// Color policy for all rendered output.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve the choice for stdout.
    pub fn enabled(self) -> bool {
        self.enabled_on(&std::io::stdout())
    }

    /// Resolve the choice for a specific stream, e.g. stderr for logs.
    pub fn enabled_on(self, stream: &impl IsTerminal) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none() && stream.is_terminal(),
        }
    }
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_toolkit() -> String {
    "programming".to_string()
}
fn default_font() -> String {
    "standard".to_string()
}
fn default_width() -> usize {
    DEFAULT_WIDTH
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            toolkit: default_toolkit(),
            banner: BannerConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            font: default_font(),
            title: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: None,
            default_width: default_width(),
            color: ColorChoice::Auto,
        }
    }
}

impl Settings {
    /// Load configuration from the user config directory, if present
    pub fn load() -> Result<Self, Box<figment::Error>> {
        match Self::default_config_path().filter(|path| path.is_file()) {
            Some(path) => Self::load_from(path),
            None => Self::figment(None).extract().map_err(Box::new),
        }
    }

    /// Load configuration from a specific file, which must exist
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Box::new(figment::Error::from(format!(
                "configuration file '{}' not found",
                path.display()
            ))));
        }
        Self::figment(Some(path)).extract().map_err(Box::new)
    }

    fn figment(path: Option<&Path>) -> Figment {
        // Start with defaults
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        // Layer in config file
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }

        // Double underscore becomes dot, single underscore stays in the field name
        figment.merge(Env::prefixed("TKHELP_").map(|key| {
            key.as_str().to_lowercase().replace("__", ".").into()
        }))
    }

    /// `$XDG_CONFIG_HOME/tkhelp/settings.toml` or the platform equivalent
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tkhelp").join("settings.toml"))
    }
}
