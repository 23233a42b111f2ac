//! CLI entry point for the toolkit help display.
//!
//! Runs at container start and whenever the user types `tkhelp`. Loads
//! settings, renders the banner and reference tables, and writes them to
//! stdout in one go.

use clap::{
    Parser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;
use tkhelp::display::{Banner, BannerFont, Theme, terminal_width};
use tkhelp::io::OutputManager;
use tkhelp::{ColorChoice, DisplayDocument, HelpError, HelpResult, Settings, find_toolkit};
use tracing::Level;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Toolkit container help
#[derive(Parser)]
#[command(
    name = "tkhelp",
    version = env!("CARGO_PKG_VERSION"),
    about = "Show the toolkit welcome banner and tool reference",
    long_about = "Print the welcome banner, the installed CLI and TUI tools, and the shell helpers available in this container.",
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Toolkit catalog to display (programming, python)
    #[arg(short, long)]
    toolkit: Option<String>,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let mut warnings = Vec::new();
    let settings = match &cli.config {
        Some(path) => match Settings::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                let mut output = OutputManager::new(Theme::new(ColorChoice::Auto.enabled()));
                return output.error(&HelpError::from(e)).into();
            }
        },
        None => Settings::load().unwrap_or_else(|e| {
            warnings.push(format!("Configuration error: {e}. Using defaults."));
            Settings::default()
        }),
    };

    init_logging(
        settings.debug,
        settings.display.color.enabled_on(&std::io::stderr()),
    );

    let mut output = OutputManager::new(Theme::new(settings.display.color.enabled()));
    for warning in &warnings {
        let _ = output.warning(warning);
    }

    match build_document(&cli, &settings) {
        Ok(document) => output.display(&document).into(),
        Err(e) => output.error(&e).into(),
    }
}

fn build_document(cli: &Cli, settings: &Settings) -> HelpResult<DisplayDocument> {
    let toolkit = find_toolkit(cli.toolkit.as_deref().unwrap_or(&settings.toolkit))?;
    let banner: Banner = settings.banner.font.parse::<BannerFont>()?.load()?;
    let width = terminal_width(settings.display.width, settings.display.default_width);

    DisplayDocument::build(toolkit, &banner, settings.banner.title.as_deref(), width)
}

/// Diagnostics go to stderr so they never mix with the display.
fn init_logging(debug: bool, ansi: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}
