//! FIGlet banner rendering sized to the terminal.
//!
//! The title is word-wrapped before rendering: words are packed greedily
//! into chunks whose rendered width fits the terminal, and each chunk
//! becomes its own band of glyph rows. A word too wide on its own is split
//! between characters.

use crate::error::{HelpError, HelpResult};
use console::{measure_text_width, truncate_str};
use figlet_rs::FIGfont;
use std::path::PathBuf;
use std::str::FromStr;

/// Width assumed when the terminal size cannot be queried.
pub const DEFAULT_WIDTH: usize = 80;

/// Font used to draw the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerFont {
    /// The FIGlet standard font bundled with the renderer
    Standard,
    /// A `.flf` font file on disk
    File(PathBuf),
}

impl FromStr for BannerFont {
    type Err = HelpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("standard") {
            return Ok(BannerFont::Standard);
        }
        if trimmed.to_ascii_lowercase().ends_with(".flf") {
            return Ok(BannerFont::File(PathBuf::from(trimmed)));
        }
        Err(HelpError::UnknownFont {
            font: s.to_string(),
        })
    }
}

impl BannerFont {
    /// Load the font into a ready-to-use renderer.
    pub fn load(&self) -> HelpResult<Banner> {
        let font = match self {
            BannerFont::Standard => FIGfont::standard().map_err(|reason| HelpError::FontLoad {
                path: PathBuf::from("standard"),
                reason,
            })?,
            BannerFont::File(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| HelpError::FontLoad {
                        path: path.clone(),
                        reason: e.to_string(),
                    })?;
                FIGfont::from_content(&content).map_err(|reason| HelpError::FontLoad {
                    path: path.clone(),
                    reason,
                })?
            }
        };
        tracing::debug!("loaded banner font {self:?}");
        Ok(Banner { font })
    }
}

/// Renders titles with a loaded FIGlet font.
pub struct Banner {
    font: FIGfont,
}

impl Banner {
    /// Banner renderer using the bundled standard font.
    pub fn standard() -> HelpResult<Self> {
        BannerFont::Standard.load()
    }

    /// Render `title` so that no line is wider than `width` columns.
    pub fn render(&self, title: &str, width: usize) -> HelpResult<Vec<String>> {
        if title.trim().is_empty() {
            return Err(HelpError::EmptyTitle);
        }
        let width = width.max(1);

        let mut lines = Vec::new();
        for chunk in self.wrap(title, width) {
            for line in self.figure_lines(&chunk) {
                if measure_text_width(&line) > width {
                    // Only reachable when one glyph is wider than the terminal
                    lines.push(truncate_str(&line, width, "").trim_end().to_string());
                } else {
                    lines.push(line);
                }
            }
        }

        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        // Every character was missing from the font
        if lines.is_empty() {
            return Err(HelpError::UnrenderableTitle {
                title: title.to_string(),
            });
        }
        tracing::debug!("rendered banner '{title}' as {} lines at width {width}", lines.len());
        Ok(lines)
    }

    /// Split `title` into chunks that each render within `width`.
    fn wrap(&self, title: &str, width: usize) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for word in title.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if self.rendered_width(&candidate) <= width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            if self.rendered_width(word) <= width {
                current = word.to_string();
                continue;
            }

            for ch in word.chars() {
                let mut candidate = current.clone();
                candidate.push(ch);
                if current.is_empty() || self.rendered_width(&candidate) <= width {
                    current = candidate;
                } else {
                    chunks.push(std::mem::replace(&mut current, ch.to_string()));
                }
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }

    fn figure_lines(&self, text: &str) -> Vec<String> {
        match self.font.convert(text) {
            Some(figure) => figure
                .to_string()
                .lines()
                .map(|line| line.trim_end().to_string())
                .collect(),
            None => Vec::new(),
        }
    }

    fn rendered_width(&self, text: &str) -> usize {
        self.figure_lines(text)
            .iter()
            .map(|line| measure_text_width(line))
            .max()
            .unwrap_or(0)
    }
}

/// Resolve the terminal width once at startup.
///
/// An explicit override wins; otherwise stdout is queried and `fallback`
/// is used when it is not a terminal.
pub fn terminal_width(override_width: Option<usize>, fallback: usize) -> usize {
    if let Some(width) = override_width.filter(|width| *width > 0) {
        tracing::debug!("using configured terminal width {width}");
        return width;
    }
    match console::Term::stdout().size_checked() {
        Some((_rows, cols)) if cols > 0 => {
            tracing::debug!("detected terminal width {cols}");
            usize::from(cols)
        }
        _ => {
            tracing::debug!("terminal width unavailable, falling back to {fallback}");
            fallback.max(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_selector_parsing() {
        assert_eq!("standard".parse::<BannerFont>().unwrap(), BannerFont::Standard);
        assert_eq!(" Standard ".parse::<BannerFont>().unwrap(), BannerFont::Standard);
        assert_eq!(
            "/usr/share/figlet/small.flf".parse::<BannerFont>().unwrap(),
            BannerFont::File(PathBuf::from("/usr/share/figlet/small.flf"))
        );

        let err = "smslant".parse::<BannerFont>().unwrap_err();
        assert!(matches!(err, HelpError::UnknownFont { ref font } if font == "smslant"));
    }

    #[test]
    fn test_missing_font_file_fails_fast() {
        let font = BannerFont::File(PathBuf::from("/nonexistent/tkhelp/font.flf"));
        let err = font.load().err().unwrap();
        assert!(matches!(err, HelpError::FontLoad { .. }));
    }

    #[test]
    fn test_title_fits_width_80() {
        let banner = Banner::standard().unwrap();
        let lines = banner.render("Test", 80).unwrap();

        assert!(lines.len() > 1, "banner should span multiple lines");
        assert!(lines.iter().any(|line| !line.trim().is_empty()));
        for line in &lines {
            assert!(measure_text_width(line) <= 80, "line too wide: {line:?}");
        }
    }

    #[test]
    fn test_long_title_wraps_into_bands() {
        let banner = Banner::standard().unwrap();
        let wide = banner.render("Programming Toolkit", 200).unwrap();
        let narrow = banner.render("Programming Toolkit", 60).unwrap();

        assert!(narrow.len() > wide.len());
        for line in &narrow {
            assert!(measure_text_width(line) <= 60, "line too wide: {line:?}");
        }
    }

    #[test]
    fn test_tiny_width_never_overflows() {
        let banner = Banner::standard().unwrap();
        let lines = banner.render("Toolkit", 5).unwrap();
        assert!(!lines.is_empty());
        for line in &lines {
            assert!(measure_text_width(line) <= 5, "line too wide: {line:?}");
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let banner = Banner::standard().unwrap();
        assert_eq!(
            banner.render("Python Toolkit", 72).unwrap(),
            banner.render("Python Toolkit", 72).unwrap()
        );
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let banner = Banner::standard().unwrap();
        assert!(matches!(banner.render("   ", 80), Err(HelpError::EmptyTitle)));
    }

    #[test]
    fn test_title_without_glyphs_is_rejected() {
        let banner = Banner::standard().unwrap();
        let err = banner.render("日本", 80).unwrap_err();
        assert!(matches!(err, HelpError::UnrenderableTitle { ref title } if title == "日本"));
    }

    #[test]
    fn test_width_override_wins() {
        assert_eq!(terminal_width(Some(132), DEFAULT_WIDTH), 132);
        // A zero override is ignored rather than producing a zero-width layout
        assert!(terminal_width(Some(0), DEFAULT_WIDTH) > 0);
    }
}
