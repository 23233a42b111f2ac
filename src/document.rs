//! The help display as an ordered list of blocks.
//!
//! A [`DisplayDocument`] is assembled once per run from a [`Toolkit`] and
//! rendered into any [`Write`] sink. Block order is fixed: banner, welcome
//! box, tools table, blank-command note, functions table, closing line.

use crate::catalog::{Closing, Fact, Toolkit};
use crate::display::banner::Banner;
use crate::display::tables::{TableBuilder, create_functions_table, create_tools_table};
use crate::display::theme::Theme;
use crate::error::HelpResult;
use std::io::Write;

/// Width of the rules framing the welcome box.
const RULE_WIDTH: usize = 30;
/// Indent of the author line under the heading.
const BYLINE_INDENT: usize = 11;

/// Shown after the tools table when some commands are left blank.
pub const BLANK_COMMAND_NOTE: &str = "Command is same as name if blank";

/// One renderable piece of the display.
#[derive(Debug, Clone)]
pub enum Block {
    /// Pre-rendered FIGlet lines
    Banner(Vec<String>),
    Welcome {
        heading: &'static str,
        author: &'static str,
        facts: &'static [Fact],
    },
    Table(TableBuilder),
    Note(&'static str),
    Closing(Closing),
}

/// The complete display for one invocation.
#[derive(Debug, Clone)]
pub struct DisplayDocument {
    blocks: Vec<Block>,
    width: usize,
}

impl DisplayDocument {
    /// Assemble the display for `toolkit` at the given terminal width.
    ///
    /// `title` replaces the toolkit's banner title when set.
    pub fn build(
        toolkit: &Toolkit,
        banner: &Banner,
        title: Option<&str>,
        width: usize,
    ) -> HelpResult<Self> {
        let title = title.unwrap_or(toolkit.title);
        let mut blocks = vec![
            Block::Banner(banner.render(title, width)?),
            Block::Welcome {
                heading: toolkit.heading,
                author: toolkit.author,
                facts: toolkit.facts,
            },
            Block::Table(create_tools_table(toolkit.tools)),
        ];

        if toolkit.tools.iter().any(|tool| tool.command_is_name()) {
            blocks.push(Block::Note(BLANK_COMMAND_NOTE));
        }
        if let Some(functions) = toolkit.functions {
            blocks.push(Block::Table(create_functions_table(functions)));
        }
        blocks.push(Block::Closing(toolkit.closing));

        tracing::debug!(
            "assembled {} blocks for toolkit '{}'",
            blocks.len(),
            toolkit.key
        );
        Ok(Self { blocks, width })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Render every block into a single string.
    pub fn render_to_string(&self, theme: &Theme) -> HelpResult<String> {
        let mut out = String::new();
        for block in &self.blocks {
            self.render_block(block, theme, &mut out)?;
        }
        Ok(out)
    }

    /// Render the display and write it to `out` in one go.
    pub fn render<W: Write>(&self, out: &mut W, theme: &Theme) -> HelpResult<()> {
        let text = self.render_to_string(theme)?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn render_block(&self, block: &Block, theme: &Theme, out: &mut String) -> HelpResult<()> {
        match block {
            Block::Banner(lines) => {
                out.push('\n');
                for line in lines {
                    out.push_str(&theme.apply(&theme.banner, line));
                    out.push('\n');
                }
                out.push('\n');
            }
            Block::Welcome {
                heading,
                author,
                facts,
            } => {
                let rule = "=".repeat(RULE_WIDTH);

                out.push_str(&format!("{rule}\n"));
                out.push_str(&format!("{}\n", theme.apply(&theme.heading, heading)));
                out.push_str(&format!("{}by {author}\n\n", " ".repeat(BYLINE_INDENT)));
                for fact in facts.iter() {
                    out.push_str(&format!(
                        "{}: {}\n",
                        fact.label,
                        theme.apply(&theme.highlight, fact.value)
                    ));
                }
                out.push_str(&format!("{rule}\n"));
            }
            Block::Table(table) => {
                out.push_str(&table.build(self.width, theme)?);
                out.push('\n');
            }
            Block::Note(note) => {
                out.push_str(&format!("{} \n\n", theme.apply(&theme.note, note)));
            }
            Block::Closing(Closing::Reminder(text)) => {
                out.push_str(&format!("\n{} \n\n", theme.apply(&theme.note, text)));
            }
            Block::Closing(Closing::HelpCommand { command, expansion }) => {
                out.push_str(&format!(
                    "\nType {} ({expansion}) to display this message again.\n\n",
                    theme.apply(&theme.highlight, command)
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PROGRAMMING, PYTHON};

    fn block_kinds(document: &DisplayDocument) -> Vec<&'static str> {
        document
            .blocks()
            .iter()
            .map(|block| match block {
                Block::Banner(_) => "banner",
                Block::Welcome { .. } => "welcome",
                Block::Table(_) => "table",
                Block::Note(_) => "note",
                Block::Closing(_) => "closing",
            })
            .collect()
    }

    #[test]
    fn test_programming_block_order() {
        let banner = Banner::standard().unwrap();
        let document = DisplayDocument::build(&PROGRAMMING, &banner, None, 100).unwrap();
        assert_eq!(
            block_kinds(&document),
            ["banner", "welcome", "table", "note", "table", "closing"]
        );
        assert_eq!(document.width(), 100);
    }

    #[test]
    fn test_python_toolkit_has_no_functions_table() {
        let banner = Banner::standard().unwrap();
        let document = DisplayDocument::build(&PYTHON, &banner, None, 100).unwrap();
        assert_eq!(
            block_kinds(&document),
            ["banner", "welcome", "table", "note", "closing"]
        );

        let text = document.render_to_string(&Theme::plain()).unwrap();
        assert!(text.contains("Container Version: 0.1"));
        assert!(text.contains("Type tkhelp (Tool-Kit help) to display this message again."));
    }

    #[test]
    fn test_welcome_box() {
        let banner = Banner::standard().unwrap();
        let document = DisplayDocument::build(&PROGRAMMING, &banner, None, 100).unwrap();
        let text = document.render_to_string(&Theme::plain()).unwrap();

        let rule = "=".repeat(RULE_WIDTH);
        assert_eq!(text.lines().filter(|line| *line == rule).count(), 2);
        assert!(text.contains("Programming Toolkit Container\n"));
        assert!(text.contains("\n           by Edward Jazzhands\n\n"));
        assert!(text.contains("OS Base: Debian Slim"));
        assert!(text.contains("Remember to 'tmux a'"));
    }

    #[test]
    fn test_rules_stay_unstyled_in_color() {
        let banner = Banner::standard().unwrap();
        let document = DisplayDocument::build(&PROGRAMMING, &banner, None, 100).unwrap();
        let text = document.render_to_string(&Theme::new(true)).unwrap();

        let rule = "=".repeat(RULE_WIDTH);
        assert_eq!(text.lines().filter(|line| *line == rule).count(), 2);
    }

    #[test]
    fn test_title_override() {
        let banner = Banner::standard().unwrap();
        let default = DisplayDocument::build(&PROGRAMMING, &banner, None, 100).unwrap();
        let custom = DisplayDocument::build(&PROGRAMMING, &banner, Some("Hi"), 100).unwrap();

        let (Block::Banner(default_lines), Block::Banner(custom_lines)) =
            (&default.blocks()[0], &custom.blocks()[0])
        else {
            panic!("first block must be the banner");
        };
        assert_ne!(default_lines, custom_lines);
    }
}
