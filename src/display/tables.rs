//! Table formatting utilities for the reference tables.

use crate::catalog::{FunctionEntry, ToolEntry};
use crate::display::theme::Theme;
use crate::error::{HelpError, HelpResult};
use comfy_table::{
    Attribute, Cell, Color, ColumnConstraint, ContentArrangement, Table,
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL_CONDENSED,
};
use console::measure_text_width;

/// Title of the installed tools table.
pub const TOOLS_TITLE: &str = "Included CLI and TUI Tools";
/// Title of the shell functions table.
pub const FUNCTIONS_TITLE: &str = "Bash Functions";

/// One column of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub header: String,
    /// Foreground color for the column's data cells
    pub color: Option<Color>,
    /// Keep the column as wide as its content instead of wrapping
    pub no_wrap: bool,
}

impl ColumnSpec {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            color: None,
            no_wrap: false,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn no_wrap(mut self) -> Self {
        self.no_wrap = true;
        self
    }
}

/// Builder for creating titled, formatted tables.
///
/// Rows are checked against the column count when the table is built.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    title: String,
    columns: Vec<ColumnSpec>,
    rows: Vec<Vec<String>>,
}

impl TableBuilder {
    /// Create a new table builder.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Append a column definition.
    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a row to the table.
    pub fn add_row<I, S>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Build and return the formatted table with its centered title.
    pub fn build(&self, width: usize, theme: &Theme) -> HelpResult<String> {
        let expected = self.columns.len();
        if let Some((row, fields)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, fields)| fields.len() != expected)
        {
            return Err(HelpError::RowWidth {
                table: self.title.clone(),
                row,
                expected,
                found: fields.len(),
            });
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        // Apply rounded corners
        table.apply_modifier(UTF8_ROUND_CORNERS);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_width(u16::try_from(width).unwrap_or(u16::MAX));
        if theme.is_colored() {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }

        table.set_header(
            self.columns
                .iter()
                .map(|column| Cell::new(&column.header).add_attribute(Attribute::Bold)),
        );

        for fields in &self.rows {
            table.add_row(self.columns.iter().zip(fields).map(|(column, field)| {
                let cell = Cell::new(field);
                match column.color {
                    Some(color) => cell.fg(color),
                    None => cell,
                }
            }));
        }

        for (index, column) in self.columns.iter().enumerate() {
            if column.no_wrap {
                if let Some(col) = table.column_mut(index) {
                    col.set_constraint(ColumnConstraint::ContentWidth);
                }
            }
        }

        let body = table.to_string();
        let table_width = body.lines().map(measure_text_width).max().unwrap_or(0);
        let padding = table_width.saturating_sub(measure_text_width(&self.title)) / 2;

        tracing::debug!(
            "rendered table '{}' with {} rows, {table_width} columns wide",
            self.title,
            self.rows.len()
        );
        Ok(format!(
            "{}{}\n{body}",
            " ".repeat(padding),
            theme.apply(&theme.title, &self.title)
        ))
    }
}

/// Create the installed tools table.
pub fn create_tools_table(tools: &[ToolEntry]) -> TableBuilder {
    tools.iter().fold(
        TableBuilder::new(TOOLS_TITLE)
            .column(ColumnSpec::new("Name").color(Theme::NAME).no_wrap())
            .column(ColumnSpec::new("Command").color(Theme::NAME).no_wrap())
            .column(ColumnSpec::new("Written in").color(Theme::LANGUAGE).no_wrap())
            .column(ColumnSpec::new("Purpose").color(Theme::PURPOSE)),
        |table, tool| table.add_row([tool.name, tool.command, tool.language, tool.purpose]),
    )
}

/// Create the shell functions table.
pub fn create_functions_table(functions: &[FunctionEntry]) -> TableBuilder {
    functions.iter().fold(
        TableBuilder::new(FUNCTIONS_TITLE)
            .column(ColumnSpec::new("Command").color(Theme::NAME).no_wrap())
            .column(ColumnSpec::new("Purpose").color(Theme::PURPOSE)),
        |table, function| table.add_row([function.command, function.purpose]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_lines(rendered: &str) -> usize {
        // Header plus one line per row start with the left border
        rendered.lines().filter(|line| line.starts_with('│')).count() - 1
    }

    #[test]
    fn test_table_builder() {
        let table = TableBuilder::new("Sample")
            .column(ColumnSpec::new("Column 1"))
            .column(ColumnSpec::new("Column 2"))
            .add_row(["Value 1", "Value 2"])
            .build(120, &Theme::plain())
            .unwrap();

        assert!(table.lines().next().unwrap().contains("Sample"));
        assert!(table.contains("Column 1"));
        assert!(table.contains("Value 1"));
        assert_eq!(data_lines(&table), 1);
    }

    #[test]
    fn test_single_tool_row() {
        let tools = [ToolEntry::new("git", "", "C", "Version Control")];
        let table = create_tools_table(&tools).build(120, &Theme::plain()).unwrap();

        let row = table
            .lines()
            .find(|line| line.contains("git"))
            .expect("row for git");
        assert!(row.contains(" C "));
        assert!(row.contains("Version Control"));
        assert_eq!(data_lines(&table), 1);
    }

    #[test]
    fn test_empty_functions_table_renders_header_only() {
        let table = create_functions_table(&[])
            .build(80, &Theme::plain())
            .unwrap();

        assert!(table.contains(FUNCTIONS_TITLE));
        assert!(table.contains("Command"));
        assert!(table.contains("Purpose"));
        assert_eq!(data_lines(&table), 0);
    }

    #[test]
    fn test_row_width_mismatch_fails_fast() {
        let err = TableBuilder::new("Broken")
            .column(ColumnSpec::new("A"))
            .column(ColumnSpec::new("B"))
            .add_row(["ok", "ok"])
            .add_row(["short"])
            .build(80, &Theme::plain())
            .unwrap_err();

        match err {
            HelpError::RowWidth {
                table,
                row,
                expected,
                found,
            } => {
                assert_eq!(table, "Broken");
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_title_is_centered_over_table() {
        let table = create_functions_table(&[FunctionEntry::new(
            "colortest",
            "Print a 16-bit gradient to test truecolor support",
        )])
        .build(120, &Theme::plain())
        .unwrap();

        let mut lines = table.lines();
        let title = lines.next().unwrap();
        let border = lines.next().unwrap();
        let indent = title.len() - title.trim_start().len();
        assert!(indent > 0);
        assert!(indent + FUNCTIONS_TITLE.len() <= measure_text_width(border));
    }

    #[test]
    fn test_colored_table_contains_escapes() {
        let tools = [ToolEntry::new("git", "", "C", "Version Control")];
        let table = create_tools_table(&tools).build(120, &Theme::new(true)).unwrap();
        assert!(table.contains("\u{1b}["));
        assert!(table.contains("Version Control"));
    }
}
