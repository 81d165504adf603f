//! Aligned report lines produced by [`Ledger::summarize`](crate::Ledger::summarize).
//!
//! A report is printed in three parts: every entry line, a dash rule as wide
//! as the longest line, then the total line.

use std::fmt;

/// Formatted lines of a summarized bill, total line last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub(crate) fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// All lines in display order, total last
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the report, returning its lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Entry lines above the rule
    pub fn body(&self) -> &[String] {
        match self.lines.split_last() {
            Some((_, body)) => body,
            None => &[],
        }
    }

    /// The total line below the rule
    pub fn total_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Width in characters of the longest line
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Separator rule between the body and the total
    pub fn rule(&self) -> String {
        "-".repeat(self.width())
    }

    /// Render the body, the rule and the total line, one per row.
    ///
    /// `style_total` decorates the total line, e.g. to make it bold on a
    /// terminal. An empty report renders as an empty string.
    pub fn render_with<F>(&self, style_total: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        let Some(total) = self.total_line() else {
            return String::new();
        };

        let mut output = String::new();
        for line in self.body() {
            output.push_str(line);
            output.push('\n');
        }
        output.push_str(&self.rule());
        output.push('\n');
        output.push_str(&style_total(total));
        output.push('\n');
        output
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(str::to_string))
    }
}
