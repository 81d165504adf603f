//! Rendering of a summarized ledger for the terminal or as JSON.

use billcalclib::{BillTable, Ledger, Report};
use console::Style;

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Aligned text report
    Text,
    /// Pretty-printed JSON table
    Json,
}

impl OutputMode {
    pub fn from_arg(value: &str) -> Self {
        match value {
            "json" => OutputMode::Json,
            _ => OutputMode::Text,
        }
    }
}

/// Render the report with a bold total line.
///
/// Styling only applies when stdout is a terminal.
pub fn render_text(report: &Report) -> String {
    report.render_with(|total| Style::new().bold().apply_to(total).to_string())
}

/// Render a summarized ledger as pretty JSON
pub fn render_json(ledger: &Ledger) -> Result<String, anyhow::Error> {
    let table = BillTable::from_ledger(ledger)
        .ok_or_else(|| anyhow::anyhow!("ledger has not been summarized"))?;
    let mut output = serde_json::to_string_pretty(&table)?;
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarized() -> (Ledger, Report) {
        let mut ledger = Ledger::new(2, None).unwrap();
        ledger.add_cost("rent", "1000").unwrap();
        ledger.add_cost("utilities", "50").unwrap();
        let report = ledger.summarize().unwrap();
        (ledger, report)
    }

    #[test]
    fn test_output_mode_from_arg() {
        assert_eq!(OutputMode::from_arg("json"), OutputMode::Json);
        assert_eq!(OutputMode::from_arg("text"), OutputMode::Text);
    }

    #[test]
    fn test_render_text_layout() {
        console::set_colors_enabled(false);
        let (_, report) = summarized();
        let text = render_text(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Rent"));
        assert!(lines[1].starts_with("Utilities"));
        assert_eq!(lines[2], "-".repeat(report.width()));
        assert!(lines[3].starts_with("Total"));
        assert_eq!(text, report.to_string());
    }

    #[test]
    fn test_render_json() {
        let (ledger, _) = summarized();
        let json = render_json(&ledger).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["footer"]["share"], "525.00");
    }

    #[test]
    fn test_render_json_requires_summary() {
        let mut ledger = Ledger::new(2, None).unwrap();
        assert!(render_json(&ledger).is_err());

        ledger.add_cost("rent", "1000").unwrap();
        ledger.add_cost("utilities", "50").unwrap();
        assert!(render_json(&ledger).is_err());
    }
}
