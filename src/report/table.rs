//! Fixed-width text report

use std::io::{self, Write};

use super::{format_currency, format_thousands};
use crate::projection::ProjectionResult;

/// Width of the horizontal rules around the table
pub const RULE_WIDTH: usize = 110;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Column layout: Year(6) Age(6) Events(40) NetChange(15) CumulativeWealth(20)
#[derive(Debug, Clone)]
pub struct TableReport {
    pub initial_wealth: i64,
    pub yearly_savings: i64,

    /// Wrap negative cumulative wealth in ANSI red
    pub highlight_negative: bool,
}

impl TableReport {
    pub fn new(initial_wealth: i64, yearly_savings: i64) -> Self {
        Self { initial_wealth, yearly_savings, highlight_negative: false }
    }

    pub fn with_highlight(mut self, highlight_negative: bool) -> Self {
        self.highlight_negative = highlight_negative;
        self
    }

    pub fn render<W: Write>(&self, out: &mut W, result: &ProjectionResult) -> io::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(
            out,
            "\n=== Wealth projection report (initial wealth: {} | yearly savings: {}) ===",
            format_thousands(self.initial_wealth),
            format_thousands(self.yearly_savings)
        )?;
        writeln!(out, "{}", rule)?;
        writeln!(
            out,
            "{:<6} {:<6} {:<40} {:<15} {:<20}",
            "Year", "Age", "Events (goal costs charged)", "Net change", "Cumulative wealth"
        )?;
        writeln!(out, "{}", rule)?;

        for row in &result.rows {
            let mut wealth = format!("{:<20}", format_currency(row.wealth));
            if self.highlight_negative && row.is_negative {
                wealth = format!("{}{}{}", RED, wealth, RESET);
            }
            writeln!(
                out,
                "{:<6} {:<6} {:<40} ${:<15} {}",
                row.year,
                row.age,
                row.events,
                format_thousands(row.net_change),
                wealth
            )?;
        }

        writeln!(out, "{}", rule)?;
        Ok(())
    }

    /// Render into a string
    pub fn render_to_string(&self, result: &ProjectionResult) -> io::Result<String> {
        let mut buf = Vec::new();
        self.render(&mut buf, result)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{GoalWindow, ProjectionConfig, ProjectionEngine, ProjectionInputs};
    use rust_decimal::Decimal;

    fn sample_result(initial: i64, savings: i64, goals: Vec<GoalWindow>, years: u32) -> ProjectionResult {
        let inputs = ProjectionInputs::new(initial, savings, goals, Decimal::new(5, 2));
        ProjectionEngine::new(ProjectionConfig::new(2026, 35, years)).project(&inputs)
    }

    #[test]
    fn test_layout() {
        let result = sample_result(1_000_000, 200_000, vec![GoalWindow::new("House", 500_000, 2027, 1)], 2);
        let text = TableReport::new(1_000_000, 200_000).render_to_string(&result).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(
            lines[1],
            "=== Wealth projection report (initial wealth: 1,000,000 | yearly savings: 200,000) ==="
        );
        assert_eq!(lines[2], "-".repeat(RULE_WIDTH));
        assert!(lines[3].starts_with("Year   Age    Events"));
        assert_eq!(lines[4], "-".repeat(RULE_WIDTH));
        assert_eq!(
            lines[5],
            format!("{:<6} {:<6} {:<40} ${:<15} {:<20}", 2026, 35, "-", "250,000", "$1,250,000")
        );
        // 1,250,000 * 1.05 + 200,000 - 500,000 = 1,012,500
        assert_eq!(
            lines[6],
            format!("{:<6} {:<6} {:<40} ${:<15} {:<20}", 2027, 36, "House", "-237,500", "$1,012,500")
        );
        assert_eq!(lines[7], "-".repeat(RULE_WIDTH));
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_negative_highlight() {
        let result = sample_result(0, -100_000, Vec::new(), 1);

        let plain = TableReport::new(0, -100_000).render_to_string(&result).unwrap();
        assert!(!plain.contains(RED));
        assert!(plain.contains("$-100,000"));

        let colored = TableReport::new(0, -100_000).with_highlight(true).render_to_string(&result).unwrap();
        assert!(colored.contains(&format!("{}{:<20}{}", RED, "$-100,000", RESET)));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_propagate() {
        let result = sample_result(1_000, 0, Vec::new(), 2);
        let err = TableReport::new(1_000, 0).render(&mut ClosedPipe, &result).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
