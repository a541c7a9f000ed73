//! Presentation of projection results

mod table;
mod dashboard;

pub use table::{TableReport, RULE_WIDTH};
pub use dashboard::DashboardView;

/// Group digits in threes with commas: -1234567 -> "-1,234,567"
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Dollar amount with grouped digits: -250000 -> "$-250,000"
pub fn format_currency(value: i64) -> String {
    format!("${}", format_thousands(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_250_000), "1,250,000");
        assert_eq!(format_thousands(-315_250), "-315,250");
        assert_eq!(format_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(250_000), "$250,000");
        assert_eq!(format_currency(-250_000), "$-250,000");
    }
}
