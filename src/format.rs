//! Display Formatters
//!
//! Shared date/currency formatting for tables and the dashboard. Missing
//! values render as "Not set" so optional fields never show blank cells.

use chrono::{DateTime, NaiveDate};

/// Format an ISO-8601 timestamp (or bare date) for table display.
pub fn format_date(value: &str) -> String {
    if value.is_empty() {
        return "Not set".to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return parsed.format("%-m/%-d/%Y").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return parsed.format("%-m/%-d/%Y").to_string();
    }
    "Invalid date".to_string()
}

/// Format an optional USD amount, e.g. `Some(1234.5)` -> "$1,234.50".
pub fn format_currency(amount: Option<f64>) -> String {
    let Some(amount) = amount else {
        return "Not set".to_string();
    };
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

/// Trim an ISO-8601 timestamp down to the `YYYY-MM-DD` form that
/// `<input type="date">` expects. Anything shorter passes through as-is.
pub fn date_input_value(value: &str) -> String {
    value.get(..10).unwrap_or(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_date_is_not_set() {
        assert_eq!(format_date(""), "Not set");
    }

    #[test]
    fn iso_timestamps_render_as_dates() {
        assert_eq!(format_date("2024-03-09T14:30:00.000Z"), "3/9/2024");
        assert_eq!(format_date("2024-11-20T00:00:00+02:00"), "11/20/2024");
    }

    #[test]
    fn bare_dates_are_accepted() {
        assert_eq!(format_date("2024-07-04"), "7/4/2024");
    }

    #[test]
    fn unparseable_dates_are_flagged() {
        assert_eq!(format_date("next tuesday"), "Invalid date");
    }

    #[test]
    fn missing_amount_is_not_set() {
        assert_eq!(format_currency(None), "Not set");
    }

    #[test]
    fn zero_formats_with_cents() {
        assert_eq!(format_currency(Some(0.0)), "$0.00");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_currency(Some(-99.99)), "-$99.99");
    }

    #[test]
    fn date_input_value_trims_timestamps() {
        assert_eq!(date_input_value("2024-03-09T14:30:00.000Z"), "2024-03-09");
        assert_eq!(date_input_value("2024-03-09"), "2024-03-09");
        assert_eq!(date_input_value(""), "");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_currency(Some(1234.5)), "$1,234.50");
        assert_eq!(format_currency(Some(1_000_000.0)), "$1,000,000.00");
        assert_eq!(format_currency(Some(999.999)), "$1,000.00");
    }
}
