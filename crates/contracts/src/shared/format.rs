//! Display formatting for amounts, counts and timestamps (en-US conventions).

use chrono::{DateTime, NaiveDateTime};

/// Formats a number with `,` thousands separators and the given number of decimals.
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a count with thousands separators.
pub fn format_thousands(value: i64) -> String {
    format_number_with_decimals(value as f64, 0)
}

/// Formats a currency amount as US dollars: `$1,234.56`, `-$12.00`.
pub fn format_currency(value: f64) -> String {
    let body = format_number_with_decimals(value.abs(), 2);
    if value < 0.0 && body != "0.00" {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Formats a decimal with a fixed number of digits and no grouping (`12.35`).
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Appends a percent sign to a server-computed percentage (`"12.50"` → `12.50%`).
pub fn format_percent(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('%');
    if trimmed.is_empty() {
        "—".to_string()
    } else {
        format!("{}%", trimmed)
    }
}

/// Parses a decimal amount that the API sends either as a JSON number or a string.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats an RFC 3339 timestamp as `MM/DD/YYYY, HH:MM:SS AM`.
///
/// Unparseable input is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%m/%d/%Y, %I:%M:%S %p").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%m/%d/%Y, %I:%M:%S %p").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1,234,567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_thousands_and_percent() {
        assert_eq!(format_thousands(15), "15");
        assert_eq!(format_thousands(1500), "1,500");
        assert_eq!(format_percent("66.67"), "66.67%");
        assert_eq!(format_percent("100%"), "100%");
        assert_eq!(format_percent(""), "—");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,234.50"), Some(1234.5));
        assert_eq!(parse_amount("$ 12"), Some(12.0));
        assert_eq!(parse_amount("-3.25"), Some(-3.25));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2024-03-05T14:07:09Z"),
            "03/05/2024, 02:07:09 PM"
        );
        assert_eq!(
            format_timestamp("2024-03-05T09:00:00.123456"),
            "03/05/2024, 09:00:00 AM"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
