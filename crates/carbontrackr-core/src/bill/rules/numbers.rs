//! Parsing of grouped numeric tokens found on bills.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a number as printed on a bill (e.g. "1,250", "12 345", "1250.5").
///
/// Commas and spaces are treated as thousands grouping and dropped. A single
/// period is the decimal separator; with several periods the last one is
/// kept as the decimal separator and the rest are treated as grouping.
pub fn parse_grouped_number(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    let normalized = if cleaned.matches('.').count() > 1 {
        let mut parts: Vec<&str> = cleaned.split('.').collect();
        let fraction = parts.pop().unwrap_or("");
        format!("{}.{}", parts.concat(), fraction)
    } else {
        cleaned
    };

    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn plain_and_decimal() {
        assert_eq!(parse_grouped_number("450"), Some(dec("450")));
        assert_eq!(parse_grouped_number("1250.5"), Some(dec("1250.5")));
        assert_eq!(parse_grouped_number("0.5"), Some(dec("0.5")));
    }

    #[test]
    fn comma_and_space_grouping() {
        assert_eq!(parse_grouped_number("1,250"), Some(dec("1250")));
        assert_eq!(parse_grouped_number("12 345"), Some(dec("12345")));
        assert_eq!(parse_grouped_number("12,345.67"), Some(dec("12345.67")));
        assert_eq!(parse_grouped_number("1\u{00a0}234"), Some(dec("1234")));
    }

    #[test]
    fn repeated_periods_keep_last_as_decimal() {
        assert_eq!(parse_grouped_number("1.234.567"), Some(dec("1234.567")));
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_grouped_number(""), None);
        assert_eq!(parse_grouped_number("kWh"), None);
    }
}
