//! Format - Number Formatting for CSS and labels

/// Format a percentage with one decimal place, trimming a trailing ".0"
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_decimal(value, 1))
}

/// Format seconds as a CSS time value
pub fn format_seconds(value: f64) -> String {
    format!("{}s", format_decimal(value, 3))
}

/// Format a chart value for display next to its bar
pub fn format_value(value: f64) -> String {
    format_decimal(value, 2)
}

/// Fixed-precision formatting without trailing zeros.
pub fn format_decimal(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let s = format!("{value:.precision$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    if s == "-0" { "0".to_string() } else { s }
}

/// Parse a numeric attribute, ignoring surrounding whitespace.
///
/// Non-finite and unparseable values yield `None`.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(65.0 / 85.0 * 100.0), "76.5%");
        assert_eq!(format_percent(100.0), "100%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.6), "0.6s");
        assert_eq!(format_seconds(0.0), "0s");
        assert_eq!(format_seconds(1.25), "1.25s");
    }

    #[test]
    fn test_format_decimal_edge_cases() {
        assert_eq!(format_decimal(f64::NAN, 2), "0");
        assert_eq!(format_decimal(-0.0001, 2), "0");
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(3.14159), "3.14");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
    }
}
