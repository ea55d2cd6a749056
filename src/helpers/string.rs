//! String escaping for HTML output.

/// Escape text content so it cannot open tags or entities.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Whether `value` is safe to drop into a CSS declaration value.
///
/// Colors come from embedders and end up inside `style` attributes, so
/// anything that could close the declaration is rejected.
pub fn is_safe_css_value(value: &str) -> bool {
    !value.is_empty()
        && !value
            .chars()
            .any(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\\'))
}

/// Interpret an HTML boolean attribute value.
///
/// Presence means true, except for the explicit string "false".
pub fn parse_bool_attr(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !v.trim().eq_ignore_ascii_case("false"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }

    #[test]
    fn test_css_value_guard() {
        assert!(is_safe_css_value("#ff0066"));
        assert!(is_safe_css_value("rgb(1, 2, 3)"));
        assert!(!is_safe_css_value("red; background: url(x)"));
        assert!(!is_safe_css_value(""));
    }

    #[test]
    fn test_bool_attr() {
        assert!(parse_bool_attr(Some("")));
        assert!(parse_bool_attr(Some("true")));
        assert!(!parse_bool_attr(Some("false")));
        assert!(!parse_bool_attr(None));
    }
}
