//! Display and input helpers shared by tables and forms.

/// A measurement with one decimal and its unit, or "N/A".
pub fn format_metric(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(value) => format!("{value:.1}{suffix}"),
        None => "N/A".to_string(),
    }
}

pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => "-".to_string(),
    }
}

/// Parse a numeric input, ignoring anything that isn't a finite number.
pub fn parse_number(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_use_one_decimal() {
        assert_eq!(format_metric(Some(165.34), " mph"), "165.3 mph");
        assert_eq!(format_metric(Some(12.0), "°"), "12.0°");
        assert_eq!(format_metric(None, " yds"), "N/A");
    }

    #[test]
    fn numbers_must_be_finite() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn blanks_become_dashes() {
        assert_eq!(or_dash(Some("Pebble Beach")), "Pebble Beach");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(None), "-");
    }

    #[test]
    fn counts() {
        assert_eq!(pluralize(1, "golfer", "golfers"), "1 golfer");
        assert_eq!(pluralize(3, "golfer", "golfers"), "3 golfers");
    }
}
