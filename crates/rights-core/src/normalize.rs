//! Key normalisation and democracy-index coercion

use std::ops::RangeInclusive;

/// Valid range of a democracy index score
pub const DEMOCRACY_INDEX_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// Normalise a territory or country name for joining.
///
/// Strips leading/trailing whitespace and lowercases. No alias or fuzzy
/// matching: "South Korea" and "Republic of Korea" stay distinct.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Accept a democracy index only if it is finite and inside [0, 10].
pub fn coerce_democracy_index(value: f64) -> Option<f64> {
    if value.is_finite() && DEMOCRACY_INDEX_RANGE.contains(&value) {
        Some(value)
    } else {
        None
    }
}

/// Parse a raw democracy index cell, coercing anything unparsable to missing.
pub fn parse_democracy_index(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(coerce_democracy_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  Utopia "), "utopia");
        assert_eq!(normalize_key("UTOPIA"), normalize_key("utopia"));
        assert_ne!(normalize_key("South Korea"), normalize_key("Republic of Korea"));
    }

    #[test]
    fn test_parse_democracy_index() {
        assert_eq!(parse_democracy_index("9.81"), Some(9.81));
        assert_eq!(parse_democracy_index(" 0 "), Some(0.0));
        assert_eq!(parse_democracy_index("10"), Some(10.0));
        assert_eq!(parse_democracy_index("n/a"), None);
        assert_eq!(parse_democracy_index(""), None);
        assert_eq!(parse_democracy_index("NaN"), None);
        assert_eq!(parse_democracy_index("11.2"), None);
        assert_eq!(parse_democracy_index("-0.5"), None);
    }
}
