//! Formatting Helpers
//!
//! Pure date/text helpers shared by the list, detail and music views.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Short date style used on cards, e.g. "Jan 5, 2024".
///
/// Values that do not parse as a timestamp are shown verbatim.
pub fn format_date_short(value: Option<&str>) -> String {
    format_date(value, "%b %-d, %Y")
}

/// Long date style used on detail pages, e.g. "January 5, 2024".
pub fn format_date_long(value: Option<&str>) -> String {
    format_date(value, "%B %-d, %Y")
}

fn format_date(value: Option<&str>, fmt: &str) -> String {
    let Some(raw) = value else {
        return String::new();
    };
    if raw.is_empty() {
        return String::new();
    }
    match parse_date(raw) {
        Some(date) => date.format(fmt).to_string(),
        None => raw.to_string(),
    }
}

/// Parse the timestamp shapes the store hands back: RFC 3339 with offset,
/// a bare timestamp without one, or a plain date.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Collapse runs of whitespace to single spaces and truncate to `max_len`
/// characters, appending an ellipsis only when something was cut.
pub fn excerpt(text: Option<&str>, max_len: usize) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&collapsed, max_len)
}

fn truncate_chars(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_date_styles() {
        let ts = Some("2024-01-05T08:30:00+00:00");
        assert_eq!(format_date_short(ts), "Jan 5, 2024");
        assert_eq!(format_date_long(ts), "January 5, 2024");
    }

    #[test]
    fn bare_timestamps_and_dates_parse() {
        assert_eq!(
            format_date_short(Some("2024-01-05T08:30:00.123456")),
            "Jan 5, 2024"
        );
        assert_eq!(format_date_short(Some("2024-01-05")), "Jan 5, 2024");
    }

    #[test]
    fn unparseable_values_are_shown_verbatim() {
        assert_eq!(format_date_short(Some("last tuesday")), "last tuesday");
        assert_eq!(format_date_short(None), "");
        assert_eq!(format_date_short(Some("")), "");
    }

    #[test]
    fn excerpt_collapses_whitespace() {
        assert_eq!(excerpt(Some("a  b\n\tc"), 115), "a b c");
        assert_eq!(excerpt(None, 115), "");
    }

    #[test]
    fn excerpt_truncates_past_the_limit() {
        let exact: String = "x".repeat(115);
        assert_eq!(excerpt(Some(&exact), 115), exact);

        let over: String = "x".repeat(116);
        let cut = excerpt(Some(&over), 115);
        assert_eq!(cut.chars().count(), 116);
        assert!(cut.ends_with('…'));
        assert_eq!(&cut[..115], &over[..115]);
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        let text = "héllo wörld";
        assert_eq!(excerpt(Some(text), 5), "héllo…");
    }
}
