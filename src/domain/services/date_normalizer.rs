//! Best-effort rewrite of loosely typed dates into canonical `YYYY-MM-DD`.
//!
//! Accepts `2026/12/19`, `2026-12-19`, and day ranges sharing year and month
//! such as `2026/12/12-13` (the first day wins). The result is not checked
//! against the calendar; `2026/13/40` comes back as `2026-13-40`.

use chrono::NaiveDate;

pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let dashed = trimmed.replace('/', "-");
    let segments: Vec<&str> = dashed.split('-').collect();

    if segments.len() >= 3 {
        // Anything past the third segment is the end of a day range.
        return format!("{}-{}-{}", segments[0], pad2(segments[1]), pad2(segments[2]));
    }

    dashed.chars().take(10).collect()
}

/// Normalizes and then requires a real calendar day in `YYYY-MM-DD` form.
pub fn canonical(raw: &str) -> Option<String> {
    let normalized = normalize(raw);
    (normalized.len() == 10 && NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").is_ok()).then_some(normalized)
}

fn pad2(segment: &str) -> String {
    format!("{:0>2}", segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_date_becomes_canonical() {
        assert_eq!(normalize("2026/12/19"), "2026-12-19");
    }

    #[test]
    fn test_day_range_keeps_first_day() {
        assert_eq!(normalize("2026/12/12-13"), "2026-12-12");
        assert_eq!(normalize("2026-12-12-13"), "2026-12-12");
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t"), "");
    }

    #[test]
    fn test_single_digit_parts_are_padded() {
        assert_eq!(normalize("2026/3/7"), "2026-03-07");
        assert_eq!(normalize(" 2026/3/7-9 "), "2026-03-07");
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(normalize("2026/13/40"), "2026-13-40");
    }

    #[test]
    fn test_canonical_rejects_what_normalize_lets_through() {
        assert_eq!(canonical("2026/12/12-13").as_deref(), Some("2026-12-12"));
        assert_eq!(canonical("2026/12"), None);
        assert_eq!(canonical("TBD"), None);
        assert_eq!(canonical("2026/13/40"), None);
        assert_eq!(canonical(""), None);
    }

    #[test]
    fn test_short_forms_are_truncated_not_expanded() {
        assert_eq!(normalize("2026/12"), "2026-12");
        assert_eq!(normalize("20261219extra"), "20261219ex");
    }
}
